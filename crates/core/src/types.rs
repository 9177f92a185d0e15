use serde::{Deserialize, Serialize};

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "display"、"--tw-shadow"）
    pub property: String,
    /// CSS 属性值（如 "flex"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// 是否为 CSS 自定义属性（`--*`）
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

/// 单个工具类生成的样式对象
///
/// 对应一个类的全部输出：
/// - `declarations`：类规则里的声明（保持插入顺序）
/// - `defaults`：需要引入的共享默认块（`@defaults <group>`）
/// - `keyframes`：需要随类一起输出的 `@keyframes` 块
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub declarations: Vec<Declaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyframes: Vec<Keyframes>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 `(property, value)` 列表构建
    pub fn from_pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        Self {
            declarations: pairs
                .into_iter()
                .map(|(p, v)| Declaration::new(p, v))
                .collect(),
            ..Self::default()
        }
    }

    /// 追加一条声明（builder 模式）
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// 引入共享默认块（builder 模式），重复引用只记录一次
    pub fn with_defaults(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if !self.defaults.contains(&group) {
            self.defaults.push(group);
        }
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    /// 按属性名查找声明值
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// 没有任何声明也没有 keyframes 时视为未匹配
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.keyframes.is_empty()
    }
}

/// `@keyframes` 块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframes {
    /// 已加前缀并转义的名称
    pub name: String,
    pub steps: Vec<KeyframeStep>,
}

/// keyframes 内的一步（如 `to`、`0%, 100%`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyframeStep {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}
