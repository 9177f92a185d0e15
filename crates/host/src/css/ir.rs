use longhand_core::{Declaration, Keyframes};
use serde::Serialize;

/// 默认块使用的通用选择器
pub const DEFAULTS_SELECTOR: &str = "*, ::before, ::after, ::backdrop";

/// 一个工具类规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// 原始类名
    pub class: String,
    /// 转义后的类名（不含 `.`）
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// 共享默认块（`@defaults <group>`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultBlock {
    pub group: String,
    pub declarations: Vec<Declaration>,
}

/// 待输出的样式表
///
/// 输出顺序：默认块、keyframes、工具类规则
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    pub defaults: Vec<DefaultBlock>,
    pub keyframes: Vec<Keyframes>,
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.keyframes.is_empty() && self.rules.is_empty()
    }
}
