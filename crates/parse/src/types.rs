use serde::{Deserialize, Serialize};

/// 解析后的工具类候选
///
/// 只剥离与具体工具无关的部分（`!`、负号、前缀），
/// 根 / 值的切分依赖注册表，通过 [`Candidate::splits`] 枚举
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// 原始输入（如 "!-tw-margin-4"）
    pub raw: String,

    /// 重要性标记（`!` 前缀或后缀）
    pub important: bool,

    /// 是否为负值（如 -margin-4）
    pub negative: bool,

    /// 去掉 `!`、负号与前缀后的主体（如 "margin-4"、"font-size-lg/6"）
    pub body: String,
}

/// 一种可能的 根 / 值 切分
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtilitySplit {
    /// 工具名（如 "margin"、"border-inline-start-color"）
    pub root: String,

    /// 值部分，None 表示裸根（对应主题里的 `DEFAULT`）
    pub value: Option<ParsedValue>,
}

/// 值类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParsedValue {
    /// 标准值（如 "4"、"red-500"、"1/2"、"lg/6"）
    /// 斜杠后的部分是键的一部分还是修饰符，由主题查找决定
    Standard(String),

    /// 任意值（如 "[13px]"），可带修饰符（"[14px]/7"）
    Arbitrary {
        value: ArbitraryValue,
        modifier: Option<ParsedModifier>,
    },
}

/// 任意值表示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArbitraryValue {
    /// 原始值（包含方括号）
    pub raw: String,

    /// 解析后的内容（去除方括号与类型提示，`_` 已转为空格）
    pub content: String,

    /// 可选的类型提示（如 "length" in "[length:var(--x)]"）
    pub type_hint: Option<String>,
}

/// 修饰符（`/` 之后的部分）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParsedModifier {
    /// 主题键（如 "6"）
    Standard(String),
    /// 任意值（如 "[20px]" → "20px"）
    Arbitrary(String),
}

impl std::fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedValue::Standard(s) => write!(f, "{}", s),
            ParsedValue::Arbitrary { value, modifier } => {
                write!(f, "{}", value.raw)?;
                if let Some(m) = modifier {
                    write!(f, "/{}", m)?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for ParsedModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedModifier::Standard(s) => write!(f, "{}", s),
            ParsedModifier::Arbitrary(s) => write!(f, "[{}]", s),
        }
    }
}

/// 已知的类型提示名称
const TYPE_HINTS: &[&str] = &[
    "any",
    "color",
    "length",
    "line-width",
    "percentage",
    "number",
    "image",
    "url",
    "position",
    "size",
    "shadow",
    "absolute-size",
    "relative-size",
    "generic-name",
    "family-name",
];

impl ArbitraryValue {
    /// 创建新的任意值
    ///
    /// 任意值中的 `_` 会转换为空格，`\_` 会保留为字面下划线。
    /// `[length:var(--x)]` 形式的前缀若是已知类型名，则拆为类型提示。
    pub fn new(raw: String) -> Self {
        let stripped = raw
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&raw);

        let (type_hint, body) = match stripped.split_once(':') {
            Some((hint, rest)) if TYPE_HINTS.contains(&hint) => (Some(hint.to_string()), rest),
            _ => (None, stripped),
        };

        let content = convert_underscores(body);

        Self {
            raw,
            content,
            type_hint,
        }
    }
}

/// 将任意值中的下划线转换为空格
///
/// 规则：
/// - `_` → 空格
/// - `\_` → 字面下划线 `_`
pub(crate) fn convert_underscores(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'_') {
            // \_ → 字面下划线
            chars.next();
            result.push('_');
        } else if ch == '_' {
            result.push(' ');
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_value() {
        let arb = ArbitraryValue::new("[13px]".to_string());
        assert_eq!(arb.content, "13px");
        assert_eq!(arb.raw, "[13px]");
        assert_eq!(arb.type_hint, None);
    }

    #[test]
    fn test_arbitrary_value_underscore_to_space() {
        let arb = ArbitraryValue::new("[0_1px_2px_red]".to_string());
        assert_eq!(arb.content, "0 1px 2px red");
    }

    #[test]
    fn test_arbitrary_value_mixed_underscores() {
        // 混合: _ 转空格, \_ 保留
        let arb = ArbitraryValue::new("[a_b\\_c_d]".to_string());
        assert_eq!(arb.content, "a b_c d");
    }

    #[test]
    fn test_arbitrary_type_hint() {
        let arb = ArbitraryValue::new("[length:var(--size)]".to_string());
        assert_eq!(arb.type_hint.as_deref(), Some("length"));
        assert_eq!(arb.content, "var(--size)");

        // 不是已知类型名时保留冒号
        let arb = ArbitraryValue::new("[a:b]".to_string());
        assert_eq!(arb.type_hint, None);
        assert_eq!(arb.content, "a:b");
    }

    #[test]
    fn test_display_round_trip() {
        let value = ParsedValue::Arbitrary {
            value: ArbitraryValue::new("[14px]".to_string()),
            modifier: Some(ParsedModifier::Arbitrary("20px".to_string())),
        };
        assert_eq!(value.to_string(), "[14px]/[20px]");
    }
}
