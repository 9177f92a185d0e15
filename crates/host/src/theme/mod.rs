//! 主题解析
//!
//! 解析顺序：
//! 1. 内置基础分区，`theme.<key>` 整段替换
//! 2. `theme.extend.<key>` 深度合并进基础分区
//! 3. 重建派生分区（margin、width、颜色分区等），除非配置里直接替换了该分区
//! 4. `theme.extend.<key>` 合并进派生分区

mod defaults;
pub mod value;

pub use value::ThemeValue;

use crate::config::ThemeConfig;
use crate::error::{LonghandError, Result};
use crate::value::split_at_top_level;
use indexmap::IndexMap;

/// 一个主题分区：键 → 值
pub type Section = IndexMap<String, ThemeValue>;

/// 解析完成的主题
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    sections: IndexMap<String, Section>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut sections = defaults::base_sections();
        for (key, derive) in defaults::DERIVED {
            let section = derive(&sections);
            sections.insert(key.to_string(), section);
        }
        Self { sections }
    }
}

fn is_derived(key: &str) -> bool {
    defaults::DERIVED.iter().any(|(derived, _)| *derived == key)
}

fn expect_section(key: &str, value: &ThemeValue) -> Result<Section> {
    value
        .as_nested()
        .cloned()
        .ok_or_else(|| LonghandError::ThemeValue {
            key: key.to_string(),
            message: "theme section must be an object".to_string(),
        })
}

fn extend_section(sections: &mut IndexMap<String, Section>, key: &str, value: &ThemeValue) -> Result<()> {
    let extra = expect_section(key, value)?;
    let section = sections.entry(key.to_string()).or_default();
    for (name, value) in extra {
        match section.get_mut(&name) {
            Some(existing) => existing.merge(value),
            None => {
                section.insert(name, value);
            }
        }
    }
    Ok(())
}

impl Theme {
    /// 从配置解析主题
    pub fn resolve(config: &ThemeConfig) -> Result<Self> {
        let mut sections = defaults::base_sections();

        for (key, value) in &config.overrides {
            sections.insert(key.clone(), expect_section(key, value)?);
        }

        for (key, value) in config.extend.iter().filter(|(key, _)| !is_derived(key)) {
            extend_section(&mut sections, key, value)?;
        }

        for (key, derive) in defaults::DERIVED {
            if config.overrides.contains_key(*key) {
                continue;
            }
            let section = derive(&sections);
            sections.insert(key.to_string(), section);
        }

        for (key, value) in config.extend.iter().filter(|(key, _)| is_derived(key)) {
            extend_section(&mut sections, key, value)?;
        }

        Ok(Self { sections })
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    /// 取分区副本，不存在时返回空分区
    pub fn get(&self, key: &str) -> Section {
        self.section(key).cloned().unwrap_or_default()
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&ThemeValue> {
        self.section(section)?.get(key)
    }
}

/// 主题值写入 CSS 前的转换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    /// `[size, options]` 只取第一个元素（fontSize、outline）
    FirstItem,
    /// 列表用 `", "` 连接（fontFamily、boxShadow、transition* 等）
    JoinList,
    /// 逗号分隔改为空格分隔（gridTemplate*、objectPosition）
    CommaToSpace,
    Identity,
}

/// 按主题分区选择值转换方式
pub fn transform_theme_value(section: &str) -> ValueTransform {
    match section {
        "fontSize" | "outline" => ValueTransform::FirstItem,
        "fontFamily"
        | "boxShadow"
        | "transitionProperty"
        | "transitionDuration"
        | "transitionDelay"
        | "transitionTimingFunction"
        | "backgroundImage"
        | "backgroundSize"
        | "backgroundColor"
        | "cursor"
        | "animation" => ValueTransform::JoinList,
        "gridTemplateColumns" | "gridTemplateRows" | "objectPosition" => ValueTransform::CommaToSpace,
        _ => ValueTransform::Identity,
    }
}

impl ValueTransform {
    /// 转换为 CSS 值，嵌套对象无法转换
    pub fn apply(&self, value: &ThemeValue) -> Option<String> {
        match (self, value) {
            (_, ThemeValue::Nested(_)) => None,
            (_, ThemeValue::WithOptions(primary, _)) => self.apply(primary),
            (ValueTransform::FirstItem, ThemeValue::List(items)) => items.first().cloned(),
            (ValueTransform::CommaToSpace, ThemeValue::Literal(s)) => Some(
                split_at_top_level(s, ',')
                    .into_iter()
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            (ValueTransform::CommaToSpace, ThemeValue::List(items)) => Some(items.join(" ")),
            (_, ThemeValue::List(items)) => Some(items.join(", ")),
            (_, ThemeValue::Literal(s)) => Some(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn theme_config(value: serde_json::Value) -> ThemeConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_theme_has_derived_sections() {
        let theme = Theme::default();
        assert_eq!(theme.value("margin", "auto"), Some(&ThemeValue::literal("auto")));
        assert_eq!(theme.value("padding", "4"), Some(&ThemeValue::literal("1rem")));
        assert_eq!(theme.value("width", "1/2"), Some(&ThemeValue::literal("50%")));
        assert!(theme.value("backgroundColor", "gray").is_some());
    }

    #[test]
    fn test_override_replaces_section() {
        let theme = Theme::resolve(&theme_config(json!({ "zIndex": { "modal": "100" } }))).unwrap();
        let z = theme.section("zIndex").unwrap();
        assert_eq!(z.len(), 1);
        assert_eq!(z["modal"], ThemeValue::literal("100"));
    }

    #[test]
    fn test_extend_flows_into_derived() {
        let theme = Theme::resolve(&theme_config(json!({
            "extend": {
                "spacing": { "13": "3.25rem" },
                "colors": { "brand": { "500": "#123456" } },
                "margin": { "gutter": "2rem" }
            }
        })))
        .unwrap();

        assert_eq!(theme.value("spacing", "13"), Some(&ThemeValue::literal("3.25rem")));
        assert_eq!(theme.value("margin", "13"), Some(&ThemeValue::literal("3.25rem")));
        assert_eq!(theme.value("margin", "gutter"), Some(&ThemeValue::literal("2rem")));
        assert!(theme.value("textColor", "brand").is_some());
        // 内置色系仍在
        assert!(theme.value("textColor", "gray").is_some());
    }

    #[test]
    fn test_override_wins_over_derivation() {
        let theme = Theme::resolve(&theme_config(json!({
            "spacing": { "1": "4px" },
            "padding": { "box": "10px" }
        })))
        .unwrap();

        assert_eq!(theme.section("padding").unwrap().len(), 1);
        assert_eq!(theme.value("margin", "1"), Some(&ThemeValue::literal("4px")));
    }

    #[test]
    fn test_invalid_section() {
        let err = Theme::resolve(&theme_config(json!({ "spacing": "4px" }))).unwrap_err();
        assert!(matches!(err, LonghandError::ThemeValue { ref key, .. } if key == "spacing"));
    }

    #[test]
    fn test_transforms() {
        let list = ThemeValue::list(["Inter", "sans-serif"]);
        assert_eq!(transform_theme_value("fontFamily").apply(&list).as_deref(), Some("Inter, sans-serif"));

        let size = ThemeValue::with_options(ThemeValue::literal("1rem"), [("lineHeight", "1.5rem")]);
        assert_eq!(transform_theme_value("fontSize").apply(&size).as_deref(), Some("1rem"));

        let pair = ThemeValue::list(["1rem", "1.5rem"]);
        assert_eq!(transform_theme_value("fontSize").apply(&pair).as_deref(), Some("1rem"));

        let columns = ThemeValue::literal("1fr,repeat(2, minmax(0, 1fr))");
        assert_eq!(
            transform_theme_value("gridTemplateColumns").apply(&columns).as_deref(),
            Some("1fr repeat(2, minmax(0, 1fr))")
        );

        let nested = ThemeValue::Nested(IndexMap::new());
        assert_eq!(transform_theme_value("margin").apply(&nested), None);
    }
}
