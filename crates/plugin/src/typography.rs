//! 字体相关的参数化工具类

use crate::static_utilities::VERTICAL_ALIGN;
use indexmap::IndexMap;
use longhand_core::Style;
use longhand_host::{MatchOptions, PluginApi, ThemeValue, UtilityFn, ValueType};
use std::sync::Arc;

const FONT_FAMILY_OPTIONS: &[(&str, &str)] = &[
    ("fontFeatureSettings", "font-feature-settings"),
    ("fontVariationSettings", "font-variation-settings"),
];

const FONT_SIZE_OPTIONS: &[(&str, &str)] = &[
    ("lineHeight", "line-height"),
    ("letterSpacing", "letter-spacing"),
    ("fontWeight", "font-weight"),
];

/// 只写入出现的选项
fn push_options(style: &mut Style, options: &IndexMap<String, String>, names: &[(&str, &str)]) {
    for (option, property) in names {
        if let Some(value) = options.get(*option) {
            style.push(*property, value.as_str());
        }
    }
}

/// `font-family`：列表用 `", "` 连接，`[families, options]` 额外写入字体特性设置
pub fn font_family(value: &ThemeValue, _modifier: Option<&str>) -> Option<Style> {
    let (families, options) = match value {
        ThemeValue::WithOptions(primary, options) => (primary.as_ref(), Some(options)),
        other => (other, None),
    };

    let family = match families {
        ThemeValue::Literal(name) => name.clone(),
        ThemeValue::List(names) => names.join(", "),
        _ => return None,
    };

    let mut style = Style::new().with("font-family", family);
    if let Some(options) = options {
        push_options(&mut style, options, FONT_FAMILY_OPTIONS);
    }
    Some(style)
}

/// `font-size`
///
/// - `"1rem"` → 只有 font-size
/// - `["1rem", "1.5rem"]` → 第二项视为 line-height
/// - `["1rem", { lineHeight, letterSpacing, fontWeight }]` → 写入出现的选项
/// - 带修饰符（`font-size-lg/6`）时只写 font-size 与修饰符给出的 line-height
pub fn font_size(value: &ThemeValue, modifier: Option<&str>) -> Option<Style> {
    let (size, line_height, options) = match value {
        ThemeValue::Literal(size) => (size.as_str(), None, None),
        ThemeValue::List(items) => (items.first()?.as_str(), items.get(1).map(String::as_str), None),
        ThemeValue::WithOptions(primary, options) => {
            let size = match primary.as_ref() {
                ThemeValue::Literal(size) => size.as_str(),
                ThemeValue::List(items) => items.first()?.as_str(),
                _ => return None,
            };
            (size, None, Some(options))
        }
        ThemeValue::Nested(_) => return None,
    };

    let mut style = Style::new().with("font-size", size);

    if let Some(modifier) = modifier {
        style.push("line-height", modifier);
        return Some(style);
    }

    if let Some(line_height) = line_height {
        style.push("line-height", line_height);
    }
    if let Some(options) = options {
        push_options(&mut style, options, FONT_SIZE_OPTIONS);
    }
    Some(style)
}

pub fn register_font_family(api: &mut dyn PluginApi) {
    let values = api.theme("fontFamily");
    api.match_utilities(
        vec![("font-family", Arc::new(font_family) as UtilityFn)],
        MatchOptions::new(values).with_types(&[ValueType::Lookup, ValueType::GenericName, ValueType::FamilyName]),
    );
}

pub fn register_font_size(api: &mut dyn PluginApi) {
    let values = api.theme("fontSize");
    let line_heights = api.theme("lineHeight");
    api.match_utilities(
        vec![("font-size", Arc::new(font_size) as UtilityFn)],
        MatchOptions::new(values)
            .with_modifiers(line_heights)
            .with_types(&[
                ValueType::AbsoluteSize,
                ValueType::RelativeSize,
                ValueType::Length,
                ValueType::Percentage,
            ]),
    );
}

/// 静态的 `vertical-align-*`，外加只接受任意值的 `align-[..]`
pub fn register_vertical_align(api: &mut dyn PluginApi) {
    VERTICAL_ALIGN.register(api);
    api.match_utilities(
        vec![(
            "align",
            Arc::new(|value: &ThemeValue, _: Option<&str>| {
                value
                    .as_literal()
                    .map(|value| Style::new().with("vertical-align", value))
            }) as UtilityFn,
        )],
        MatchOptions::default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use longhand_core::Declaration;
    use longhand_host::{Config, Registry, Theme};
    use pretty_assertions::assert_eq;

    fn registry() -> Registry {
        let mut registry = Registry::new(Config::default(), Theme::default());
        register_font_family(&mut registry);
        register_font_size(&mut registry);
        register_vertical_align(&mut registry);
        registry
    }

    #[test]
    fn test_font_size_with_all_options() {
        let value = ThemeValue::with_options(
            ThemeValue::literal("2rem"),
            [("lineHeight", "2.5rem"), ("letterSpacing", "-0.02em"), ("fontWeight", "700")],
        );
        let style = font_size(&value, None).unwrap();
        assert_eq!(
            style.declarations,
            vec![
                Declaration::new("font-size", "2rem"),
                Declaration::new("line-height", "2.5rem"),
                Declaration::new("letter-spacing", "-0.02em"),
                Declaration::new("font-weight", "700"),
            ]
        );
    }

    #[test]
    fn test_font_size_plain_and_pair() {
        let style = font_size(&ThemeValue::literal("1rem"), None).unwrap();
        assert_eq!(style.declarations, vec![Declaration::new("font-size", "1rem")]);

        let style = font_size(&ThemeValue::list(["1rem", "1.5rem"]), None).unwrap();
        assert_eq!(style.get("line-height"), Some("1.5rem"));
    }

    #[test]
    fn test_modifier_overrides_line_height() {
        let value = ThemeValue::with_options(
            ThemeValue::literal("2rem"),
            [("lineHeight", "2.5rem"), ("letterSpacing", "-0.02em")],
        );
        let style = font_size(&value, Some("3rem")).unwrap();
        assert_eq!(
            style.declarations,
            vec![
                Declaration::new("font-size", "2rem"),
                Declaration::new("line-height", "3rem"),
            ]
        );

        let m = registry().resolve("font-size-lg/6").unwrap();
        assert_eq!(m.style.get("line-height"), Some("1.5rem"));
        assert_eq!(m.style.get("font-size"), Some("1.125rem"));
    }

    #[test]
    fn test_font_family() {
        let m = registry().resolve("font-family-mono").unwrap();
        assert!(m.style.get("font-family").unwrap().contains(", "));

        let value = ThemeValue::with_options(
            ThemeValue::list(["Inter", "sans-serif"]),
            [("fontFeatureSettings", "\"cv11\"")],
        );
        let style = font_family(&value, None).unwrap();
        assert_eq!(style.get("font-family"), Some("Inter, sans-serif"));
        assert_eq!(style.get("font-feature-settings"), Some("\"cv11\""));
        assert_eq!(style.get("font-variation-settings"), None);
    }

    #[test]
    fn test_align_only_takes_arbitrary_values() {
        let registry = registry();
        assert_eq!(
            registry.resolve("align-[10px]").unwrap().style.get("vertical-align"),
            Some("10px")
        );
        assert_eq!(
            registry.resolve("vertical-align-middle").unwrap().style.get("vertical-align"),
            Some("middle")
        );
        assert!(registry.resolve("align-middle").is_err());
    }
}
