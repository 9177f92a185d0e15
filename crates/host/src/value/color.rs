use crate::theme::ThemeValue;
use indexmap::IndexMap;
use longhand_core::vars::{self, AlphaChannel};
use longhand_core::Style;
use palette::Srgb;

/// 解析后的颜色
///
/// 透明度组合只关心颜色是否已经带 alpha 通道，分量本身不保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColor {
    /// 显式的 alpha 通道
    pub alpha: Option<String>,
}

impl ParsedColor {
    fn new(alpha: Option<String>) -> Self {
        Self { alpha }
    }

    /// 没有 alpha 通道，可以安全地交给透明度变量控制
    pub fn is_opaque(&self) -> bool {
        self.alpha.is_none()
    }
}

/// 解析颜色字符串
///
/// 支持：
/// - `#rgb` / `#rrggbb`，以及带 alpha 的 `#rgba` / `#rrggbbaa`
/// - CSS 命名颜色（不区分大小写）
/// - `transparent`（alpha 为 0）
/// - `rgb()` / `rgba()` / `hsl()` / `hsla()`，逗号或空格分隔，`/ alpha` 形式
///
/// `currentColor`、`var(..)` 等无法静态确定的值返回 None。
pub fn parse_color(value: &str) -> Option<ParsedColor> {
    let value = value.trim();

    if value.eq_ignore_ascii_case("transparent") {
        return Some(ParsedColor::new(Some("0".to_string())));
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if palette::named::from_str(&value.to_ascii_lowercase()).is_some() {
        return Some(ParsedColor::new(None));
    }

    parse_function(value)
}

fn parse_hex(hex: &str) -> Option<ParsedColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let (rgb, alpha) = match hex.len() {
        3 | 6 => (hex, None),
        4 => (&hex[..3], Some(&hex[3..])),
        8 => (&hex[..6], Some(&hex[6..])),
        _ => return None,
    };

    rgb.parse::<Srgb<u8>>().ok()?;
    let alpha = match alpha {
        Some(a) => {
            let a = if a.len() == 1 { a.repeat(2) } else { a.to_string() };
            let byte = u8::from_str_radix(&a, 16).ok()?;
            Some(format_alpha(f64::from(byte) / 255.0))
        }
        None => None,
    };

    Some(ParsedColor::new(alpha))
}

fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha * 1000.0).round() / 1000.0;
    rounded.to_string()
}

fn parse_function(value: &str) -> Option<ParsedColor> {
    let open = value.find('(')?;
    let inner = value[open + 1..].strip_suffix(')')?;
    if !matches!(&value[..open], "rgb" | "rgba" | "hsl" | "hsla") {
        return None;
    }

    // `rgb(r g b / a)`
    let (channels, mut alpha) = match inner.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim().to_string())),
        None => (inner, None),
    };

    let mut parts: Vec<&str> = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    // `rgba(r, g, b, a)`
    if parts.len() == 4 && alpha.is_none() && inner.contains(',') {
        alpha = parts.pop().map(str::to_string);
    }

    if parts.len() != 3 || alpha.as_deref().is_some_and(str::is_empty) {
        return None;
    }

    Some(ParsedColor::new(alpha))
}

/// 把嵌套调色板拍平为 `name-shade → color`
///
/// 嵌套键 `DEFAULT` 对应父级名称本身（`{ red: { DEFAULT, 500 } }` → `red`、`red-500`）。
///
/// ```
/// use indexmap::IndexMap;
/// use longhand_host::theme::ThemeValue;
/// use longhand_host::value::flatten_color_palette;
///
/// let mut red = IndexMap::new();
/// red.insert("DEFAULT".to_string(), ThemeValue::literal("#f00"));
/// red.insert("500".to_string(), ThemeValue::literal("#ef4444"));
///
/// let mut colors = IndexMap::new();
/// colors.insert("red".to_string(), ThemeValue::Nested(red));
///
/// let flat = flatten_color_palette(&colors);
/// assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["red", "red-500"]);
/// ```
pub fn flatten_color_palette(colors: &IndexMap<String, ThemeValue>) -> IndexMap<String, ThemeValue> {
    let mut flat = IndexMap::new();
    flatten_into(&mut flat, None, colors);
    flat
}

fn flatten_into(
    out: &mut IndexMap<String, ThemeValue>,
    parent: Option<&str>,
    colors: &IndexMap<String, ThemeValue>,
) {
    for (key, value) in colors {
        let name = match (parent, key.as_str()) {
            (Some(parent), "DEFAULT") => parent.to_string(),
            (Some(parent), key) => format!("{}-{}", parent, key),
            (None, key) => key.to_string(),
        };

        match value {
            ThemeValue::Nested(children) => flatten_into(out, Some(&name), children),
            other => {
                out.insert(name, other.clone());
            }
        }
    }
}

/// 主题值转为颜色字符串，非字面量（列表、嵌套对象）返回 None
pub fn to_color_value(value: &ThemeValue) -> Option<String> {
    value.as_literal().map(str::to_string)
}

/// 颜色 + 透明度变量组合
///
/// 能解析为不透明颜色时输出颜色变量，目标属性用 `color-mix()` 读取颜色变量与透明度变量：
///
/// ```css
/// --tw-bg-color: #112233;
/// background-color: color-mix(in srgb, var(--tw-bg-color) calc(var(--tw-bg-opacity, 1) * 100%), transparent);
/// ```
///
/// 其余情况（`transparent`、`currentColor`、`var(..)`、已带 alpha 的颜色）原样输出。
pub fn with_alpha_variable(color: &str, properties: &[&str], channel: AlphaChannel) -> Style {
    let opaque = parse_color(color).is_some_and(|parsed| parsed.is_opaque());

    if !opaque {
        return Style::from_pairs(properties.iter().map(|p| (*p, color)));
    }

    let composed = format!(
        "color-mix(in srgb, {} calc({} * 100%), transparent)",
        vars::var(channel.color),
        vars::var_or(channel.opacity, "1"),
    );

    let mut style = Style::new().with(channel.color, color);
    for property in properties {
        style.push(*property, composed.as_str());
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use longhand_core::vars::BACKGROUND;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex() {
        let color = parse_color("#112233").unwrap();
        assert_eq!(color.alpha, None);
        assert!(color.is_opaque());
        assert!(parse_color("#fff").unwrap().is_opaque());

        let with_alpha = parse_color("#11223380").unwrap();
        assert_eq!(with_alpha.alpha.as_deref(), Some("0.502"));
        assert!(!with_alpha.is_opaque());

        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#ggg"), None);
    }

    #[test]
    fn test_parse_named_and_keywords() {
        assert!(parse_color("Red").unwrap().is_opaque());
        assert!(!parse_color("transparent").unwrap().is_opaque());
        assert_eq!(parse_color("currentColor"), None);
        assert_eq!(parse_color("var(--brand)"), None);
    }

    #[test]
    fn test_parse_functions() {
        assert!(parse_color("rgb(1, 2, 3)").unwrap().is_opaque());
        assert!(parse_color("hsl(210 40% 50%)").unwrap().is_opaque());

        let rgba = parse_color("rgba(1, 2, 3, 0.5)").unwrap();
        assert_eq!(rgba.alpha.as_deref(), Some("0.5"));

        let hsl = parse_color("hsl(210 40% 50% / 0.1)").unwrap();
        assert_eq!(hsl.alpha.as_deref(), Some("0.1"));

        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgb(1 2 3 /)"), None);
        assert_eq!(parse_color("oklch(0.5 0.1 20)"), None);
    }

    #[test]
    fn test_flatten_palette() {
        let colors: IndexMap<String, ThemeValue> = serde_json::from_value(serde_json::json!({
            "black": "#000",
            "gray": { "100": "#f3f4f6", "DEFAULT": "#6b7280" },
            "brand": { "light": { "DEFAULT": "#abc", "x": "#def" } }
        }))
        .unwrap();

        let flat = flatten_color_palette(&colors);
        assert_eq!(
            flat.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["black", "gray-100", "gray", "brand-light", "brand-light-x"]
        );
        assert_eq!(flat["gray"], ThemeValue::literal("#6b7280"));
    }

    #[test]
    fn test_alpha_variable_opaque() {
        let style = with_alpha_variable("#112233", &["background-color"], BACKGROUND);
        assert_eq!(style.get("--tw-bg-color"), Some("#112233"));
        assert_eq!(
            style.get("background-color"),
            Some("color-mix(in srgb, var(--tw-bg-color) calc(var(--tw-bg-opacity, 1) * 100%), transparent)")
        );
    }

    #[test]
    fn test_alpha_variable_passthrough() {
        for color in ["transparent", "currentColor", "var(--x)", "#11223380", "rgb(0 0 0 / 0.5)"] {
            let style = with_alpha_variable(color, &["background-color"], BACKGROUND);
            assert_eq!(style.declarations.len(), 1, "{}", color);
            assert_eq!(style.get("background-color"), Some(color));
        }
    }

    #[test]
    fn test_alpha_variable_multiple_properties() {
        let style = with_alpha_variable(
            "#000",
            &["border-left-color", "border-right-color"],
            longhand_core::vars::BORDER,
        );
        assert_eq!(style.declarations.len(), 3);
        assert_eq!(style.declarations[0].property, "--tw-border-color");
    }
}
