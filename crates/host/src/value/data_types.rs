use super::box_shadow::parse_box_shadow_value;
use super::color::parse_color;
use super::negate::leading_number;
use super::{split_at_top_level, split_words};

/// 任意值可接受的数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 任意值均可
    Any,
    /// 只接受主题中的键，不接受任意值
    Lookup,
    Color,
    Length,
    LineWidth,
    Percentage,
    Number,
    Image,
    Url,
    Position,
    /// background-size
    Size,
    Shadow,
    AbsoluteSize,
    RelativeSize,
    GenericName,
    FamilyName,
}

const LENGTH_UNITS: &[&str] = &[
    "cm", "mm", "Q", "in", "pc", "pt", "px", "em", "ex", "ch", "rem", "lh", "rlh", "vw", "vh",
    "vmin", "vmax", "vb", "vi", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqi",
    "cqb", "cqmin", "cqmax",
];

const CSS_FUNCTIONS: &[&str] = &["min(", "max(", "clamp(", "calc("];

const LINE_WIDTHS: &[&str] = &["thin", "medium", "thick"];

const POSITIONS: &[&str] = &["center", "top", "right", "bottom", "left"];

const SIZES: &[&str] = &["auto", "cover", "contain"];

const ABSOLUTE_SIZES: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
];

const RELATIVE_SIZES: &[&str] = &["larger", "smaller"];

const GENERIC_NAMES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "math",
    "emoji",
    "fangsong",
];

const IMAGE_FUNCTIONS: &[&str] = &[
    "url(",
    "image(",
    "image-set(",
    "cross-fade(",
    "element(",
    "linear-gradient(",
    "radial-gradient(",
    "conic-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
    "repeating-conic-gradient(",
];

impl ValueType {
    /// 由类型提示名（`[length:..]` 中的 `length`）得到类型
    pub fn from_hint(hint: &str) -> Option<Self> {
        Some(match hint {
            "any" => ValueType::Any,
            "color" => ValueType::Color,
            "length" => ValueType::Length,
            "line-width" => ValueType::LineWidth,
            "percentage" => ValueType::Percentage,
            "number" => ValueType::Number,
            "image" => ValueType::Image,
            "url" => ValueType::Url,
            "position" => ValueType::Position,
            "size" => ValueType::Size,
            "shadow" => ValueType::Shadow,
            "absolute-size" => ValueType::AbsoluteSize,
            "relative-size" => ValueType::RelativeSize,
            "generic-name" => ValueType::GenericName,
            "family-name" => ValueType::FamilyName,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Any => "any",
            ValueType::Lookup => "lookup",
            ValueType::Color => "color",
            ValueType::Length => "length",
            ValueType::LineWidth => "line-width",
            ValueType::Percentage => "percentage",
            ValueType::Number => "number",
            ValueType::Image => "image",
            ValueType::Url => "url",
            ValueType::Position => "position",
            ValueType::Size => "size",
            ValueType::Shadow => "shadow",
            ValueType::AbsoluteSize => "absolute-size",
            ValueType::RelativeSize => "relative-size",
            ValueType::GenericName => "generic-name",
            ValueType::FamilyName => "family-name",
        }
    }

    /// 判断任意值是否属于该类型
    ///
    /// `var(..)` 无法静态推断类型，视为匹配除 `lookup` 外的所有类型。
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        match self {
            ValueType::Any => true,
            ValueType::Lookup => false,
            _ if value.starts_with("var(") => true,
            ValueType::Color => is_color(value),
            ValueType::Length => is_length(value),
            ValueType::LineWidth => LINE_WIDTHS.contains(&value),
            ValueType::Percentage => is_percentage(value),
            ValueType::Number => is_number(value),
            ValueType::Image => split_at_top_level(value, ',')
                .iter()
                .all(|part| is_image(part.trim())),
            ValueType::Url => value.starts_with("url(") && value.ends_with(')'),
            ValueType::Position => is_position(value),
            ValueType::Size => is_background_size(value),
            ValueType::Shadow => {
                let shadows = parse_box_shadow_value(value);
                !shadows.is_empty() && shadows.iter().all(|shadow| shadow.valid)
            }
            ValueType::AbsoluteSize => ABSOLUTE_SIZES.contains(&value),
            ValueType::RelativeSize => RELATIVE_SIZES.contains(&value),
            ValueType::GenericName => GENERIC_NAMES.contains(&value),
            ValueType::FamilyName => is_family_name(value),
        }
    }
}

fn is_css_function(value: &str) -> bool {
    CSS_FUNCTIONS.iter().any(|f| value.starts_with(f)) && value.ends_with(')')
}

fn split_number(value: &str) -> Option<&str> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (len, _) = leading_number(unsigned)?;
    Some(&unsigned[len..])
}

fn is_number(value: &str) -> bool {
    split_number(value).is_some_and(str::is_empty) || is_css_function(value)
}

fn is_length(value: &str) -> bool {
    value == "0"
        || split_number(value).is_some_and(|unit| LENGTH_UNITS.contains(&unit))
        || is_css_function(value)
}

fn is_percentage(value: &str) -> bool {
    split_number(value).is_some_and(|unit| unit == "%") || is_css_function(value)
}

fn is_color(value: &str) -> bool {
    matches!(value, "currentColor" | "transparent" | "inherit") || parse_color(value).is_some()
}

fn is_image(value: &str) -> bool {
    IMAGE_FUNCTIONS.iter().any(|f| value.starts_with(f)) && value.ends_with(')')
}

fn is_position(value: &str) -> bool {
    let words = split_words(value);
    !words.is_empty()
        && words
            .iter()
            .all(|w| POSITIONS.contains(w) || is_length(w) || is_percentage(w))
}

fn is_background_size(value: &str) -> bool {
    split_at_top_level(value, ',').iter().all(|layer| {
        let words = split_words(layer);
        !words.is_empty()
            && words
                .iter()
                .all(|w| SIZES.contains(w) || is_length(w) || is_percentage(w))
    })
}

fn is_family_name(value: &str) -> bool {
    split_at_top_level(value, ',').iter().all(|part| {
        let part = part.trim();
        !part.is_empty()
            && !part.starts_with(|c: char| c.is_ascii_digit())
            && !part.starts_with("url(")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_round_trip() {
        for hint in ["length", "color", "line-width", "family-name", "shadow"] {
            assert_eq!(ValueType::from_hint(hint).map(|t| t.name()), Some(hint));
        }
        assert_eq!(ValueType::from_hint("lookup"), None);
        assert_eq!(ValueType::from_hint("bogus"), None);
    }

    #[test]
    fn test_length_and_number() {
        assert!(ValueType::Length.matches("13px"));
        assert!(ValueType::Length.matches("-0.5rem"));
        assert!(ValueType::Length.matches("0"));
        assert!(ValueType::Length.matches("calc(100% - 1rem)"));
        assert!(!ValueType::Length.matches("13"));
        assert!(!ValueType::Length.matches("red"));

        assert!(ValueType::Number.matches("700"));
        assert!(ValueType::Number.matches("1.5"));
        assert!(!ValueType::Number.matches("1.5px"));

        assert!(ValueType::Percentage.matches("50%"));
        assert!(!ValueType::Percentage.matches("50"));
    }

    #[test]
    fn test_color() {
        assert!(ValueType::Color.matches("#112233"));
        assert!(ValueType::Color.matches("rgb(1 2 3 / 50%)"));
        assert!(ValueType::Color.matches("rebeccapurple"));
        assert!(ValueType::Color.matches("currentColor"));
        assert!(!ValueType::Color.matches("13px"));
    }

    #[test]
    fn test_var_matches_everything_but_lookup() {
        assert!(ValueType::Length.matches("var(--x)"));
        assert!(ValueType::Color.matches("var(--x)"));
        assert!(!ValueType::Lookup.matches("var(--x)"));
        assert!(ValueType::Any.matches("whatever"));
    }

    #[test]
    fn test_composite_types() {
        assert!(ValueType::Shadow.matches("0 0 2px red"));
        assert!(!ValueType::Shadow.matches("red"));
        assert!(ValueType::Image.matches("url(a.png), linear-gradient(red, blue)"));
        assert!(!ValueType::Image.matches("red"));
        assert!(ValueType::Position.matches("left 10px top"));
        assert!(!ValueType::Position.matches("middle"));
        assert!(ValueType::Size.matches("auto 100%"));
        assert!(ValueType::LineWidth.matches("thick"));
        assert!(ValueType::FamilyName.matches("\"Open Sans\", Inter"));
        assert!(ValueType::GenericName.matches("sans-serif"));
        assert!(ValueType::AbsoluteSize.matches("x-large"));
    }
}
