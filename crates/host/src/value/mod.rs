//! 主题值 / 任意值的辅助处理

pub mod animation;
pub mod box_shadow;
pub mod color;
pub mod data_types;
pub mod negate;

pub use animation::{parse_animation_value, AnimationRef};
pub use box_shadow::{format_box_shadow_value, parse_box_shadow_value, ShadowPart};
pub use color::{flatten_color_palette, parse_color, to_color_value, with_alpha_variable, ParsedColor};
pub use data_types::ValueType;
pub use negate::negate_value;

/// 在顶层（不在括号、方括号、花括号或引号内）按分隔符切分
///
/// 返回的片段未做 trim，调用方按需处理。
///
/// ```
/// use longhand_host::value::split_at_top_level;
///
/// assert_eq!(
///     split_at_top_level("0 1px rgb(0, 0, 0), 0 2px red", ','),
///     vec!["0 1px rgb(0, 0, 0)", " 0 2px red"]
/// );
/// ```
pub fn split_at_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' => escaped = true,
            '"' | '\'' => match quote {
                Some(q) if q == ch => quote = None,
                None => quote = Some(ch),
                _ => {}
            },
            _ if quote.is_some() => {}
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }

    parts.push(&input[start..]);
    parts
}

/// 按顶层空白切分并去掉空片段
pub fn split_words(input: &str) -> Vec<&str> {
    split_at_top_level(input, ' ')
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// camelCase → kebab-case（`gridAutoFlow` → `grid-auto-flow`）
///
/// 自定义属性与已是 kebab-case 的名称原样返回。
pub fn to_kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
