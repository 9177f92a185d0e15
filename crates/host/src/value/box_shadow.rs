use super::split_at_top_level;
use super::split_words;

const KEYWORDS: &[&str] = &["inset", "inherit", "initial", "revert", "unset"];

/// 单个阴影的分解结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowPart {
    /// 原始文本（已 trim）
    pub raw: String,
    pub keyword: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub blur: Option<String>,
    pub spread: Option<String>,
    pub color: Option<String>,
    pub unknown: Vec<String>,
    /// 至少有 x / y 偏移时才可以替换颜色
    pub valid: bool,
}

/// `-?(\d+|\.\d+)(.*?)`
fn is_length_like(part: &str) -> bool {
    let unsigned = part.strip_prefix('-').unwrap_or(part);
    match unsigned.as_bytes() {
        [b'0'..=b'9', ..] => true,
        [b'.', b'0'..=b'9', ..] => true,
        _ => false,
    }
}

/// 把 box-shadow 值拆成阴影列表
///
/// 每个阴影按顶层空白切分：第一个关键字（`inset` 等）、依次四个长度
/// （x、y、blur、spread）、第一个非长度片段作为颜色，其余记入 `unknown`。
///
/// ```
/// use longhand_host::value::parse_box_shadow_value;
///
/// let shadows = parse_box_shadow_value("inset 0 1px 2px rgb(0 0 0 / 0.05)");
/// assert_eq!(shadows[0].keyword.as_deref(), Some("inset"));
/// assert_eq!(shadows[0].color.as_deref(), Some("rgb(0 0 0 / 0.05)"));
/// assert!(shadows[0].valid);
/// ```
pub fn parse_box_shadow_value(input: &str) -> Vec<ShadowPart> {
    split_at_top_level(input, ',')
        .into_iter()
        .map(|shadow| {
            let raw = shadow.trim();
            let mut result = ShadowPart {
                raw: raw.to_string(),
                ..ShadowPart::default()
            };

            for part in split_words(raw) {
                if result.keyword.is_none() && KEYWORDS.contains(&part) {
                    result.keyword = Some(part.to_string());
                } else if is_length_like(part) {
                    let slot = [
                        &mut result.x,
                        &mut result.y,
                        &mut result.blur,
                        &mut result.spread,
                    ]
                    .into_iter()
                    .find(|slot| slot.is_none());
                    // 第五个长度直接丢弃
                    if let Some(slot) = slot {
                        *slot = Some(part.to_string());
                    }
                } else if result.color.is_none() {
                    result.color = Some(part.to_string());
                } else {
                    result.unknown.push(part.to_string());
                }
            }

            result.valid = result.x.is_some() && result.y.is_some();
            result
        })
        .collect()
}

/// 把阴影列表格式化回 CSS 值
///
/// 无效阴影原样输出；有效阴影按 keyword x y blur spread color 的顺序拼接。
pub fn format_box_shadow_value(shadows: &[ShadowPart]) -> String {
    shadows
        .iter()
        .map(|shadow| {
            if !shadow.valid {
                return shadow.raw.clone();
            }

            [
                &shadow.keyword,
                &shadow.x,
                &shadow.y,
                &shadow.blur,
                &shadow.spread,
                &shadow.color,
            ]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
