use super::{split_at_top_level, split_words};

const DIRECTIONS: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];
const PLAY_STATES: &[&str] = &["running", "paused"];
const FILL_MODES: &[&str] = &["none", "forwards", "backwards", "both"];
const TIMINGS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];
const TIMING_FUNCTIONS: &[&str] = &["cubic-bezier(", "steps("];

/// animation 简写中的一个引用（逗号分隔的一段）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationRef {
    /// 原始文本（已 trim）
    pub value: String,
    pub name: Option<String>,
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub timing_function: Option<String>,
    pub iteration_count: Option<String>,
    pub direction: Option<String>,
    pub fill_mode: Option<String>,
    pub play_state: Option<String>,
    pub unknown: Vec<String>,
}

/// `-?[\d.]+m?s`
fn is_time(part: &str) -> bool {
    let unsigned = part.strip_prefix('-').unwrap_or(part);
    let number = unsigned
        .strip_suffix("ms")
        .or_else(|| unsigned.strip_suffix('s'));
    number.is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

fn is_iteration_count(part: &str) -> bool {
    part == "infinite" || (!part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// 解析 animation 简写值
///
/// 每段内的片段按以下顺序归类，每类只取第一次出现：
/// direction、play-state、fill-mode、iteration-count、timing-function、
/// duration、delay，剩下的第一个片段作为名称。
///
/// ```
/// use longhand_host::value::parse_animation_value;
///
/// let refs = parse_animation_value("spin 1s linear infinite");
/// assert_eq!(refs[0].name.as_deref(), Some("spin"));
/// assert_eq!(refs[0].duration.as_deref(), Some("1s"));
/// ```
pub fn parse_animation_value(input: &str) -> Vec<AnimationRef> {
    split_at_top_level(input, ',')
        .into_iter()
        .map(|animation| {
            let value = animation.trim();
            let mut result = AnimationRef {
                value: value.to_string(),
                ..AnimationRef::default()
            };

            for part in split_words(value) {
                let owned = || Some(part.to_string());

                if result.direction.is_none() && DIRECTIONS.contains(&part) {
                    result.direction = owned();
                } else if result.play_state.is_none() && PLAY_STATES.contains(&part) {
                    result.play_state = owned();
                } else if result.fill_mode.is_none() && FILL_MODES.contains(&part) {
                    result.fill_mode = owned();
                } else if result.iteration_count.is_none() && is_iteration_count(part) {
                    result.iteration_count = owned();
                } else if result.timing_function.is_none()
                    && (TIMINGS.contains(&part) || TIMING_FUNCTIONS.iter().any(|f| part.starts_with(f)))
                {
                    result.timing_function = owned();
                } else if result.duration.is_none() && is_time(part) {
                    result.duration = owned();
                } else if result.delay.is_none() && is_time(part) {
                    result.delay = owned();
                } else if result.name.is_none() {
                    result.name = owned();
                } else {
                    result.unknown.push(part.to_string());
                }
            }

            result
        })
        .collect()
}
