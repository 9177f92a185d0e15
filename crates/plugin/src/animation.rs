//! `animation-*`：动画名加前缀，并携带对应的 `@keyframes`

use indexmap::IndexMap;
use longhand_core::{escape_class_name, Declaration, KeyframeStep, Keyframes, Style};
use longhand_host::value::{parse_animation_value, to_kebab_case};
use longhand_host::{transform_theme_value, MatchOptions, PluginApi, ThemeValue, UtilityFn};
use std::sync::Arc;
use tracing::{debug, trace};

/// `theme.keyframes` 中的一项转为 `@keyframes` 块
///
/// 步骤内的属性名是 camelCase（`animationTimingFunction`），输出时转为 kebab-case。
fn build_keyframes(name: String, steps: &IndexMap<String, ThemeValue>) -> Keyframes {
    let steps = steps
        .iter()
        .filter_map(|(selector, declarations)| {
            let declarations = declarations
                .as_nested()?
                .iter()
                .filter_map(|(property, value)| {
                    value
                        .as_literal()
                        .map(|value| Declaration::new(to_kebab_case(property), value))
                })
                .collect();
            Some(KeyframeStep {
                selector: selector.clone(),
                declarations,
            })
        })
        .collect();

    Keyframes { name, steps }
}

/// 把动画值中已知的动画名替换为加前缀的名称
///
/// 每个引用只替换第一次出现的名称；未知名称原样保留，也不会带上 keyframes。
pub fn scope_animation(value: &str, keyframes: &IndexMap<String, Keyframes>) -> Style {
    let mut style = Style::new();
    let mut rewritten = Vec::new();

    for animation in parse_animation_value(value) {
        let known = animation
            .name
            .as_deref()
            .and_then(|name| keyframes.get(name).map(|frames| (name, frames)));

        match known {
            Some((name, frames)) => {
                if !style.keyframes.iter().any(|k| k.name == frames.name) {
                    style.keyframes.push(frames.clone());
                }
                rewritten.push(animation.value.replacen(name, &frames.name, 1));
            }
            None => rewritten.push(animation.value),
        }
    }

    style.push("animation", rewritten.join(", "));
    style
}

pub fn register_animation(api: &mut dyn PluginApi) {
    let prefix = api.prefix().to_string();

    let keyframes: IndexMap<String, Keyframes> = api
        .theme("keyframes")
        .iter()
        .filter_map(|(name, steps)| {
            let scoped = escape_class_name(&format!("{}{}", prefix, name));
            trace!(name = %name, scoped = %scoped, "keyframes");
            Some((name.clone(), build_keyframes(scoped, steps.as_nested()?)))
        })
        .collect();
    debug!(count = keyframes.len(), "animation keyframes");

    let keyframes = Arc::new(keyframes);
    let transform = transform_theme_value("animation");
    let values = api.theme("animation");

    api.match_utilities(
        vec![(
            "animation",
            Arc::new(move |value: &ThemeValue, _: Option<&str>| {
                let value = transform.apply(value)?;
                Some(scope_animation(&value, &keyframes))
            }) as UtilityFn,
        )],
        MatchOptions::new(values),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use longhand_host::{Config, Registry, Theme};
    use pretty_assertions::assert_eq;

    fn registry(prefix: &str) -> Registry {
        let mut registry = Registry::new(Config::default().with_prefix(prefix), Theme::default());
        register_animation(&mut registry);
        registry
    }

    #[test]
    fn test_known_animation_gets_keyframes() {
        let m = registry("").resolve("animation-spin").unwrap();
        assert_eq!(m.style.get("animation"), Some("spin 1s linear infinite"));
        assert_eq!(m.style.keyframes.len(), 1);
        assert_eq!(m.style.keyframes[0].name, "spin");
        assert_eq!(m.style.keyframes[0].steps[0].selector, "to");
    }

    #[test]
    fn test_prefix_is_applied_to_name() {
        let m = registry("tw-").resolve("tw-animation-spin").unwrap();
        assert_eq!(m.style.get("animation"), Some("tw-spin 1s linear infinite"));
        assert_eq!(m.style.keyframes[0].name, "tw-spin");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let m = registry("tw-").resolve("tw-animation-[wiggle_1s_ease-in-out_infinite]").unwrap();
        assert_eq!(m.style.get("animation"), Some("wiggle 1s ease-in-out infinite"));
        assert!(m.style.keyframes.is_empty());

        let m = registry("").resolve("animation-none").unwrap();
        assert_eq!(m.style.get("animation"), Some("none"));
        assert!(m.style.keyframes.is_empty());
    }

    #[test]
    fn test_keyframe_properties_are_kebab_case() {
        let m = registry("").resolve("animation-bounce").unwrap();
        let first = &m.style.keyframes[0].steps[0];
        assert!(first
            .declarations
            .iter()
            .any(|d| d.property == "animation-timing-function"));
    }

    #[test]
    fn test_multiple_references() {
        let frames = registry("x-");
        let m = frames.resolve("x-animation-[spin_1s,ping_2s]").unwrap();
        assert_eq!(m.style.get("animation"), Some("x-spin 1s, x-ping 2s"));
        assert_eq!(m.style.keyframes.len(), 2);
    }
}
