//! 内置的透明度工具类
//!
//! 颜色类在透明度插件启用时把颜色写进颜色变量，再通过透明度变量组合；
//! 这里的工具类负责写入透明度变量。

use crate::api::{MatchOptions, PluginApi, UtilityFn};
use crate::theme::ThemeValue;
use longhand_core::vars::{self, AlphaChannel};
use longhand_core::Style;
use std::sync::Arc;
use tracing::debug;

struct OpacityFamily {
    core_plugin: &'static str,
    root: &'static str,
    channel: AlphaChannel,
}

const FAMILIES: &[OpacityFamily] = &[
    OpacityFamily {
        core_plugin: "backgroundOpacity",
        root: "background-opacity",
        channel: vars::BACKGROUND,
    },
    OpacityFamily {
        core_plugin: "borderOpacity",
        root: "border-opacity",
        channel: vars::BORDER,
    },
    OpacityFamily {
        core_plugin: "textOpacity",
        root: "text-opacity",
        channel: vars::TEXT,
    },
];

fn set_variable(variable: &'static str) -> UtilityFn {
    Arc::new(move |value: &ThemeValue, _: Option<&str>| {
        value.as_literal().map(|v| Style::new().with(variable, v))
    })
}

/// 注册启用的透明度工具类，取值来自 `theme.opacity`
pub fn register_opacity_utilities(api: &mut dyn PluginApi) {
    let opacity = api.theme("opacity");

    for family in FAMILIES {
        if !api.core_plugins(family.core_plugin) {
            debug!(plugin = family.core_plugin, "opacity utilities disabled");
            continue;
        }

        api.match_utilities(
            vec![(family.root, set_variable(family.channel.opacity))],
            MatchOptions::new(opacity.clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::registry::Registry;
    use crate::theme::Theme;

    #[test]
    fn test_opacity_utilities() {
        let mut registry = Registry::new(Config::default(), Theme::default());
        register_opacity_utilities(&mut registry);

        let m = registry.resolve("background-opacity-50").unwrap();
        assert_eq!(m.style.get("--tw-bg-opacity"), Some("0.5"));
        let m = registry.resolve("text-opacity-[.3]").unwrap();
        assert_eq!(m.style.get("--tw-text-opacity"), Some(".3"));
    }

    #[test]
    fn test_disabled_family_is_not_registered() {
        let config = Config::load_from_json(r#"{ "corePlugins": { "borderOpacity": false } }"#).unwrap();
        let mut registry = Registry::new(config, Theme::default());
        register_opacity_utilities(&mut registry);

        assert!(!registry.has_utility("border-opacity"));
        assert!(registry.has_utility("background-opacity"));
    }
}
