//! 颜色工具类
//!
//! 边框、背景与文字颜色在对应透明度插件启用时通过颜色变量与透明度变量组合，
//! 其余颜色类直接写入颜色值。

use longhand_core::vars::{self, AlphaChannel};
use longhand_core::Style;
use longhand_host::value::{flatten_color_palette, to_color_value, with_alpha_variable};
use longhand_host::{MatchOptions, PluginApi, ThemeValue, UtilityFn, ValueType};
use std::sync::Arc;
use tracing::debug;

pub(crate) const COLOR_TYPES: &[ValueType] = &[ValueType::Color, ValueType::Any];

/// 颜色类绑定的透明度插件
#[derive(Debug, Clone, Copy)]
pub struct Companion {
    pub core_plugin: &'static str,
    pub channel: AlphaChannel,
}

#[derive(Debug, Clone, Copy)]
pub struct ColorVariant {
    pub class_prefix: &'static str,
    pub properties: &'static [&'static str],
}

#[derive(Debug)]
pub struct ColorFamily {
    pub theme_key: &'static str,
    pub groups: &'static [&'static [ColorVariant]],
    pub companion: Option<Companion>,
    /// 去掉扁平化后的 `DEFAULT` 键（默认边框颜色只用于重置）
    pub filter_default: bool,
}

impl ColorFamily {
    pub fn register(&self, api: &mut dyn PluginApi) {
        let mut values = flatten_color_palette(&api.theme(self.theme_key));
        if self.filter_default {
            values.shift_remove("DEFAULT");
        }

        let channel = self.companion.and_then(|companion| {
            let enabled = api.core_plugins(companion.core_plugin);
            debug!(theme_key = self.theme_key, companion = companion.core_plugin, enabled, "color companion");
            enabled.then_some(companion.channel)
        });

        for variants in self.groups {
            let utilities = variants
                .iter()
                .map(|variant| (variant.class_prefix, write_color(variant.properties, channel)))
                .collect();
            api.match_utilities(utilities, MatchOptions::new(values.clone()).with_types(COLOR_TYPES));
        }
    }
}

fn write_color(properties: &'static [&'static str], channel: Option<AlphaChannel>) -> UtilityFn {
    Arc::new(move |value: &ThemeValue, _: Option<&str>| {
        let color = to_color_value(value)?;
        Some(match channel {
            Some(channel) => with_alpha_variable(&color, properties, channel),
            None => Style::from_pairs(properties.iter().map(|property| (*property, color.as_str()))),
        })
    })
}

macro_rules! color {
    ($prefix:literal => [$($property:literal),+]) => {
        ColorVariant {
            class_prefix: $prefix,
            properties: &[$($property),+],
        }
    };
}

pub static BORDER_COLOR: ColorFamily = ColorFamily {
    theme_key: "borderColor",
    groups: &[
        &[color!("border-color" => ["border-color"])],
        &[
            color!("border-x-color" => ["border-left-color", "border-right-color"]),
            color!("border-y-color" => ["border-top-color", "border-bottom-color"]),
        ],
        &[
            color!("border-inline-start-color" => ["border-inline-start-color"]),
            color!("border-inline-end-color" => ["border-inline-end-color"]),
            color!("border-top-color" => ["border-top-color"]),
            color!("border-right-color" => ["border-right-color"]),
            color!("border-bottom-color" => ["border-bottom-color"]),
            color!("border-left-color" => ["border-left-color"]),
        ],
    ],
    companion: Some(Companion {
        core_plugin: "borderOpacity",
        channel: vars::BORDER,
    }),
    filter_default: true,
};

pub static BACKGROUND_COLOR: ColorFamily = ColorFamily {
    theme_key: "backgroundColor",
    groups: &[&[color!("background-color" => ["background-color"])]],
    companion: Some(Companion {
        core_plugin: "backgroundOpacity",
        channel: vars::BACKGROUND,
    }),
    filter_default: false,
};

pub static TEXT_COLOR: ColorFamily = ColorFamily {
    theme_key: "textColor",
    groups: &[&[color!("color" => ["color"])]],
    companion: Some(Companion {
        core_plugin: "textOpacity",
        channel: vars::TEXT,
    }),
    filter_default: false,
};

macro_rules! plain {
    ($name:ident, $theme_key:literal, $property:literal) => {
        pub static $name: ColorFamily = ColorFamily {
            theme_key: $theme_key,
            groups: &[&[color!($property => [$property])]],
            companion: None,
            filter_default: false,
        };
    };
}

plain!(TEXT_DECORATION_COLOR, "textDecorationColor", "text-decoration-color");
plain!(CARET_COLOR, "caretColor", "caret-color");
plain!(ACCENT_COLOR, "accentColor", "accent-color");
plain!(OUTLINE_COLOR, "outlineColor", "outline-color");
