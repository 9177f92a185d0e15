//! box-shadow 与阴影颜色
//!
//! `box-shadow-*` 把阴影写进 `--tw-shadow`，同时生成把颜色替换为
//! `var(--tw-shadow-color)` 的 `--tw-shadow-colored`。阴影颜色类写入颜色变量并切换到着色版本。

use crate::colors::COLOR_TYPES;
use longhand_core::vars::{self, EMPTY_SHADOW, RING_OFFSET_SHADOW, RING_SHADOW, SHADOW, SHADOW_COLOR, SHADOW_COLORED};
use longhand_core::{Declaration, Style};
use longhand_host::value::{flatten_color_palette, format_box_shadow_value, parse_box_shadow_value, to_color_value};
use longhand_host::{transform_theme_value, MatchOptions, PluginApi, ThemeValue, UtilityFn, ValueType};
use std::sync::Arc;

pub const BOX_SHADOW_DEFAULTS: &str = "box-shadow";

/// `box-shadow` 属性的最终值：ring 偏移阴影、ring 阴影、阴影本身
fn composed_box_shadow() -> String {
    [
        vars::var_or(RING_OFFSET_SHADOW, EMPTY_SHADOW),
        vars::var_or(RING_SHADOW, EMPTY_SHADOW),
        vars::var(SHADOW),
    ]
    .join(", ")
}

pub fn box_shadow(value: &ThemeValue, _modifier: Option<&str>) -> Option<Style> {
    let value = transform_theme_value("boxShadow").apply(value)?;

    let (shadow, colored) = if value == "none" {
        (EMPTY_SHADOW.to_string(), EMPTY_SHADOW.to_string())
    } else {
        let mut shadows = parse_box_shadow_value(&value);
        for shadow in shadows.iter_mut().filter(|shadow| shadow.valid) {
            shadow.color = Some(vars::var(SHADOW_COLOR));
        }
        let colored = format_box_shadow_value(&shadows);
        (value, colored)
    };

    Some(
        Style::new()
            .with_defaults(BOX_SHADOW_DEFAULTS)
            .with(SHADOW, shadow)
            .with(SHADOW_COLORED, colored)
            .with("box-shadow", composed_box_shadow()),
    )
}

pub fn register_box_shadow(api: &mut dyn PluginApi) {
    api.add_defaults(
        BOX_SHADOW_DEFAULTS,
        [RING_OFFSET_SHADOW, RING_SHADOW, SHADOW, SHADOW_COLORED]
            .into_iter()
            .map(|variable| Declaration::new(variable, EMPTY_SHADOW))
            .collect(),
    );

    let values = api.theme("boxShadow");
    api.match_utilities(
        vec![("box-shadow", Arc::new(box_shadow) as UtilityFn)],
        MatchOptions::new(values).with_types(&[ValueType::Shadow]),
    );
}

/// 阴影颜色与阴影共用 `box-shadow` 前缀，只接受颜色值
pub fn register_box_shadow_color(api: &mut dyn PluginApi) {
    let values = flatten_color_palette(&api.theme("boxShadowColor"));
    api.match_utilities(
        vec![(
            "box-shadow",
            Arc::new(|value: &ThemeValue, _: Option<&str>| {
                let color = to_color_value(value)?;
                Some(
                    Style::new()
                        .with(SHADOW_COLOR, color)
                        .with(SHADOW, vars::var(SHADOW_COLORED)),
                )
            }) as UtilityFn,
        )],
        MatchOptions::new(values).with_types(COLOR_TYPES),
    );
}
