//! 参数化工具类：主题值写入一组 CSS 属性
//!
//! 每个族对应一个主题分区。族内按组注册，同一组共享一次注册序号，
//! 组之间的先后决定输出顺序（`margin` 在 `margin-x` 之前，`margin-x` 在 `margin-top` 之前）。

use longhand_core::{Declaration, Style};
use longhand_host::{transform_theme_value, MatchOptions, PluginApi, ThemeValue, UtilityFn, ValueTransform, ValueType};
use std::sync::Arc;
use tracing::trace;

/// 类名前缀 → CSS 属性
#[derive(Debug, Clone, Copy)]
pub struct UtilityVariant {
    pub class_prefix: &'static str,
    pub properties: &'static [&'static str],
}

/// 族内所有变体共享的默认块
pub struct FamilyDefaults {
    pub group: &'static str,
    pub build: fn(&dyn PluginApi) -> Vec<Declaration>,
}

pub struct UtilityFamily {
    pub theme_key: &'static str,
    pub groups: &'static [&'static [UtilityVariant]],
    /// 任意值可接受的类型
    pub types: &'static [ValueType],
    pub supports_negative_values: bool,
    /// 去掉主题分区的 `DEFAULT` 键
    pub filter_default: bool,
    pub defaults: Option<&'static FamilyDefaults>,
}

impl UtilityFamily {
    const BASE: UtilityFamily = UtilityFamily {
        theme_key: "",
        groups: &[],
        types: &[ValueType::Any],
        supports_negative_values: false,
        filter_default: false,
        defaults: None,
    };

    pub fn register(&self, api: &mut dyn PluginApi) {
        let transform = transform_theme_value(self.theme_key);

        let mut values = api.theme(self.theme_key);
        if self.filter_default {
            values.shift_remove("DEFAULT");
        }

        let group = self.defaults.map(|defaults| {
            let declarations = (defaults.build)(&*api);
            api.add_defaults(defaults.group, declarations);
            defaults.group
        });

        for variants in self.groups {
            let utilities = variants
                .iter()
                .map(|variant| {
                    trace!(class_prefix = variant.class_prefix, theme_key = self.theme_key, "utility");
                    (variant.class_prefix, write_properties(*variant, transform, group))
                })
                .collect();

            api.match_utilities(
                utilities,
                MatchOptions::new(values.clone())
                    .with_types(self.types)
                    .negative(self.supports_negative_values),
            );
        }
    }
}

fn write_properties(variant: UtilityVariant, transform: ValueTransform, defaults: Option<&'static str>) -> UtilityFn {
    Arc::new(move |value: &ThemeValue, _: Option<&str>| {
        let value = transform.apply(value)?;
        let mut style = Style::new();
        if let Some(group) = defaults {
            style = style.with_defaults(group);
        }
        for property in variant.properties {
            style.push(*property, value.as_str());
        }
        Some(style)
    })
}

macro_rules! variant {
    ($prefix:literal => [$($property:literal),+ $(,)?]) => {
        UtilityVariant {
            class_prefix: $prefix,
            properties: &[$($property),+],
        }
    };
}

/// 只有一个变体、类名前缀与属性同名的族
macro_rules! single {
    ($name:ident, $theme_key:literal, $property:literal) => {
        pub static $name: UtilityFamily = UtilityFamily {
            theme_key: $theme_key,
            groups: &[&[variant!($property => [$property])]],
            ..UtilityFamily::BASE
        };
    };
    ($name:ident, $theme_key:literal, $property:literal, { $($field:ident: $value:expr),+ $(,)? }) => {
        pub static $name: UtilityFamily = UtilityFamily {
            theme_key: $theme_key,
            groups: &[&[variant!($property => [$property])]],
            $($field: $value,)+
            ..UtilityFamily::BASE
        };
    };
}

single!(Z_INDEX, "zIndex", "z-index", { supports_negative_values: true });
single!(GRID_COLUMN, "gridColumn", "grid-column");
single!(GRID_COLUMN_START, "gridColumnStart", "grid-column-start");
single!(GRID_COLUMN_END, "gridColumnEnd", "grid-column-end");
single!(GRID_ROW, "gridRow", "grid-row");
single!(GRID_ROW_START, "gridRowStart", "grid-row-start");
single!(GRID_ROW_END, "gridRowEnd", "grid-row-end");

pub static MARGIN: UtilityFamily = UtilityFamily {
    theme_key: "margin",
    groups: &[
        &[variant!("margin" => ["margin"])],
        &[
            variant!("margin-x" => ["margin-left", "margin-right"]),
            variant!("margin-y" => ["margin-top", "margin-bottom"]),
        ],
        &[
            variant!("margin-inline-start" => ["margin-inline-start"]),
            variant!("margin-inline-end" => ["margin-inline-end"]),
            variant!("margin-top" => ["margin-top"]),
            variant!("margin-right" => ["margin-right"]),
            variant!("margin-bottom" => ["margin-bottom"]),
            variant!("margin-left" => ["margin-left"]),
        ],
    ],
    supports_negative_values: true,
    ..UtilityFamily::BASE
};

single!(ASPECT_RATIO, "aspectRatio", "aspect-ratio");
single!(HEIGHT, "height", "height");
single!(MAX_HEIGHT, "maxHeight", "max-height");
single!(MIN_HEIGHT, "minHeight", "min-height");
single!(WIDTH, "width", "width");
single!(MIN_WIDTH, "minWidth", "min-width");
single!(MAX_WIDTH, "maxWidth", "max-width");
single!(FLEX_SHRINK, "flexShrink", "flex-shrink");
single!(FLEX_GROW, "flexGrow", "flex-grow");
single!(FLEX_BASIS, "flexBasis", "flex-basis");
single!(TRANSFORM_ORIGIN, "transformOrigin", "transform-origin");

pub static SCROLL_MARGIN: UtilityFamily = UtilityFamily {
    theme_key: "scrollMargin",
    groups: &[
        &[variant!("scroll-margin" => ["scroll-margin"])],
        &[
            variant!("scroll-margin-x" => ["scroll-margin-left", "scroll-margin-right"]),
            variant!("scroll-margin-y" => ["scroll-margin-top", "scroll-margin-bottom"]),
        ],
        &[
            variant!("scroll-margin-inline-start" => ["scroll-margin-inline-start"]),
            variant!("scroll-margin-inline-end" => ["scroll-margin-inline-end"]),
            variant!("scroll-margin-top" => ["scroll-margin-top"]),
            variant!("scroll-margin-right" => ["scroll-margin-right"]),
            variant!("scroll-margin-bottom" => ["scroll-margin-bottom"]),
            variant!("scroll-margin-left" => ["scroll-margin-left"]),
        ],
    ],
    supports_negative_values: true,
    ..UtilityFamily::BASE
};

pub static SCROLL_PADDING: UtilityFamily = UtilityFamily {
    theme_key: "scrollPadding",
    groups: &[
        &[variant!("scroll-padding" => ["scroll-padding"])],
        &[
            variant!("scroll-padding-x" => ["scroll-padding-left", "scroll-padding-right"]),
            variant!("scroll-padding-y" => ["scroll-padding-top", "scroll-padding-bottom"]),
        ],
        &[
            variant!("scroll-padding-inline-start" => ["scroll-padding-inline-start"]),
            variant!("scroll-padding-inline-end" => ["scroll-padding-inline-end"]),
            variant!("scroll-padding-top" => ["scroll-padding-top"]),
            variant!("scroll-padding-right" => ["scroll-padding-right"]),
            variant!("scroll-padding-bottom" => ["scroll-padding-bottom"]),
            variant!("scroll-padding-left" => ["scroll-padding-left"]),
        ],
    ],
    ..UtilityFamily::BASE
};

single!(LIST_STYLE_TYPE, "listStyleType", "list-style-type");
single!(LIST_STYLE_IMAGE, "listStyleImage", "list-style-image");
single!(GRID_AUTO_COLUMNS, "gridAutoColumns", "grid-auto-columns");
single!(GRID_AUTO_ROWS, "gridAutoRows", "grid-auto-rows");
single!(GRID_TEMPLATE_COLUMNS, "gridTemplateColumns", "grid-template-columns");
single!(GRID_TEMPLATE_ROWS, "gridTemplateRows", "grid-template-rows");

pub static GAP: UtilityFamily = UtilityFamily {
    theme_key: "gap",
    groups: &[
        &[variant!("gap" => ["gap"])],
        &[
            variant!("column-gap" => ["column-gap"]),
            variant!("row-gap" => ["row-gap"]),
        ],
    ],
    ..UtilityFamily::BASE
};

pub static BORDER_RADIUS: UtilityFamily = UtilityFamily {
    theme_key: "borderRadius",
    groups: &[
        &[variant!("border-radius" => ["border-radius"])],
        &[
            variant!("border-start-radius" => ["border-start-start-radius", "border-end-start-radius"]),
            variant!("border-end-radius" => ["border-start-end-radius", "border-end-end-radius"]),
            variant!("border-top-radius" => ["border-top-left-radius", "border-top-right-radius"]),
            variant!("border-right-radius" => ["border-top-right-radius", "border-bottom-right-radius"]),
            variant!("border-bottom-radius" => ["border-bottom-right-radius", "border-bottom-left-radius"]),
            variant!("border-left-radius" => ["border-top-left-radius", "border-bottom-left-radius"]),
        ],
        &[
            variant!("border-start-start-radius" => ["border-start-start-radius"]),
            variant!("border-start-end-radius" => ["border-start-end-radius"]),
            variant!("border-end-end-radius" => ["border-end-end-radius"]),
            variant!("border-end-start-radius" => ["border-end-start-radius"]),
            variant!("border-top-left-radius" => ["border-top-left-radius"]),
            variant!("border-top-right-radius" => ["border-top-right-radius"]),
            variant!("border-bottom-right-radius" => ["border-bottom-right-radius"]),
            variant!("border-bottom-left-radius" => ["border-bottom-left-radius"]),
        ],
    ],
    ..UtilityFamily::BASE
};

/// 边框重置：宽度归零、实线，颜色取 `borderColor.DEFAULT`
fn border_width_defaults(api: &dyn PluginApi) -> Vec<Declaration> {
    let color = api
        .theme("borderColor")
        .get("DEFAULT")
        .and_then(ThemeValue::as_literal)
        .map(str::to_string)
        .unwrap_or_else(|| "currentColor".to_string());

    vec![
        Declaration::new("border-width", "0"),
        Declaration::new("border-style", "solid"),
        Declaration::new("border-color", color),
    ]
}

static BORDER_WIDTH_DEFAULTS: FamilyDefaults = FamilyDefaults {
    group: "border-width",
    build: border_width_defaults,
};

pub static BORDER_WIDTH: UtilityFamily = UtilityFamily {
    theme_key: "borderWidth",
    groups: &[
        &[variant!("border-width" => ["border-width"])],
        &[
            variant!("border-x-width" => ["border-left-width", "border-right-width"]),
            variant!("border-y-width" => ["border-top-width", "border-bottom-width"]),
        ],
        &[
            variant!("border-inline-start-width" => ["border-inline-start-width"]),
            variant!("border-inline-end-width" => ["border-inline-end-width"]),
            variant!("border-top-width" => ["border-top-width"]),
            variant!("border-right-width" => ["border-right-width"]),
            variant!("border-bottom-width" => ["border-bottom-width"]),
            variant!("border-left-width" => ["border-left-width"]),
        ],
    ],
    types: &[ValueType::LineWidth, ValueType::Length],
    defaults: Some(&BORDER_WIDTH_DEFAULTS),
    ..UtilityFamily::BASE
};

single!(BACKGROUND_IMAGE, "backgroundImage", "background-image", {
    types: &[ValueType::Lookup, ValueType::Image, ValueType::Url],
});
single!(BACKGROUND_SIZE, "backgroundSize", "background-size", {
    types: &[ValueType::Lookup, ValueType::Length, ValueType::Percentage, ValueType::Size],
});
single!(BACKGROUND_POSITION, "backgroundPosition", "background-position", {
    types: &[ValueType::Lookup, ValueType::Position],
});
single!(STROKE_WIDTH, "strokeWidth", "stroke-width", {
    types: &[ValueType::Length, ValueType::Number, ValueType::Percentage],
});

// 类名前缀是 `object`，与 `object-fit-*` 静态类共用开头
pub static OBJECT_POSITION: UtilityFamily = UtilityFamily {
    theme_key: "objectPosition",
    groups: &[&[variant!("object" => ["object-position"])]],
    ..UtilityFamily::BASE
};

pub static PADDING: UtilityFamily = UtilityFamily {
    theme_key: "padding",
    groups: &[
        &[variant!("padding" => ["padding"])],
        &[
            variant!("padding-x" => ["padding-left", "padding-right"]),
            variant!("padding-y" => ["padding-top", "padding-bottom"]),
        ],
        &[
            variant!("padding-inline-start" => ["padding-inline-start"]),
            variant!("padding-inline-end" => ["padding-inline-end"]),
            variant!("padding-top" => ["padding-top"]),
            variant!("padding-right" => ["padding-right"]),
            variant!("padding-bottom" => ["padding-bottom"]),
            variant!("padding-left" => ["padding-left"]),
        ],
    ],
    ..UtilityFamily::BASE
};

single!(TEXT_INDENT, "textIndent", "text-indent", { supports_negative_values: true });
single!(FONT_WEIGHT, "fontWeight", "font-weight", {
    types: &[ValueType::Lookup, ValueType::Number, ValueType::Any],
});
single!(LINE_HEIGHT, "lineHeight", "line-height");
single!(LETTER_SPACING, "letterSpacing", "letter-spacing", { supports_negative_values: true });
single!(TEXT_DECORATION_THICKNESS, "textDecorationThickness", "text-decoration-thickness", {
    types: &[ValueType::Length, ValueType::Percentage],
});
single!(TEXT_UNDERLINE_OFFSET, "textUnderlineOffset", "text-underline-offset", {
    types: &[ValueType::Length, ValueType::Percentage, ValueType::Any],
});
single!(OUTLINE_WIDTH, "outlineWidth", "outline-width", {
    types: &[ValueType::Length, ValueType::Number, ValueType::Percentage],
});
single!(TRANSITION_DELAY, "transitionDelay", "transition-delay");
single!(TRANSITION_DURATION, "transitionDuration", "transition-duration", { filter_default: true });
single!(TRANSITION_TIMING_FUNCTION, "transitionTimingFunction", "transition-timing-function", {
    filter_default: true,
});
