//! Longhand 工具类插件
//!
//! 注册一一对应 CSS 属性的长写法工具类（`.display-flex`、`.position-absolute`、
//! `.margin-x-4` ...），替代框架内置的同名核心插件。
//!
//! ```
//! use longhand_host::{Config, Generator};
//! use longhand_plugin::LonghandPlugin;
//!
//! let plugin = LonghandPlugin::new();
//! let generator = Generator::with_plugins(Config::default(), &[&plugin]).unwrap();
//! let css = generator.generate_css(&["display-flex margin-x-4"]).unwrap();
//! assert!(css.contains(".display-flex {\n  display: flex;\n}"));
//! ```

pub mod animation;
pub mod colors;
pub mod effects;
pub mod static_utilities;
pub mod typography;
pub mod utility;

use indexmap::IndexMap;
use longhand_host::{ConfigPatch, Plugin, PluginApi};
use serde::Deserialize;
use static_utilities::StaticFamily;
use tracing::{debug, trace};
use utility::UtilityFamily;

pub use colors::ColorFamily;

/// 一个条目的注册方式
pub enum PluginKind {
    /// 固定类名 → 固定声明
    Static(&'static StaticFamily),
    /// 主题值写入属性
    Utility(&'static UtilityFamily),
    /// 主题颜色写入属性，可与透明度变量组合
    Color(&'static ColorFamily),
    /// 需要自定义逻辑的条目
    Custom(fn(&mut dyn PluginApi)),
}

/// 插件表中的一项，`key` 与被替代的核心插件同名
pub struct CorePlugin {
    pub key: &'static str,
    pub kind: PluginKind,
}

impl CorePlugin {
    pub fn register(&self, api: &mut dyn PluginApi) {
        trace!(key = self.key, "register core plugin");
        match &self.kind {
            PluginKind::Static(family) => family.register(api),
            PluginKind::Utility(family) => family.register(api),
            PluginKind::Color(family) => family.register(api),
            PluginKind::Custom(register) => register(api),
        }
    }
}

macro_rules! plugins {
    ($($key:literal => $kind:ident($target:expr)),+ $(,)?) => {
        /// 按注册顺序排列的插件表
        pub static PLUGINS: &[CorePlugin] = &[
            $(CorePlugin { key: $key, kind: PluginKind::$kind($target) }),+
        ];
    };
}

plugins! {
    "visibility" => Static(&static_utilities::VISIBILITY),
    "position" => Static(&static_utilities::POSITION),
    "isolation" => Static(&static_utilities::ISOLATION),
    "zIndex" => Utility(&utility::Z_INDEX),
    "gridColumn" => Utility(&utility::GRID_COLUMN),
    "gridColumnStart" => Utility(&utility::GRID_COLUMN_START),
    "gridColumnEnd" => Utility(&utility::GRID_COLUMN_END),
    "gridRow" => Utility(&utility::GRID_ROW),
    "gridRowStart" => Utility(&utility::GRID_ROW_START),
    "gridRowEnd" => Utility(&utility::GRID_ROW_END),
    "margin" => Utility(&utility::MARGIN),
    "boxSizing" => Static(&static_utilities::BOX_SIZING),
    "display" => Static(&static_utilities::DISPLAY),
    "aspectRatio" => Utility(&utility::ASPECT_RATIO),
    "height" => Utility(&utility::HEIGHT),
    "maxHeight" => Utility(&utility::MAX_HEIGHT),
    "minHeight" => Utility(&utility::MIN_HEIGHT),
    "width" => Utility(&utility::WIDTH),
    "minWidth" => Utility(&utility::MIN_WIDTH),
    "maxWidth" => Utility(&utility::MAX_WIDTH),
    "flexShrink" => Utility(&utility::FLEX_SHRINK),
    "flexGrow" => Utility(&utility::FLEX_GROW),
    "flexBasis" => Utility(&utility::FLEX_BASIS),
    "tableLayout" => Static(&static_utilities::TABLE_LAYOUT),
    "captionSide" => Static(&static_utilities::CAPTION_SIDE),
    "borderCollapse" => Static(&static_utilities::BORDER_COLLAPSE),
    "transformOrigin" => Utility(&utility::TRANSFORM_ORIGIN),
    "animation" => Custom(animation::register_animation),
    "touchAction" => Static(&static_utilities::TOUCH_ACTION),
    "userSelect" => Static(&static_utilities::USER_SELECT),
    "resize" => Static(&static_utilities::RESIZE),
    "scrollSnapType" => Static(&static_utilities::SCROLL_SNAP_TYPE),
    "scrollSnapAlign" => Static(&static_utilities::SCROLL_SNAP_ALIGN),
    "scrollSnapStop" => Static(&static_utilities::SCROLL_SNAP_STOP),
    "scrollMargin" => Utility(&utility::SCROLL_MARGIN),
    "scrollPadding" => Utility(&utility::SCROLL_PADDING),
    "listStylePosition" => Static(&static_utilities::LIST_STYLE_POSITION),
    "listStyleType" => Utility(&utility::LIST_STYLE_TYPE),
    "listStyleImage" => Utility(&utility::LIST_STYLE_IMAGE),
    "gridAutoColumns" => Utility(&utility::GRID_AUTO_COLUMNS),
    "gridAutoFlow" => Static(&static_utilities::GRID_AUTO_FLOW),
    "gridAutoRows" => Utility(&utility::GRID_AUTO_ROWS),
    "gridTemplateColumns" => Utility(&utility::GRID_TEMPLATE_COLUMNS),
    "gridTemplateRows" => Utility(&utility::GRID_TEMPLATE_ROWS),
    "flexDirection" => Static(&static_utilities::FLEX_DIRECTION),
    "flexWrap" => Static(&static_utilities::FLEX_WRAP),
    "placeContent" => Static(&static_utilities::PLACE_CONTENT),
    "alignContent" => Static(&static_utilities::ALIGN_CONTENT),
    "alignItems" => Static(&static_utilities::ALIGN_ITEMS),
    "justifyContent" => Static(&static_utilities::JUSTIFY_CONTENT),
    "justifyItems" => Static(&static_utilities::JUSTIFY_ITEMS),
    "gap" => Utility(&utility::GAP),
    "alignSelf" => Static(&static_utilities::ALIGN_SELF),
    "overscrollBehavior" => Static(&static_utilities::OVERSCROLL_BEHAVIOR),
    "scrollBehavior" => Static(&static_utilities::SCROLL_BEHAVIOR),
    "textOverflow" => Static(&static_utilities::TEXT_OVERFLOW),
    "whitespace" => Static(&static_utilities::WHITESPACE),
    "textWrap" => Static(&static_utilities::TEXT_WRAP),
    "wordBreak" => Static(&static_utilities::WORD_BREAK),
    "borderRadius" => Utility(&utility::BORDER_RADIUS),
    "borderWidth" => Utility(&utility::BORDER_WIDTH),
    "borderStyle" => Static(&static_utilities::BORDER_STYLE),
    "borderColor" => Color(&colors::BORDER_COLOR),
    "backgroundColor" => Color(&colors::BACKGROUND_COLOR),
    "backgroundImage" => Utility(&utility::BACKGROUND_IMAGE),
    "boxDecorationBreak" => Static(&static_utilities::BOX_DECORATION_BREAK),
    "backgroundSize" => Utility(&utility::BACKGROUND_SIZE),
    "backgroundAttachment" => Static(&static_utilities::BACKGROUND_ATTACHMENT),
    "backgroundClip" => Static(&static_utilities::BACKGROUND_CLIP),
    "backgroundPosition" => Utility(&utility::BACKGROUND_POSITION),
    "backgroundRepeat" => Static(&static_utilities::BACKGROUND_REPEAT),
    "backgroundOrigin" => Static(&static_utilities::BACKGROUND_ORIGIN),
    "strokeWidth" => Utility(&utility::STROKE_WIDTH),
    "objectFit" => Static(&static_utilities::OBJECT_FIT),
    "objectPosition" => Utility(&utility::OBJECT_POSITION),
    "padding" => Utility(&utility::PADDING),
    "textAlign" => Static(&static_utilities::TEXT_ALIGN),
    "textIndent" => Utility(&utility::TEXT_INDENT),
    "verticalAlign" => Custom(typography::register_vertical_align),
    "fontFamily" => Custom(typography::register_font_family),
    "fontSize" => Custom(typography::register_font_size),
    "fontWeight" => Utility(&utility::FONT_WEIGHT),
    "textTransform" => Static(&static_utilities::TEXT_TRANSFORM),
    "fontStyle" => Static(&static_utilities::FONT_STYLE),
    "fontVariantNumeric" => Static(&static_utilities::FONT_VARIANT_NUMERIC),
    "lineHeight" => Utility(&utility::LINE_HEIGHT),
    "letterSpacing" => Utility(&utility::LETTER_SPACING),
    "textColor" => Color(&colors::TEXT_COLOR),
    "textDecoration" => Static(&static_utilities::TEXT_DECORATION),
    "textDecorationColor" => Color(&colors::TEXT_DECORATION_COLOR),
    "textDecorationStyle" => Static(&static_utilities::TEXT_DECORATION_STYLE),
    "textDecorationThickness" => Utility(&utility::TEXT_DECORATION_THICKNESS),
    "textUnderlineOffset" => Utility(&utility::TEXT_UNDERLINE_OFFSET),
    "fontSmoothing" => Static(&static_utilities::FONT_SMOOTHING),
    "caretColor" => Color(&colors::CARET_COLOR),
    "accentColor" => Color(&colors::ACCENT_COLOR),
    "backgroundBlendMode" => Static(&static_utilities::BACKGROUND_BLEND_MODE),
    "mixBlendMode" => Static(&static_utilities::MIX_BLEND_MODE),
    "boxShadow" => Custom(effects::register_box_shadow),
    "boxShadowColor" => Custom(effects::register_box_shadow_color),
    "outlineStyle" => Static(&static_utilities::OUTLINE_STYLE),
    "outlineWidth" => Utility(&utility::OUTLINE_WIDTH),
    "outlineColor" => Color(&colors::OUTLINE_COLOR),
    "transitionDelay" => Utility(&utility::TRANSITION_DELAY),
    "transitionDuration" => Utility(&utility::TRANSITION_DURATION),
    "transitionTimingFunction" => Utility(&utility::TRANSITION_TIMING_FUNCTION),
}

/// 插件选项
///
/// ```json
/// { "disableCorePlugins": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LonghandOptions {
    /// 关闭与插件表同名的核心插件
    pub disable_core_plugins: bool,
}

impl Default for LonghandOptions {
    fn default() -> Self {
        Self {
            disable_core_plugins: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LonghandPlugin {
    options: LonghandOptions,
}

impl LonghandPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LonghandOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LonghandOptions {
        self.options
    }

    /// 插件表中所有条目的 key（按注册顺序）
    pub fn keys() -> impl Iterator<Item = &'static str> {
        PLUGINS.iter().map(|plugin| plugin.key)
    }
}

impl Plugin for LonghandPlugin {
    fn name(&self) -> &str {
        "longhand"
    }

    /// 开启 `disableCorePlugins` 时把插件表中的每个 key 设为 false
    fn config(&self) -> Option<ConfigPatch> {
        if !self.options.disable_core_plugins {
            return None;
        }

        let core_plugins: IndexMap<String, bool> = Self::keys().map(|key| (key.to_string(), false)).collect();
        Some(ConfigPatch { core_plugins })
    }

    fn register(&self, api: &mut dyn PluginApi) {
        debug!(count = PLUGINS.len(), prefix = api.prefix(), "register longhand utilities");
        for plugin in PLUGINS {
            plugin.register(api);
        }
    }
}
