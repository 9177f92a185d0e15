//! 静态工具类：类名 → 固定声明
//!
//! 类名不含 `.` 与前缀。每个表的键在编译期去重，同一族内不会出现重复类名。

use longhand_core::Style;
use longhand_host::PluginApi;
use phf::phf_ordered_map;
use tracing::trace;

pub type Declarations = &'static [(&'static str, &'static str)];
pub type ClassMap = phf::OrderedMap<&'static str, Declarations>;

/// 族内共享的默认块
#[derive(Debug)]
pub struct DefaultsBlock {
    pub group: &'static str,
    pub declarations: Declarations,
}

impl DefaultsBlock {
    /// 声明值是否读取了本默认块初始化的变量
    fn is_read_by(&self, value: &str) -> bool {
        self.declarations.iter().any(|(variable, _)| {
            value.contains(&format!("var({})", variable)) || value.contains(&format!("var({},", variable))
        })
    }
}

/// 一族静态工具类
#[derive(Debug)]
pub struct StaticFamily {
    pub classes: &'static ClassMap,
    pub defaults: Option<&'static DefaultsBlock>,
}

impl StaticFamily {
    /// 构建某个类的样式，读取默认块变量的类会引入默认块
    pub fn style(&self, declarations: Declarations) -> Style {
        let mut style = Style::from_pairs(declarations.iter().copied());
        if let Some(block) = self.defaults {
            if declarations.iter().any(|(_, value)| block.is_read_by(value)) {
                style = style.with_defaults(block.group);
            }
        }
        style
    }

    pub fn register(&self, api: &mut dyn PluginApi) {
        if let Some(block) = self.defaults {
            api.add_defaults(
                block.group,
                block
                    .declarations
                    .iter()
                    .map(|(p, v)| longhand_core::Declaration::new(*p, *v))
                    .collect(),
            );
        }

        let utilities = self
            .classes
            .entries()
            .map(|(class, declarations)| {
                trace!(class = %class, "static class");
                (class.to_string(), self.style(*declarations))
            })
            .collect();
        api.add_utilities(utilities);
    }
}

macro_rules! family {
    ($name:ident, $map:ident) => {
        pub static $name: StaticFamily = StaticFamily {
            classes: &$map,
            defaults: None,
        };
    };
    ($name:ident, $map:ident, $defaults:ident) => {
        pub static $name: StaticFamily = StaticFamily {
            classes: &$map,
            defaults: Some(&$defaults),
        };
    };
}

static VISIBILITY_MAP: ClassMap = phf_ordered_map! {
    "visibility-visible" => &[("visibility", "visible")],
    "visibility-hidden" => &[("visibility", "hidden")],
    "visibility-collapse" => &[("visibility", "collapse")],
};
family!(VISIBILITY, VISIBILITY_MAP);

static POSITION_MAP: ClassMap = phf_ordered_map! {
    "position-static" => &[("position", "static")],
    "position-fixed" => &[("position", "fixed")],
    "position-absolute" => &[("position", "absolute")],
    "position-relative" => &[("position", "relative")],
    "position-sticky" => &[("position", "sticky")],
};
family!(POSITION, POSITION_MAP);

static ISOLATION_MAP: ClassMap = phf_ordered_map! {
    "isolation-isolate" => &[("isolation", "isolate")],
    "isolation-auto" => &[("isolation", "auto")],
};
family!(ISOLATION, ISOLATION_MAP);

static BOX_SIZING_MAP: ClassMap = phf_ordered_map! {
    "box-sizing-border-box" => &[("box-sizing", "border-box")],
    "box-sizing-content-box" => &[("box-sizing", "content-box")],
};
family!(BOX_SIZING, BOX_SIZING_MAP);

static DISPLAY_MAP: ClassMap = phf_ordered_map! {
    "display-block" => &[("display", "block")],
    "display-inline-block" => &[("display", "inline-block")],
    "display-inline" => &[("display", "inline")],
    "display-flex" => &[("display", "flex")],
    "display-inline-flex" => &[("display", "inline-flex")],
    "display-table" => &[("display", "table")],
    "display-inline-table" => &[("display", "inline-table")],
    "display-table-caption" => &[("display", "table-caption")],
    "display-table-cell" => &[("display", "table-cell")],
    "display-table-column" => &[("display", "table-column")],
    "display-table-column-group" => &[("display", "table-column-group")],
    "display-table-footer-group" => &[("display", "table-footer-group")],
    "display-table-header-group" => &[("display", "table-header-group")],
    "display-table-row-group" => &[("display", "table-row-group")],
    "display-table-row" => &[("display", "table-row")],
    "display-flow-root" => &[("display", "flow-root")],
    "display-grid" => &[("display", "grid")],
    "display-inline-grid" => &[("display", "inline-grid")],
    "display-contents" => &[("display", "contents")],
    "display-list-item" => &[("display", "list-item")],
    "display-none" => &[("display", "none")],
};
family!(DISPLAY, DISPLAY_MAP);

static TABLE_LAYOUT_MAP: ClassMap = phf_ordered_map! {
    "table-layout-auto" => &[("table-layout", "auto")],
    "table-layout-fixed" => &[("table-layout", "fixed")],
};
family!(TABLE_LAYOUT, TABLE_LAYOUT_MAP);

static CAPTION_SIDE_MAP: ClassMap = phf_ordered_map! {
    "caption-side-top" => &[("caption-side", "top")],
    "caption-side-bottom" => &[("caption-side", "bottom")],
};
family!(CAPTION_SIDE, CAPTION_SIDE_MAP);

static BORDER_COLLAPSE_MAP: ClassMap = phf_ordered_map! {
    "border-collapse-collapse" => &[("border-collapse", "collapse")],
    "border-collapse-separate" => &[("border-collapse", "separate")],
};
family!(BORDER_COLLAPSE, BORDER_COLLAPSE_MAP);

static TOUCH_ACTION_DEFAULTS: DefaultsBlock = DefaultsBlock {
    group: "touch-action",
    declarations: &[("--tw-pan-x", " "), ("--tw-pan-y", " "), ("--tw-pinch-zoom", " ")],
};

const TOUCH_ACTION_VALUE: &str = "var(--tw-pan-x) var(--tw-pan-y) var(--tw-pinch-zoom)";

static TOUCH_ACTION_MAP: ClassMap = phf_ordered_map! {
    "touch-action-auto" => &[("touch-action", "auto")],
    "touch-action-none" => &[("touch-action", "none")],
    "touch-action-pan-x" => &[("--tw-pan-x", "pan-x"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pan-left" => &[("--tw-pan-x", "pan-left"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pan-right" => &[("--tw-pan-x", "pan-right"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pan-y" => &[("--tw-pan-y", "pan-y"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pan-up" => &[("--tw-pan-y", "pan-up"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pan-down" => &[("--tw-pan-y", "pan-down"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-pinch-zoom" => &[("--tw-pinch-zoom", "pinch-zoom"), ("touch-action", TOUCH_ACTION_VALUE)],
    "touch-action-manipulation" => &[("touch-action", "manipulation")],
};
family!(TOUCH_ACTION, TOUCH_ACTION_MAP, TOUCH_ACTION_DEFAULTS);

static USER_SELECT_MAP: ClassMap = phf_ordered_map! {
    "user-select-none" => &[("user-select", "none")],
    "user-select-text" => &[("user-select", "text")],
    "user-select-all" => &[("user-select", "all")],
    "user-select-auto" => &[("user-select", "auto")],
};
family!(USER_SELECT, USER_SELECT_MAP);

static RESIZE_MAP: ClassMap = phf_ordered_map! {
    "resize-none" => &[("resize", "none")],
    "resize-vertical" => &[("resize", "vertical")],
    "resize-horizontal" => &[("resize", "horizontal")],
    "resize-both" => &[("resize", "both")],
};
family!(RESIZE, RESIZE_MAP);

static SCROLL_SNAP_TYPE_DEFAULTS: DefaultsBlock = DefaultsBlock {
    group: "scroll-snap-type",
    declarations: &[("--tw-scroll-snap-strictness", "proximity")],
};

static SCROLL_SNAP_TYPE_MAP: ClassMap = phf_ordered_map! {
    "scroll-snap-type-none" => &[("scroll-snap-type", "none")],
    "scroll-snap-type-x" => &[("scroll-snap-type", "x var(--tw-scroll-snap-strictness)")],
    "scroll-snap-type-y" => &[("scroll-snap-type", "y var(--tw-scroll-snap-strictness)")],
    "scroll-snap-type-both" => &[("scroll-snap-type", "both var(--tw-scroll-snap-strictness)")],
    "scroll-snap-type-mandatory" => &[("--tw-scroll-snap-strictness", "mandatory")],
    "scroll-snap-type-proximity" => &[("--tw-scroll-snap-strictness", "proximity")],
};
family!(SCROLL_SNAP_TYPE, SCROLL_SNAP_TYPE_MAP, SCROLL_SNAP_TYPE_DEFAULTS);

static SCROLL_SNAP_ALIGN_MAP: ClassMap = phf_ordered_map! {
    "scroll-snap-align-start" => &[("scroll-snap-align", "start")],
    "scroll-snap-align-end" => &[("scroll-snap-align", "end")],
    "scroll-snap-align-center" => &[("scroll-snap-align", "center")],
    "scroll-snap-align-none" => &[("scroll-snap-align", "none")],
};
family!(SCROLL_SNAP_ALIGN, SCROLL_SNAP_ALIGN_MAP);

static SCROLL_SNAP_STOP_MAP: ClassMap = phf_ordered_map! {
    "scroll-snap-stop-normal" => &[("scroll-snap-stop", "normal")],
    "scroll-snap-stop-always" => &[("scroll-snap-stop", "always")],
};
family!(SCROLL_SNAP_STOP, SCROLL_SNAP_STOP_MAP);

static LIST_STYLE_POSITION_MAP: ClassMap = phf_ordered_map! {
    "list-style-position-inside" => &[("list-style-position", "inside")],
    "list-style-position-outside" => &[("list-style-position", "outside")],
};
family!(LIST_STYLE_POSITION, LIST_STYLE_POSITION_MAP);

static GRID_AUTO_FLOW_MAP: ClassMap = phf_ordered_map! {
    "grid-auto-flow-row" => &[("grid-auto-flow", "row")],
    "grid-auto-flow-column" => &[("grid-auto-flow", "column")],
    "grid-auto-flow-dense" => &[("grid-auto-flow", "dense")],
    "grid-auto-flow-row-dense" => &[("grid-auto-flow", "row dense")],
    "grid-auto-flow-column-dense" => &[("grid-auto-flow", "column dense")],
};
family!(GRID_AUTO_FLOW, GRID_AUTO_FLOW_MAP);

static FLEX_DIRECTION_MAP: ClassMap = phf_ordered_map! {
    "flex-direction-row" => &[("flex-direction", "row")],
    "flex-direction-row-reverse" => &[("flex-direction", "row-reverse")],
    "flex-direction-column" => &[("flex-direction", "column")],
    "flex-direction-column-reverse" => &[("flex-direction", "column-reverse")],
};
family!(FLEX_DIRECTION, FLEX_DIRECTION_MAP);

static FLEX_WRAP_MAP: ClassMap = phf_ordered_map! {
    "flex-wrap-wrap" => &[("flex-wrap", "wrap")],
    "flex-wrap-wrap-reverse" => &[("flex-wrap", "wrap-reverse")],
    "flex-wrap-nowrap" => &[("flex-wrap", "nowrap")],
};
family!(FLEX_WRAP, FLEX_WRAP_MAP);

static PLACE_CONTENT_MAP: ClassMap = phf_ordered_map! {
    "place-content-center" => &[("place-content", "center")],
    "place-content-start" => &[("place-content", "start")],
    "place-content-end" => &[("place-content", "end")],
    "place-content-space-between" => &[("place-content", "space-between")],
    "place-content-space-around" => &[("place-content", "space-around")],
    "place-content-space-evenly" => &[("place-content", "space-evenly")],
    "place-content-baseline" => &[("place-content", "baseline")],
    "place-content-stretch" => &[("place-content", "stretch")],
};
family!(PLACE_CONTENT, PLACE_CONTENT_MAP);

static ALIGN_CONTENT_MAP: ClassMap = phf_ordered_map! {
    "align-content-normal" => &[("align-content", "normal")],
    "align-content-center" => &[("align-content", "center")],
    "align-content-start" => &[("align-content", "start")],
    "align-content-end" => &[("align-content", "end")],
    "align-content-space-between" => &[("align-content", "space-between")],
    "align-content-space-around" => &[("align-content", "space-around")],
    "align-content-space-evenly" => &[("align-content", "space-evenly")],
    "align-content-baseline" => &[("align-content", "baseline")],
    "align-content-stretch" => &[("align-content", "stretch")],
};
family!(ALIGN_CONTENT, ALIGN_CONTENT_MAP);

static ALIGN_ITEMS_MAP: ClassMap = phf_ordered_map! {
    "align-items-flex-start" => &[("align-items", "flex-start")],
    "align-items-flex-end" => &[("align-items", "flex-end")],
    "align-items-center" => &[("align-items", "center")],
    "align-items-baseline" => &[("align-items", "baseline")],
    "align-items-stretch" => &[("align-items", "stretch")],
};
family!(ALIGN_ITEMS, ALIGN_ITEMS_MAP);

static JUSTIFY_CONTENT_MAP: ClassMap = phf_ordered_map! {
    "justify-content-normal" => &[("justify-content", "normal")],
    "justify-content-flex-start" => &[("justify-content", "flex-start")],
    "justify-content-flex-end" => &[("justify-content", "flex-end")],
    "justify-content-center" => &[("justify-content", "center")],
    "justify-content-space-between" => &[("justify-content", "space-between")],
    "justify-content-space-around" => &[("justify-content", "space-around")],
    "justify-content-space-evenly" => &[("justify-content", "space-evenly")],
    "justify-content-stretch" => &[("justify-content", "stretch")],
};
family!(JUSTIFY_CONTENT, JUSTIFY_CONTENT_MAP);

static JUSTIFY_ITEMS_MAP: ClassMap = phf_ordered_map! {
    "justify-items-start" => &[("justify-items", "start")],
    "justify-items-end" => &[("justify-items", "end")],
    "justify-items-center" => &[("justify-items", "center")],
    "justify-items-stretch" => &[("justify-items", "stretch")],
};
family!(JUSTIFY_ITEMS, JUSTIFY_ITEMS_MAP);

static ALIGN_SELF_MAP: ClassMap = phf_ordered_map! {
    "align-self-auto" => &[("align-self", "auto")],
    "align-self-flex-start" => &[("align-self", "flex-start")],
    "align-self-flex-end" => &[("align-self", "flex-end")],
    "align-self-center" => &[("align-self", "center")],
    "align-self-stretch" => &[("align-self", "stretch")],
    "align-self-baseline" => &[("align-self", "baseline")],
};
family!(ALIGN_SELF, ALIGN_SELF_MAP);

static OVERSCROLL_BEHAVIOR_MAP: ClassMap = phf_ordered_map! {
    "overscroll-behavior-auto" => &[("overscroll-behavior", "auto")],
    "overscroll-behavior-contain" => &[("overscroll-behavior", "contain")],
    "overscroll-behavior-none" => &[("overscroll-behavior", "none")],
    "overscroll-behavior-y-auto" => &[("overscroll-behavior-y", "auto")],
    "overscroll-behavior-y-contain" => &[("overscroll-behavior-y", "contain")],
    "overscroll-behavior-y-none" => &[("overscroll-behavior-y", "none")],
    "overscroll-behavior-x-auto" => &[("overscroll-behavior-x", "auto")],
    "overscroll-behavior-x-contain" => &[("overscroll-behavior-x", "contain")],
    "overscroll-behavior-x-none" => &[("overscroll-behavior-x", "none")],
};
family!(OVERSCROLL_BEHAVIOR, OVERSCROLL_BEHAVIOR_MAP);

static SCROLL_BEHAVIOR_MAP: ClassMap = phf_ordered_map! {
    "scroll-behavior-auto" => &[("scroll-behavior", "auto")],
    "scroll-behavior-smooth" => &[("scroll-behavior", "smooth")],
};
family!(SCROLL_BEHAVIOR, SCROLL_BEHAVIOR_MAP);

static TEXT_OVERFLOW_MAP: ClassMap = phf_ordered_map! {
    "truncate" => &[("overflow", "hidden"), ("text-overflow", "ellipsis"), ("white-space", "nowrap")],
    "text-overflow-ellipsis" => &[("text-overflow", "ellipsis")],
    "text-overflow-clip" => &[("text-overflow", "clip")],
};
family!(TEXT_OVERFLOW, TEXT_OVERFLOW_MAP);

static WHITESPACE_MAP: ClassMap = phf_ordered_map! {
    "white-space-normal" => &[("white-space", "normal")],
    "white-space-nowrap" => &[("white-space", "nowrap")],
    "white-space-pre" => &[("white-space", "pre")],
    "white-space-pre-line" => &[("white-space", "pre-line")],
    "white-space-pre-wrap" => &[("white-space", "pre-wrap")],
    "white-space-break-spaces" => &[("white-space", "break-spaces")],
};
family!(WHITESPACE, WHITESPACE_MAP);

static TEXT_WRAP_MAP: ClassMap = phf_ordered_map! {
    "text-wrap-wrap" => &[("text-wrap", "wrap")],
    "text-wrap-nowrap" => &[("text-wrap", "nowrap")],
    "text-wrap-balance" => &[("text-wrap", "balance")],
    "text-wrap-pretty" => &[("text-wrap", "pretty")],
};
family!(TEXT_WRAP, TEXT_WRAP_MAP);

// `work-break-*` 的拼写是既有类名，保持不变
static WORD_BREAK_MAP: ClassMap = phf_ordered_map! {
    "break-normal" => &[("overflow-wrap", "normal"), ("word-break", "normal")],
    "overflow-wrap-normal" => &[("overflow-wrap", "normal")],
    "overflow-wrap-break-word" => &[("overflow-wrap", "break-word")],
    "word-break-normal" => &[("word-break", "normal")],
    "work-break-break-all" => &[("word-break", "break-all")],
    "work-break-keep-all" => &[("word-break", "keep-all")],
};
family!(WORD_BREAK, WORD_BREAK_MAP);

static BORDER_STYLE_MAP: ClassMap = phf_ordered_map! {
    "border-style-solid" => &[("border-style", "solid")],
    "border-style-dashed" => &[("border-style", "dashed")],
    "border-style-dotted" => &[("border-style", "dotted")],
    "border-style-double" => &[("border-style", "double")],
    "border-style-hidden" => &[("border-style", "hidden")],
    "border-style-none" => &[("border-style", "none")],
};
family!(BORDER_STYLE, BORDER_STYLE_MAP);

static BOX_DECORATION_BREAK_MAP: ClassMap = phf_ordered_map! {
    "box-decoration-slice" => &[("box-decoration-break", "slice")],
    "box-decoration-clone" => &[("box-decoration-break", "clone")],
};
family!(BOX_DECORATION_BREAK, BOX_DECORATION_BREAK_MAP);

static BACKGROUND_ATTACHMENT_MAP: ClassMap = phf_ordered_map! {
    "background-attachment-fixed" => &[("background-attachment", "fixed")],
    "background-attachment-local" => &[("background-attachment", "local")],
    "background-attachment-scroll" => &[("background-attachment", "scroll")],
};
family!(BACKGROUND_ATTACHMENT, BACKGROUND_ATTACHMENT_MAP);

static BACKGROUND_CLIP_MAP: ClassMap = phf_ordered_map! {
    "background-clip-border-box" => &[("background-clip", "border-box")],
    "background-clip-padding-box" => &[("background-clip", "padding-box")],
    "background-clip-content-box" => &[("background-clip", "content-box")],
    "background-clip-text" => &[("background-clip", "text")],
};
family!(BACKGROUND_CLIP, BACKGROUND_CLIP_MAP);

static BACKGROUND_REPEAT_MAP: ClassMap = phf_ordered_map! {
    "background-repeat-repeat" => &[("background-repeat", "repeat")],
    "background-repeat-no-repeat" => &[("background-repeat", "no-repeat")],
    "background-repeat-repeat-x" => &[("background-repeat", "repeat-x")],
    "background-repeat-repeat-y" => &[("background-repeat", "repeat-y")],
    "background-repeat-round" => &[("background-repeat", "round")],
    "background-repeat-space" => &[("background-repeat", "space")],
};
family!(BACKGROUND_REPEAT, BACKGROUND_REPEAT_MAP);

static BACKGROUND_ORIGIN_MAP: ClassMap = phf_ordered_map! {
    "background-origin-border-box" => &[("background-origin", "border-box")],
    "background-origin-padding-box" => &[("background-origin", "padding-box")],
    "background-origin-content-box" => &[("background-origin", "content-box")],
};
family!(BACKGROUND_ORIGIN, BACKGROUND_ORIGIN_MAP);

static OBJECT_FIT_MAP: ClassMap = phf_ordered_map! {
    "object-fit-contain" => &[("object-fit", "contain")],
    "object-fit-cover" => &[("object-fit", "cover")],
    "object-fit-fill" => &[("object-fit", "fill")],
    "object-fit-none" => &[("object-fit", "none")],
    "object-fit-scale-down" => &[("object-fit", "scale-down")],
};
family!(OBJECT_FIT, OBJECT_FIT_MAP);

static TEXT_ALIGN_MAP: ClassMap = phf_ordered_map! {
    "text-align-left" => &[("text-align", "left")],
    "text-align-center" => &[("text-align", "center")],
    "text-align-right" => &[("text-align", "right")],
    "text-align-justify" => &[("text-align", "justify")],
    "text-align-start" => &[("text-align", "start")],
    "text-align-end" => &[("text-align", "end")],
};
family!(TEXT_ALIGN, TEXT_ALIGN_MAP);

static VERTICAL_ALIGN_MAP: ClassMap = phf_ordered_map! {
    "vertical-align-baseline" => &[("vertical-align", "baseline")],
    "vertical-align-top" => &[("vertical-align", "top")],
    "vertical-align-middle" => &[("vertical-align", "middle")],
    "vertical-align-bottom" => &[("vertical-align", "bottom")],
    "vertical-align-text-top" => &[("vertical-align", "text-top")],
    "vertical-align-text-bottom" => &[("vertical-align", "text-bottom")],
    "vertical-align-sub" => &[("vertical-align", "sub")],
    "vertical-align-super" => &[("vertical-align", "super")],
};
family!(VERTICAL_ALIGN, VERTICAL_ALIGN_MAP);

static TEXT_TRANSFORM_MAP: ClassMap = phf_ordered_map! {
    "text-transform-uppercase" => &[("text-transform", "uppercase")],
    "text-transform-lowercase" => &[("text-transform", "lowercase")],
    "text-transform-capitalize" => &[("text-transform", "capitalize")],
    "text-transform-none" => &[("text-transform", "none")],
};
family!(TEXT_TRANSFORM, TEXT_TRANSFORM_MAP);

static FONT_STYLE_MAP: ClassMap = phf_ordered_map! {
    "font-style-italic" => &[("font-style", "italic")],
    "font-style-normal" => &[("font-style", "normal")],
};
family!(FONT_STYLE, FONT_STYLE_MAP);

static FONT_VARIANT_NUMERIC_DEFAULTS: DefaultsBlock = DefaultsBlock {
    group: "font-variant-numeric",
    declarations: &[
        ("--tw-ordinal", " "),
        ("--tw-slashed-zero", " "),
        ("--tw-numeric-figure", " "),
        ("--tw-numeric-spacing", " "),
        ("--tw-numeric-fraction", " "),
    ],
};

const FONT_VARIANT_NUMERIC_VALUE: &str = "var(--tw-ordinal) var(--tw-slashed-zero) var(--tw-numeric-figure) var(--tw-numeric-spacing) var(--tw-numeric-fraction)";

static FONT_VARIANT_NUMERIC_MAP: ClassMap = phf_ordered_map! {
    "font-variant-numeric-normal" => &[("font-variant-numeric", "normal")],
    "font-variant-numeric-ordinal" => &[("--tw-ordinal", "ordinal"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-slashed-zero" => &[("--tw-slashed-zero", "slashed-zero"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-lining-nums" => &[("--tw-numeric-figure", "lining-nums"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-oldstyle-nums" => &[("--tw-numeric-figure", "oldstyle-nums"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-proportional-nums" => &[("--tw-numeric-spacing", "proportional-nums"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-tabular-nums" => &[("--tw-numeric-spacing", "tabular-nums"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-diagonal-fractions" => &[("--tw-numeric-fraction", "diagonal-fractions"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
    "font-variant-numeric-stacked-fractions" => &[("--tw-numeric-fraction", "stacked-fractions"), ("font-variant-numeric", FONT_VARIANT_NUMERIC_VALUE)],
};
family!(FONT_VARIANT_NUMERIC, FONT_VARIANT_NUMERIC_MAP, FONT_VARIANT_NUMERIC_DEFAULTS);

static TEXT_DECORATION_MAP: ClassMap = phf_ordered_map! {
    "text-decoration-line-underline" => &[("text-decoration-line", "underline")],
    "text-decoration-line-overline" => &[("text-decoration-line", "overline")],
    "text-decoration-line-line-through" => &[("text-decoration-line", "line-through")],
    "text-decoration-line-none" => &[("text-decoration-line", "none")],
};
family!(TEXT_DECORATION, TEXT_DECORATION_MAP);

static TEXT_DECORATION_STYLE_MAP: ClassMap = phf_ordered_map! {
    "text-decoration-solid" => &[("text-decoration-style", "solid")],
    "text-decoration-double" => &[("text-decoration-style", "double")],
    "text-decoration-dotted" => &[("text-decoration-style", "dotted")],
    "text-decoration-dashed" => &[("text-decoration-style", "dashed")],
    "text-decoration-wavy" => &[("text-decoration-style", "wavy")],
};
family!(TEXT_DECORATION_STYLE, TEXT_DECORATION_STYLE_MAP);

static FONT_SMOOTHING_MAP: ClassMap = phf_ordered_map! {
    "font-smoothing-antialiased" => &[("-webkit-font-smoothing", "antialiased"), ("-moz-osx-font-smoothing", "grayscale")],
    "font-smoothing-auto" => &[("-webkit-font-smoothing", "auto"), ("-moz-osx-font-smoothing", "auto")],
};
family!(FONT_SMOOTHING, FONT_SMOOTHING_MAP);

static BACKGROUND_BLEND_MODE_MAP: ClassMap = phf_ordered_map! {
    "background-blend-mode-normal" => &[("background-blend-mode", "normal")],
    "background-blend-mode-multiply" => &[("background-blend-mode", "multiply")],
    "background-blend-mode-screen" => &[("background-blend-mode", "screen")],
    "background-blend-mode-overlay" => &[("background-blend-mode", "overlay")],
    "background-blend-mode-darken" => &[("background-blend-mode", "darken")],
    "background-blend-mode-lighten" => &[("background-blend-mode", "lighten")],
    "background-blend-mode-color-dodge" => &[("background-blend-mode", "color-dodge")],
    "background-blend-mode-color-burn" => &[("background-blend-mode", "color-burn")],
    "background-blend-mode-hard-light" => &[("background-blend-mode", "hard-light")],
    "background-blend-mode-soft-light" => &[("background-blend-mode", "soft-light")],
    "background-blend-mode-difference" => &[("background-blend-mode", "difference")],
    "background-blend-mode-exclusion" => &[("background-blend-mode", "exclusion")],
    "background-blend-mode-hue" => &[("background-blend-mode", "hue")],
    "background-blend-mode-saturation" => &[("background-blend-mode", "saturation")],
    "background-blend-mode-color" => &[("background-blend-mode", "color")],
    "background-blend-mode-luminosity" => &[("background-blend-mode", "luminosity")],
};
family!(BACKGROUND_BLEND_MODE, BACKGROUND_BLEND_MODE_MAP);

static MIX_BLEND_MODE_MAP: ClassMap = phf_ordered_map! {
    "mix-blend-mode-normal" => &[("mix-blend-mode", "normal")],
    "mix-blend-mode-multiply" => &[("mix-blend-mode", "multiply")],
    "mix-blend-mode-screen" => &[("mix-blend-mode", "screen")],
    "mix-blend-mode-overlay" => &[("mix-blend-mode", "overlay")],
    "mix-blend-mode-darken" => &[("mix-blend-mode", "darken")],
    "mix-blend-mode-lighten" => &[("mix-blend-mode", "lighten")],
    "mix-blend-mode-color-dodge" => &[("mix-blend-mode", "color-dodge")],
    "mix-blend-mode-color-burn" => &[("mix-blend-mode", "color-burn")],
    "mix-blend-mode-hard-light" => &[("mix-blend-mode", "hard-light")],
    "mix-blend-mode-soft-light" => &[("mix-blend-mode", "soft-light")],
    "mix-blend-mode-difference" => &[("mix-blend-mode", "difference")],
    "mix-blend-mode-exclusion" => &[("mix-blend-mode", "exclusion")],
    "mix-blend-mode-hue" => &[("mix-blend-mode", "hue")],
    "mix-blend-mode-saturation" => &[("mix-blend-mode", "saturation")],
    "mix-blend-mode-color" => &[("mix-blend-mode", "color")],
    "mix-blend-mode-luminosity" => &[("mix-blend-mode", "luminosity")],
    "mix-blend-mode-plus-lighter" => &[("mix-blend-mode", "plus-lighter")],
};
family!(MIX_BLEND_MODE, MIX_BLEND_MODE_MAP);

static OUTLINE_STYLE_MAP: ClassMap = phf_ordered_map! {
    "outline-none" => &[("outline", "2px solid transparent"), ("outline-offset", "2px")],
    "outline-style-solid" => &[("outline-style", "solid")],
    "outline-style-dashed" => &[("outline-style", "dashed")],
    "outline-style-dotted" => &[("outline-style", "dotted")],
    "outline-style-double" => &[("outline-style", "double")],
};
family!(OUTLINE_STYLE, OUTLINE_STYLE_MAP);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_pulled_in_by_variable_readers() {
        let style = TOUCH_ACTION.style(TOUCH_ACTION_MAP["touch-action-pan-x"]);
        assert_eq!(style.defaults, vec!["touch-action"]);
        assert_eq!(style.get("--tw-pan-x"), Some("pan-x"));

        let style = TOUCH_ACTION.style(TOUCH_ACTION_MAP["touch-action-auto"]);
        assert!(style.defaults.is_empty());
    }

    #[test]
    fn test_scroll_snap_strictness_setter_has_no_defaults() {
        let style = SCROLL_SNAP_TYPE.style(SCROLL_SNAP_TYPE_MAP["scroll-snap-type-mandatory"]);
        assert!(style.defaults.is_empty());

        let style = SCROLL_SNAP_TYPE.style(SCROLL_SNAP_TYPE_MAP["scroll-snap-type-both"]);
        assert_eq!(style.defaults, vec!["scroll-snap-type"]);
    }

    #[test]
    fn test_font_variant_numeric() {
        for (class, declarations) in FONT_VARIANT_NUMERIC_MAP.entries() {
            let style = FONT_VARIANT_NUMERIC.style(*declarations);
            let expects_defaults = *class != "font-variant-numeric-normal";
            assert_eq!(!style.defaults.is_empty(), expects_defaults, "{}", class);
        }
    }

    #[test]
    fn test_quirky_class_names_are_kept() {
        assert!(WORD_BREAK_MAP.contains_key("work-break-break-all"));
        assert!(TEXT_OVERFLOW_MAP.contains_key("truncate"));
        assert_eq!(
            GRID_AUTO_FLOW_MAP["grid-auto-flow-row-dense"],
            &[("grid-auto-flow", "row dense")]
        );
    }
}
