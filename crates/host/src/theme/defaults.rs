//! 内置默认主题（与 Tailwind v3 默认主题的取值一致，调色板只保留常用色系）
//!
//! 基础分区直接由静态表构建；派生分区（margin、width、各颜色分区等）
//! 在 [`super::Theme::resolve`] 中基于已解析的基础分区计算。

use super::value::ThemeValue;
use super::Section;
use indexmap::IndexMap;
use phf::phf_ordered_map;

static SPACING: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "px" => "1px",
    "0" => "0px",
    "0.5" => "0.125rem",
    "1" => "0.25rem",
    "1.5" => "0.375rem",
    "2" => "0.5rem",
    "2.5" => "0.625rem",
    "3" => "0.75rem",
    "3.5" => "0.875rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
    "11" => "2.75rem",
    "12" => "3rem",
    "14" => "3.5rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "28" => "7rem",
    "32" => "8rem",
    "36" => "9rem",
    "40" => "10rem",
    "44" => "11rem",
    "48" => "12rem",
    "52" => "13rem",
    "56" => "14rem",
    "60" => "15rem",
    "64" => "16rem",
    "72" => "18rem",
    "80" => "20rem",
    "96" => "24rem",
};

static BASE_COLORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "inherit" => "inherit",
    "current" => "currentColor",
    "transparent" => "transparent",
    "black" => "#000",
    "white" => "#fff",
};

static GRAY: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#f9fafb",
    "100" => "#f3f4f6",
    "200" => "#e5e7eb",
    "300" => "#d1d5db",
    "400" => "#9ca3af",
    "500" => "#6b7280",
    "600" => "#4b5563",
    "700" => "#374151",
    "800" => "#1f2937",
    "900" => "#111827",
    "950" => "#030712",
};

static RED: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#fef2f2",
    "100" => "#fee2e2",
    "200" => "#fecaca",
    "300" => "#fca5a5",
    "400" => "#f87171",
    "500" => "#ef4444",
    "600" => "#dc2626",
    "700" => "#b91c1c",
    "800" => "#991b1b",
    "900" => "#7f1d1d",
    "950" => "#450a0a",
};

static AMBER: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#fffbeb",
    "100" => "#fef3c7",
    "200" => "#fde68a",
    "300" => "#fcd34d",
    "400" => "#fbbf24",
    "500" => "#f59e0b",
    "600" => "#d97706",
    "700" => "#b45309",
    "800" => "#92400e",
    "900" => "#78350f",
    "950" => "#451a03",
};

static GREEN: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#f0fdf4",
    "100" => "#dcfce7",
    "200" => "#bbf7d0",
    "300" => "#86efac",
    "400" => "#4ade80",
    "500" => "#22c55e",
    "600" => "#16a34a",
    "700" => "#15803d",
    "800" => "#166534",
    "900" => "#14532d",
    "950" => "#052e16",
};

static BLUE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#eff6ff",
    "100" => "#dbeafe",
    "200" => "#bfdbfe",
    "300" => "#93c5fd",
    "400" => "#60a5fa",
    "500" => "#3b82f6",
    "600" => "#2563eb",
    "700" => "#1d4ed8",
    "800" => "#1e40af",
    "900" => "#1e3a8a",
    "950" => "#172554",
};

static INDIGO: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "50" => "#eef2ff",
    "100" => "#e0e7ff",
    "200" => "#c7d2fe",
    "300" => "#a5b4fc",
    "400" => "#818cf8",
    "500" => "#6366f1",
    "600" => "#4f46e5",
    "700" => "#4338ca",
    "800" => "#3730a3",
    "900" => "#312e81",
    "950" => "#1e1b4b",
};

static PALETTES: &[(&str, &phf::OrderedMap<&'static str, &'static str>)] = &[
    ("gray", &GRAY),
    ("red", &RED),
    ("amber", &AMBER),
    ("green", &GREEN),
    ("blue", &BLUE),
    ("indigo", &INDIGO),
];

static Z_INDEX: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "10" => "10",
    "20" => "20",
    "30" => "30",
    "40" => "40",
    "50" => "50",
    "auto" => "auto",
};

static GRID_SPAN: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "span-1" => "span 1 / span 1",
    "span-2" => "span 2 / span 2",
    "span-3" => "span 3 / span 3",
    "span-4" => "span 4 / span 4",
    "span-5" => "span 5 / span 5",
    "span-6" => "span 6 / span 6",
    "span-7" => "span 7 / span 7",
    "span-8" => "span 8 / span 8",
    "span-9" => "span 9 / span 9",
    "span-10" => "span 10 / span 10",
    "span-11" => "span 11 / span 11",
    "span-12" => "span 12 / span 12",
    "span-full" => "1 / -1",
};

static GRID_LINE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "1" => "1",
    "2" => "2",
    "3" => "3",
    "4" => "4",
    "5" => "5",
    "6" => "6",
    "7" => "7",
    "8" => "8",
    "9" => "9",
    "10" => "10",
    "11" => "11",
    "12" => "12",
    "13" => "13",
};

static ASPECT_RATIO: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "square" => "1 / 1",
    "video" => "16 / 9",
};

static FLEX_FACTOR: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "DEFAULT" => "1",
};

static TRANSFORM_ORIGIN: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "center" => "center",
    "top" => "top",
    "top-right" => "top right",
    "right" => "right",
    "bottom-right" => "bottom right",
    "bottom" => "bottom",
    "bottom-left" => "bottom left",
    "left" => "left",
    "top-left" => "top left",
};

static ANIMATION: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
    "spin" => "spin 1s linear infinite",
    "ping" => "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
    "pulse" => "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
    "bounce" => "bounce 1s infinite",
};

static LIST_STYLE_TYPE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
    "disc" => "disc",
    "decimal" => "decimal",
};

static LIST_STYLE_IMAGE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
};

static GRID_AUTO: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "min" => "min-content",
    "max" => "max-content",
    "fr" => "minmax(0, 1fr)",
};

static GRID_TEMPLATE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
    "subgrid" => "subgrid",
    "1" => "repeat(1, minmax(0, 1fr))",
    "2" => "repeat(2, minmax(0, 1fr))",
    "3" => "repeat(3, minmax(0, 1fr))",
    "4" => "repeat(4, minmax(0, 1fr))",
    "5" => "repeat(5, minmax(0, 1fr))",
    "6" => "repeat(6, minmax(0, 1fr))",
    "7" => "repeat(7, minmax(0, 1fr))",
    "8" => "repeat(8, minmax(0, 1fr))",
    "9" => "repeat(9, minmax(0, 1fr))",
    "10" => "repeat(10, minmax(0, 1fr))",
    "11" => "repeat(11, minmax(0, 1fr))",
    "12" => "repeat(12, minmax(0, 1fr))",
};

static BORDER_RADIUS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "0px",
    "sm" => "0.125rem",
    "DEFAULT" => "0.25rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "xl" => "0.75rem",
    "2xl" => "1rem",
    "3xl" => "1.5rem",
    "full" => "9999px",
};

static BORDER_WIDTH: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "DEFAULT" => "1px",
    "0" => "0px",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

static BACKGROUND_IMAGE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
    "gradient-to-t" => "linear-gradient(to top, var(--tw-gradient-stops))",
    "gradient-to-tr" => "linear-gradient(to top right, var(--tw-gradient-stops))",
    "gradient-to-r" => "linear-gradient(to right, var(--tw-gradient-stops))",
    "gradient-to-br" => "linear-gradient(to bottom right, var(--tw-gradient-stops))",
    "gradient-to-b" => "linear-gradient(to bottom, var(--tw-gradient-stops))",
    "gradient-to-bl" => "linear-gradient(to bottom left, var(--tw-gradient-stops))",
    "gradient-to-l" => "linear-gradient(to left, var(--tw-gradient-stops))",
    "gradient-to-tl" => "linear-gradient(to top left, var(--tw-gradient-stops))",
};

static BACKGROUND_SIZE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "cover" => "cover",
    "contain" => "contain",
};

static POSITION: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "bottom" => "bottom",
    "center" => "center",
    "left" => "left",
    "left-bottom" => "left bottom",
    "left-top" => "left top",
    "right" => "right",
    "right-bottom" => "right bottom",
    "right-top" => "right top",
    "top" => "top",
};

static STROKE_WIDTH: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "1" => "1",
    "2" => "2",
};

static FONT_FAMILY: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "\"Apple Color Emoji\"",
            "\"Segoe UI Emoji\"",
            "\"Segoe UI Symbol\"",
            "\"Noto Color Emoji\"",
        ],
    ),
    (
        "serif",
        &["ui-serif", "Georgia", "Cambria", "\"Times New Roman\"", "Times", "serif"],
    ),
    (
        "mono",
        &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "\"Liberation Mono\"",
            "\"Courier New\"",
            "monospace",
        ],
    ),
];

/// `key => (font-size, line-height)`
static FONT_SIZE: phf::OrderedMap<&'static str, (&'static str, &'static str)> = phf_ordered_map! {
    "xs" => ("0.75rem", "1rem"),
    "sm" => ("0.875rem", "1.25rem"),
    "base" => ("1rem", "1.5rem"),
    "lg" => ("1.125rem", "1.75rem"),
    "xl" => ("1.25rem", "1.75rem"),
    "2xl" => ("1.5rem", "2rem"),
    "3xl" => ("1.875rem", "2.25rem"),
    "4xl" => ("2.25rem", "2.5rem"),
    "5xl" => ("3rem", "1"),
    "6xl" => ("3.75rem", "1"),
    "7xl" => ("4.5rem", "1"),
    "8xl" => ("6rem", "1"),
    "9xl" => ("8rem", "1"),
};

static FONT_WEIGHT: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

static LINE_HEIGHT: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
    "3" => ".75rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
};

static LETTER_SPACING: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "tighter" => "-0.05em",
    "tight" => "-0.025em",
    "normal" => "0em",
    "wide" => "0.025em",
    "wider" => "0.05em",
    "widest" => "0.1em",
};

static DECORATION_THICKNESS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "from-font" => "from-font",
    "0" => "0px",
    "1" => "1px",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

static UNDERLINE_OFFSET: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "auto" => "auto",
    "0" => "0px",
    "1" => "1px",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

static BOX_SHADOW: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "sm" => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    "DEFAULT" => "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    "md" => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    "lg" => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    "xl" => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    "2xl" => "0 25px 50px -12px rgb(0 0 0 / 0.25)",
    "inner" => "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
    "none" => "none",
};

static OUTLINE_WIDTH: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0px",
    "1" => "1px",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

static TRANSITION_DELAY: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0s",
    "75" => "75ms",
    "100" => "100ms",
    "150" => "150ms",
    "200" => "200ms",
    "300" => "300ms",
    "500" => "500ms",
    "700" => "700ms",
    "1000" => "1000ms",
};

static TRANSITION_DURATION: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "DEFAULT" => "150ms",
    "0" => "0s",
    "75" => "75ms",
    "100" => "100ms",
    "150" => "150ms",
    "200" => "200ms",
    "300" => "300ms",
    "500" => "500ms",
    "700" => "700ms",
    "1000" => "1000ms",
};

static TRANSITION_TIMING: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "DEFAULT" => "cubic-bezier(0.4, 0, 0.2, 1)",
    "linear" => "linear",
    "in" => "cubic-bezier(0.4, 0, 1, 1)",
    "out" => "cubic-bezier(0, 0, 0.2, 1)",
    "in-out" => "cubic-bezier(0.4, 0, 0.2, 1)",
};

static OPACITY: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "0" => "0",
    "5" => "0.05",
    "10" => "0.1",
    "15" => "0.15",
    "20" => "0.2",
    "25" => "0.25",
    "30" => "0.3",
    "35" => "0.35",
    "40" => "0.4",
    "45" => "0.45",
    "50" => "0.5",
    "55" => "0.55",
    "60" => "0.6",
    "65" => "0.65",
    "70" => "0.7",
    "75" => "0.75",
    "80" => "0.8",
    "85" => "0.85",
    "90" => "0.9",
    "95" => "0.95",
    "100" => "1",
};

static MAX_WIDTH: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "none" => "none",
    "xs" => "20rem",
    "sm" => "24rem",
    "md" => "28rem",
    "lg" => "32rem",
    "xl" => "36rem",
    "2xl" => "42rem",
    "3xl" => "48rem",
    "4xl" => "56rem",
    "5xl" => "64rem",
    "6xl" => "72rem",
    "7xl" => "80rem",
    "full" => "100%",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
    "prose" => "65ch",
};

static FRACTIONS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "1/2" => "50%",
    "1/3" => "33.333333%",
    "2/3" => "66.666667%",
    "1/4" => "25%",
    "2/4" => "50%",
    "3/4" => "75%",
    "1/5" => "20%",
    "2/5" => "40%",
    "3/5" => "60%",
    "4/5" => "80%",
    "1/6" => "16.666667%",
    "2/6" => "33.333333%",
    "3/6" => "50%",
    "4/6" => "66.666667%",
    "5/6" => "83.333333%",
};

static TWELFTHS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "1/12" => "8.333333%",
    "2/12" => "16.666667%",
    "3/12" => "25%",
    "4/12" => "33.333333%",
    "5/12" => "41.666667%",
    "6/12" => "50%",
    "7/12" => "58.333333%",
    "8/12" => "66.666667%",
    "9/12" => "75%",
    "10/12" => "83.333333%",
    "11/12" => "91.666667%",
};

static INTRINSIC: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

fn from_map(map: &phf::OrderedMap<&'static str, &'static str>) -> Section {
    map.entries()
        .map(|(k, v)| (k.to_string(), ThemeValue::literal(*v)))
        .collect()
}

fn extend_literals(section: &mut Section, pairs: &[(&str, &str)]) {
    for (k, v) in pairs {
        section.insert(k.to_string(), ThemeValue::literal(*v));
    }
}

fn colors() -> Section {
    let mut section = from_map(&BASE_COLORS);
    for (name, palette) in PALETTES {
        section.insert(name.to_string(), ThemeValue::Nested(from_map(palette)));
    }
    section
}

fn font_family() -> Section {
    FONT_FAMILY
        .iter()
        .map(|(key, families)| (key.to_string(), ThemeValue::list(families.iter().copied())))
        .collect()
}

fn font_size() -> Section {
    FONT_SIZE
        .entries()
        .map(|(key, (size, line_height))| {
            (
                key.to_string(),
                ThemeValue::with_options(ThemeValue::literal(*size), [("lineHeight", *line_height)]),
            )
        })
        .collect()
}

fn keyframes() -> Section {
    fn step(decls: &[(&str, &str)]) -> ThemeValue {
        ThemeValue::Nested(
            decls
                .iter()
                .map(|(p, v)| (p.to_string(), ThemeValue::literal(*v)))
                .collect(),
        )
    }
    fn frames(steps: Vec<(&str, ThemeValue)>) -> ThemeValue {
        ThemeValue::Nested(steps.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    let mut section = Section::new();
    section.insert(
        "spin".to_string(),
        frames(vec![("to", step(&[("transform", "rotate(360deg)")]))]),
    );
    section.insert(
        "ping".to_string(),
        frames(vec![(
            "75%, 100%",
            step(&[("transform", "scale(2)"), ("opacity", "0")]),
        )]),
    );
    section.insert(
        "pulse".to_string(),
        frames(vec![("50%", step(&[("opacity", ".5")]))]),
    );
    section.insert(
        "bounce".to_string(),
        frames(vec![
            (
                "0%, 100%",
                step(&[
                    ("transform", "translateY(-25%)"),
                    ("animationTimingFunction", "cubic-bezier(0.8,0,1,1)"),
                ]),
            ),
            (
                "50%",
                step(&[
                    ("transform", "none"),
                    ("animationTimingFunction", "cubic-bezier(0,0,0.2,1)"),
                ]),
            ),
        ]),
    );
    section
}

/// 基础分区（不依赖其它分区）
pub(crate) fn base_sections() -> IndexMap<String, Section> {
    let mut sections = IndexMap::new();
    let mut put = |key: &str, section: Section| {
        sections.insert(key.to_string(), section);
    };

    put("spacing", from_map(&SPACING));
    put("colors", colors());
    put("opacity", from_map(&OPACITY));
    put("zIndex", from_map(&Z_INDEX));
    put("gridColumn", from_map(&GRID_SPAN));
    put("gridColumnStart", from_map(&GRID_LINE));
    put("gridColumnEnd", from_map(&GRID_LINE));
    put("gridRow", from_map(&GRID_SPAN));
    put("gridRowStart", from_map(&GRID_LINE));
    put("gridRowEnd", from_map(&GRID_LINE));
    put("aspectRatio", from_map(&ASPECT_RATIO));
    put("maxWidth", from_map(&MAX_WIDTH));
    put("flexShrink", from_map(&FLEX_FACTOR));
    put("flexGrow", from_map(&FLEX_FACTOR));
    put("transformOrigin", from_map(&TRANSFORM_ORIGIN));
    put("animation", from_map(&ANIMATION));
    put("keyframes", keyframes());
    put("listStyleType", from_map(&LIST_STYLE_TYPE));
    put("listStyleImage", from_map(&LIST_STYLE_IMAGE));
    put("gridAutoColumns", from_map(&GRID_AUTO));
    put("gridAutoRows", from_map(&GRID_AUTO));
    put("gridTemplateColumns", from_map(&GRID_TEMPLATE));
    put("gridTemplateRows", from_map(&GRID_TEMPLATE));
    put("borderRadius", from_map(&BORDER_RADIUS));
    put("borderWidth", from_map(&BORDER_WIDTH));
    put("backgroundImage", from_map(&BACKGROUND_IMAGE));
    put("backgroundSize", from_map(&BACKGROUND_SIZE));
    put("backgroundPosition", from_map(&POSITION));
    put("objectPosition", from_map(&POSITION));
    put("strokeWidth", from_map(&STROKE_WIDTH));
    put("fontFamily", font_family());
    put("fontSize", font_size());
    put("fontWeight", from_map(&FONT_WEIGHT));
    put("lineHeight", from_map(&LINE_HEIGHT));
    put("letterSpacing", from_map(&LETTER_SPACING));
    put("textDecorationThickness", from_map(&DECORATION_THICKNESS));
    put("textUnderlineOffset", from_map(&UNDERLINE_OFFSET));
    put("boxShadow", from_map(&BOX_SHADOW));
    put("outlineWidth", from_map(&OUTLINE_WIDTH));
    put("transitionDelay", from_map(&TRANSITION_DELAY));
    put("transitionDuration", from_map(&TRANSITION_DURATION));
    put("transitionTimingFunction", from_map(&TRANSITION_TIMING));

    sections
}

/// 派生分区的构建方式
pub(crate) type Derive = fn(&IndexMap<String, Section>) -> Section;

fn base(sections: &IndexMap<String, Section>, key: &str) -> Section {
    sections.get(key).cloned().unwrap_or_default()
}

fn spacing(sections: &IndexMap<String, Section>) -> Section {
    base(sections, "spacing")
}

fn auto_spacing(sections: &IndexMap<String, Section>) -> Section {
    let mut section = Section::new();
    section.insert("auto".to_string(), ThemeValue::literal("auto"));
    section.extend(spacing(sections));
    section
}

fn height(sections: &IndexMap<String, Section>) -> Section {
    let mut section = auto_spacing(sections);
    section.extend(from_map(&FRACTIONS));
    extend_literals(
        &mut section,
        &[("full", "100%"), ("screen", "100vh"), ("svh", "100svh"), ("lvh", "100lvh"), ("dvh", "100dvh")],
    );
    section.extend(from_map(&INTRINSIC));
    section
}

fn min_height(sections: &IndexMap<String, Section>) -> Section {
    let mut section = spacing(sections);
    extend_literals(
        &mut section,
        &[("full", "100%"), ("screen", "100vh"), ("svh", "100svh"), ("lvh", "100lvh"), ("dvh", "100dvh")],
    );
    section.extend(from_map(&INTRINSIC));
    section
}

fn max_height(sections: &IndexMap<String, Section>) -> Section {
    let mut section = spacing(sections);
    extend_literals(
        &mut section,
        &[("none", "none"), ("full", "100%"), ("screen", "100vh"), ("svh", "100svh"), ("lvh", "100lvh"), ("dvh", "100dvh")],
    );
    section.extend(from_map(&INTRINSIC));
    section
}

fn width(sections: &IndexMap<String, Section>) -> Section {
    let mut section = auto_spacing(sections);
    section.extend(from_map(&FRACTIONS));
    section.extend(from_map(&TWELFTHS));
    extend_literals(
        &mut section,
        &[("full", "100%"), ("screen", "100vw"), ("svw", "100svw"), ("lvw", "100lvw"), ("dvw", "100dvw")],
    );
    section.extend(from_map(&INTRINSIC));
    section
}

fn min_width(sections: &IndexMap<String, Section>) -> Section {
    let mut section = spacing(sections);
    extend_literals(&mut section, &[("full", "100%")]);
    section.extend(from_map(&INTRINSIC));
    section
}

fn flex_basis(sections: &IndexMap<String, Section>) -> Section {
    let mut section = auto_spacing(sections);
    section.extend(from_map(&FRACTIONS));
    section.extend(from_map(&TWELFTHS));
    extend_literals(&mut section, &[("full", "100%")]);
    section
}

fn colors_of(sections: &IndexMap<String, Section>) -> Section {
    base(sections, "colors")
}

fn border_color(sections: &IndexMap<String, Section>) -> Section {
    let colors = colors_of(sections);
    let default = colors
        .get("gray")
        .and_then(ThemeValue::as_nested)
        .and_then(|gray| gray.get("200"))
        .cloned()
        .unwrap_or_else(|| ThemeValue::literal("currentColor"));

    let mut section = colors;
    section.insert("DEFAULT".to_string(), default);
    section
}

fn accent_color(sections: &IndexMap<String, Section>) -> Section {
    let mut section = colors_of(sections);
    section.insert("auto".to_string(), ThemeValue::literal("auto"));
    section
}

/// 派生分区表：`(分区名, 构建函数)`，按顺序计算
pub(crate) static DERIVED: &[(&str, Derive)] = &[
    ("margin", auto_spacing),
    ("padding", spacing),
    ("gap", spacing),
    ("scrollMargin", spacing),
    ("scrollPadding", spacing),
    ("textIndent", spacing),
    ("height", height),
    ("minHeight", min_height),
    ("maxHeight", max_height),
    ("width", width),
    ("minWidth", min_width),
    ("flexBasis", flex_basis),
    ("borderColor", border_color),
    ("backgroundColor", colors_of),
    ("textColor", colors_of),
    ("textDecorationColor", colors_of),
    ("caretColor", colors_of),
    ("accentColor", accent_color),
    ("boxShadowColor", colors_of),
    ("outlineColor", colors_of),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sections_present() {
        let sections = base_sections();
        assert_eq!(sections["spacing"]["4"], ThemeValue::literal("1rem"));
        assert_eq!(sections["zIndex"]["auto"], ThemeValue::literal("auto"));
        assert!(sections["colors"]["gray"].as_nested().is_some());
    }

    #[test]
    fn test_font_size_is_tuple() {
        let sections = base_sections();
        assert_eq!(
            sections["fontSize"]["lg"],
            ThemeValue::with_options(ThemeValue::literal("1.125rem"), [("lineHeight", "1.75rem")])
        );
    }

    #[test]
    fn test_derived_margin_starts_with_auto() {
        let sections = base_sections();
        let margin = auto_spacing(&sections);
        assert_eq!(margin.keys().next().map(String::as_str), Some("auto"));
        assert_eq!(margin.len(), SPACING.len() + 1);
    }

    #[test]
    fn test_border_color_default() {
        let sections = base_sections();
        let section = border_color(&sections);
        assert_eq!(section["DEFAULT"], ThemeValue::literal("#e5e7eb"));
    }
}
