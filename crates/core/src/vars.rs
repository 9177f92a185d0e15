//! 工具类之间共享的 CSS 自定义属性名
//!
//! 颜色类与透明度类、box-shadow 与 ring / shadow-color 类通过同名变量组合。
//! 两侧都必须引用这里的常量，不要在别处重复写字面量。

/// 颜色 / 透明度组合的一组变量名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaChannel {
    /// 存放不含 alpha 的颜色
    pub color: &'static str,
    /// 存放 alpha 乘数（0-1），由透明度类写入
    pub opacity: &'static str,
}

pub const BORDER: AlphaChannel = AlphaChannel {
    color: "--tw-border-color",
    opacity: "--tw-border-opacity",
};

pub const BACKGROUND: AlphaChannel = AlphaChannel {
    color: "--tw-bg-color",
    opacity: "--tw-bg-opacity",
};

pub const TEXT: AlphaChannel = AlphaChannel {
    color: "--tw-text-color",
    opacity: "--tw-text-opacity",
};

pub const SHADOW: &str = "--tw-shadow";
pub const SHADOW_COLORED: &str = "--tw-shadow-colored";
pub const SHADOW_COLOR: &str = "--tw-shadow-color";
pub const RING_OFFSET_SHADOW: &str = "--tw-ring-offset-shadow";
pub const RING_SHADOW: &str = "--tw-ring-shadow";

/// 空阴影，变量未设置时的占位值
pub const EMPTY_SHADOW: &str = "0 0 #0000";

/// `var(--name)`
pub fn var(name: &str) -> String {
    format!("var({})", name)
}

/// `var(--name, fallback)`
pub fn var_or(name: &str, fallback: &str) -> String {
    format!("var({}, {})", name, fallback)
}
