//! Longhand 宿主框架
//!
//! 负责配置加载、主题解析、插件注册（[`PluginApi`]）、类名匹配与 CSS 输出。
//!
//! ```
//! use longhand_host::{Config, Generator};
//!
//! let generator = Generator::new(Config::default()).unwrap();
//! let css = generator.generate_css(&["background-opacity-50"]).unwrap();
//! assert!(css.contains("--tw-bg-opacity: 0.5;"));
//! ```

pub mod api;
pub mod companion;
pub mod config;
pub mod css;
pub mod error;
pub mod generator;
pub mod registry;
pub mod theme;
pub mod value;

pub use api::{MatchOptions, Plugin, PluginApi, UtilityFn};
pub use config::{Config, ConfigPatch, CorePlugins, ThemeConfig};
pub use error::{LonghandError, Result};
pub use generator::{GenerateResult, Generator};
pub use registry::{Matched, Registry};
pub use theme::{transform_theme_value, Section, Theme, ThemeValue, ValueTransform};
pub use value::ValueType;
