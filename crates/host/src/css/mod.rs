pub mod emit;
pub mod ir;

pub use emit::emit_css;
pub use ir::{DefaultBlock, Rule, Stylesheet, DEFAULTS_SELECTOR};
