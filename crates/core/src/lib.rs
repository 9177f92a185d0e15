pub mod escape;
pub mod types;
pub mod vars;

// Re-export commonly used types
pub use escape::escape_class_name;
pub use types::{Declaration, Diagnostic, DiagnosticLevel, KeyframeStep, Keyframes, Style};
