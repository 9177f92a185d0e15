use thiserror::Error;

/// Main error type for the longhand host
#[derive(Debug, Error)]
pub enum LonghandError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid theme value for `{key}`: {message}")]
    ThemeValue { key: String, message: String },

    #[error("CSS formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, LonghandError>;
