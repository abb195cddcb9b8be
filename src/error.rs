//! Errors raised at the parsing boundary. The derivation core itself is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value {value:?} for override field `{field}`")]
    InvalidOverride { field: &'static str, value: String },

    #[error("unknown {kind} {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("failed to parse scene tuning: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse weather data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
