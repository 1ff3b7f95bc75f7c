use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date fixture error: {message}")]
    DateOutOfRange { message: String },

    /// 200 回應但 build info 內容不完整或不是 JSON
    #[error("Malformed build info from {url}: {reason}")]
    MalformedBuildInfo { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
