use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Azure error {status} ({code}): {message}")]
    ProviderError {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ArmError>;
