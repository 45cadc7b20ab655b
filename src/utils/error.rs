use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrandsError {
    #[error("item '{item}' has no stores it can be bought from")]
    UnassignableItem { item: String },

    #[error("store universe has {universe} stores, above the configured cap of {cap}")]
    SearchSpaceExceeded { universe: usize, cap: usize },

    #[error("item '{item}' has malformed purchase history: {reason}")]
    InvalidHistory { item: String, reason: String },

    #[error("catalog parse error: {0}")]
    CatalogError(#[from] toml::de::Error),

    #[error("LLM request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("unusable LLM response: {message}")]
    LlmResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ErrandsError>;
