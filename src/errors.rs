use thiserror::Error;

/// Main error type for the dom-classlist crate
#[derive(Debug, Error)]
pub enum ClassListError {
    #[error("A DOM element reference is required")]
    InvalidElement,

    #[error("Invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClassListError>;
