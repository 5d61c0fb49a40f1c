//! Error types for the Sweetheart page

use thiserror::Error;

/// Main error type for page operations
#[derive(Error, Debug)]
pub enum PageError {
    /// A structural element a handler depends on is not on the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The external burst capability rejected or failed a call
    #[error("Burst error: {0}")]
    Burst(String),

    /// A script evaluated in the page failed or never answered
    #[error("Script error: {0}")]
    Script(String),

    /// Configuration values are unusable
    #[error("Config error: {0}")]
    Config(String),

    /// Reference instant could not be parsed
    #[error("Invalid reference instant: {0}")]
    InvalidReference(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;
