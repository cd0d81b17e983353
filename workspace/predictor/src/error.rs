use thiserror::Error;

/// Error types for model loading and inference
#[derive(Error, Debug)]
pub enum PredictorError {
    /// Error reading the model artifact from disk
    #[error("Model artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the model artifact
    #[error("Model artifact parse error: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Structurally invalid model artifact
    #[error("Model artifact error: {0}")]
    Artifact(String),
}

/// Type alias for Result with PredictorError
pub type Result<T> = std::result::Result<T, PredictorError>;
