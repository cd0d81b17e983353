use thiserror::Error;

/// Error types for the report module
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error while rendering a chart
    #[error("Chart rendering error: {0}")]
    Chart(String),

    /// Error while assembling the PDF document
    #[error("Document rendering error: {0}")]
    Document(String),
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
