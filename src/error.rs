use pageflow_layout::FlowError;
use thiserror::Error;

/// Errors surfaced by the JSON entry points and the command-line tool.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Pagination failed: {0}")]
    Flow(#[from] FlowError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage: {0}")]
    Usage(String),
}
