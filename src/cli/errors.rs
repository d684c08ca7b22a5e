use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{tool} is not available; install it and ensure it is on PATH")]
    ToolUnavailable { tool: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("conversion error: {0}")]
    Conversion(#[from] hlsbatch::Error),
}
