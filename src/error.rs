//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and JSON errors, and provides semantic variants for
//! pre-flight checks, encoder launch failures, and nonzero encoder exits.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The external tool could not be started at all (missing binary,
    /// permission denied). Carries the underlying OS error.
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited nonzero. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("{tool} failed with exit code {}: {stderr}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("source directory not found: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("run cancelled")]
    Cancelled,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn launch(tool: impl Into<String>, source: std::io::Error) -> Self {
        Error::Launch {
            tool: tool.into(),
            source,
        }
    }

    pub fn tool_failed(
        tool: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Error::ToolFailed {
            tool: tool.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Error::MissingDirectory { path: path.into() }
    }
}
