use std::path::PathBuf;

use thiserror::Error;

use crate::models::ExitCode;

#[derive(Debug, Error)]
pub enum YtDlpError {
    #[error("Failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yt-dlp failed with {code}: {stderr}")]
    Exit { code: ExitCode, stderr: String },

    #[error("Malformed metadata JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yt-dlp process has no stdout pipe")]
    MissingStdout,
}

/// Result type alias for yt-dlp operations
pub type Result<T> = std::result::Result<T, YtDlpError>;
