use std::fmt;
use std::process::ExitStatus;

use serde::Deserialize;

use crate::error::Result;

/// The subset of yt-dlp's `--dump-single-json` document we rely on.
///
/// Everything except the title is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

impl MediaMetadata {
    /// Parse the JSON document printed by yt-dlp
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Exit status of a finished process.
///
/// `None` means the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(Option<i32>);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(Some(0));

    pub fn new(code: Option<i32>) -> Self {
        Self(code)
    }

    pub fn code(self) -> Option<i32> {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == Some(0)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self(status.code())
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("termination by signal"),
        }
    }
}
