use std::path::PathBuf;

/// Default program name, resolved through `PATH`
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Configuration for creating a yt-dlp client
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// Path to the yt-dlp executable
    pub program: PathBuf,
    /// Arguments appended to every invocation, before the URL
    pub extra_args: Vec<String>,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            extra_args: Vec::new(),
        }
    }
}

impl YtDlpConfig {
    /// Create config for a specific executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Set the extra arguments
    pub fn extra_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}
