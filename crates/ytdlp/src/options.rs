/// Best MP4 video plus best M4A audio, falling back to a pre-muxed MP4
pub const DEFAULT_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";

/// Container used when video and audio are merged
pub const DEFAULT_MERGE_OUTPUT_FORMAT: &str = "mp4";

/// Flags for the metadata-only invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataOptions;

impl MetadataOptions {
    pub fn to_args(&self) -> Vec<String> {
        [
            "--dump-single-json",
            "--no-warnings",
            "--no-call-home",
            "--prefer-free-formats",
            "--no-playlist",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}

/// Flags for the media invocation that writes the muxed file to stdout
#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Format selector passed to `--format`
    pub format: String,
    /// Container passed to `--merge-output-format`
    pub merge_output_format: String,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            merge_output_format: DEFAULT_MERGE_OUTPUT_FORMAT.to_string(),
        }
    }
}

impl StreamOptions {
    /// Set the format selector
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--format".to_string(),
            self.format.clone(),
            "--merge-output-format".to_string(),
            self.merge_output_format.clone(),
            // "-" sends the media to stdout instead of a file
            "--output".to_string(),
            "-".to_string(),
            "--limit-rate".to_string(),
            "0".to_string(),
            "--no-warnings".to_string(),
            "--prefer-free-formats".to_string(),
            "--no-playlist".to_string(),
        ]
    }
}
