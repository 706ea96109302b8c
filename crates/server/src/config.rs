use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ytdlp::YtDlpConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// yt-dlp executable, looked up in PATH when not absolute
    pub ytdlp_path: PathBuf,
    /// Extra arguments for every yt-dlp invocation (cookies, proxy, ...)
    pub extra_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ytdlp_path: PathBuf::from("yt-dlp"),
            extra_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ytdlp_config(&self) -> YtDlpConfig {
        YtDlpConfig::new(&self.ytdlp_path).extra_args(self.extra_args.iter().cloned())
    }
}
