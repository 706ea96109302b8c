//! Download request.

use serde::Deserialize;
use thiserror::Error;
use url::Url;
use utoipa::ToSchema;

/// Body of `POST /api/download`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DownloadRequest {
    /// Absolute http(s) URL of the video page
    #[serde(default)]
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: Option<String>,
}

/// Error when validating a download request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DownloadRequestError {
    /// No `url` field, or an empty one.
    #[error("URL is missing")]
    MissingUrl,
    /// The value does not parse as an absolute URL.
    #[error("URL is not valid: {0}")]
    InvalidUrl(String),
    /// Scheme other than http or https. Stricter than URL syntax alone:
    /// `ftp:` and `file:` parse fine but are never passed to yt-dlp.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("URL has no host")]
    MissingHost,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Check that `url` is an absolute http(s) URL with a host.
    pub fn validate(&self) -> Result<Url, DownloadRequestError> {
        let raw = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DownloadRequestError::MissingUrl)?;

        let url = Url::parse(raw).map_err(|e| DownloadRequestError::InvalidUrl(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DownloadRequestError::UnsupportedScheme(
                url.scheme().to_string(),
            ));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(DownloadRequestError::MissingHost);
        }

        Ok(url)
    }
}
