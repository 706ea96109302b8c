use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::Result;
use crate::models::{ExitCode, MediaMetadata};

/// Live, incrementally readable media bytes
pub type MediaReader = Box<dyn AsyncRead + Send + Unpin>;

/// A running media invocation: its stdout and a handle to the process
pub struct MediaStream {
    pub stdout: MediaReader,
    pub process: Box<dyn ProcessHandle>,
}

impl MediaStream {
    pub fn new(stdout: MediaReader, process: Box<dyn ProcessHandle>) -> Self {
        Self { stdout, process }
    }
}

/// Control over a spawned process
#[async_trait]
pub trait ProcessHandle: Send {
    /// Wait for the process to exit
    async fn wait(&mut self) -> Result<ExitCode>;

    /// Ask the process to terminate without waiting for it
    fn start_kill(&mut self) -> Result<()>;
}

/// External media extraction tool
///
/// Implemented by [`crate::YtDlpClient`]; tests provide scripted implementations.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Run the tool in metadata-only mode and wait for the JSON document.
    ///
    /// Must not produce any media bytes.
    async fn fetch_metadata(&self, url: &str) -> Result<MediaMetadata>;

    /// Launch the tool with the muxed media written to stdout.
    ///
    /// Returns as soon as the process is running; the caller reads the
    /// stream incrementally.
    fn spawn_stream(&self, url: &str) -> Result<MediaStream>;
}
