//! Relay of a yt-dlp media stream into an HTTP response body.
//!
//! A [`StreamSession`] owns one media invocation for the lifetime of one
//! response. It is a small state machine:
//!
//! ```text
//! Running ──eof + exit──▶ Completed(code)
//!    └──────read error──▶ Failed(reason)
//! ```
//!
//! Only one terminal state is ever entered. Dropping a session that is still
//! `Running` (the client went away) kills the process.
//!
//! The session is primed before the response is committed: the first chunk
//! is awaited in [`StreamSession::start`], so failures that happen before any
//! byte is produced can still be reported with a status code.

use std::io;

use axum::body::Body;
use bytes::Bytes;
use futures::StreamExt;
use thiserror::Error;
use tokio_util::io::ReaderStream;
use ytdlp::{ExitCode, MediaReader, MediaStream, ProcessHandle, YtDlpError};

/// Errors that prevent a session from starting
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to read media stream: {0}")]
    Read(#[from] io::Error),

    #[error("yt-dlp produced no output ({0})")]
    Empty(ExitCode),

    #[error("Failed to wait for yt-dlp: {0}")]
    Wait(#[from] YtDlpError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Completed(ExitCode),
    Failed(String),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

pub struct StreamSession {
    /// Identifies the session in logs
    label: String,
    reader: ReaderStream<MediaReader>,
    process: Box<dyn ProcessHandle>,
    state: SessionState,
    primed: Option<Bytes>,
    bytes_relayed: u64,
}

impl StreamSession {
    /// Take ownership of a media stream and wait for its first chunk.
    ///
    /// Fails if the stream errors before producing anything, or ends empty
    /// with a non-zero exit code.
    pub async fn start(stream: MediaStream, label: impl Into<String>) -> Result<Self, RelayError> {
        let mut session = Self {
            label: label.into(),
            reader: ReaderStream::new(stream.stdout),
            process: stream.process,
            state: SessionState::Running,
            primed: None,
            bytes_relayed: 0,
        };

        match session.reader.next().await {
            Some(Ok(chunk)) => {
                session.primed = Some(chunk);
                Ok(session)
            }
            Some(Err(e)) => {
                session.fail(e.to_string());
                Err(RelayError::Read(e))
            }
            None => {
                let code = session.finish().await?;
                if code.success() {
                    Ok(session)
                } else {
                    Err(RelayError::Empty(code))
                }
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn bytes_relayed(&self) -> u64 {
        self.bytes_relayed
    }

    /// Turn the session into a streaming response body.
    ///
    /// The body pulls from the pipe only when hyper asks for more, so a slow
    /// client stalls the process instead of growing a buffer.
    pub fn into_body(self) -> Body {
        let stream = futures::stream::unfold(self, |mut session| async move {
            session.next_chunk().await.map(|chunk| (chunk, session))
        });
        Body::from_stream(stream)
    }

    /// Next chunk for the body; `None` once a terminal state is reached.
    pub async fn next_chunk(&mut self) -> Option<io::Result<Bytes>> {
        if let Some(chunk) = self.primed.take() {
            self.bytes_relayed += chunk.len() as u64;
            return Some(Ok(chunk));
        }

        if self.state.is_terminal() {
            return None;
        }

        match self.reader.next().await {
            Some(Ok(chunk)) => {
                self.bytes_relayed += chunk.len() as u64;
                Some(Ok(chunk))
            }
            Some(Err(e)) => {
                // Headers are gone already; the connection is aborted instead.
                tracing::error!(
                    "Media stream for {} failed after {} bytes: {}",
                    self.label,
                    self.bytes_relayed,
                    e
                );
                self.fail(e.to_string());
                Some(Err(e))
            }
            None => {
                if let Err(e) = self.finish().await {
                    tracing::error!("Failed to reap yt-dlp for {}: {}", self.label, e);
                }
                None
            }
        }
    }

    /// Wait for the process after end of stream and record its exit code.
    async fn finish(&mut self) -> Result<ExitCode, YtDlpError> {
        match self.process.wait().await {
            Ok(code) => {
                if code.success() {
                    tracing::info!(
                        "Finished streaming {} ({} bytes)",
                        self.label,
                        self.bytes_relayed
                    );
                } else {
                    tracing::warn!("yt-dlp finished with {} for {}", code, self.label);
                }
                self.transition(SessionState::Completed(code));
                Ok(code)
            }
            Err(e) => {
                self.transition(SessionState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    fn fail(&mut self, reason: String) {
        if self.transition(SessionState::Failed(reason)) {
            self.kill();
        }
    }

    fn kill(&mut self) {
        if let Err(e) = self.process.start_kill() {
            tracing::debug!("Failed to kill yt-dlp for {}: {}", self.label, e);
        }
    }

    /// Enter a terminal state. Returns false if one was already reached.
    fn transition(&mut self, next: SessionState) -> bool {
        if self.state.is_terminal() {
            tracing::debug!(
                "Ignoring transition to {:?} for {}: already {:?}",
                next,
                self.label,
                self.state
            );
            return false;
        }
        self.state = next;
        true
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        if self.state == SessionState::Running {
            tracing::warn!(
                "Client disconnected from {} after {} bytes, terminating yt-dlp",
                self.label,
                self.bytes_relayed
            );
            self.kill();
        }
    }
}
