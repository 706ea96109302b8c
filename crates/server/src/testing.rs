//! Scripted stand-ins for yt-dlp used by the unit tests.
//!
//! ```ignore
//! let extractor = MockExtractor::new()
//!     .title("Sample")
//!     .stream(ScriptedReader::new().chunk(b"bytes").error("reset"));
//! let state = AppState::with_extractor(Config::default(), Arc::new(extractor.clone()));
//! // drive the router...
//! assert_eq!(extractor.probe().kills(), 1);
//! ```

use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use tokio::io::{AsyncRead, ReadBuf};
use tokio_util::io::StreamReader;
use ytdlp::{
    ExitCode, MediaExtractor, MediaMetadata, MediaReader, MediaStream, ProcessHandle, YtDlpError,
};

// ============================================================================
// Scripted stdout
// ============================================================================

/// Stdout script: chunks and read errors in order, optionally never ending.
#[derive(Clone, Default)]
pub struct ScriptedReader {
    items: Vec<Result<Bytes, String>>,
    hang: bool,
}

impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(mut self, bytes: &[u8]) -> Self {
        self.items.push(Ok(Bytes::copy_from_slice(bytes)));
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.items.push(Err(message.to_string()));
        self
    }

    /// Stay pending after the scripted items instead of reaching EOF.
    pub fn hang(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn into_reader(self) -> MediaReader {
        let items = futures::stream::iter(self.items.into_iter().map(|item| {
            item.map_err(|message| io::Error::new(io::ErrorKind::BrokenPipe, message))
        }));
        if self.hang {
            Box::new(StreamReader::new(items.chain(futures::stream::pending())))
        } else {
            Box::new(StreamReader::new(items))
        }
    }
}

/// Counts reads served by an endless stdout, for checking that nothing is
/// read ahead of the consumer.
#[derive(Clone, Default)]
pub struct ReadCounter {
    reads: Arc<AtomicUsize>,
}

impl ReadCounter {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Stdout that never ends and answers every read with one small chunk.
    pub fn endless_reader(&self) -> MediaReader {
        Box::new(EndlessReader {
            reads: self.reads.clone(),
        })
    }
}

struct EndlessReader {
    reads: Arc<AtomicUsize>,
}

impl AsyncRead for EndlessReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        buf.put_slice(b"chunk");
        Poll::Ready(Ok(()))
    }
}

// ============================================================================
// Mock process
// ============================================================================

/// Shared counters for verifying process handling.
#[derive(Clone, Default)]
pub struct ProcessProbe {
    kills: Arc<AtomicUsize>,
    waits: Arc<AtomicUsize>,
}

impl ProcessProbe {
    pub fn kills(&self) -> usize {
        self.kills.load(Ordering::SeqCst)
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

pub struct MockProcess {
    exit: ExitCode,
    probe: ProcessProbe,
}

impl MockProcess {
    pub fn exiting(code: i32) -> Self {
        Self {
            exit: ExitCode::new(Some(code)),
            probe: ProcessProbe::default(),
        }
    }

    pub fn probe(&self) -> ProcessProbe {
        self.probe.clone()
    }
}

#[async_trait]
impl ProcessHandle for MockProcess {
    async fn wait(&mut self) -> ytdlp::Result<ExitCode> {
        self.probe.waits.fetch_add(1, Ordering::SeqCst);
        Ok(self.exit)
    }

    fn start_kill(&mut self) -> ytdlp::Result<()> {
        self.probe.kills.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Mock extractor
// ============================================================================

/// Mock implementation of MediaExtractor for testing.
#[derive(Clone)]
pub struct MockExtractor {
    metadata: Result<MediaMetadata, String>,
    /// `None` makes `spawn_stream` fail like a missing binary
    stream: Option<ScriptedReader>,
    exit: i32,
    metadata_calls: Arc<AtomicUsize>,
    stream_calls: Arc<AtomicUsize>,
    urls: Arc<Mutex<Vec<String>>>,
    probe: ProcessProbe,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self {
            metadata: Ok(MediaMetadata::default()),
            stream: Some(ScriptedReader::new()),
            exit: 0,
            metadata_calls: Arc::default(),
            stream_calls: Arc::default(),
            urls: Arc::default(),
            probe: ProcessProbe::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.metadata = Ok(MediaMetadata {
            title: Some(title.to_string()),
        });
        self
    }

    /// Make the metadata query fail with this stderr text.
    pub fn metadata_error(mut self, stderr: &str) -> Self {
        self.metadata = Err(stderr.to_string());
        self
    }

    pub fn stream(mut self, reader: ScriptedReader) -> Self {
        self.stream = Some(reader);
        self
    }

    pub fn spawn_error(mut self) -> Self {
        self.stream = None;
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit = code;
        self
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }

    /// URLs passed to either call, in call order.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn probe(&self) -> ProcessProbe {
        self.probe.clone()
    }
}

#[async_trait]
impl MediaExtractor for MockExtractor {
    async fn fetch_metadata(&self, url: &str) -> ytdlp::Result<MediaMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        match &self.metadata {
            Ok(metadata) => Ok(metadata.clone()),
            Err(stderr) => Err(YtDlpError::Exit {
                code: ExitCode::new(Some(1)),
                stderr: stderr.clone(),
            }),
        }
    }

    fn spawn_stream(&self, url: &str) -> ytdlp::Result<MediaStream> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        let Some(reader) = self.stream.clone() else {
            return Err(YtDlpError::Spawn {
                program: "yt-dlp".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        };
        let process = MockProcess {
            exit: ExitCode::new(Some(self.exit)),
            probe: self.probe.clone(),
        };
        Ok(MediaStream::new(reader.into_reader(), Box::new(process)))
    }
}
