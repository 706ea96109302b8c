use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStderr, Command};

use crate::config::YtDlpConfig;
use crate::error::{Result, YtDlpError};
use crate::models::{ExitCode, MediaMetadata};
use crate::options::{MetadataOptions, StreamOptions};
use crate::traits::{MediaExtractor, MediaStream, ProcessHandle};

/// Process-backed yt-dlp client
#[derive(Debug, Clone, Default)]
pub struct YtDlpClient {
    config: YtDlpConfig,
    metadata: MetadataOptions,
    stream: StreamOptions,
}

impl YtDlpClient {
    pub fn new(config: YtDlpConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Full argument list of the metadata invocation
    pub fn metadata_args(&self, url: &str) -> Vec<String> {
        self.build_args(self.metadata.to_args(), url)
    }

    /// Full argument list of the media invocation
    pub fn stream_args(&self, url: &str) -> Vec<String> {
        self.build_args(self.stream.to_args(), url)
    }

    /// Flags, then configured extras, then the URL behind `--` so it is
    /// never parsed as an option.
    fn build_args(&self, mut args: Vec<String>, url: &str) -> Vec<String> {
        args.extend(self.config.extra_args.iter().cloned());
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> YtDlpError {
        YtDlpError::Spawn {
            program: self.config.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl MediaExtractor for YtDlpClient {
    async fn fetch_metadata(&self, url: &str) -> Result<MediaMetadata> {
        let args = self.metadata_args(url);
        tracing::debug!(?args, "Running yt-dlp metadata query");

        let output = self
            .command(&args)
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(YtDlpError::Exit {
                code: output.status.into(),
                stderr,
            });
        }

        MediaMetadata::from_json(&output.stdout)
    }

    fn spawn_stream(&self, url: &str) -> Result<MediaStream> {
        let args = self.stream_args(url);
        tracing::debug!(?args, "Spawning yt-dlp media stream");

        let mut child = self.command(&args).spawn().map_err(|e| self.spawn_error(e))?;
        let stdout = child.stdout.take().ok_or(YtDlpError::MissingStdout)?;

        // An unread stderr pipe would eventually block the child
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(drain_stderr(stderr, child.id()));
        }

        Ok(MediaStream::new(
            Box::new(stdout),
            Box::new(ChildProcess::new(child)),
        ))
    }
}

/// Forward the tool's diagnostics to the log, line by line
async fn drain_stderr(stderr: ChildStderr, pid: Option<u32>) {
    let mut lines = BufReader::new(stderr).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => tracing::debug!(?pid, "yt-dlp: {}", line),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(?pid, "Stopped reading yt-dlp stderr: {}", e);
                break;
            }
        }
    }
}

/// [`ProcessHandle`] over a tokio child process
pub struct ChildProcess {
    child: Child,
}

impl ChildProcess {
    pub fn new(child: Child) -> Self {
        Self { child }
    }
}

#[async_trait]
impl ProcessHandle for ChildProcess {
    async fn wait(&mut self) -> Result<ExitCode> {
        Ok(self.child.wait().await?.into())
    }

    fn start_kill(&mut self) -> Result<()> {
        Ok(self.child.start_kill()?)
    }
}
