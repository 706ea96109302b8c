//! Async wrapper around the `yt-dlp` command line tool.
//!
//! The crate exposes two operations through the [`MediaExtractor`] trait:
//!
//! - [`MediaExtractor::fetch_metadata`] runs the tool once in metadata-only
//!   mode and parses the single JSON document it prints.
//! - [`MediaExtractor::spawn_stream`] launches the tool with its output bound
//!   to stdout and hands back the live pipe plus a handle to the process.
//!
//! [`YtDlpClient`] is the process-backed implementation. Tests elsewhere in the
//! workspace substitute their own implementation of the trait.

mod client;
mod config;
mod error;
mod models;
mod options;
mod traits;

pub use client::{ChildProcess, YtDlpClient};
pub use config::YtDlpConfig;
pub use error::{Result, YtDlpError};
pub use models::{ExitCode, MediaMetadata};
pub use options::{MetadataOptions, StreamOptions, DEFAULT_FORMAT, DEFAULT_MERGE_OUTPUT_FORMAT};
pub use traits::{MediaExtractor, MediaReader, MediaStream, ProcessHandle};
