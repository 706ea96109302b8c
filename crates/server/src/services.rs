mod filename;
mod relay;

pub use filename::{content_disposition, derive_filename, sanitize_title, FALLBACK_STEM};
pub use relay::{RelayError, SessionState, StreamSession};
