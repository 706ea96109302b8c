mod download;

pub use download::{DownloadRequest, DownloadRequestError};
