use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::DownloadRequest;
use crate::services::{content_disposition, derive_filename, StreamSession};
use crate::state::AppState;

const INVALID_URL: &str = "Invalid or missing URL.";
const DOWNLOAD_FAILED: &str = "Download failed.";

/// Download a video as MP4.
///
/// Fetches the title with yt-dlp, then streams the muxed MP4 produced by a
/// second yt-dlp run straight into the response body.
#[utoipa::path(
    post,
    path = "/api/download",
    tag = "download",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "MP4 byte stream (video/mp4) sent as an attachment"),
        (status = 400, description = "Invalid or missing URL"),
        (status = 405, description = "Method other than POST"),
        (status = 500, description = "yt-dlp or server failure")
    )
)]
pub async fn handle_download(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected download body: {}", e);
        AppError::bad_request(INVALID_URL)
    })?;

    let url = request.validate().map_err(|e| {
        tracing::debug!("Rejected download URL {:?}: {}", request.url, e);
        AppError::bad_request(INVALID_URL)
    })?;

    tracing::info!("Download requested for {}", url);

    let metadata = state
        .extractor
        .fetch_metadata(url.as_str())
        .await
        .map_err(|e| {
            tracing::error!("Metadata query failed for {}: {}", url, e);
            AppError::internal(format!("Server error: {}", e))
        })?;

    let filename = derive_filename(metadata.title.as_deref());

    let stream = state.extractor.spawn_stream(url.as_str()).map_err(|e| {
        tracing::error!("Failed to start yt-dlp for {}: {}", url, e);
        AppError::internal(DOWNLOAD_FAILED)
    })?;

    let session = StreamSession::start(stream, url.as_str())
        .await
        .map_err(|e| {
            tracing::error!("Media stream for {} failed before any bytes: {}", url, e);
            AppError::internal(DOWNLOAD_FAILED)
        })?;

    tracing::info!("Streaming {} as {}", url, filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "video/mp4".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        session.into_body(),
    )
        .into_response())
}

/// Fallback for every method except POST on the download route
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("POST")
}
