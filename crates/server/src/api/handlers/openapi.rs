use axum::Json;
use utoipa::OpenApi;

use crate::models::DownloadRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "yt-relay API",
        version = "1.0.0"
    ),
    paths(super::download::handle_download),
    tags(
        (name = "download", description = "Video download endpoints")
    ),
    components(schemas(DownloadRequest))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
