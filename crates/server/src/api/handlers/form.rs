use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// Request form: paste a link, get the MP4
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
