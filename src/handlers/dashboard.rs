use axum::response::Html;
use tracing::instrument;

/// Serve the embedded dashboard page.
///
/// The page is compiled into the binary; the server has no static file tree
/// to deploy alongside it.
#[instrument]
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}
