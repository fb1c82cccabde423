use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

const FALLBACK_HOST: &str = "localhost:3000";

#[utoipa::path(
    get,
    path = "/rss.xml",
    responses(
        (status = 200, description = "RSS 2.0 document.", content_type = "application/xml", body = String),
        (status = 500, description = "Feed could not be built.", content_type = "text/plain", body = String)
    ),
    security(()),
    tag = "Feed"
)]
pub async fn rss(Extension(state): Extension<HttpState>, headers: HeaderMap) -> Response {
    let site_url = state
        .site_url
        .clone()
        .unwrap_or_else(|| site_url_from_host(headers.get(header::HOST).and_then(|v| v.to_str().ok())));

    match state.services.feed_queries.rss(&site_url).await {
        Ok(xml) => (
            [
                (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            xml,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to build rss feed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CACHE_CONTROL, "no-store")],
                format!("RSS error: {err}"),
            )
                .into_response()
        }
    }
}

fn site_url_from_host(host: Option<&str>) -> String {
    let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(FALLBACK_HOST);
    let scheme = if host.contains("localhost") { "http" } else { "https" };
    format!("{scheme}://{host}")
}
