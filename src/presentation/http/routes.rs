// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, articles, auth, contacts, feed},
    middleware::rate_limit::{contact_rate_limit_layer, login_rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router-wide switches that come from configuration rather than application state.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    /// Per-IP limits on login and contact; needs the peer address or a forwarding header.
    pub rate_limit_enabled: bool,
}

pub fn build_router(state: HttpState, settings: RouterSettings) -> Router {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let mut login = Router::new().route("/api/v1/auth/login", post(auth::login));
    let mut contact = Router::new().route("/api/v1/contacts", post(contacts::submit_contact));
    if settings.rate_limit_enabled {
        login = login.layer(login_rate_limit_layer());
        contact = contact.layer(contact_rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/rss.xml", get(feed::rss))
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/articles/{slug}", get(articles::get_article))
        .route(
            "/api/v1/tags/{tag}/articles",
            get(articles::list_articles_by_tag),
        )
        .merge(login)
        .merge(contact)
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))
        .route(
            "/api/v1/admin/articles",
            get(admin::list_articles).post(admin::create_article),
        )
        .route(
            "/api/v1/admin/articles/{slug}",
            get(admin::get_article)
                .put(admin::update_article)
                .delete(admin::delete_article),
        )
        .route("/api/v1/admin/preview", post(admin::preview))
        .route(
            "/api/v1/admin/slugs/availability",
            get(admin::slug_availability),
        )
        .route(
            "/api/v1/admin/slugs/suggestion",
            get(admin::slug_suggestion),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
