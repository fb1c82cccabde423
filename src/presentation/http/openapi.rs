// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::list_articles_by_tag,
        crate::presentation::http::controllers::feed::rss,
        crate::presentation::http::controllers::contacts::submit_contact,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::session,
        crate::presentation::http::controllers::admin::list_articles,
        crate::presentation::http::controllers::admin::create_article,
        crate::presentation::http::controllers::admin::get_article,
        crate::presentation::http::controllers::admin::update_article,
        crate::presentation::http::controllers::admin::delete_article,
        crate::presentation::http::controllers::admin::preview,
        crate::presentation::http::controllers::admin::slug_availability,
        crate::presentation::http::controllers::admin::slug_suggestion
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::admin::AdminArticleListResponse,
            crate::presentation::http::controllers::admin::CreateArticleRequest,
            crate::presentation::http::controllers::admin::UpdateArticleRequest,
            crate::presentation::http::controllers::admin::TagsInput,
            crate::presentation::http::controllers::admin::PreviewRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::contacts::ContactRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleViewDto,
            crate::application::dto::AdminArticleSummaryDto,
            crate::application::dto::PreviewDto,
            crate::application::dto::SlugAvailabilityDto,
            crate::application::dto::SlugSuggestionDto,
            crate::application::dto::SessionTokenDto,
            crate::application::dto::SessionDto,
            crate::application::dto::UserDto,
            crate::application::dto::ContactReceiptDto
        )
    ),
    tags(
        (name = "Articles", description = "Public article listing and reading"),
        (name = "Feed", description = "RSS syndication"),
        (name = "Contact", description = "Visitor enquiries"),
        (name = "Auth", description = "Administrator sessions"),
        (name = "Admin", description = "Article authoring"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Gardenworks API",
        description = "Blog backend for a gardening business: public articles, RSS, contact form and authoring",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.description = Some("Opaque session token returned by /api/v1/auth/login".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route(OPENAPI_JSON_PATH, get(serve_openapi))
        .merge(redoc)
}
