// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PreviewMarkdownCommand, UpdateArticleCommand,
    },
    dto::{AdminArticleSummaryDto, ArticleDto, PreviewDto, SlugAvailabilityDto, SlugSuggestionDto},
    queries::articles::{SlugAvailabilityQuery, SuggestSlugQuery},
};
use crate::domain::article::TagList;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Tags as a JSON array or as the comma-separated text of the editor field.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Text(String),
}

impl TagsInput {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags,
            Self::Text(text) => TagList::parse(&text).to_strings(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    /// Derived from the title when omitted or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Option<TagsInput>,
    pub body: String,
    #[serde(default)]
    pub published: bool,
}

/// Omitted fields are left untouched. An empty `excerpt` or `cover_url` clears it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    /// Renames the article; the current slug is kept when omitted.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Option<TagsInput>,
    pub body: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteArticleParams {
    /// Must be `true`; deletion cannot be undone.
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PreviewRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugAvailabilityParams {
    pub slug: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugSuggestionParams {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminArticleListResponse {
    pub items: Vec<AdminArticleSummaryDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "Latest 50 articles by update time, drafts included.", body = AdminArticleListResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<AdminArticleListResponse>> {
    state
        .services
        .article_queries
        .admin_list()
        .await
        .into_http()
        .map(|items| Json(AdminArticleListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        cover_url: payload.cover_url,
        tags: payload.tags.map(TagsInput::into_vec).unwrap_or_default(),
        body: payload.body,
        publish: payload.published,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Editable article.", body = ArticleDto),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .admin_get(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{slug}",
    params(("slug" = String, Path, description = "Current article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse),
        (status = 409, description = "Slug taken or concurrent edit.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        slug,
        title: payload.title,
        new_slug: payload.slug,
        excerpt: payload.excerpt,
        cover_url: payload.cover_url,
        tags: payload.tags.map(TagsInput::into_vec),
        body: payload.body,
        publish: payload.published,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        DeleteArticleParams
    ),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 400, description = "Deletion not confirmed.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Query(params): Query<DeleteArticleParams>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(
            &user,
            DeleteArticleCommand {
                slug,
                confirmed: params.confirm,
            },
        )
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Sanitized HTML exactly as the public page renders it.", body = PreviewDto),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn preview(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<PreviewRequest>,
) -> Json<PreviewDto> {
    Json(
        state
            .services
            .article_commands
            .preview(PreviewMarkdownCommand {
                content: payload.content,
            }),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs/availability",
    params(SlugAvailabilityParams),
    responses(
        (status = 200, description = "Normalized slug and whether it is free.", body = SlugAvailabilityDto),
        (status = 400, description = "Slug contains invalid characters.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn slug_availability(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<SlugAvailabilityParams>,
) -> HttpResult<Json<SlugAvailabilityDto>> {
    state
        .services
        .article_queries
        .slug_availability(SlugAvailabilityQuery { slug: params.slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs/suggestion",
    params(SlugSuggestionParams),
    responses(
        (status = 200, description = "Slug derived from the title.", body = SlugSuggestionDto),
        (status = 400, description = "Blank title.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn slug_suggestion(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<SlugSuggestionParams>,
) -> HttpResult<Json<SlugSuggestionDto>> {
    state
        .services
        .article_queries
        .suggest_slug(SuggestSlugQuery {
            title: params.title,
        })
        .into_http()
        .map(Json)
}
