// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleSummaryDto, ArticleViewDto, CursorPage},
    queries::articles::{GetArticleBySlugQuery, ListArticlesByTagQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Page size; defaults to 20, capped at 100.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Opaque `next_cursor` from the previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<ArticleSummaryDto>> for ArticleListResponse {
    fn from(page: CursorPage<ArticleSummaryDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = ArticleListResponse),
        (status = 400, description = "Malformed cursor.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_published(ListArticlesQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article with rendered HTML.", body = ArticleViewDto),
        (status = 404, description = "Unknown slug or unpublished article.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .services
        .article_queries
        .get_published_view(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{tag}/articles",
    params(
        ("tag" = String, Path, description = "Tag name"),
        ArticleListParams
    ),
    responses(
        (status = 200, description = "Published articles carrying the tag.", body = ArticleListResponse),
        (status = 400, description = "Blank tag or malformed cursor.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_by_tag(ListArticlesByTagQuery {
            tag,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}
