use crate::domain::article::{Article, ArticleExcerpt, CoverUrl};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Full editable article, as seen by the admin area.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            tags: article.tags.to_strings(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt.map(ArticleExcerpt::into_inner),
            cover_url: article.cover_url.map(CoverUrl::into_inner),
            body: article.body.into_inner(),
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Card shown in public listings and tag pages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            tags: article.tags.to_strings(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt.map(ArticleExcerpt::into_inner),
            cover_url: article.cover_url.map(CoverUrl::into_inner),
            created_at: article.created_at,
        }
    }
}

/// Published article with its body rendered to sanitized HTML.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub html: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleViewDto {
    pub fn new(article: Article, html: String) -> Self {
        Self {
            id: article.id.into(),
            tags: article.tags.to_strings(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt.map(ArticleExcerpt::into_inner),
            cover_url: article.cover_url.map(CoverUrl::into_inner),
            html,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for AdminArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            published: article.published,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailabilityDto {
    pub slug: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugSuggestionDto {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreviewDto {
    pub html: String,
}
