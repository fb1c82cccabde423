// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, CoverUrl, TagList,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<ArticleExcerpt>,
    pub cover_url: Option<CoverUrl>,
    pub tags: TagList,
    pub body: ArticleBody,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Whether anonymous visitors may see this article.
    pub fn is_publicly_visible(&self) -> bool {
        self.published
    }

    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        if self.published != published {
            self.published = published;
            self.updated_at = now;
        }
    }

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<ArticleExcerpt>,
    pub cover_url: Option<CoverUrl>,
    pub tags: TagList,
    pub body: ArticleBody,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied with optimistic concurrency on `original_updated_at`.
///
/// `excerpt` and `cover_url` are doubly optional: `Some(None)` clears the field.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub excerpt: Option<Option<ArticleExcerpt>>,
    pub cover_url: Option<Option<CoverUrl>>,
    pub tags: Option<TagList>,
    pub body: Option<ArticleBody>,
    pub published: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            cover_url: None,
            tags: None,
            body: None,
            published: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<ArticleExcerpt>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_cover_url(mut self, cover_url: Option<CoverUrl>) -> Self {
        self.cover_url = Some(cover_url);
        self
    }

    pub fn with_tags(mut self, tags: TagList) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.excerpt.is_none()
            && self.cover_url.is_none()
            && self.tags.is_none()
            && self.body.is_none()
            && self.published.is_none()
    }
}
