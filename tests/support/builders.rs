// tests/support/builders.rs
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;
use gardenworks::domain::article::*;

/// リポジトリへ直接投入する記事を組み立てる
pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    tags: Vec<String>,
    body: String,
    published: bool,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("記事 {id}"),
            slug: format!("article-{id}"),
            excerpt: None,
            tags: Vec::new(),
            body: format!("本文 {id}"),
            published: true,
            created_at: fixed_now() - chrono::Duration::days(30) + chrono::Duration::hours(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            excerpt: ArticleExcerpt::parse(self.excerpt),
            cover_url: None,
            tags: TagList::new(self.tags),
            body: ArticleBody::new(self.body).unwrap(),
            published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
