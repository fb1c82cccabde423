// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Raw generator output for a title; no uniqueness check.
    pub fn suggest(&self, title: &str) -> String {
        self.generator.slugify(title)
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", now.timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(&candidate)?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }

    /// Validates a manually entered slug and rejects it when another article owns it.
    pub async fn claim_slug(
        &self,
        raw: &str,
        owner: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let slug = ArticleSlug::new(raw)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(DomainError::Conflict(format!(
                "slug '{slug}' is already in use"
            ))),
            _ => Ok(slug),
        }
    }

    pub async fn is_available(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        Ok(self.read_repo.find_by_slug(slug).await?.is_none())
    }
}
