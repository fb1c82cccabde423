use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor, ArticleSlug, Tag};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub include_drafts: bool,
    pub tag: Option<Tag>,
}

impl ArticleListFilter {
    pub fn published() -> Self {
        Self::default()
    }

    pub fn published_with_tag(tag: Tag) -> Self {
        Self {
            include_drafts: false,
            tag: Some(tag),
        }
    }
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// Newest `created_at` first; returns the cursor for the next page when more rows exist.
    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;

    /// Drafts included, most recently updated first.
    async fn list_recently_updated(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
