use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleViewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Public article page. Drafts are indistinguishable from missing articles.
    pub async fn get_published_view(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleViewDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(Article::is_publicly_visible)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let html = self.renderer.render(article.body.as_str());
        Ok(ArticleViewDto::new(article, html))
    }
}
