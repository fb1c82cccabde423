use super::ArticleQueryService;
use crate::{
    application::{
        dto::{AdminArticleSummaryDto, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub const ADMIN_LIST_LIMIT: u32 = 50;

impl ArticleQueryService {
    pub async fn admin_list(&self) -> ApplicationResult<Vec<AdminArticleSummaryDto>> {
        let records = self.read_repo.list_recently_updated(ADMIN_LIST_LIMIT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Edit view; drafts included.
    pub async fn admin_get(&self, raw_slug: &str) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(raw_slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
