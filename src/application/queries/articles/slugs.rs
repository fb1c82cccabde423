use super::ArticleQueryService;
use crate::{
    application::{
        dto::{SlugAvailabilityDto, SlugSuggestionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct SlugAvailabilityQuery {
    pub slug: String,
}

pub struct SuggestSlugQuery {
    pub title: String,
}

impl ArticleQueryService {
    pub async fn slug_availability(
        &self,
        query: SlugAvailabilityQuery,
    ) -> ApplicationResult<SlugAvailabilityDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let available = self.slug_service.is_available(&slug).await?;
        Ok(SlugAvailabilityDto {
            slug: slug.into_inner(),
            available,
        })
    }

    pub fn suggest_slug(&self, query: SuggestSlugQuery) -> ApplicationResult<SlugSuggestionDto> {
        if query.title.trim().is_empty() {
            return Err(ApplicationError::validation("title cannot be empty"));
        }
        Ok(SlugSuggestionDto {
            slug: self.slug_service.suggest(&query.title),
        })
    }
}
