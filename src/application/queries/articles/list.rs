use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListCursor, ArticleListFilter, Tag},
        errors::DomainError,
    },
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub struct ListArticlesQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

pub struct ListArticlesByTagQuery {
    pub tag: String,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_published(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleSummaryDto>> {
        self.list_page(ArticleListFilter::published(), query.limit, query.cursor)
            .await
    }

    pub async fn list_by_tag(
        &self,
        query: ListArticlesByTagQuery,
    ) -> ApplicationResult<CursorPage<ArticleSummaryDto>> {
        let tag = Tag::new(&query.tag)?;
        self.list_page(
            ArticleListFilter::published_with_tag(tag),
            query.limit,
            query.cursor,
        )
        .await
    }

    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ApplicationResult<CursorPage<ArticleSummaryDto>> {
        let limit = normalize_limit(limit);
        let cursor = decode_cursor(cursor.as_deref())?;

        let (records, next_cursor) = self.read_repo.list_page(filter, limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(value) => value.min(MAX_LIMIT),
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ArticleListCursor>> {
    match token {
        Some(value) => match ArticleListCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}
