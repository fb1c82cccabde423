// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use gardenworks::domain::article::{
    Article, ArticleId, ArticleListCursor, ArticleListFilter, ArticleReadRepository, ArticleSlug,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use gardenworks::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/* -------------------------------- InMemoryArticles -------------------------------- */

/// Postgres 実装と同じ規則（スラグ一意・楽観ロック・キーセットページング）を持つ記事ストア
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticles {
    /// 既存記事を直接投入する
    pub fn seed(&self, article: Article) {
        let mut articles = self.articles.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(i64::from(article.id));
        articles.push(article);
    }

    pub fn all(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn by_slug(&self, slug: &str) -> Option<Article> {
        self.all().into_iter().find(|a| a.slug.as_str() == slug)
    }
}

fn slug_taken(articles: &[Article], slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
    articles
        .iter()
        .any(|a| &a.slug == slug && Some(a.id) != except)
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if slug_taken(&articles, &new.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let article = Article {
            id: ArticleId::new(*next_id)?,
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            cover_url: new.cover_url,
            tags: new.tags,
            body: new.body,
            published: new.published,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(slug) = &update.slug {
            if slug_taken(&articles, slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id && a.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(cover_url) = update.cover_url {
            article.cover_url = cover_url;
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(published) = update.published {
            article.published = published;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.all().into_iter().find(|a| a.id == id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.all().into_iter().find(|a| &a.slug == slug))
    }

    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let mut matching: Vec<Article> = self
            .all()
            .into_iter()
            .filter(|a| filter.include_drafts || a.published)
            .filter(|a| filter.tag.as_ref().is_none_or(|tag| a.tags.contains(tag)))
            .filter(|a| {
                cursor.as_ref().is_none_or(|c| {
                    (a.created_at, i64::from(a.id)) < (c.created_at, c.id)
                })
            })
            .collect();
        matching.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });

        let limit = limit.clamp(1, 100) as usize;
        let next_cursor = if matching.len() > limit {
            matching.truncate(limit);
            matching
                .last()
                .map(|last| ArticleListCursor::new(last.created_at, last.id.into()))
        } else {
            None
        };
        Ok((matching, next_cursor))
    }

    async fn list_recently_updated(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut all = self.all();
        all.sort_by(|a, b| {
            (b.updated_at, i64::from(b.id)).cmp(&(a.updated_at, i64::from(a.id)))
        });
        all.truncate(limit as usize);
        Ok(all)
    }
}

/* -------------------------------- FailingArticleRead -------------------------------- */

/// すべての読み取りが永続化エラーになるリポジトリ（500 応答の検証用）
pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_page(
        &self,
        _filter: ArticleListFilter,
        _limit: u32,
        _cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_recently_updated(&self, _limit: u32) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
