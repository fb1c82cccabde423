// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleExcerpt, ArticleTitle, CoverUrl, NewArticle, TagList},
};

pub struct CreateArticleCommand {
    pub title: String,
    /// Manual override; derived from the title when absent or blank.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
    pub publish: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    cover_url: Option<String>,
    tags: Vec<String>,
    body: Option<String>,
    publish: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            excerpt: self.excerpt,
            cover_url: self.cover_url,
            tags: self.tags,
            body: self.body.ok_or("body is required")?,
            publish: self.publish,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let excerpt = ArticleExcerpt::parse(command.excerpt);
        let cover_url = CoverUrl::parse(command.cover_url)?;
        let tags = TagList::new(command.tags);
        let now = self.clock.now();

        let slug = match command.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(manual) => self.slug_service.claim_slug(manual, None).await?,
            None => self.slug_service.generate_unique_slug(&title, now).await?,
        };

        let new_article = NewArticle {
            title,
            slug,
            excerpt,
            cover_url,
            tags,
            body,
            published: command.publish,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = i64::from(created.id),
            slug = %created.slug,
            published = created.published,
            user_id = i64::from(actor.id),
            "article created"
        );
        Ok(created.into())
    }
}
