use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        Article, ArticleBody, ArticleExcerpt, ArticleTitle, ArticleUpdate, CoverUrl, TagList,
    },
};

/// Edit-form submission. `None` leaves a field untouched; for `excerpt` and
/// `cover_url` an empty string clears the stored value.
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub new_slug: Option<String>,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub body: Option<String>,
    pub publish: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_by_slug(&command.slug).await?;
        let now = self.clock.now();

        let UpdateArticleCommand {
            slug: _,
            title,
            new_slug,
            excerpt,
            cover_url,
            tags,
            body,
            publish,
        } = command;

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let body_opt = body.map(ArticleBody::new).transpose()?;

        let mut update = ArticleUpdate::new(article.id, article.updated_at);
        update = Self::apply_content_updates(&mut article, title_opt, body_opt, update, now);

        if let Some(raw) = new_slug.as_deref().filter(|s| !s.trim().is_empty()) {
            let slug = self.slug_service.claim_slug(raw, Some(article.id)).await?;
            if slug != article.slug {
                update = update.with_slug(slug);
            }
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(ArticleExcerpt::parse(Some(excerpt)));
        }
        if let Some(cover_url) = cover_url {
            update = update.with_cover_url(CoverUrl::parse(Some(cover_url))?);
        }
        if let Some(tags) = tags {
            update = update.with_tags(TagList::new(tags));
        }
        if let Some(publish_flag) = publish.filter(|flag| *flag != article.published) {
            article.set_published(publish_flag, now);
            update = update.with_published(publish_flag);
        }

        if update.is_empty() {
            return Ok(article.into());
        }
        update.set_updated_at(now);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = i64::from(updated.id),
            slug = %updated.slug,
            published = updated.published,
            user_id = i64::from(actor.id),
            "article updated"
        );
        Ok(updated.into())
    }

    fn apply_content_updates(
        article: &mut Article,
        title_opt: Option<ArticleTitle>,
        body_opt: Option<ArticleBody>,
        mut update: ArticleUpdate,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ArticleUpdate {
        if title_opt.is_none() && body_opt.is_none() {
            return update;
        }

        let new_title = title_opt.unwrap_or_else(|| article.title.clone());
        let new_body = body_opt.unwrap_or_else(|| article.body.clone());
        article.set_content(new_title.clone(), new_body.clone(), now);
        update = update.with_title(new_title).with_body(new_body);
        update
    }
}
