// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteArticleCommand {
    pub slug: String,
    /// Deletion cannot be undone; callers must pass through an explicit confirmation.
    pub confirmed: bool,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        if !command.confirmed {
            return Err(ApplicationError::validation(
                "article deletion must be explicitly confirmed",
            ));
        }

        let article = self.load_by_slug(&command.slug).await?;
        self.write_repo.delete(article.id).await?;

        tracing::info!(
            article_id = i64::from(article.id),
            slug = %article.slug,
            user_id = i64::from(actor.id),
            "article deleted"
        );
        Ok(())
    }
}
