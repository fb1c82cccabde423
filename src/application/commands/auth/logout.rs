use super::AuthCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl AuthCommandService {
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.session_store.revoke(&actor.session_digest).await?;
        tracing::info!(user_id = i64::from(actor.id), "user logged out");
        Ok(())
    }
}
