use super::AuthCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl AuthCommandService {
    /// Resolves a bearer token to the user owning the session.
    ///
    /// Expired sessions are revoked on sight so the store does not accumulate them.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let digest = self.token_codec.digest(token);
        let session = self
            .session_store
            .find(&digest)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired session"))?;

        if session.is_expired(self.clock.now()) {
            self.session_store.revoke(&digest).await?;
            return Err(ApplicationError::unauthorized("invalid or expired session"));
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired session"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email,
            session_digest: digest,
            expires_at: session.expires_at,
        })
    }
}
