use super::{AuthCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash},
};

/// Initial administrator, seeded from configuration on startup.
pub struct BootstrapAdminCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    /// Creates the administrator account only while no user exists yet.
    ///
    /// Returns `None` when the store already holds users.
    pub async fn bootstrap_admin(
        &self,
        command: BootstrapAdminCommand,
    ) -> ApplicationResult<Option<UserDto>> {
        if self.user_repo.count().await? > 0 {
            return Ok(None);
        }

        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let hashed = self.password_hasher.hash(&command.password).await?;

        let user = self
            .user_repo
            .insert(NewUser::new(email, PasswordHash::new(hashed)?, self.clock.now()))
            .await?;
        tracing::info!(user_id = i64::from(user.id), email = %user.email, "seeded administrator account");
        Ok(Some(user.into()))
    }
}
