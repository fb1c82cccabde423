use super::AuthCommandService;
use crate::{
    application::{
        dto::{SessionTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
        ports::session::SessionRecord,
    },
    domain::user::{Email, User},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: SessionTokenDto,
    pub user: UserDto,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        // A malformed address can never match a stored user.
        let email = Email::new(&command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self.open_session(&user).await?;
        tracing::info!(user_id = i64::from(user.id), "user logged in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn open_session(&self, user: &User) -> ApplicationResult<SessionTokenDto> {
        let token = self.token_codec.generate();
        let now = self.clock.now();
        let expires_at = now + self.session_ttl;

        // Tokens that are never presented again would otherwise stay forever.
        match self.session_store.purge_expired(now).await {
            Ok(0) => {}
            Ok(purged) => tracing::debug!(purged, "expired sessions purged"),
            Err(err) => tracing::warn!(error = %err, "failed to purge expired sessions"),
        }

        self.session_store
            .create(SessionRecord {
                token_digest: self.token_codec.digest(&token),
                user_id: user.id,
                created_at: now,
                expires_at,
            })
            .await?;

        Ok(SessionTokenDto {
            token,
            expires_at,
            expires_in: self.session_ttl.num_seconds(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        // Account state is only revealed to callers who know the password.
        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        Ok(user)
    }
}
