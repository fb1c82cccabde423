use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    security::{PasswordHasher, SessionTokenCodec},
    session::SessionStore,
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct AuthCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) token_codec: Arc<dyn SessionTokenCodec>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) session_ttl: Duration,
}

impl AuthCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        token_codec: Arc<dyn SessionTokenCodec>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_store,
            token_codec,
            clock,
            session_ttl,
        }
    }
}
