// src/application/ports/session.rs
use crate::application::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub token_digest: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: SessionRecord) -> ApplicationResult<()>;

    async fn find(&self, token_digest: &str) -> ApplicationResult<Option<SessionRecord>>;

    /// Revoking an unknown session is not an error.
    async fn revoke(&self, token_digest: &str) -> ApplicationResult<()>;

    /// Drops every session expired at `now`; returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> ApplicationResult<u64>;
}
