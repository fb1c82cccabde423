// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues opaque bearer tokens and derives the digest under which a session is stored.
///
/// Only digests are persisted; a leaked sessions table does not yield usable tokens.
pub trait SessionTokenCodec: Send + Sync {
    fn generate(&self) -> String;
    fn digest(&self, token: &str) -> String;
}
