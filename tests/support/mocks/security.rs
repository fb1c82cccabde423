// tests/support/mocks/security.rs
use async_trait::async_trait;
use gardenworks::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

pub const TEST_SECRET: &[u8] = b"test-session-secret-test-session-secret";

/// argon2 を使わない高速なハッシャ。`plain:` 接頭辞を付けるだけ。
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
