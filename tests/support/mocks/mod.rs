// tests/support/mocks/mod.rs
//! テスト用インメモリ実装の再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod contact_repo;
pub mod security;
pub mod time;
pub mod user_repo;

pub use article_repos::{FailingArticleRead, InMemoryArticles};
pub use contact_repo::InMemoryContacts;
pub use security::{PlainPasswordHasher, TEST_SECRET};
pub use time::{TickingClock, fixed_now};
pub use user_repo::InMemoryUsers;
