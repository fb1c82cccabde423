// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, auth::AuthCommandService,
            contacts::ContactCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{
            markdown::MarkdownRenderer,
            security::{PasswordHasher, SessionTokenCodec},
            session::SessionStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService,
            feed::{FeedQueryService, FeedSettings},
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        contact::ContactRepository,
        user::UserRepository,
    },
};

/// Adapters the application layer is assembled from.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub session_store: Arc<dyn SessionStore>,
    pub token_codec: Arc<dyn SessionTokenCodec>,
    pub renderer: Arc<dyn MarkdownRenderer>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub clock: Arc<dyn Clock>,
    pub session_ttl: Duration,
    pub feed: FeedSettings,
}

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub feed_queries: Arc<FeedQueryService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            user_repo,
            article_write_repo,
            article_read_repo,
            contact_repo,
            password_hasher,
            session_store,
            token_codec,
            renderer,
            slugger,
            clock,
            session_ttl,
            feed,
        } = deps;

        let auth_commands = Arc::new(AuthCommandService::new(
            user_repo,
            password_hasher,
            session_store,
            token_codec,
            Arc::clone(&clock),
            session_ttl,
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            slugger,
        ));

        // Preview and public pages share one renderer instance.
        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&renderer),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            slug_service,
            renderer,
        ));

        let contact_commands = Arc::new(ContactCommandService::new(
            contact_repo,
            Arc::clone(&clock),
        ));

        let feed_queries = Arc::new(FeedQueryService::new(article_read_repo, clock, feed));

        Self {
            auth_commands,
            article_commands,
            article_queries,
            contact_commands,
            feed_queries,
        }
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.auth_commands.authenticate(token).await
    }
}
