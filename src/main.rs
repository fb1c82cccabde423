use gardenworks::application::{
    commands::auth::BootstrapAdminCommand,
    ports::{
        markdown::MarkdownRenderer,
        security::{PasswordHasher, SessionTokenCodec},
        session::SessionStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use gardenworks::config::AppConfig;
use gardenworks::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    contact::ContactRepository,
    user::UserRepository,
};
use gardenworks::infrastructure::{
    database,
    markdown::SanitizingMarkdownRenderer,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresContactRepository,
        PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, postgres_session_store::PostgresSessionStore,
        token::HmacSessionTokenCodec,
    },
    time::SystemClock,
    util::{TransliteratingSlugGenerator, UnicodeSlugGenerator},
};
use gardenworks::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = ?err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let contact_repo: Arc<dyn ContactRepository> =
        Arc::new(PostgresContactRepository::new(pool.clone()));
    let session_store: Arc<dyn SessionStore> = Arc::new(PostgresSessionStore::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_codec: Arc<dyn SessionTokenCodec> =
        Arc::new(HmacSessionTokenCodec::new(config.session_secret())?);
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(SanitizingMarkdownRenderer::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = if config.slug_transliterate() {
        Arc::new(TransliteratingSlugGenerator)
    } else {
        Arc::new(UnicodeSlugGenerator)
    };

    let session_ttl = chrono::Duration::from_std(config.session_ttl())
        .context("SESSION_TTL_SECONDS out of range")?;

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
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
        feed: config.feed().clone(),
    }));

    if let Some(admin) = config.admin_bootstrap() {
        let seeded = services
            .auth_commands
            .bootstrap_admin(BootstrapAdminCommand {
                email: admin.email.clone(),
                password: admin.password.clone(),
            })
            .await?;
        if seeded.is_none() {
            tracing::debug!("users already present; skipping administrator bootstrap");
        }
    }

    let state = HttpState {
        services,
        site_url: config.site_url().map(str::to_string),
    };

    let app = build_router(
        state,
        RouterSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit_enabled: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // Peer addresses feed the per-IP rate limiter when no forwarding header is present.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
