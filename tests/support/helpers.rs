// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    FailingArticleRead, InMemoryArticles, InMemoryContacts, InMemoryUsers, PlainPasswordHasher,
    TEST_SECRET, TickingClock,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use gardenworks::application::commands::auth::BootstrapAdminCommand;
use gardenworks::application::ports::security::SessionTokenCodec as _;
use gardenworks::application::queries::feed::FeedSettings;
use gardenworks::application::services::{ApplicationServices, ServiceDependencies};
use gardenworks::domain::article::ArticleReadRepository;
use gardenworks::infrastructure::markdown::SanitizingMarkdownRenderer;
use gardenworks::infrastructure::security::session_store::InMemorySessionStore;
use gardenworks::infrastructure::security::token::HmacSessionTokenCodec;
use gardenworks::infrastructure::util::UnicodeSlugGenerator;
use gardenworks::presentation::http::routes::{RouterSettings, build_router};
use gardenworks::presentation::http::state::HttpState;
use serde_json::Value;
use tower::util::ServiceExt as _;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Moss&Stone2024";
pub const SESSION_TTL_SECS: i64 = 3600;

/// インメモリ実装で組み立てたアプリケーション。テストから各ストアを直接参照できる。
pub struct TestApp {
    pub router: axum::Router,
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub users: Arc<InMemoryUsers>,
    pub contacts: Arc<InMemoryContacts>,
    pub sessions: Arc<InMemorySessionStore>,
    pub clock: Arc<TickingClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_read_repo(None)
    }

    /// 記事の読み取りがすべて失敗する構成（500 応答の検証用）
    pub fn with_failing_reads() -> Self {
        Self::with_read_repo(Some(Arc::new(FailingArticleRead)))
    }

    fn with_read_repo(read_override: Option<Arc<dyn ArticleReadRepository>>) -> Self {
        let articles = Arc::new(InMemoryArticles::default());
        let users = Arc::new(InMemoryUsers::default());
        let contacts = Arc::new(InMemoryContacts::default());
        let sessions = Arc::new(InMemorySessionStore::new());
        let clock = Arc::new(TickingClock::default());

        let article_read_repo: Arc<dyn ArticleReadRepository> =
            read_override.unwrap_or_else(|| articles.clone() as Arc<dyn ArticleReadRepository>);

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: users.clone(),
            article_write_repo: articles.clone(),
            article_read_repo,
            contact_repo: contacts.clone(),
            password_hasher: Arc::new(PlainPasswordHasher),
            session_store: sessions.clone(),
            token_codec: Arc::new(HmacSessionTokenCodec::new(TEST_SECRET).expect("codec")),
            renderer: Arc::new(SanitizingMarkdownRenderer::new()),
            slugger: Arc::new(UnicodeSlugGenerator),
            clock: clock.clone(),
            session_ttl: chrono::Duration::seconds(SESSION_TTL_SECS),
            feed: FeedSettings::default(),
        }));

        let state = HttpState {
            services: Arc::clone(&services),
            site_url: None,
        };
        let router = build_router(
            state,
            RouterSettings {
                allowed_origins: vec!["http://localhost:3000".into()],
                rate_limit_enabled: false,
            },
        );

        Self {
            router,
            services,
            articles,
            users,
            contacts,
            sessions,
            clock,
        }
    }

    /// 管理者の認証情報でログインし、ベアラートークンを返す（作成は済んでいる前提）
    pub async fn login(&self) -> String {
        let resp = self
            .send(json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                &serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        read_json(resp).await["token"]["token"]
            .as_str()
            .expect("token")
            .to_string()
    }

    /// セッションストアに保存されるダイジェスト
    pub fn session_digest(&self, token: &str) -> String {
        HmacSessionTokenCodec::new(TEST_SECRET)
            .expect("codec")
            .digest(token)
    }

    /// リクエストを 1 件ルーターに流す
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router")
    }

    /// 管理者を作成してログインし、ベアラートークンを返す
    pub async fn login_admin(&self) -> String {
        self.services
            .auth_commands
            .bootstrap_admin(BootstrapAdminCommand {
                email: ADMIN_EMAIL.into(),
                password: ADMIN_PASSWORD.into(),
            })
            .await
            .expect("bootstrap admin");
        self.login().await
    }
}

pub fn make_test_router() -> axum::Router {
    TestApp::new().router
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

pub async fn read_body(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = read_body(resp).await;
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub async fn read_text(resp: Response) -> String {
    String::from_utf8(read_body(resp).await).expect("utf-8 body")
}

/// ErrorResponse 形式の JSON と期待するステータスを検証する
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
