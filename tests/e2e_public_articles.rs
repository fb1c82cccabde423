// tests/e2e_public_articles.rs
use axum::http::StatusCode;

mod support;

use support::{ArticleBuilder, TestApp, assert_error_response, get_request, read_json};

fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new(1).slug("first").tags(&["剪定"]).build());
    app.articles.seed(ArticleBuilder::new(2).slug("second").tags(&["営業"]).build());
    app.articles.seed(
        ArticleBuilder::new(3)
            .slug("third")
            .tags(&["剪定", "営業"])
            .body("# 見出し\n\n本文です。<script>alert(1)</script>")
            .build(),
    );
    app.articles.seed(ArticleBuilder::new(4).slug("hidden-draft").tags(&["剪定"]).draft().build());
    app
}

fn slugs(json: &serde_json::Value) -> Vec<String> {
    json["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["slug"].as_str().unwrap().to_string())
        .collect()
}

/// 公開一覧は新しい順で、下書きを含まないことを確認する
#[tokio::test]
async fn list_returns_published_newest_first() {
    let app = seeded_app();

    let resp = app.send(get_request("/api/v1/articles", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;

    assert_eq!(slugs(&json), vec!["third", "second", "first"]);
    assert_eq!(json["has_more"], false);
    assert!(json.get("next_cursor").is_none());
}

/// カーソルで次ページを取得でき、重複や欠落がないことを確認する
#[tokio::test]
async fn cursor_pagination_walks_all_pages() {
    let app = seeded_app();

    let first = read_json(app.send(get_request("/api/v1/articles?limit=2", None)).await).await;
    assert_eq!(slugs(&first), vec!["third", "second"]);
    assert_eq!(first["has_more"], true);
    let cursor = first["next_cursor"].as_str().expect("cursor").to_string();

    let second = read_json(
        app.send(get_request(&format!("/api/v1/articles?limit=2&cursor={cursor}"), None))
            .await,
    )
    .await;
    assert_eq!(slugs(&second), vec!["first"]);
    assert_eq!(second["has_more"], false);
}

/// 壊れたカーソルは 400 Bad Request になる
#[tokio::test]
async fn malformed_cursor_is_rejected() {
    let app = seeded_app();
    let resp = app
        .send(get_request("/api/v1/articles?cursor=not-a-cursor", None))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 公開記事の詳細は描画済みかつサニタイズ済みの HTML を返す
#[tokio::test]
async fn article_detail_contains_sanitized_html() {
    let app = seeded_app();

    let resp = app.send(get_request("/api/v1/articles/third", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;

    let html = json["html"].as_str().unwrap();
    assert!(html.contains(r#"id="見出し""#), "{html}");
    assert!(html.contains(r#"class="anchor""#), "{html}");
    assert!(html.contains("見出し</h1>"), "{html}");
    assert!(!html.contains("<script"), "{html}");
    assert_eq!(json["tags"], serde_json::json!(["剪定", "営業"]));
}

/// 分解形 (NFD) で送られたスラグも合成形の記事に解決される
#[tokio::test]
async fn decomposed_slug_in_path_resolves() {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new(1).slug("\u{30AC}ーデン").build());

    // カ + 濁点 (U+30AB U+3099)
    let resp = app
        .send(get_request(
            "/api/v1/articles/%E3%82%AB%E3%82%99%E3%83%BC%E3%83%87%E3%83%B3",
            None,
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["slug"], "\u{30AC}ーデン");

    // ガ (U+30AC)
    let resp = app
        .send(get_request("/api/v1/articles/%E3%82%AC%E3%83%BC%E3%83%87%E3%83%B3", None))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// 下書きと存在しないスラグはどちらも 404 になる
#[tokio::test]
async fn drafts_and_unknown_slugs_are_not_found() {
    let app = seeded_app();

    let draft = app.send(get_request("/api/v1/articles/hidden-draft", None)).await;
    assert_error_response(draft, StatusCode::NOT_FOUND, "Not Found").await;

    let missing = app.send(get_request("/api/v1/articles/nope", None)).await;
    assert_error_response(missing, StatusCode::NOT_FOUND, "Not Found").await;
}

/// タグ別一覧は該当タグを持つ公開記事のみを返す
#[tokio::test]
async fn tag_listing_filters_by_tag() {
    let app = seeded_app();

    // 剪定 = %E5%89%AA%E5%AE%9A
    let resp = app
        .send(get_request("/api/v1/tags/%E5%89%AA%E5%AE%9A/articles", None))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(slugs(&json), vec!["third", "first"]);

    let empty = read_json(app.send(get_request("/api/v1/tags/unknown/articles", None)).await).await;
    assert!(slugs(&empty).is_empty());
}

/// ヘルスチェックは認証なしで 200 を返す
#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new();
    let resp = app.send(get_request("/health", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "ok");
}
