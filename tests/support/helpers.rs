// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use tsuzuri_core::application::{
    ports::{security::SessionVerifier, time::Clock, util::SlugGenerator},
    queries::articles::ListingPolicy,
    services::ApplicationServices,
};
use tsuzuri_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use tsuzuri_core::infrastructure::util::DefaultSlugGenerator;
use tsuzuri_core::presentation::http::{routes::build_router, state::HttpState};

pub const SESSION_COOKIE: &str = "session";

/// テスト用アプリケーション。ルーターと背後のストアを保持する。
pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<mocks::InMemoryArticleStore>,
}

/// ルーター構築時に差し替え可能な部品
pub struct TestAppOptions {
    pub read_repo: Option<Arc<dyn ArticleReadRepository>>,
    pub clock: Arc<dyn Clock>,
    pub policy: ListingPolicy,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            read_repo: None,
            clock: Arc::new(mocks::TickingClock::default()),
            policy: ListingPolicy::default(),
        }
    }
}

pub fn build_test_state(
    store: Arc<mocks::InMemoryArticleStore>,
    options: TestAppOptions,
) -> HttpState {
    let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let read_repo = options
        .read_repo
        .unwrap_or_else(|| store as Arc<dyn ArticleReadRepository>);
    let verifier: Arc<dyn SessionVerifier> = Arc::new(mocks::StaticSessionVerifier);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        verifier,
        options.clock,
        slugger,
        options.policy,
    ));

    HttpState {
        services,
        session_cookie_name: Arc::from(SESSION_COOKIE),
    }
}

pub fn make_test_app_with(options: TestAppOptions) -> TestApp {
    let store = mocks::InMemoryArticleStore::new();
    store.add_author(mocks::alice_id(), "alice");
    store.add_author(mocks::bob_id(), "bob");
    let state = build_test_state(Arc::clone(&store), options);
    let router = build_router(state, &["http://localhost:3000".to_string()]);
    TestApp { router, store }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(TestAppOptions::default())
}

pub fn make_test_router() -> axum::Router {
    make_test_app().router
}

/// リクエストを送り、ステータスと JSON ボディを返す
pub async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(request).await.expect("router call");
    let status = resp.status();
    (status, body_json(resp).await)
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
