// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use shiori::application::ports::{time::Clock, upload::ImageUploader, util::SlugGenerator};
use shiori::application::services::{ApplicationServices, UploadFailurePolicy};
use shiori::infrastructure::{
    database,
    repositories::{
        SqliteCategoryRepository, SqlitePostReadRepository, SqlitePostWriteRepository,
    },
    util::RegexSlugGenerator,
};
use shiori::presentation::http::{routes::build_router, state::HttpState};
use sqlx::SqlitePool;
use std::sync::Arc;

/// マイグレーション済みのインメモリ SQLite
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}

pub fn build_services(
    pool: &Arc<SqlitePool>,
    uploader: Arc<dyn ImageUploader>,
    upload_policy: UploadFailurePolicy,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::StepClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator::default());

    Arc::new(ApplicationServices::new(
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(pool))),
        Arc::new(SqlitePostReadRepository::new(Arc::clone(pool))),
        Arc::new(SqliteCategoryRepository::new(Arc::clone(pool))),
        uploader,
        clock,
        slugger,
        upload_policy,
    ))
}

/// 実 SQLite と固定 URL のアップローダで組み立てたサービス
pub async fn build_test_services() -> Arc<ApplicationServices> {
    let pool = memory_pool().await;
    build_services(
        &pool,
        Arc::new(mocks::StaticUploader("https://cdn.example.com/blog_images/a.png")),
        UploadFailurePolicy::Fail,
    )
}

/// 本番と同じ 10 MiB のアップロード上限
pub const TEST_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub async fn build_test_state() -> HttpState {
    HttpState {
        services: build_test_services().await,
        allowed_origins: Arc::from(Vec::<String>::new()),
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
    }
}

pub async fn make_test_router() -> axum::Router {
    build_router(build_test_state().await)
}

/// アップロード上限だけを差し替えたルータ
pub async fn make_test_router_with_upload_limit(max_upload_bytes: usize) -> axum::Router {
    let state = HttpState {
        max_upload_bytes,
        ..build_test_state().await
    };
    build_router(state)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
