//! 集成测试共用工具：临时工作目录 + 进程内路由

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use seating_server::{Config, ServerState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub dir: TempDir,
    pub state: ServerState,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        Self::in_dir(dir)
    }

    /// Start (or restart) against an existing work dir
    pub fn in_dir(dir: TempDir) -> Self {
        let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
        let state = ServerState::initialize(&config).expect("initialize state");
        let router = seating_server::api::build_router(state.clone());
        Self { dir, state, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    /// Configure the venue through the HTTP surface
    pub async fn configure(&self, tables: i64, chairs: i64) -> Value {
        let (status, body) = self
            .post(
                "/update_setting",
                serde_json::json!({ "tables": tables, "chairsPerTable": chairs }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "configure failed: {body}");
        body
    }
}
