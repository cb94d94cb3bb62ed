//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`owner`] - 桌台设置
//! - [`tables`] - 空闲桌台与释放
//! - [`queue`] - 排队与叫号
//! - [`seating`] - 按人数入座

mod extract;
pub mod middleware;

pub mod health;
pub mod owner;
pub mod queue;
pub mod seating;
pub mod tables;

use axum::Router;
use http::HeaderName;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::core::ServerState;

pub use extract::ApiJson;
pub use crate::utils::AppResult;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(owner::router())
        .merge(tables::router())
        .merge(queue::router())
        .merge(seating::router())
}

/// Router with state and the HTTP middleware stack applied
pub fn build_router(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(middleware::REQUEST_ID_HEADER);

    build_app()
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
