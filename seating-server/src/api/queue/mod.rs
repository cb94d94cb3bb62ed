//! Queue API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/get_queue", get(handler::list))
        .route("/allocate_queue", post(handler::call))
}
