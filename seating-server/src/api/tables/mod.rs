//! Table API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/current_table_count", get(handler::free_tables))
        .route("/table_unallocate", post(handler::release))
        .route("/tables", get(handler::list))
}
