//! Table API Handlers

use axum::{Json, extract::State};
use shared::models::{ReleaseTableRequest, TableStatus};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /current_table_count - 空闲桌台 (分配顺序)
pub async fn free_tables(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.seating.free_tables()?))
}

/// POST /table_unallocate - 释放桌台
pub async fn release(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ReleaseTableRequest>,
) -> AppResult<Json<Vec<String>>> {
    let free = state.seating.release_table(payload.table_name.trim())?;
    Ok(Json(free))
}

/// GET /tables - 所有桌台及其状态
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableStatus>>> {
    Ok(Json(state.seating.table_statuses()?))
}
