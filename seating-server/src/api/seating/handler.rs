//! Seating API Handlers

use axum::{Json, extract::State};
use shared::models::{HeadcountRequest, SeatingPlan};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /update_headcount - 按人数分配桌台
///
/// 桌台不足时剩余人数进入排队，响应中带 `queue_no`。
/// 响应为单元素数组。
pub async fn seat_party(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<HeadcountRequest>,
) -> AppResult<Json<Vec<SeatingPlan>>> {
    let plan = state.seating.seat_party(payload.headcount)?;
    Ok(Json(vec![plan]))
}
