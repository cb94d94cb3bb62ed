//! Queue API Handlers

use axum::{Json, extract::State};
use shared::models::{CallTicketRequest, FreeTables, QueueList};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /get_queue - 排队号码 (叫号顺序)
pub async fn list(State(state): State<ServerState>) -> Json<Vec<u64>> {
    Json(state.seating.queue())
}

/// POST /allocate_queue - 叫号入座
///
/// 响应: `[{"queue_list": [...]}, {"table_count": [...]}]`
pub async fn call(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<CallTicketRequest>,
) -> AppResult<Json<(QueueList, FreeTables)>> {
    let (queue_list, table_count) = state
        .seating
        .call_ticket(payload.queue_no, &payload.table_name)?;
    Ok(Json((QueueList { queue_list }, FreeTables { table_count })))
}
