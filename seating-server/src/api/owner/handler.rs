//! Owner API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{OwnerView, Settings, SettingsUpdate};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /owner - 获取设置与空闲桌台
pub async fn get_owner(State(state): State<ServerState>) -> AppResult<Json<OwnerView>> {
    let view = state.seating.owner_view()?;
    Ok(Json(view))
}

/// POST /update_setting - 更新设置
///
/// 所有桌台重置为空闲，排队不受影响
pub async fn update_setting(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<SettingsUpdate>,
) -> AppResult<(StatusCode, Json<Settings>)> {
    let settings = state.seating.update_settings(payload)?;
    Ok((StatusCode::CREATED, Json(settings)))
}
