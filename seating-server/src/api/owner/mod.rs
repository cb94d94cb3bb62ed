//! Owner API 模块 - 桌台数与每桌椅子数
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /owner | GET | 当前设置 + 空闲桌台 |
//! | /update_setting | POST | 更新设置并重建桌台池 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/owner", get(handler::get_owner))
        .route("/update_setting", post(handler::update_setting))
}
