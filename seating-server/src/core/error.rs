use thiserror::Error;

use crate::seating::SeatingError;

/// 启动与运行期错误 (不经过 HTTP 处理器)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("座位服务初始化失败: {0}")]
    Seating(#[from] SeatingError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
