use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::storage::StorageError;

/// Seating errors
#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("Settings not configured")]
    NotConfigured,

    #[error("Settings {0} not found")]
    SettingsNotFound(String),

    #[error("Tables or chairs per table must be at least one!")]
    InvalidSettings,

    #[error("Headcount must be at least one person!")]
    InvalidHeadcount,

    #[error("{field} must be at most {max}")]
    OutOfRange { field: &'static str, max: i64 },

    #[error("Queue number {0} not found")]
    TicketNotFound(i64),

    #[error("Table {0} not found")]
    TableNotFound(String),

    #[error("Table {0} is already free")]
    TableAlreadyFree(String),

    #[error("Table {0} is not free")]
    TableNotFree(String),

    #[error("Table {0} listed more than once")]
    DuplicateTable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type SeatingResult<T> = Result<T, SeatingError>;

impl SeatingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatingError::NotConfigured => ErrorCode::SettingsNotConfigured,
            SeatingError::SettingsNotFound(_) => ErrorCode::SettingsNotFound,
            SeatingError::InvalidSettings => ErrorCode::InvalidSettings,
            SeatingError::InvalidHeadcount => ErrorCode::InvalidHeadcount,
            SeatingError::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            SeatingError::TicketNotFound(_) => ErrorCode::QueueTicketNotFound,
            SeatingError::TableNotFound(_) => ErrorCode::TableNotFound,
            SeatingError::TableAlreadyFree(_) => ErrorCode::TableAlreadyFree,
            SeatingError::TableNotFree(_) => ErrorCode::TableNotFree,
            SeatingError::DuplicateTable(_) => ErrorCode::ValidationFailed,
            SeatingError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            // 不向调用方暴露存储细节
            SeatingError::Storage(e) => {
                tracing::error!(error = %e, "Seating storage failure");
                AppError::new(code)
            }
            SeatingError::TicketNotFound(ticket) => {
                AppError::with_message(code, message).with_detail("queue_no", ticket)
            }
            SeatingError::TableNotFound(name)
            | SeatingError::TableAlreadyFree(name)
            | SeatingError::TableNotFree(name)
            | SeatingError::DuplicateTable(name) => {
                AppError::with_message(code, message).with_detail("table_name", name)
            }
            _ => AppError::with_message(code, message),
        }
    }
}
