//! Unified error system for the seating service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorResponse`]: The `{msg, status: "Failed"}` failure body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Settings errors
//! - 2xxx: Table errors
//! - 3xxx: Queue errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::with_message(ErrorCode::QueueTicketNotFound, "Queue number 4 not found")
//!     .with_detail("queue_no", 4);
//!
//! let body = ErrorResponse::error(&err);
//! assert_eq!(body.status, "Failed");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse, FAILED_STATUS};
