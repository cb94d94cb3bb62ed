//! Shared types for the seating service
//!
//! Common types used by the server crate and any Rust client: error codes,
//! the failure response body, and the request/response models of the HTTP
//! surface.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use serde::{Deserialize, Serialize};
