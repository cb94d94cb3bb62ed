//! Data models
//!
//! Request and response shapes shared between the seating server and its
//! clients. Field names follow the wire format (`chairsPerTable`,
//! `table_count`, `queue_no`, ...).

pub mod queue;
pub mod seating;
pub mod settings;
pub mod table;

// Re-exports
pub use queue::*;
pub use seating::*;
pub use settings::*;
pub use table::*;
