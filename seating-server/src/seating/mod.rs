//! Seating - 桌台分配与排队
//!
//! - [`SettingsStore`]: 桌台数与每桌椅子数
//! - [`TablePool`]: 空闲桌台 FIFO 池
//! - [`WaitingQueue`]: 排队号码
//! - [`allocation`]: 人数到桌台的分配算法
//! - [`SeatingService`]: 对外门面，持锁并持久化到 redb

pub mod allocation;
mod error;
mod pool;
mod queue;
mod service;
mod settings;
mod storage;

pub use error::{SeatingError, SeatingResult};
pub use pool::{Reservation, TablePool};
pub use queue::WaitingQueue;
pub use service::SeatingService;
pub use settings::SettingsStore;
pub use storage::{PersistedState, SeatingStorage, StorageError, StorageResult};
