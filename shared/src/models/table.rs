//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Per-table occupancy (桌台状态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableState {
    /// In the free pool
    Free,
    /// Taken, optionally by a called queue ticket
    Occupied(Option<u64>),
}

impl TableState {
    pub fn is_free(&self) -> bool {
        matches!(self, TableState::Free)
    }
}

/// Operator view of a single table (GET /tables)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatus {
    pub name: String,
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_no: Option<u64>,
}

impl TableStatus {
    pub fn new(name: impl Into<String>, state: TableState) -> Self {
        let (occupied, queue_no) = match state {
            TableState::Free => (false, None),
            TableState::Occupied(ticket) => (true, ticket),
        };
        Self {
            name: name.into(),
            occupied,
            queue_no,
        }
    }
}

/// Release table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseTableRequest {
    pub table_name: String,
}

/// Free-table snapshot wrapper (`{"table_count": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTables {
    pub table_count: Vec<String>,
}
