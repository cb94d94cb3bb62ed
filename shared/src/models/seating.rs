//! Seating Plan Model

use serde::{Deserialize, Serialize};

use crate::util::flexible_i64;

/// Seat a party payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadcountRequest {
    #[serde(deserialize_with = "flexible_i64")]
    pub headcount: i64,
}

/// Seats assigned at one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeadcount {
    pub name: String,
    pub count: i64,
}

/// Seat-assignment plan returned for one seating request
///
/// `queue_no` is 0 when the whole party was seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub headcount: i64,
    pub tables_required: i64,
    pub table_headcount_pair: Vec<TableHeadcount>,
    pub remaining_headcount: i64,
    pub queue_no: u64,
}

impl SeatingPlan {
    /// Whether part of the party had to join the waiting queue
    pub fn is_queued(&self) -> bool {
        self.queue_no != 0
    }
}
