//! Waiting Queue Model

use serde::{Deserialize, Serialize};

use crate::util::flexible_i64;

/// Call queued ticket payload (叫号)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallTicketRequest {
    #[serde(deserialize_with = "flexible_i64")]
    pub queue_no: i64,
    /// Tables to hand to the called party
    #[serde(default)]
    pub table_name: Vec<String>,
}

/// Queue snapshot wrapper (`{"queue_list": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueList {
    pub queue_list: Vec<u64>,
}
