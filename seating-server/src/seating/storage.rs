//! redb-based storage layer for seating state
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `seating_state` | `settings` | `Settings` | Venue configuration |
//! | `seating_state` | `table_count` | `Vec<String>` | Free tables, pool order |
//! | `seating_state` | `queue_list` | `Vec<u64>` | Waiting tickets, calling order |
//! | `seating_state` | `occupancy` | `BTreeMap<String, Option<u64>>` | Occupied tables and their ticket |
//! | `sequence_counter` | `queue_no` | `u64` | Last issued ticket |
//!
//! Every record is rewritten in a single write transaction by [`SeatingStorage::save`],
//! so a reader never observes a pool that disagrees with the queue.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::models::Settings;
use thiserror::Error;

/// Seating records: key = record name, value = JSON bytes
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("seating_state");

/// Ticket counter: key = "queue_no", value = u64
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence_counter");

const SETTINGS_KEY: &str = "settings";
const FREE_TABLES_KEY: &str = "table_count";
const QUEUE_KEY: &str = "queue_list";
const OCCUPANCY_KEY: &str = "occupancy";
const QUEUE_NUMBER_KEY: &str = "queue_no";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Everything the service needs to resume after a restart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub settings: Option<Settings>,
    pub free_tables: Vec<String>,
    pub occupancy: BTreeMap<String, Option<u64>>,
    pub queue: Vec<u64>,
    pub last_ticket: u64,
}

/// Seating storage backed by redb
#[derive(Clone)]
pub struct SeatingStorage {
    db: Arc<Database>,
}

impl SeatingStorage {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate`: once `commit()` returns the
    /// records survive a power cut.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::open_with_backend(redb::backends::InMemoryBackend::new())
    }

    /// Open over a custom redb backend (for testing)
    #[cfg(test)]
    pub fn open_with_backend(backend: impl redb::StorageBackend) -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(backend)?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
            let _ = write_txn.open_table(SEQUENCE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load persisted state
    ///
    /// Returns `None` when no settings were ever saved.
    pub fn load(&self) -> StorageResult<Option<PersistedState>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        let settings: Option<Settings> = match table.get(SETTINGS_KEY)? {
            Some(guard) => Some(serde_json::from_slice(guard.value())?),
            None => return Ok(None),
        };

        let free_tables = match table.get(FREE_TABLES_KEY)? {
            Some(guard) => serde_json::from_slice(guard.value())?,
            None => Vec::new(),
        };
        let occupancy = match table.get(OCCUPANCY_KEY)? {
            Some(guard) => serde_json::from_slice(guard.value())?,
            None => BTreeMap::new(),
        };
        let queue = match table.get(QUEUE_KEY)? {
            Some(guard) => serde_json::from_slice(guard.value())?,
            None => Vec::new(),
        };

        let seq_table = read_txn.open_table(SEQUENCE_TABLE)?;
        let last_ticket = seq_table
            .get(QUEUE_NUMBER_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0);

        Ok(Some(PersistedState {
            settings,
            free_tables,
            occupancy,
            queue,
            last_ticket,
        }))
    }

    /// Persist the full state in one write transaction
    pub fn save(&self, state: &PersistedState) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            match &state.settings {
                Some(settings) => {
                    let value = serde_json::to_vec(settings)?;
                    table.insert(SETTINGS_KEY, value.as_slice())?;
                }
                None => {
                    table.remove(SETTINGS_KEY)?;
                }
            }

            let value = serde_json::to_vec(&state.free_tables)?;
            table.insert(FREE_TABLES_KEY, value.as_slice())?;

            let value = serde_json::to_vec(&state.occupancy)?;
            table.insert(OCCUPANCY_KEY, value.as_slice())?;

            let value = serde_json::to_vec(&state.queue)?;
            table.insert(QUEUE_KEY, value.as_slice())?;

            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            seq_table.insert(QUEUE_NUMBER_KEY, state.last_ticket)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
