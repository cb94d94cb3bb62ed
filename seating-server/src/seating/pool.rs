//! Table Pool - 空闲桌台池
//!
//! 维护两份视图：
//! - `free`: 空闲桌台的 FIFO 队列（释放追加到队尾，分配从队首取）
//! - `states`: 每张桌台的状态索引 (Free | Occupied)
//!
//! 两者始终保持一致：`free` 中的桌台状态必为 `Free`，且不重复。

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use shared::models::{TableState, TableStatus};
use shared::util::table_names;

use super::error::{SeatingError, SeatingResult};

/// Result of [`TablePool::reserve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Tables taken from the head of the pool, in allocation order
    pub allocated: Vec<String>,
    /// How many requested tables the pool could not supply
    pub shortfall: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TablePool {
    /// Full identifier set `T1..Tn`
    names: Vec<String>,
    states: HashMap<String, TableState>,
    free: VecDeque<String>,
}

impl TablePool {
    /// Build a pool with every table `T1..T{count}` free
    pub fn derive(count: u32) -> Self {
        let names = table_names(count);
        let states = names
            .iter()
            .map(|name| (name.clone(), TableState::Free))
            .collect();
        let free = names.iter().cloned().collect();
        Self {
            names,
            states,
            free,
        }
    }

    /// Rebuild a pool from persisted records
    ///
    /// Tables absent from `free` are occupied; `occupancy` supplies the queue
    /// ticket that holds them, if any. Unknown or repeated free entries are
    /// dropped.
    pub fn restore(
        count: u32,
        free: Vec<String>,
        occupancy: &BTreeMap<String, Option<u64>>,
    ) -> Self {
        let names = table_names(count);
        let mut states: HashMap<String, TableState> = names
            .iter()
            .map(|name| {
                let ticket = occupancy.get(name).copied().flatten();
                (name.clone(), TableState::Occupied(ticket))
            })
            .collect();

        let mut queue = VecDeque::with_capacity(free.len());
        for name in free {
            match states.get_mut(&name) {
                Some(state) if !state.is_free() => {
                    *state = TableState::Free;
                    queue.push_back(name);
                }
                _ => tracing::warn!(table = %name, "Dropping invalid free-table entry on restore"),
            }
        }

        Self {
            names,
            states,
            free: queue,
        }
    }

    /// Take up to `n` tables from the head of the pool
    ///
    /// Never fails: when fewer than `n` tables are free all of them are
    /// returned and the difference is reported as `shortfall`.
    pub fn reserve(&mut self, n: usize) -> Reservation {
        let take = n.min(self.free.len());
        let allocated: Vec<String> = self.free.drain(..take).collect();
        for name in &allocated {
            self.states.insert(name.clone(), TableState::Occupied(None));
        }
        Reservation {
            shortfall: n - allocated.len(),
            allocated,
        }
    }

    /// Return a table to the tail of the pool
    pub fn release(&mut self, name: &str) -> SeatingResult<()> {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| SeatingError::TableNotFound(name.to_string()))?;
        if state.is_free() {
            return Err(SeatingError::TableAlreadyFree(name.to_string()));
        }
        *state = TableState::Free;
        self.free.push_back(name.to_string());
        Ok(())
    }

    /// Remove specific tables from the pool on behalf of a called ticket
    ///
    /// All names are checked before anything changes; on error the pool is
    /// untouched.
    pub fn take_named(&mut self, names: &[String], ticket: u64) -> SeatingResult<()> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(SeatingError::DuplicateTable(name.clone()));
            }
            match self.states.get(name) {
                None => return Err(SeatingError::TableNotFound(name.clone())),
                Some(state) if !state.is_free() => {
                    return Err(SeatingError::TableNotFree(name.clone()));
                }
                Some(_) => {}
            }
        }

        self.free.retain(|name| !seen.contains(name.as_str()));
        for name in names {
            self.states
                .insert(name.clone(), TableState::Occupied(Some(ticket)));
        }
        Ok(())
    }

    /// Free tables in pool order
    pub fn snapshot(&self) -> Vec<String> {
        self.free.iter().cloned().collect()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Number of configured tables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn state(&self, name: &str) -> Option<TableState> {
        self.states.get(name).copied()
    }

    /// Every configured table with its state, in `T1..Tn` order
    pub fn statuses(&self) -> Vec<TableStatus> {
        self.names
            .iter()
            .filter_map(|name| {
                self.states
                    .get(name)
                    .map(|state| TableStatus::new(name.clone(), *state))
            })
            .collect()
    }

    /// Occupied tables and the ticket holding each (persisted alongside the free list)
    pub fn occupancy(&self) -> BTreeMap<String, Option<u64>> {
        self.states
            .iter()
            .filter_map(|(name, state)| match state {
                TableState::Occupied(ticket) => Some((name.clone(), *ticket)),
                TableState::Free => None,
            })
            .collect()
    }
}
