//! SeatingService - 座位服务门面
//!
//! 所有请求都经过这里。设置、桌台池、排队队列与号码计数器共用一把互斥锁：
//!
//! ```text
//! lock ─▶ clone state ─▶ apply ─▶ persist (one redb txn) ─▶ swap ─▶ unlock
//! ```
//!
//! 持久化失败时内存状态保持不变，与数据库一致。

use parking_lot::Mutex;
use shared::models::{OwnerView, SeatingPlan, Settings, SettingsUpdate, TableStatus};

use super::allocation::{allocate_seats, remaining_headcount, tables_required};
use super::error::{SeatingError, SeatingResult};
use super::pool::TablePool;
use super::queue::WaitingQueue;
use super::settings::SettingsStore;
use super::storage::{PersistedState, SeatingStorage};
use crate::utils::validation::{validate_headcount, validate_queue_no};

/// Settings, pool and queue guarded together
#[derive(Debug, Clone, Default)]
struct SeatingState {
    settings: SettingsStore,
    pool: TablePool,
    queue: WaitingQueue,
}

impl SeatingState {
    fn new(queue_start: u64) -> Self {
        Self {
            settings: SettingsStore::default(),
            pool: TablePool::default(),
            queue: WaitingQueue::with_start(queue_start),
        }
    }

    fn restore(persisted: PersistedState, queue_start: u64) -> Self {
        let pool = match &persisted.settings {
            Some(settings) => TablePool::restore(
                settings.tables,
                persisted.free_tables,
                &persisted.occupancy,
            ),
            None => TablePool::default(),
        };
        let mut queue = WaitingQueue::restore(persisted.queue, persisted.last_ticket);
        queue.advance_to(queue_start);

        Self {
            settings: SettingsStore::restore(persisted.settings),
            pool,
            queue,
        }
    }

    fn to_persisted(&self) -> PersistedState {
        PersistedState {
            settings: self.settings.current().cloned(),
            free_tables: self.pool.snapshot(),
            occupancy: self.pool.occupancy(),
            queue: self.queue.snapshot(),
            last_ticket: self.queue.last_issued(),
        }
    }

    /// Replace settings and re-derive the pool (queue untouched)
    fn apply_settings(&mut self, update: &SettingsUpdate) -> SeatingResult<Settings> {
        let settings = self.settings.update(update)?;
        self.pool = TablePool::derive(settings.tables);
        Ok(settings)
    }
}

pub struct SeatingService {
    state: Mutex<SeatingState>,
    storage: SeatingStorage,
}

impl SeatingService {
    /// Restore the service from storage
    ///
    /// `queue_start` seeds the ticket counter; a persisted counter above it wins.
    pub fn open(storage: SeatingStorage, queue_start: u64) -> SeatingResult<Self> {
        let state = match storage.load()? {
            Some(persisted) => {
                let state = SeatingState::restore(persisted, queue_start);
                tracing::info!(
                    tables = state.pool.len(),
                    free = state.pool.free_len(),
                    queued = state.queue.len(),
                    last_ticket = state.queue.last_issued(),
                    "Seating state restored"
                );
                state
            }
            None => {
                tracing::info!(queue_start, "No seating state found, waiting for settings");
                SeatingState::new(queue_start)
            }
        };

        Ok(Self {
            state: Mutex::new(state),
            storage,
        })
    }

    /// In-memory service (for testing)
    #[cfg(test)]
    pub fn in_memory() -> SeatingResult<Self> {
        Self::open(SeatingStorage::open_in_memory()?, 0)
    }

    /// Run `apply` on a copy of the state, persist it, then publish it
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut SeatingState) -> SeatingResult<T>,
    ) -> SeatingResult<T> {
        let mut guard = self.state.lock();
        let mut next = guard.clone();
        let out = apply(&mut next)?;
        self.storage.save(&next.to_persisted())?;
        *guard = next;
        Ok(out)
    }

    fn read<T>(&self, view: impl FnOnce(&SeatingState) -> SeatingResult<T>) -> SeatingResult<T> {
        view(&self.state.lock())
    }

    pub fn is_configured(&self) -> bool {
        self.state.lock().settings.is_configured()
    }

    /// Provision settings on first start; no-op when already configured
    pub fn provision(&self, tables: i64, chairs_per_table: i64) -> SeatingResult<Option<Settings>> {
        if self.is_configured() {
            return Ok(None);
        }
        let update = SettingsUpdate {
            id: None,
            tables,
            chairs_per_table,
        };
        let settings = self.mutate(|state| {
            // 加锁后再检查一次
            if state.settings.is_configured() {
                return Ok(None);
            }
            state.apply_settings(&update).map(Some)
        })?;
        if let Some(settings) = &settings {
            tracing::info!(
                id = %settings.id,
                tables = settings.tables,
                chairs_per_table = settings.chairs_per_table,
                "Settings provisioned"
            );
        }
        Ok(settings)
    }

    // ========== Settings ==========

    /// Settings together with the free-table snapshot
    pub fn owner_view(&self) -> SeatingResult<OwnerView> {
        self.read(|state| {
            Ok(OwnerView {
                settings: state.settings.get()?.clone(),
                table_count: state.pool.snapshot(),
            })
        })
    }

    /// Replace settings; every table becomes free
    pub fn update_settings(&self, update: SettingsUpdate) -> SeatingResult<Settings> {
        let settings = self.mutate(|state| state.apply_settings(&update))?;
        tracing::info!(
            id = %settings.id,
            tables = settings.tables,
            chairs_per_table = settings.chairs_per_table,
            "Settings updated, table pool re-derived"
        );
        Ok(settings)
    }

    // ========== Tables ==========

    pub fn free_tables(&self) -> SeatingResult<Vec<String>> {
        self.read(|state| {
            state.settings.get()?;
            Ok(state.pool.snapshot())
        })
    }

    /// Return a table to the pool, yielding the new free list
    pub fn release_table(&self, table_name: &str) -> SeatingResult<Vec<String>> {
        let free = self.mutate(|state| {
            state.settings.get()?;
            state.pool.release(table_name)?;
            Ok(state.pool.snapshot())
        })?;
        tracing::info!(table = %table_name, free = free.len(), "Table released");
        Ok(free)
    }

    pub fn table_statuses(&self) -> SeatingResult<Vec<TableStatus>> {
        self.read(|state| {
            state.settings.get()?;
            Ok(state.pool.statuses())
        })
    }

    // ========== Queue ==========

    pub fn queue(&self) -> Vec<u64> {
        self.state.lock().queue.snapshot()
    }

    /// Serve a waiting ticket with the named tables
    ///
    /// Returns the queue and the free list after the call.
    pub fn call_ticket(
        &self,
        queue_no: i64,
        table_names: &[String],
    ) -> SeatingResult<(Vec<u64>, Vec<String>)> {
        let ticket = validate_queue_no(queue_no)?;
        let result = self.mutate(|state| {
            if !state.queue.contains(ticket) {
                return Err(SeatingError::TicketNotFound(queue_no));
            }
            state.pool.take_named(table_names, ticket)?;
            state.queue.dequeue(ticket)?;
            Ok((state.queue.snapshot(), state.pool.snapshot()))
        });

        match &result {
            Ok((queue, _)) => tracing::info!(
                queue_no = ticket,
                tables = ?table_names,
                waiting = queue.len(),
                "Queue ticket called"
            ),
            Err(e) => tracing::warn!(queue_no, error = %e, "Queue call rejected"),
        }
        result
    }

    // ========== Seating ==========

    /// Seat a party: reserve tables, queue the unmet part, distribute seats
    pub fn seat_party(&self, headcount: i64) -> SeatingResult<SeatingPlan> {
        let headcount = validate_headcount(headcount)?;

        let plan = self.mutate(|state| {
            let chairs = i64::from(state.settings.get()?.chairs_per_table);
            let required = tables_required(headcount, chairs);
            let reservation = state.pool.reserve(usize::try_from(required).unwrap_or(0));
            let remaining = remaining_headcount(
                headcount,
                reservation.allocated.len(),
                chairs,
                reservation.shortfall,
            );

            let queue_no = if remaining > 0 {
                let ticket = state.queue.next_ticket();
                state.queue.enqueue(ticket);
                ticket
            } else {
                0
            };

            Ok(SeatingPlan {
                headcount,
                tables_required: required,
                table_headcount_pair: allocate_seats(
                    headcount,
                    remaining,
                    &reservation.allocated,
                    chairs,
                ),
                remaining_headcount: remaining,
                queue_no,
            })
        })?;

        if plan.is_queued() {
            tracing::info!(
                headcount,
                tables = plan.table_headcount_pair.len(),
                remaining = plan.remaining_headcount,
                queue_no = plan.queue_no,
                "Party partially seated, remainder queued"
            );
        } else {
            tracing::info!(
                headcount,
                tables = plan.table_headcount_pair.len(),
                "Party seated"
            );
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::{AppError, ErrorCode};

    fn configured(tables: i64, chairs: i64) -> SeatingService {
        let service = SeatingService::in_memory().unwrap();
        service
            .update_settings(SettingsUpdate {
                id: None,
                tables,
                chairs_per_table: chairs,
            })
            .unwrap();
        service
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unconfigured_service() {
        let service = SeatingService::in_memory().unwrap();
        assert!(!service.is_configured());
        assert!(matches!(
            service.owner_view(),
            Err(SeatingError::NotConfigured)
        ));
        assert!(matches!(
            service.seat_party(2),
            Err(SeatingError::NotConfigured)
        ));
        assert!(service.queue().is_empty());
    }

    #[test]
    fn test_update_settings_derives_pool() {
        let service = configured(3, 4);
        let view = service.owner_view().unwrap();
        assert_eq!(view.table_count, names(&["T1", "T2", "T3"]));
        assert_eq!(view.settings.chairs_per_table, 4);
    }

    #[test]
    fn test_invalid_settings_no_change() {
        let service = configured(2, 2);
        let err = service
            .update_settings(SettingsUpdate {
                id: None,
                tables: 0,
                chairs_per_table: 4,
            })
            .unwrap_err();
        assert!(matches!(err, SeatingError::InvalidSettings));
        assert_eq!(service.free_tables().unwrap().len(), 2);
    }

    #[test]
    fn test_seat_party_fits() {
        let service = configured(3, 4);
        let plan = service.seat_party(10).unwrap();
        assert_eq!(plan.tables_required, 3);
        assert_eq!(plan.remaining_headcount, 0);
        assert_eq!(plan.queue_no, 0);
        let counts: Vec<i64> = plan.table_headcount_pair.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![4, 4, 2]);
        assert!(service.free_tables().unwrap().is_empty());
    }

    #[test]
    fn test_seat_party_exact_fit_clamps_remaining() {
        let service = configured(3, 2);
        let plan = service.seat_party(5).unwrap();
        assert_eq!(plan.tables_required, 3);
        assert_eq!(plan.remaining_headcount, 0);
        assert_eq!(plan.queue_no, 0);
        assert!(service.queue().is_empty());
    }

    #[test]
    fn test_seat_party_empty_pool_queues() {
        let service = configured(1, 4);
        service.seat_party(4).unwrap();

        let plan = service.seat_party(5).unwrap();
        assert_eq!(plan.tables_required, 2);
        assert!(plan.table_headcount_pair.is_empty());
        assert_eq!(plan.remaining_headcount, 5);
        assert_eq!(plan.queue_no, 1);
        assert_eq!(service.queue(), vec![1]);
    }

    #[test]
    fn test_seat_party_partial() {
        let service = configured(2, 4);
        let plan = service.seat_party(11).unwrap();
        assert_eq!(plan.table_headcount_pair.len(), 2);
        assert_eq!(plan.remaining_headcount, 3);
        assert!(plan.is_queued());
    }

    #[test]
    fn test_invalid_headcount_no_mutation() {
        let service = configured(2, 4);
        assert!(matches!(
            service.seat_party(0),
            Err(SeatingError::InvalidHeadcount)
        ));
        assert_eq!(service.free_tables().unwrap().len(), 2);
        assert!(service.queue().is_empty());
    }

    #[test]
    fn test_release_returns_table_to_tail() {
        let service = configured(3, 4);
        service.seat_party(4).unwrap();
        let free = service.release_table("T1").unwrap();
        assert_eq!(free, names(&["T2", "T3", "T1"]));

        assert!(matches!(
            service.release_table("T1"),
            Err(SeatingError::TableAlreadyFree(_))
        ));
        assert!(matches!(
            service.release_table("T42"),
            Err(SeatingError::TableNotFound(_))
        ));
    }

    #[test]
    fn test_call_ticket() {
        let service = configured(2, 2);
        service.seat_party(4).unwrap();
        let plan = service.seat_party(3).unwrap();
        assert_eq!(plan.queue_no, 1);

        service.release_table("T2").unwrap();
        let (queue, free) = service.call_ticket(1, &names(&["T2"])).unwrap();
        assert!(queue.is_empty());
        assert!(free.is_empty());

        let statuses = service.table_statuses().unwrap();
        assert_eq!(statuses[1].queue_no, Some(1));

        assert!(matches!(
            service.call_ticket(1, &[]),
            Err(SeatingError::TicketNotFound(1))
        ));
    }

    #[test]
    fn test_call_ticket_with_busy_table_keeps_ticket() {
        let service = configured(1, 2);
        service.seat_party(2).unwrap();
        let plan = service.seat_party(2).unwrap();

        let err = service
            .call_ticket(plan.queue_no as i64, &names(&["T1"]))
            .unwrap_err();
        assert!(matches!(err, SeatingError::TableNotFree(_)));
        assert_eq!(service.queue(), vec![plan.queue_no]);
    }

    #[test]
    fn test_settings_update_keeps_queue() {
        let service = configured(1, 2);
        service.seat_party(6).unwrap();
        assert_eq!(service.queue().len(), 1);

        service
            .update_settings(SettingsUpdate {
                id: None,
                tables: 4,
                chairs_per_table: 2,
            })
            .unwrap();
        assert_eq!(service.queue().len(), 1);
        assert_eq!(service.free_tables().unwrap().len(), 4);
    }

    #[test]
    fn test_provision_only_once() {
        let service = SeatingService::in_memory().unwrap();
        assert!(service.provision(2, 3).unwrap().is_some());
        assert!(service.provision(5, 5).unwrap().is_none());
        assert_eq!(service.owner_view().unwrap().settings.tables, 2);
    }

    #[test]
    fn test_restart_restores_state() {
        let storage = SeatingStorage::open_in_memory().unwrap();
        {
            let service = SeatingService::open(storage.clone(), 0).unwrap();
            service.provision(2, 2).unwrap();
            service.seat_party(2).unwrap();
            service.seat_party(6).unwrap();
        }

        let service = SeatingService::open(storage, 0).unwrap();
        assert!(service.free_tables().unwrap().is_empty());
        assert_eq!(service.queue(), vec![1]);

        let plan = service.seat_party(1).unwrap();
        assert_eq!(plan.queue_no, 2);
        let statuses = service.table_statuses().unwrap();
        assert!(statuses.iter().all(|s| s.occupied));
        assert_eq!(statuses[0].queue_no, None);
    }

    #[test]
    fn test_queue_start_seeds_counter() {
        let storage = SeatingStorage::open_in_memory().unwrap();
        let service = SeatingService::open(storage, 500).unwrap();
        service.provision(1, 1).unwrap();
        service.seat_party(1).unwrap();
        let plan = service.seat_party(1).unwrap();
        assert_eq!(plan.queue_no, 501);
    }

    /// In-memory backend whose writes start failing once `fail` is set
    #[derive(Debug)]
    struct FlakyBackend {
        inner: redb::backends::InMemoryBackend,
        fail: std::sync::Arc<std::sync::atomic::AtomicBool>,
    }

    impl FlakyBackend {
        fn check(&self) -> Result<(), std::io::Error> {
            if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(std::io::Error::other("disk unavailable"));
            }
            Ok(())
        }
    }

    impl redb::StorageBackend for FlakyBackend {
        fn len(&self) -> Result<u64, std::io::Error> {
            self.inner.len()
        }

        fn read(&self, offset: u64, out: &mut [u8]) -> Result<(), std::io::Error> {
            self.inner.read(offset, out)
        }

        fn set_len(&self, len: u64) -> Result<(), std::io::Error> {
            self.check()?;
            self.inner.set_len(len)
        }

        fn sync_data(&self) -> Result<(), std::io::Error> {
            self.check()?;
            self.inner.sync_data()
        }

        fn write(&self, offset: u64, data: &[u8]) -> Result<(), std::io::Error> {
            self.check()?;
            self.inner.write(offset, data)
        }
    }

    #[test]
    fn test_storage_failure_leaves_state_unchanged() {
        let fail = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let storage = SeatingStorage::open_with_backend(FlakyBackend {
            inner: redb::backends::InMemoryBackend::new(),
            fail: fail.clone(),
        })
        .unwrap();
        let service = SeatingService::open(storage, 0).unwrap();
        service
            .update_settings(SettingsUpdate {
                id: None,
                tables: 2,
                chairs_per_table: 2,
            })
            .unwrap();
        service.seat_party(2).unwrap();
        service.seat_party(2).unwrap();
        assert_eq!(service.seat_party(2).unwrap().queue_no, 1);
        assert_eq!(service.release_table("T2").unwrap(), names(&["T2"]));

        fail.store(true, std::sync::atomic::Ordering::SeqCst);

        let err = service.seat_party(2).unwrap_err();
        assert!(matches!(err, SeatingError::Storage(_)));
        let app_err: AppError = err.into();
        assert_eq!(app_err.code, ErrorCode::StorageError);
        assert_eq!(app_err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.message, "Storage error");

        assert!(matches!(
            service.release_table("T1"),
            Err(SeatingError::Storage(_))
        ));
        assert!(matches!(
            service.call_ticket(1, &names(&["T2"])),
            Err(SeatingError::Storage(_))
        ));

        assert_eq!(service.free_tables().unwrap(), names(&["T2"]));
        assert_eq!(service.queue(), vec![1]);
        let statuses = service.table_statuses().unwrap();
        assert!(statuses[0].occupied);
        assert!(!statuses[1].occupied);
    }
}
