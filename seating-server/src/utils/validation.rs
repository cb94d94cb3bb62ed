//! Input validation helpers
//!
//! Numeric limits for operator and customer input. Values arrive as `i64`
//! (the request models accept numbers or numeric strings) and are narrowed
//! here once they are known to be in range.

use crate::seating::{SeatingError, SeatingResult};

// ── Numeric limits ──────────────────────────────────────────────────

/// Largest venue the service will provision
pub const MAX_TABLES: i64 = 10_000;

/// Chairs at a single table
pub const MAX_CHAIRS_PER_TABLE: i64 = 1_000;

/// Party size accepted by the seating endpoint
pub const MAX_HEADCOUNT: i64 = 100_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate table count and chairs per table, returning them narrowed to `u32`.
pub fn validate_settings(tables: i64, chairs_per_table: i64) -> SeatingResult<(u32, u32)> {
    if tables <= 0 || chairs_per_table <= 0 {
        return Err(SeatingError::InvalidSettings);
    }
    let tables = bounded(tables, "tables", MAX_TABLES)?;
    let chairs = bounded(chairs_per_table, "chairsPerTable", MAX_CHAIRS_PER_TABLE)?;
    Ok((tables, chairs))
}

/// Validate a party headcount.
pub fn validate_headcount(headcount: i64) -> SeatingResult<i64> {
    if headcount <= 0 {
        return Err(SeatingError::InvalidHeadcount);
    }
    if headcount > MAX_HEADCOUNT {
        return Err(SeatingError::OutOfRange {
            field: "headcount",
            max: MAX_HEADCOUNT,
        });
    }
    Ok(headcount)
}

/// Narrow a caller-supplied queue number; negative numbers can never be queued.
pub fn validate_queue_no(queue_no: i64) -> SeatingResult<u64> {
    u64::try_from(queue_no).map_err(|_| SeatingError::TicketNotFound(queue_no))
}

fn bounded(value: i64, field: &'static str, max: i64) -> SeatingResult<u32> {
    if value > max {
        return Err(SeatingError::OutOfRange { field, max });
    }
    u32::try_from(value).map_err(|_| SeatingError::OutOfRange { field, max })
}
