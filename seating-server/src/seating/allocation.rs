//! Allocation Engine - 座位分配算法
//!
//! 纯函数，不持有状态。桌台由 [`super::pool::TablePool`] 预留后再交给这里分配人数。
//!
//! 分配规则：
//! - 已分配人数能被每桌椅子数整除时，每桌都坐满
//! - 否则按顺序遍历桌台：预算不小于容量则坐满，否则坐下剩余预算；
//!   每张桌台都从预算中扣除整桌容量

use shared::models::TableHeadcount;

/// Number of tables needed to seat `headcount` (ceiling division)
pub fn tables_required(headcount: i64, chairs_per_table: i64) -> i64 {
    debug_assert!(chairs_per_table > 0);
    (headcount + chairs_per_table - 1) / chairs_per_table
}

/// Headcount left waiting after `allocated` tables were obtained
///
/// Zero when the pool covered the request.
pub fn remaining_headcount(
    headcount: i64,
    allocated: usize,
    chairs_per_table: i64,
    shortfall: usize,
) -> i64 {
    if shortfall == 0 {
        return 0;
    }
    (headcount - allocated as i64 * chairs_per_table).max(0)
}

/// Distribute the seated part of a party across `table_names`
pub fn allocate_seats(
    headcount: i64,
    remaining_headcount: i64,
    table_names: &[String],
    chairs_per_table: i64,
) -> Vec<TableHeadcount> {
    let allocated = headcount - remaining_headcount;
    let remainder = allocated % chairs_per_table;
    let mut budget = allocated;

    table_names
        .iter()
        .map(|name| {
            let count = if remainder == 0 || chairs_per_table < budget {
                chairs_per_table
            } else {
                budget
            };
            if remainder != 0 {
                budget -= chairs_per_table;
            }
            TableHeadcount {
                name: name.clone(),
                count,
            }
        })
        .collect()
}
