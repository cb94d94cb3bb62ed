//! Waiting Queue - 排队叫号
//!
//! 号码单调递增、永不复用；队列顺序即叫号顺序。

use std::collections::VecDeque;

use super::error::{SeatingError, SeatingResult};

#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    entries: VecDeque<u64>,
    /// Last number handed out by [`WaitingQueue::next_ticket`]
    last_issued: u64,
}

impl WaitingQueue {
    /// Empty queue whose first ticket will be `start + 1`
    pub fn with_start(start: u64) -> Self {
        Self {
            entries: VecDeque::new(),
            last_issued: start,
        }
    }

    /// Rebuild from persisted records
    pub fn restore(entries: Vec<u64>, last_issued: u64) -> Self {
        // 计数器不能落后于已排队的号码
        let highest = entries.iter().copied().max().unwrap_or(0);
        Self {
            entries: entries.into(),
            last_issued: last_issued.max(highest),
        }
    }

    /// Increment the counter and return the new ticket
    pub fn next_ticket(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Raise the counter to `floor` if it is below it
    pub fn advance_to(&mut self, floor: u64) {
        self.last_issued = self.last_issued.max(floor);
    }

    pub fn enqueue(&mut self, ticket: u64) {
        self.entries.push_back(ticket);
    }

    /// Remove the single entry equal to `ticket`
    pub fn dequeue(&mut self, ticket: u64) -> SeatingResult<()> {
        let pos = self.entries.iter().position(|&t| t == ticket).ok_or_else(|| {
            SeatingError::TicketNotFound(i64::try_from(ticket).unwrap_or(i64::MAX))
        })?;
        self.entries.remove(pos);
        Ok(())
    }

    pub fn contains(&self, ticket: u64) -> bool {
        self.entries.contains(&ticket)
    }

    pub fn snapshot(&self) -> Vec<u64> {
        self.entries.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
