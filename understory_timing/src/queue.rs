// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered deadline queue.

use alloc::vec::Vec;

/// Identifier of an entry scheduled on a [`TimerQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// Deadline-ordered queue of timer payloads.
///
/// Entries with equal deadlines come out in scheduling order. The queue owns
/// no clock: [`pop_due`](Self::pop_due) is called with the current time by the
/// host driving it.
///
/// ```rust
/// use understory_timing::TimerQueue;
///
/// let mut queue = TimerQueue::new();
/// queue.schedule(20, "b");
/// let a = queue.schedule(10, "a");
/// queue.schedule(20, "c");
///
/// assert_eq!(queue.next_deadline(), Some(10));
/// assert_eq!(queue.pop_due(15), Some((a, 10, "a")));
/// assert_eq!(queue.pop_due(15), None);
/// assert_eq!(queue.pop_due(20).map(|(_, _, p)| p), Some("b"));
/// assert_eq!(queue.pop_due(20).map(|(_, _, p)| p), Some("c"));
/// ```
#[derive(Debug)]
pub struct TimerQueue<T> {
    // Sorted by (deadline, id).
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` for `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let index = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(
            index,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Removes a scheduled entry, returning its payload if it was still queued.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Earliest deadline in the queue.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Pops the earliest entry whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, u64, T)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.deadline, entry.payload))
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every queued entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
