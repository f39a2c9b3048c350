// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Ticket;

/// Trailing-edge throttle.
///
/// The first [`trigger`](Self::trigger) in an idle period schedules a wake-up
/// `wait_ms` later and every further trigger is absorbed until that wake-up
/// fires. The wrapped work therefore runs at most once per window, at the end
/// of the window.
#[derive(Clone, Debug)]
pub struct Throttle {
    wait_ms: u64,
    pending: Option<Ticket>,
    generation: u64,
}

impl Throttle {
    /// Default wait window in milliseconds.
    pub const DEFAULT_WAIT_MS: u64 = 50;

    /// Creates a throttle with the given window.
    #[must_use]
    pub const fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
            generation: 0,
        }
    }

    /// Returns the wait window in milliseconds.
    #[must_use]
    pub const fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Records a call at `now`.
    ///
    /// Returns a ticket when the host must schedule a wake-up, or `None` if a
    /// wake-up is already pending and this call was absorbed.
    pub fn trigger(&mut self, now: u64) -> Option<Ticket> {
        if self.pending.is_some() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket::new(self.generation, now.saturating_add(self.wait_ms));
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Reports that the wake-up for `ticket` ran at `now`.
    ///
    /// Returns `true` if the throttled work should run. Stale tickets and
    /// early wake-ups return `false`; an early wake-up leaves the ticket pending.
    pub fn fire(&mut self, ticket: Ticket, now: u64) -> bool {
        match self.pending {
            Some(pending) if pending == ticket && now >= pending.deadline() => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending wake-up. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns `true` while a wake-up is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WAIT_MS)
    }
}
