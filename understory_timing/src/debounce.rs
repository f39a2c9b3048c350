// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Ticket;

/// Trailing-edge debounce.
///
/// Every [`trigger`](Self::trigger) restarts the window, so the wrapped work
/// runs once, `wait_ms` after the last call of a burst.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: u64,
    pending: Option<Ticket>,
    generation: u64,
}

impl Debounce {
    /// Default wait window in milliseconds.
    pub const DEFAULT_WAIT_MS: u64 = 300;

    /// Creates a debounce with the given window.
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

    /// Records a call at `now` and returns the ticket that supersedes any
    /// previously issued one.
    ///
    /// Hosts that can cancel timers should cancel the wake-up for the previous
    /// ticket; hosts that cannot may let it run, since it will no longer fire.
    pub fn trigger(&mut self, now: u64) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket::new(self.generation, now.saturating_add(self.wait_ms));
        self.pending = Some(ticket);
        ticket
    }

    /// Reports that the wake-up for `ticket` ran at `now`.
    ///
    /// Returns `true` if the debounced work should run.
    pub fn fire(&mut self, ticket: Ticket, now: u64) -> bool {
        match self.pending {
            Some(pending)
                if pending.generation() == ticket.generation() && now >= pending.deadline() =>
            {
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

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WAIT_MS)
    }
}
