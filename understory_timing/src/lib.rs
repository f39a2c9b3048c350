// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives.
//!
//! This crate provides small timing state machines that never touch a real
//! clock or timer API. Callers pass timestamps in (milliseconds, from any
//! monotonic source) and get back the deadlines they need to schedule.
//!
//! - [`Throttle`]: at most one trailing-edge invocation per wait window.
//! - [`Debounce`]: one invocation after a burst has been quiet for the wait window.
//! - [`TimerQueue`]: an ordered deadline queue for hosts that drive timers
//!   themselves (headless runtimes, tests).
//!
//! ## Ticket protocol
//!
//! Both [`Throttle`] and [`Debounce`] hand out a [`Ticket`] when the host must
//! schedule a wake-up. When that wake-up runs, the host calls `fire` with the
//! ticket. `fire` returns `true` only for the ticket that is still current, so a
//! host that cannot cancel its timers (or forgot to) still never runs a stale
//! callback.
//!
//! ```rust
//! use understory_timing::Throttle;
//!
//! let mut throttle = Throttle::new(50);
//!
//! // First call in an idle period schedules a wake-up.
//! let ticket = throttle.trigger(1_000).unwrap();
//! assert_eq!(ticket.deadline(), 1_050);
//!
//! // Further calls inside the window are absorbed.
//! assert!(throttle.trigger(1_010).is_none());
//!
//! // The host wakes up at the deadline and runs the callback once.
//! assert!(throttle.fire(ticket, 1_050));
//! assert!(!throttle.is_pending());
//! ```
//!
//! ```rust
//! use understory_timing::Debounce;
//!
//! let mut debounce = Debounce::new(300);
//! let first = debounce.trigger(0);
//! let last = debounce.trigger(200);
//!
//! // The first wake-up is stale: a later call restarted the window.
//! assert!(!debounce.fire(first, 300));
//! assert!(debounce.fire(last, 500));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;
mod throttle;

pub use debounce::Debounce;
pub use queue::{TimerId, TimerQueue};
pub use throttle::Throttle;

/// A scheduled wake-up handed out by [`Throttle::trigger`] or [`Debounce::trigger`].
///
/// Tickets are only meaningful to the state machine that issued them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    deadline: u64,
}

impl Ticket {
    pub(crate) const fn new(generation: u64, deadline: u64) -> Self {
        Self {
            generation,
            deadline,
        }
    }

    /// Timestamp (milliseconds) at which the host should wake up.
    #[must_use]
    pub const fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Delay from `now` until the deadline, saturating at zero.
    #[must_use]
    pub const fn delay_from(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }

    pub(crate) const fn generation(&self) -> u64 {
        self.generation
    }
}
