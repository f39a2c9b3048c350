// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications the minimap raises for plugins and embedding code.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A notification raised by the minimap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinimapEvent {
    /// One throttled scroll tick was applied to the minimap.
    Scroll,
}

impl MinimapEvent {
    /// Event name, also used for the DOM event dispatched on the root.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scroll => "minimap.scroll",
        }
    }
}

impl fmt::Display for MinimapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name did not match any [`MinimapEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown minimap event name")]
pub struct UnknownEvent;

impl FromStr for MinimapEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimap.scroll" => Ok(Self::Scroll),
            _ => Err(UnknownEvent),
        }
    }
}

/// Identifies a subscription made with [`Minimap::on`](crate::Minimap::on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn()>;

/// Per-minimap subscriber list.
#[derive(Default)]
pub(crate) struct EventBus {
    next_id: u64,
    entries: Vec<(SubscriptionId, MinimapEvent, Callback)>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, event: MinimapEvent, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, event, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _, _)| *entry != id);
        self.entries.len() != before
    }

    /// Callbacks subscribed to `event`, in subscription order.
    ///
    /// Returned by value so callers can invoke them without holding a borrow
    /// of the bus; callbacks may subscribe or unsubscribe.
    pub(crate) fn listeners(&self, event: MinimapEvent) -> Vec<Callback> {
        self.entries
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, callback)| callback.clone())
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("next_id", &self.next_id)
            .field("entries", &self.entries.len())
            .finish()
    }
}
