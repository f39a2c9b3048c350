// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plugins and the capability handle they receive.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use crate::events::{EventBus, MinimapEvent, SubscriptionId};
use crate::host::Host;
use crate::minimap::MinimapElements;

/// A self-contained extension initialized when the minimap renders.
///
/// Plugins run after the minimap's element skeleton exists and before the
/// first content projection. They talk to the minimap only through the
/// [`MinimapHandle`] they are given.
///
/// Any `Fn(&MinimapHandle<H>)` closure is a plugin.
pub trait Plugin<H: Host> {
    /// Runs the plugin's setup.
    fn init(&self, minimap: &MinimapHandle<H>);
}

impl<H: Host, F: Fn(&MinimapHandle<H>)> Plugin<H> for F {
    fn init(&self, minimap: &MinimapHandle<H>) {
        self(minimap);
    }
}

/// What a plugin may use: event subscription, the structural elements and
/// the host.
///
/// The handle does not keep the minimap alive. Subscribing through a handle
/// whose minimap is gone does nothing.
pub struct MinimapHandle<H: Host> {
    host: Rc<H>,
    elements: MinimapElements<H::Element>,
    bus: Weak<RefCell<EventBus>>,
}

impl<H: Host> MinimapHandle<H> {
    pub(crate) fn new(
        host: Rc<H>,
        elements: MinimapElements<H::Element>,
        bus: Weak<RefCell<EventBus>>,
    ) -> Self {
        Self {
            host,
            elements,
            bus,
        }
    }

    /// The host the minimap renders into.
    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// The root, viewport, content and drag-indicator elements.
    #[must_use]
    pub fn elements(&self) -> &MinimapElements<H::Element> {
        &self.elements
    }

    /// Subscribes `callback` to `event`.
    ///
    /// Returns `None` if the minimap no longer exists.
    pub fn on(&self, event: MinimapEvent, callback: impl Fn() + 'static) -> Option<SubscriptionId> {
        let bus = self.bus.upgrade()?;
        let id = bus.borrow_mut().subscribe(event, Rc::new(callback));
        Some(id)
    }

    /// Removes a subscription. Returns `true` if it existed.
    pub fn off(&self, id: SubscriptionId) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|bus| bus.borrow_mut().unsubscribe(id))
    }
}

impl<H: Host> Clone for MinimapHandle<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            elements: self.elements.clone(),
            bus: self.bus.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for MinimapHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinimapHandle")
            .field("elements", &self.elements)
            .field("alive", &(self.bus.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
