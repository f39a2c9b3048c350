// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the minimap and the page it mirrors.
//!
//! Everything the minimap reads from or writes to the page goes through
//! [`Host`]. The page's window and document are process-wide, shared event
//! sources; the minimap never reaches into them directly, so a test can
//! substitute an in-memory page and a manual clock.
//!
//! ## Ownership of subscriptions
//!
//! [`Host::listen`], [`Host::listen_pointer`], [`Host::observe_resize`] and
//! [`Host::set_timeout`] return owned handles. Dropping a handle must release
//! exactly the subscription (or timer) it was returned for. The minimap keeps
//! every handle it creates and drops them all on
//! [`Minimap::destroy`](crate::Minimap::destroy).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::geometry::PageMetrics;

/// Mouse button number of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenTarget<'a, E> {
    /// The window (scroll, resize, mouse moves outside the minimap).
    Window,
    /// The document (mouse releases anywhere on the page).
    Document,
    /// A specific element.
    Element(&'a E),
}

/// Plain (payload-free) events the minimap subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    /// The page was scrolled.
    Scroll,
    /// The window was resized.
    Resize,
}

impl WindowEvent {
    /// DOM event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// Pointer events the minimap subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released.
    Up,
}

impl PointerEventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "mousedown",
            Self::Move => "mousemove",
            Self::Up => "mouseup",
        }
    }
}

/// The parts of a mouse event the minimap needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput<E> {
    /// Button number, [`PRIMARY_BUTTON`] for the primary button.
    pub button: i16,
    /// Pointer position along the page's vertical axis (includes scroll).
    pub page_y: f64,
    /// Element the event was originally dispatched to, if it is an element.
    pub target: Option<E>,
}

/// Handler for [`WindowEvent`]s.
pub type EventHandler = Box<dyn FnMut()>;

/// Handler for pointer events.
pub type PointerHandler<E> = Box<dyn FnMut(&PointerInput<E>)>;

/// Access to the page: measurement, mutation, scrolling, events and timers.
///
/// All methods take `&self`; hosts are single-threaded and use interior
/// mutability where they need it. Handlers passed to a host may call back into
/// it, so a host must not hold internal borrows while invoking them.
pub trait Host: 'static {
    /// Handle to a page element.
    type Element: Clone + PartialEq + fmt::Debug + 'static;
    /// Owned event subscription. Dropping it unsubscribes.
    type Listener;
    /// Owned resize observation. Dropping it stops observing.
    type Observer;
    /// Owned pending timer. Dropping it cancels the timer.
    type Timer;
    /// Failure reported by queries and element creation.
    type Error: core::error::Error + 'static;

    /// The document body.
    fn body(&self) -> Self::Element;

    /// Snapshot of page-level sizes and the current scroll offset.
    fn metrics(&self) -> PageMetrics;

    /// Live bounding rectangle of `element`, relative to the window viewport.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Inner width of `element` in pixels.
    fn client_width(&self, element: &Self::Element) -> f64;

    /// Inner height of `element` in pixels.
    ///
    /// Hosts must report the laid-out value even if styles were written in
    /// the same tick.
    fn client_height(&self, element: &Self::Element) -> f64;

    /// All descendants of `root` matching `selector`, in document order.
    fn query_selector_all(
        &self,
        root: &Self::Element,
        selector: &str,
    ) -> Result<Vec<Self::Element>, Self::Error>;

    /// Creates a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Element, Self::Error>;

    /// Appends `children` to `parent` in one insertion.
    fn append_children(
        &self,
        parent: &Self::Element,
        children: &[Self::Element],
    ) -> Result<(), Self::Error>;

    /// Detaches every child of `element`.
    fn clear_children(&self, element: &Self::Element);

    /// Detaches `element` from its parent.
    fn remove(&self, element: &Self::Element);

    /// Adds a class to `element`.
    fn add_class(&self, element: &Self::Element, class: &str);

    /// Removes a class from `element`.
    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Returns `true` if `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Sets an inline style property.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Sets an attribute.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Replaces the markup inside `element`.
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Dispatches a custom, payload-free event named `name` on `element`.
    fn dispatch_event(&self, element: &Self::Element, name: &str);

    /// Scrolls the page instantly so that its top edge sits at `top`.
    fn scroll_to(&self, top: f64);

    /// Monotonic milliseconds.
    fn now_ms(&self) -> u64;

    /// Subscribes `handler` to `event` on `target`.
    fn listen(
        &self,
        target: ListenTarget<'_, Self::Element>,
        event: WindowEvent,
        handler: EventHandler,
    ) -> Self::Listener;

    /// Subscribes `handler` to the pointer event `kind` on `target`.
    ///
    /// Element listeners also receive events dispatched to descendants.
    fn listen_pointer(
        &self,
        target: ListenTarget<'_, Self::Element>,
        kind: PointerEventKind,
        handler: PointerHandler<Self::Element>,
    ) -> Self::Listener;

    /// Calls `handler` whenever the size of `element` changes.
    fn observe_resize(&self, element: &Self::Element, handler: EventHandler) -> Self::Observer;

    /// Calls `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> Self::Timer;
}
