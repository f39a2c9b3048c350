// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifecycle controller.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use understory_timing::{Debounce, Throttle};

use crate::class;
use crate::error::MinimapError;
use crate::events::{EventBus, MinimapEvent, SubscriptionId};
use crate::host::{EventHandler, Host, ListenTarget, PointerEventKind, PointerHandler, WindowEvent};
use crate::options::MinimapOptions;
use crate::plugin::MinimapHandle;
use crate::projector::RenderedElement;
use crate::scale::ScaleState;
use crate::sync::DragSession;

/// Where a [`Minimap`] is in its life.
///
/// The only transitions are `Constructed → Rendered → Destroyed` and
/// `Constructed → Destroyed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Built but not mounted.
    Constructed,
    /// Mounted and tracking the page.
    Rendered,
    /// Torn down; every subscription has been released.
    Destroyed,
}

/// The four structural elements of a minimap.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapElements<E> {
    /// Outermost element, carries the theme, placement and loading classes.
    pub root: E,
    /// The minimap's visible window.
    pub viewport: E,
    /// The scaled-down page, slid vertically inside the viewport.
    pub content: E,
    /// The rectangle standing for the page's visible window.
    pub drag_indicator: E,
}

pub(crate) struct Shared<H: Host> {
    pub(crate) host: Rc<H>,
    pub(crate) options: MinimapOptions<H>,
    pub(crate) elements: MinimapElements<H::Element>,
    pub(crate) page_container: H::Element,
    pub(crate) bus: Rc<RefCell<EventBus>>,
    pub(crate) state: RefCell<State<H>>,
}

pub(crate) struct State<H: Host> {
    pub(crate) lifecycle: LifecycleState,
    pub(crate) scale: ScaleState,
    pub(crate) rendered: Vec<RenderedElement<H::Element>>,
    pub(crate) throttle: Throttle,
    pub(crate) debounce: Debounce,
    pub(crate) scroll_timer: Option<H::Timer>,
    pub(crate) resize_timer: Option<H::Timer>,
    pub(crate) listeners: Vec<H::Listener>,
    pub(crate) observer: Option<H::Observer>,
    pub(crate) drag: Option<DragSession<H>>,
}

impl<H: Host> State<H> {
    pub(crate) fn is_rendered(&self) -> bool {
        self.lifecycle == LifecycleState::Rendered
    }
}

/// A minimap of one page.
///
/// `Minimap` is a cheap handle; clones share the same instance. Dropping the
/// last handle releases the page subscriptions but leaves the elements in the
/// document, so call [`destroy`](Self::destroy) to tear a mounted minimap down.
pub struct Minimap<H: Host> {
    shared: Rc<Shared<H>>,
}

impl<H: Host> Minimap<H> {
    /// Builds the element skeleton. Nothing touches the page until
    /// [`render`](Self::render).
    pub fn new(host: Rc<H>, options: MinimapOptions<H>) -> Result<Self, MinimapError<H::Error>> {
        let element = |class: &str| -> Result<H::Element, MinimapError<H::Error>> {
            let element = host.create_element("div").map_err(MinimapError::Host)?;
            host.add_class(&element, class);
            Ok(element)
        };
        let elements = MinimapElements {
            root: element(class::ROOT)?,
            viewport: element(class::VIEWPORT)?,
            content: element(class::CONTENT)?,
            drag_indicator: element(class::DRAG_INDICATOR)?,
        };
        host.append_children(
            &elements.viewport,
            &[elements.content.clone(), elements.drag_indicator.clone()],
        )
        .map_err(MinimapError::Host)?;
        host.append_children(&elements.root, &[elements.viewport.clone()])
            .map_err(MinimapError::Host)?;

        let page_container = options
            .page_container()
            .cloned()
            .unwrap_or_else(|| host.body());
        let timings = options.timings();
        let state = State {
            lifecycle: LifecycleState::Constructed,
            scale: ScaleState::default(),
            rendered: Vec::new(),
            throttle: Throttle::new(timings.throttle_ms),
            debounce: Debounce::new(timings.debounce_ms),
            scroll_timer: None,
            resize_timer: None,
            listeners: Vec::new(),
            observer: None,
            drag: None,
        };
        Ok(Self {
            shared: Rc::new(Shared {
                host,
                options,
                elements,
                page_container,
                bus: Rc::new(RefCell::new(EventBus::default())),
                state: RefCell::new(state),
            }),
        })
    }

    /// Mounts the minimap and starts tracking the page.
    ///
    /// Plugins are initialized first, then the theme and placement classes
    /// are applied, the root is appended to the body, the content is laid out
    /// and projected, and finally scroll, resize and pointer events are
    /// subscribed to.
    ///
    /// Rendering an already rendered minimap does nothing. If mounting or the
    /// initial projection fails (for example on an invalid selector) the
    /// minimap is destroyed and the error returned.
    pub fn render(&self) -> Result<&Self, MinimapError<H::Error>> {
        match self.state() {
            LifecycleState::Destroyed => return Err(MinimapError::Destroyed),
            LifecycleState::Rendered => {
                tracing::debug!("minimap already rendered");
                return Ok(self);
            }
            LifecycleState::Constructed => {}
        }

        let shared = &self.shared;
        let host = &*shared.host;
        let root = &shared.elements.root;

        let handle = self.handle();
        for plugin in shared.options.plugins() {
            plugin.init(&handle);
        }
        host.add_class(root, shared.options.theme());
        host.add_class(root, shared.options.placement().class());
        // Plugins have run by now, so a failed mount cannot be retried.
        if let Err(err) = host.append_children(&host.body(), core::slice::from_ref(root)) {
            self.destroy();
            return Err(MinimapError::Host(err));
        }
        shared.state.borrow_mut().lifecycle = LifecycleState::Rendered;

        if let Err(err) = shared.rebuild() {
            self.destroy();
            return Err(err);
        }
        shared.subscribe();
        tracing::debug!(
            plugins = shared.options.plugins().len(),
            rules = shared.options.rules().len(),
            "minimap rendered"
        );
        Ok(self)
    }

    /// Re-measures the page and rebuilds the content now, as a resize would
    /// after its debounce window.
    ///
    /// Does nothing before [`render`](Self::render).
    pub fn refresh(&self) -> Result<(), MinimapError<H::Error>> {
        match self.state() {
            LifecycleState::Destroyed => Err(MinimapError::Destroyed),
            LifecycleState::Constructed => Ok(()),
            LifecycleState::Rendered => self.shared.rebuild(),
        }
    }

    /// Subscribes `callback` to `event`.
    pub fn on(&self, event: MinimapEvent, callback: impl Fn() + 'static) -> SubscriptionId {
        self.shared
            .bus
            .borrow_mut()
            .subscribe(event, Rc::new(callback))
    }

    /// Removes a subscription made with [`on`](Self::on). Returns `true` if it
    /// existed.
    pub fn off(&self, id: SubscriptionId) -> bool {
        self.shared.bus.borrow_mut().unsubscribe(id)
    }

    /// The structural elements, for inspection and styling.
    #[must_use]
    pub fn elements(&self) -> &MinimapElements<H::Element> {
        &self.shared.elements
    }

    /// The host this minimap renders into.
    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.shared.host
    }

    /// The options this minimap was built with.
    #[must_use]
    pub fn options(&self) -> &MinimapOptions<H> {
        &self.shared.options
    }

    /// The capability handle given to plugins.
    #[must_use]
    pub fn handle(&self) -> MinimapHandle<H> {
        MinimapHandle::new(
            self.shared.host.clone(),
            self.shared.elements.clone(),
            Rc::downgrade(&self.shared.bus),
        )
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.shared.state.borrow().lifecycle
    }

    /// Factors from the most recent structural-change pass.
    #[must_use]
    pub fn scale(&self) -> ScaleState {
        self.shared.state.borrow().scale
    }

    /// Proxies produced by the most recent projection, in output order.
    #[must_use]
    pub fn rendered_elements(&self) -> Vec<RenderedElement<H::Element>> {
        self.shared.state.borrow().rendered.clone()
    }

    /// Returns `true` while a viewport drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.shared.state.borrow().drag.is_some()
    }

    /// Tears the minimap down.
    ///
    /// Cancels pending throttle and debounce work, drops every listener,
    /// observer and timer created by [`render`](Self::render), clears the
    /// [`on`](Self::on) subscriptions and detaches the root element. Calling
    /// it again does nothing.
    pub fn destroy(&self) {
        let shared = &self.shared;
        let (was_rendered, released) = {
            let mut state = shared.state.borrow_mut();
            if state.lifecycle == LifecycleState::Destroyed {
                return;
            }
            let was_rendered = state.is_rendered();
            state.lifecycle = LifecycleState::Destroyed;
            state.throttle.cancel();
            state.debounce.cancel();
            state.rendered.clear();
            let released = (
                core::mem::take(&mut state.listeners),
                state.observer.take(),
                state.scroll_timer.take(),
                state.resize_timer.take(),
                state.drag.take(),
            );
            (was_rendered, released)
        };
        // Handles unsubscribe on drop; the state borrow is released first so
        // hosts may call back in while tearing down.
        drop(released);
        shared.bus.borrow_mut().clear();
        if was_rendered {
            shared.host.remove(&shared.elements.root);
        }
        tracing::debug!("minimap destroyed");
    }
}

impl<H: Host> Shared<H> {
    /// Subscribes to the page events that drive the minimap.
    fn subscribe(self: &Rc<Self>) {
        let host = &*self.host;
        let on_pointer_down: PointerHandler<H::Element> = {
            let weak = Rc::downgrade(self);
            Box::new(move |input| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_pointer_down(input);
                }
            })
        };
        let on_scroll: EventHandler = {
            let weak = Rc::downgrade(self);
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_scroll();
                }
            })
        };
        let on_window_resize: EventHandler = {
            let weak = Rc::downgrade(self);
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_resize();
                }
            })
        };
        let on_container_resize: EventHandler = {
            let weak = Rc::downgrade(self);
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_resize();
                }
            })
        };

        let listeners = alloc::vec![
            host.listen_pointer(
                ListenTarget::Element(&self.elements.viewport),
                PointerEventKind::Down,
                on_pointer_down,
            ),
            host.listen(ListenTarget::Window, WindowEvent::Scroll, on_scroll),
            host.listen(ListenTarget::Window, WindowEvent::Resize, on_window_resize),
        ];
        let observer = host.observe_resize(&self.page_container, on_container_resize);

        let mut state = self.state.borrow_mut();
        state.listeners = listeners;
        state.observer = Some(observer);
    }
}

impl<H: Host> Clone for Minimap<H> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for Minimap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("Minimap")
            .field("lifecycle", &state.lifecycle)
            .field("elements", &self.shared.elements)
            .field("scale", &state.scale)
            .field("rendered", &state.rendered.len())
            .field("subscriptions", &self.shared.bus.borrow().len())
            .finish_non_exhaustive()
    }
}
