// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the minimap and the page scroll position in step.
//!
//! Four stimuli drive the minimap:
//!
//! - a structural change (resize, content mutation, [`Minimap::refresh`]):
//!   re-measure, recompute [`ScaleState`], resize, reposition, re-project;
//! - a page scroll (throttled): move the drag indicator and slide the content;
//! - a primary-button press inside the viewport but off the indicator: jump
//!   the page so the indicator centers under the pointer, then drag;
//! - a pointer move during a drag: scroll the page to follow the pointer.
//!
//! A drag ends on the next button release anywhere in the document. At most
//! one drag session exists; its listeners are owned by the session and
//! dropped with it.
//!
//! [`Minimap::refresh`]: crate::Minimap::refresh

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use understory_timing::Ticket;

use crate::class;
use crate::css::{px, translate_y};
use crate::error::MinimapError;
use crate::events::MinimapEvent;
use crate::geometry::{self, PageMetrics};
use crate::host::{
    Host, ListenTarget, PRIMARY_BUTTON, PointerEventKind, PointerHandler, PointerInput,
};
use crate::minimap::Shared;
use crate::projector::Projector;
use crate::scale::{ScaleInputs, ScaleState};

/// Listeners of one viewport drag. Dropping the session ends the drag.
pub(crate) struct DragSession<H: Host> {
    _pointer_move: H::Listener,
    _pointer_up: H::Listener,
}

impl<H: Host> Shared<H> {
    /// Runs one structural-change pass with the loading class asserted.
    pub(crate) fn rebuild(&self) -> Result<(), MinimapError<H::Error>> {
        let root = &self.elements.root;
        self.host.add_class(root, class::LOADING);
        let result = self.rebuild_content();
        self.host.remove_class(root, class::LOADING);
        result
    }

    fn rebuild_content(&self) -> Result<(), MinimapError<H::Error>> {
        let host = &*self.host;
        let elements = &self.elements;
        let metrics = host.metrics();
        let mut inputs = ScaleInputs {
            minimap_width: host.client_width(&elements.root),
            page_width: host.client_width(&self.page_container),
            page_height: metrics.page_height(),
            viewport_height: metrics.viewport_height(),
            minimap_viewport_height: 0.0,
        };

        // Size the indicator and the content first, and clamp the viewport to
        // the content, so the viewport height read below is the laid-out one.
        let sizing = ScaleState::compute(inputs);
        host.set_style(&elements.drag_indicator, "height", &px(sizing.indicator_height()));
        host.set_style(&elements.content, "height", &px(sizing.content_height()));
        host.set_style(&elements.viewport, "max-height", &px(sizing.content_height()));
        inputs.minimap_viewport_height = host.client_height(&elements.viewport);

        let scale = ScaleState::compute(inputs);
        self.state.borrow_mut().scale = scale;
        self.apply_positions(&scale, &metrics);

        let body = host.body();
        let projected = Projector::new(host, &self.page_container, scale.projection_scale())
            .project_all(self.options.rules(), &body)?;
        let nodes: Vec<_> = self
            .options
            .static_elements()
            .iter()
            .cloned()
            .chain(projected.iter().map(|rendered| rendered.node.clone()))
            .collect();
        host.clear_children(&elements.content);
        host.append_children(&elements.content, &nodes)
            .map_err(MinimapError::Host)?;

        tracing::debug!(
            scale_factor = scale.scale_factor(),
            viewport_scroll_factor = ?scale.viewport_scroll_factor(),
            content_scroll_factor = ?scale.content_scroll_factor(),
            elements = projected.len(),
            "minimap laid out"
        );
        self.state.borrow_mut().rendered = projected;
        Ok(())
    }

    fn apply_positions(&self, scale: &ScaleState, metrics: &PageMetrics) {
        let indicator = scale.indicator_offset(metrics.scroll.y);
        let content = scale.content_offset(metrics);
        self.host.set_style(
            &self.elements.drag_indicator,
            "transform",
            &translate_y(indicator),
        );
        self.host
            .set_style(&self.elements.content, "transform", &translate_y(-content));
    }

    pub(crate) fn on_scroll(self: &Rc<Self>) {
        let now = self.host.now_ms();
        let ticket = {
            let mut state = self.state.borrow_mut();
            if !state.is_rendered() {
                return;
            }
            match state.throttle.trigger(now) {
                Some(ticket) => ticket,
                None => return,
            }
        };
        let weak = Rc::downgrade(self);
        let timer = self.host.set_timeout(
            ticket.delay_from(now),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.scroll_tick(ticket);
                }
            }),
        );
        // The previous handle belongs to a timer that already fired.
        let previous = self.state.borrow_mut().scroll_timer.replace(timer);
        drop(previous);
    }

    fn scroll_tick(&self, ticket: Ticket) {
        let scale = {
            let mut state = self.state.borrow_mut();
            // Host timers may run slightly early against the host clock; the
            // wake-up itself is authoritative.
            let now = self.host.now_ms().max(ticket.deadline());
            if !state.is_rendered() || !state.throttle.fire(ticket, now) {
                return;
            }
            state.scale
        };
        let metrics = self.host.metrics();
        self.apply_positions(&scale, &metrics);
        tracing::trace!(scroll_y = metrics.scroll.y, "minimap scroll tick");
        self.notify(MinimapEvent::Scroll);
    }

    pub(crate) fn on_resize(self: &Rc<Self>) {
        let now = self.host.now_ms();
        let ticket = {
            let mut state = self.state.borrow_mut();
            if !state.is_rendered() {
                return;
            }
            state.debounce.trigger(now)
        };
        let weak = Rc::downgrade(self);
        let timer = self.host.set_timeout(
            ticket.delay_from(now),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.resize_tick(ticket);
                }
            }),
        );
        // Replacing the handle cancels the superseded timer.
        let previous = self.state.borrow_mut().resize_timer.replace(timer);
        drop(previous);
    }

    fn resize_tick(&self, ticket: Ticket) {
        {
            let mut state = self.state.borrow_mut();
            let now = self.host.now_ms().max(ticket.deadline());
            if !state.is_rendered() || !state.debounce.fire(ticket, now) {
                return;
            }
        }
        if let Err(err) = self.rebuild() {
            tracing::error!(error = %err, "minimap re-layout failed");
        }
    }

    fn notify(&self, event: MinimapEvent) {
        let callbacks = self.bus.borrow().listeners(event);
        for callback in callbacks {
            callback();
        }
        self.host.dispatch_event(&self.elements.root, event.name());
    }

    pub(crate) fn on_pointer_down(self: &Rc<Self>, input: &PointerInput<H::Element>) {
        if input.button != PRIMARY_BUTTON || !self.state.borrow().is_rendered() {
            return;
        }
        let on_indicator = input.target.as_ref() == Some(&self.elements.drag_indicator);
        if !on_indicator {
            self.jump_to(input.page_y);
        }
        self.begin_drag();
    }

    /// Scrolls so that the indicator centers under a click at `page_y`.
    fn jump_to(&self, page_y: f64) {
        let scale = self.state.borrow().scale;
        let metrics = self.host.metrics();
        let distance = scale.centered_distance(page_y, self.viewport_top());
        if let Some(target) = scale.click_target(scale.content_offset(&metrics), distance) {
            tracing::trace!(page_y, target, "minimap viewport click");
            self.scroll_page(target, &metrics);
        }
    }

    fn begin_drag(self: &Rc<Self>) {
        let on_move: PointerHandler<H::Element> = {
            let weak = Rc::downgrade(self);
            Box::new(move |input| {
                if let Some(shared) = weak.upgrade() {
                    shared.drag_to(input.page_y);
                }
            })
        };
        let on_up: PointerHandler<H::Element> = {
            let weak = Rc::downgrade(self);
            Box::new(move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.end_drag();
                }
            })
        };
        let session = DragSession {
            _pointer_move: self
                .host
                .listen_pointer(ListenTarget::Window, PointerEventKind::Move, on_move),
            _pointer_up: self
                .host
                .listen_pointer(ListenTarget::Document, PointerEventKind::Up, on_up),
        };
        let previous = self.state.borrow_mut().drag.replace(session);
        drop(previous);
    }

    fn drag_to(&self, page_y: f64) {
        let scale = {
            let state = self.state.borrow();
            if !state.is_rendered() || state.drag.is_none() {
                return;
            }
            state.scale
        };
        let distance = scale.centered_distance(page_y, self.viewport_top());
        if let Some(target) = scale.drag_target(distance) {
            self.scroll_page(target, &self.host.metrics());
        }
    }

    fn end_drag(&self) {
        let session = self.state.borrow_mut().drag.take();
        drop(session);
    }

    fn viewport_top(&self) -> f64 {
        geometry::position(&*self.host, &self.elements.viewport, None).y
    }

    fn scroll_page(&self, target: f64, metrics: &PageMetrics) {
        if !target.is_finite() {
            return;
        }
        self.host.scroll_to(target.clamp(0.0, metrics.max_scroll()));
    }
}
