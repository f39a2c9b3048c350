// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use kurbo::{Rect, Vec2};
use understory_minimap::{
    EventHandler, Host, ListenTarget, PageMetrics, PointerEventKind, PointerHandler, PointerInput,
    WindowEvent,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, Document, Event, EventTarget, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::WebError;
use crate::observer::ResizeObservation;

/// [`Host`] over the browser DOM.
///
/// Elements are [`HtmlElement`]s; query results that are not HTML elements
/// (SVG, for instance) are skipped. Style, class and attribute writes that the
/// browser rejects are logged at `warn` and otherwise ignored.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
    body: HtmlElement,
}

impl WebHost {
    /// Binds to the global window.
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::Missing("window"))?;
        Self::from_window(window)
    }

    /// Binds to `window` and its document.
    pub fn from_window(window: Window) -> Result<Self, WebError> {
        let document = window.document().ok_or(WebError::Missing("document"))?;
        let body = document.body().ok_or(WebError::Missing("body"))?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    /// The bound window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The bound document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn event_target<'a>(&'a self, target: ListenTarget<'a, HtmlElement>) -> &'a EventTarget {
        match target {
            ListenTarget::Window => &self.window,
            ListenTarget::Document => &self.document,
            ListenTarget::Element(element) => element,
        }
    }
}

fn warn_on_err(operation: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(operation, error = ?err, "DOM write rejected");
    }
}

impl Host for WebHost {
    type Element = HtmlElement;
    type Listener = EventListener;
    type Observer = Option<ResizeObservation>;
    type Timer = Timeout;
    type Error = WebError;

    fn body(&self) -> HtmlElement {
        self.body.clone()
    }

    fn metrics(&self) -> PageMetrics {
        let root = self.document.document_element();
        let root_html = root.as_ref().and_then(|r| r.dyn_ref::<HtmlElement>());
        let inner_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        PageMetrics {
            root_client_height: root.as_ref().map_or(0.0, |r| f64::from(r.client_height())),
            root_scroll_height: root.as_ref().map_or(0.0, |r| f64::from(r.scroll_height())),
            root_offset_height: root_html.map_or(0.0, |r| f64::from(r.offset_height())),
            body_scroll_height: f64::from(self.body.scroll_height()),
            body_offset_height: f64::from(self.body.offset_height()),
            inner_height,
            scroll: Vec2::new(
                self.window.scroll_x().unwrap_or(0.0),
                self.window.scroll_y().unwrap_or(0.0),
            ),
        }
    }

    fn bounding_rect(&self, element: &HtmlElement) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    fn client_width(&self, element: &HtmlElement) -> f64 {
        f64::from(element.client_width())
    }

    fn client_height(&self, element: &HtmlElement) -> f64 {
        f64::from(element.client_height())
    }

    fn query_selector_all(
        &self,
        root: &HtmlElement,
        selector: &str,
    ) -> Result<Vec<HtmlElement>, WebError> {
        let list = root
            .query_selector_all(selector)
            .map_err(|err| WebError::js("querySelectorAll", err))?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    fn create_element(&self, tag: &str) -> Result<HtmlElement, WebError> {
        self.document
            .create_element(tag)
            .map_err(|err| WebError::js("createElement", err))?
            .dyn_into::<HtmlElement>()
            .map_err(|element| WebError::js("createElement", element.into()))
    }

    fn append_children(&self, parent: &HtmlElement, children: &[HtmlElement]) -> Result<(), WebError> {
        // One fragment, one insertion, one layout.
        let fragment = self.document.create_document_fragment();
        for child in children {
            fragment
                .append_child(child)
                .map_err(|err| WebError::js("appendChild", err))?;
        }
        parent
            .append_child(&fragment)
            .map_err(|err| WebError::js("appendChild", err))?;
        Ok(())
    }

    fn clear_children(&self, element: &HtmlElement) {
        element.set_text_content(None);
    }

    fn remove(&self, element: &HtmlElement) {
        element.remove();
    }

    fn add_class(&self, element: &HtmlElement, class: &str) {
        warn_on_err("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &HtmlElement, class: &str) {
        warn_on_err("classList.remove", element.class_list().remove_1(class));
    }

    fn has_class(&self, element: &HtmlElement, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) {
        warn_on_err("style.setProperty", element.style().set_property(property, value));
    }

    fn set_attribute(&self, element: &HtmlElement, name: &str, value: &str) {
        warn_on_err("setAttribute", element.set_attribute(name, value));
    }

    fn set_inner_html(&self, element: &HtmlElement, html: &str) {
        element.set_inner_html(html);
    }

    fn dispatch_event(&self, element: &HtmlElement, name: &str) {
        let result = CustomEvent::new(name)
            .and_then(|event| element.dispatch_event(&event))
            .map(|_| ());
        warn_on_err("dispatchEvent", result);
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "Epoch milliseconds fit in u64 and fractions are not needed."
    )]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn listen(
        &self,
        target: ListenTarget<'_, HtmlElement>,
        event: WindowEvent,
        handler: EventHandler,
    ) -> EventListener {
        let mut handler = handler;
        EventListener::new(self.event_target(target), event.name(), move |_event: &Event| {
            handler();
        })
    }

    fn listen_pointer(
        &self,
        target: ListenTarget<'_, HtmlElement>,
        kind: PointerEventKind,
        handler: PointerHandler<HtmlElement>,
    ) -> EventListener {
        let mut handler = handler;
        EventListener::new(self.event_target(target), kind.name(), move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let input = PointerInput {
                button: event.button(),
                page_y: f64::from(event.page_y()),
                target: event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok()),
            };
            handler(&input);
        })
    }

    fn observe_resize(
        &self,
        element: &HtmlElement,
        handler: EventHandler,
    ) -> Option<ResizeObservation> {
        ResizeObservation::new(element, handler)
            .inspect_err(|err| tracing::warn!(error = %err, "page container resizes are not observed"))
            .ok()
    }

    fn set_timeout(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(u32::try_from(delay_ms).unwrap_or(u32::MAX), callback)
    }
}
