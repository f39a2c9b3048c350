// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory document implementing [`Host`], with a manual clock.
//!
//! Layout is not computed. Every node carries a fixed page rectangle, and a
//! tiny class stylesheet supplies the sizes the minimap's own elements would
//! get from CSS. Listeners, observers and timers are owned handles that
//! unregister on drop, so tests can check for leaks.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test uses every helper."
)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use kurbo::{Rect, Vec2};
use understory_minimap::{
    EventHandler, Host, ListenTarget, PRIMARY_BUTTON, PageMetrics, PointerEventKind,
    PointerHandler, PointerInput, WindowEvent, class,
};
use understory_timing::{TimerId, TimerQueue};

pub(crate) const WINDOW_HEIGHT: f64 = 1000.0;
pub(crate) const PAGE_WIDTH: f64 = 1000.0;
pub(crate) const PAGE_HEIGHT: f64 = 50_000.0;
pub(crate) const MINIMAP_WIDTH: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct FakeError(String);

/// Sizes a class gives its elements, standing in for a stylesheet.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ClassLayout {
    pub(crate) rect: Option<Rect>,
    pub(crate) client_width: Option<f64>,
    pub(crate) natural_height: Option<f64>,
    pub(crate) fixed: bool,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    rect: Rect,
    client_width: f64,
    natural_height: f64,
    fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Window,
    Document,
    Element(NodeId),
}

impl From<ListenTarget<'_, NodeId>> for Target {
    fn from(target: ListenTarget<'_, NodeId>) -> Self {
        match target {
            ListenTarget::Window => Self::Window,
            ListenTarget::Document => Self::Document,
            ListenTarget::Element(node) => Self::Element(*node),
        }
    }
}

#[derive(Clone)]
enum Handler {
    Event(WindowEvent, Rc<RefCell<EventHandler>>),
    Pointer(PointerEventKind, Rc<RefCell<PointerHandler<NodeId>>>),
    Resize(Rc<RefCell<EventHandler>>),
}

struct Registration {
    id: u64,
    target: Target,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Registration>,
}

impl Registry {
    fn add(&mut self, target: Target, handler: Handler) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Registration {
            id,
            target,
            handler,
        });
        id
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }
}

/// Subscription handle; dropping it unregisters.
#[derive(Debug)]
pub(crate) struct FakeListener {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|r| r.id != self.id);
        }
    }
}

type TimerCallback = Box<dyn FnOnce()>;

/// Timer handle; dropping it cancels the timer if it has not fired.
#[derive(Debug)]
pub(crate) struct FakeTimer {
    id: TimerId,
    queue: Weak<RefCell<TimerQueue<TimerCallback>>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            // Take the payload out before dropping it, outside the borrow.
            let cancelled = queue.borrow_mut().cancel(self.id);
            drop(cancelled);
        }
    }
}

pub(crate) struct FakeHost {
    nodes: RefCell<Vec<Node>>,
    sheet: RefCell<HashMap<String, ClassLayout>>,
    body: NodeId,
    page_height: Cell<f64>,
    window_height: Cell<f64>,
    scroll_y: Cell<f64>,
    now: Cell<u64>,
    timers: Rc<RefCell<TimerQueue<TimerCallback>>>,
    registry: Rc<RefCell<Registry>>,
    mutations: Cell<usize>,
    dispatched: RefCell<Vec<(NodeId, String)>>,
    scrolls: RefCell<Vec<f64>>,
    fail_queries: Cell<bool>,
    fail_appends: Cell<bool>,
}

impl std::fmt::Debug for FakeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeHost")
            .field("nodes", &self.nodes.borrow().len())
            .field("scroll_y", &self.scroll_y.get())
            .field("now", &self.now.get())
            .finish_non_exhaustive()
    }
}

impl FakeHost {
    /// An empty page of the default size, with the minimap stylesheet.
    pub(crate) fn new() -> Self {
        let body = Node {
            tag: "body".into(),
            rect: Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT),
            client_width: PAGE_WIDTH,
            natural_height: PAGE_HEIGHT,
            ..Node::default()
        };
        let host = Self {
            nodes: RefCell::new(vec![body]),
            sheet: RefCell::new(HashMap::new()),
            body: NodeId(0),
            page_height: Cell::new(PAGE_HEIGHT),
            window_height: Cell::new(WINDOW_HEIGHT),
            scroll_y: Cell::new(0.0),
            now: Cell::new(0),
            timers: Rc::new(RefCell::new(TimerQueue::new())),
            registry: Rc::new(RefCell::new(Registry::default())),
            mutations: Cell::new(0),
            dispatched: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
            fail_queries: Cell::new(false),
            fail_appends: Cell::new(false),
        };
        let column = Rect::new(PAGE_WIDTH - MINIMAP_WIDTH, 0.0, PAGE_WIDTH, WINDOW_HEIGHT);
        host.style_class(
            class::ROOT,
            ClassLayout {
                rect: Some(column),
                client_width: Some(MINIMAP_WIDTH),
                natural_height: Some(WINDOW_HEIGHT),
                fixed: true,
            },
        );
        host.style_class(
            class::VIEWPORT,
            ClassLayout {
                rect: Some(column),
                client_width: Some(MINIMAP_WIDTH),
                natural_height: Some(WINDOW_HEIGHT),
                fixed: true,
            },
        );
        for name in [class::CONTENT, class::DRAG_INDICATOR] {
            host.style_class(
                name,
                ClassLayout {
                    rect: Some(column),
                    client_width: Some(MINIMAP_WIDTH),
                    natural_height: None,
                    fixed: true,
                },
            );
        }
        host
    }

    pub(crate) fn style_class(&self, name: &str, layout: ClassLayout) {
        self.sheet.borrow_mut().insert(name.to_owned(), layout);
    }

    /// Adds a page element under `parent` at a fixed page rectangle.
    pub(crate) fn add(&self, parent: NodeId, tag: &str, classes: &[&str], rect: Rect) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            tag: tag.to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: Some(parent),
            rect,
            client_width: rect.width(),
            natural_height: rect.height(),
            ..Node::default()
        });
        nodes[parent.0].children.push(id);
        id
    }

    /// Makes every selector query fail, as if the document rejected it.
    pub(crate) fn fail_queries(&self, fail: bool) {
        self.fail_queries.set(fail);
    }

    /// Makes every child insertion fail.
    pub(crate) fn fail_appends(&self, fail: bool) {
        self.fail_appends.set(fail);
    }

    pub(crate) fn set_id(&self, node: NodeId, id: &str) {
        self.nodes.borrow_mut()[node.0].id = Some(id.to_owned());
    }

    // Clock and timers.

    pub(crate) fn now(&self) -> u64 {
        self.now.get()
    }

    /// Moves the clock forward, running every timer that comes due in order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let due = self.timers.borrow_mut().pop_due(target);
            let Some((_, deadline, callback)) = due else {
                break;
            };
            self.now.set(deadline.max(self.now.get()));
            callback();
        }
        self.now.set(target);
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    // Page state.

    pub(crate) fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Every `scroll_to` request, in order, before clamping.
    pub(crate) fn scroll_requests(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    /// Scrolls as the user would and fires `scroll` if the offset changed.
    pub(crate) fn user_scroll(&self, top: f64) {
        self.set_scroll(top);
    }

    pub(crate) fn set_page_height(&self, height: f64) {
        self.page_height.set(height);
        let mut nodes = self.nodes.borrow_mut();
        let body = &mut nodes[self.body.0];
        body.rect.y1 = body.rect.y0 + height;
        body.natural_height = height;
    }

    pub(crate) fn set_container_width(&self, container: NodeId, width: f64) {
        self.nodes.borrow_mut()[container.0].client_width = width;
    }

    fn set_scroll(&self, top: f64) {
        let max = (self.page_height.get() - self.window_height.get()).max(0.0);
        let top = top.clamp(0.0, max);
        if top != self.scroll_y.get() {
            self.scroll_y.set(top);
            self.fire_window(WindowEvent::Scroll);
        }
    }

    // Introspection.

    pub(crate) fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub(crate) fn mutations(&self) -> usize {
        self.mutations.get()
    }

    pub(crate) fn dispatched(&self) -> Vec<(NodeId, String)> {
        self.dispatched.borrow().clone()
    }

    pub(crate) fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub(crate) fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    pub(crate) fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    pub(crate) fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub(crate) fn inner_html(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].inner_html.clone()
    }

    pub(crate) fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub(crate) fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    /// Returns `true` if `node` is in the document.
    pub(crate) fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // Input.

    /// Presses a button at window height `client_y` over `target`.
    pub(crate) fn mouse_down(&self, target: NodeId, client_y: f64, button: i16) {
        let input = PointerInput {
            button,
            page_y: client_y + self.scroll_y.get(),
            target: Some(target),
        };
        self.fire_pointer(Some(target), PointerEventKind::Down, &input);
    }

    pub(crate) fn primary_down(&self, target: NodeId, client_y: f64) {
        self.mouse_down(target, client_y, PRIMARY_BUTTON);
    }

    /// Moves the pointer over the document body.
    pub(crate) fn mouse_move(&self, client_y: f64) {
        let input = PointerInput {
            button: PRIMARY_BUTTON,
            page_y: client_y + self.scroll_y.get(),
            target: Some(self.body),
        };
        self.fire_pointer(Some(self.body), PointerEventKind::Move, &input);
    }

    pub(crate) fn mouse_up(&self, client_y: f64) {
        let input = PointerInput {
            button: PRIMARY_BUTTON,
            page_y: client_y + self.scroll_y.get(),
            target: Some(self.body),
        };
        self.fire_pointer(Some(self.body), PointerEventKind::Up, &input);
    }

    pub(crate) fn fire_window_resize(&self) {
        self.fire_window(WindowEvent::Resize);
    }

    /// Reports a size change of `node` to its resize observers.
    pub(crate) fn fire_element_resize(&self, node: NodeId) {
        let handlers = self.collect(|r| match &r.handler {
            Handler::Resize(h) if r.target == Target::Element(node) => Some(h.clone()),
            _ => None,
        });
        for (id, handler) in handlers {
            if self.registry.borrow().contains(id) {
                (&mut *handler.borrow_mut())();
            }
        }
    }

    fn fire_window(&self, event: WindowEvent) {
        let handlers = self.collect(|r| match &r.handler {
            Handler::Event(e, h) if *e == event && r.target == Target::Window => Some(h.clone()),
            _ => None,
        });
        for (id, handler) in handlers {
            if self.registry.borrow().contains(id) {
                (&mut *handler.borrow_mut())();
            }
        }
    }

    /// Dispatches along the bubbling path: target, ancestors, document, window.
    fn fire_pointer(&self, target: Option<NodeId>, kind: PointerEventKind, input: &PointerInput<NodeId>) {
        let mut path = Vec::new();
        let mut current = target;
        while let Some(node) = current {
            path.push(Target::Element(node));
            current = self.parent(node);
        }
        path.push(Target::Document);
        path.push(Target::Window);

        for hop in path {
            let handlers = self.collect(|r| match &r.handler {
                Handler::Pointer(k, h) if *k == kind && r.target == hop => Some(h.clone()),
                _ => None,
            });
            for (id, handler) in handlers {
                if self.registry.borrow().contains(id) {
                    (&mut *handler.borrow_mut())(input);
                }
            }
        }
    }

    fn collect<T>(&self, select: impl Fn(&Registration) -> Option<T>) -> Vec<(u64, T)> {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter_map(|r| select(r).map(|t| (r.id, t)))
            .collect()
    }

    fn register(&self, target: Target, handler: Handler) -> FakeListener {
        let id = self.registry.borrow_mut().add(target, handler);
        FakeListener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    fn touch(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }

    fn layout_of(&self, node: &Node) -> ClassLayout {
        let sheet = self.sheet.borrow();
        let mut layout = ClassLayout {
            rect: Some(node.rect),
            client_width: Some(node.client_width),
            natural_height: Some(node.natural_height),
            fixed: node.fixed,
        };
        for name in &node.classes {
            if let Some(rule) = sheet.get(name) {
                layout.rect = rule.rect.or(layout.rect);
                layout.client_width = rule.client_width.or(layout.client_width);
                layout.natural_height = rule.natural_height.or(layout.natural_height);
                layout.fixed |= rule.fixed;
            }
        }
        layout
    }

    fn detach(nodes: &mut [Node], child: NodeId) {
        if let Some(parent) = nodes[child.0].parent.take() {
            nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    fn descendants(nodes: &[Node], root: NodeId, out: &mut Vec<NodeId>) {
        for child in &nodes[root.0].children {
            out.push(*child);
            Self::descendants(nodes, *child, out);
        }
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.strip_suffix("px")?.parse().ok()
}

/// One compound selector such as `p.text#intro`.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == node.tag)
            && self.id.as_ref().is_none_or(|i| node.id.as_ref() == Some(i))
            && self.classes.iter().all(|c| node.classes.contains(c))
    }
}

/// Parses a comma separated list of compound selectors.
fn parse_selector(selector: &str) -> Result<Vec<Compound>, FakeError> {
    let invalid = || FakeError(format!("'{selector}' is not a valid selector"));
    let mut out = Vec::new();
    for part in selector.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid());
        }
        let mut compound = Compound::default();
        let mut rest = part;
        let name_end = |s: &str| s.find(['.', '#']).unwrap_or(s.len());
        let tag_end = name_end(rest);
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_owned());
        }
        rest = &rest[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = name_end(body);
            if end == 0 {
                return Err(invalid());
            }
            let name = body[..end].to_owned();
            match marker {
                '.' => compound.classes.push(name),
                _ => compound.id = Some(name),
            }
            rest = &body[end..];
        }
        let valid = |s: &String| {
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if !compound.tag.iter().chain(&compound.id).chain(&compound.classes).all(valid) {
            return Err(invalid());
        }
        out.push(compound);
    }
    Ok(out)
}

impl Host for FakeHost {
    type Element = NodeId;
    type Listener = FakeListener;
    type Observer = FakeListener;
    type Timer = FakeTimer;
    type Error = FakeError;

    fn body(&self) -> NodeId {
        self.body
    }

    fn metrics(&self) -> PageMetrics {
        let page = self.page_height.get();
        let window = self.window_height.get();
        PageMetrics {
            root_client_height: window,
            root_scroll_height: page,
            root_offset_height: page,
            body_scroll_height: page,
            body_offset_height: page,
            inner_height: window,
            scroll: Vec2::new(0.0, self.scroll_y.get()),
        }
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        let nodes = self.nodes.borrow();
        let layout = self.layout_of(&nodes[element.0]);
        let rect = layout.rect.unwrap_or(Rect::ZERO);
        if layout.fixed {
            rect
        } else {
            rect - Vec2::new(0.0, self.scroll_y.get())
        }
    }

    fn client_width(&self, element: &NodeId) -> f64 {
        let nodes = self.nodes.borrow();
        self.layout_of(&nodes[element.0]).client_width.unwrap_or(0.0)
    }

    fn client_height(&self, element: &NodeId) -> f64 {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        let natural = self.layout_of(node).natural_height.unwrap_or(0.0);
        let height = node
            .styles
            .get("height")
            .and_then(|h| parse_px(h))
            .unwrap_or(natural);
        match node.styles.get("max-height").and_then(|h| parse_px(h)) {
            Some(max) => height.min(max),
            None => height,
        }
    }

    fn query_selector_all(&self, root: &NodeId, selector: &str) -> Result<Vec<NodeId>, FakeError> {
        if self.fail_queries.get() {
            return Err(FakeError(format!("query '{selector}' rejected")));
        }
        let compounds = parse_selector(selector)?;
        let nodes = self.nodes.borrow();
        let mut all = Vec::new();
        Self::descendants(&nodes, *root, &mut all);
        Ok(all
            .into_iter()
            .filter(|id| compounds.iter().any(|c| c.matches(&nodes[id.0])))
            .collect())
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, FakeError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FakeError(format!("invalid tag name '{tag}'")));
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            tag: tag.to_owned(),
            ..Node::default()
        });
        Ok(id)
    }

    fn append_children(&self, parent: &NodeId, children: &[NodeId]) -> Result<(), FakeError> {
        if self.fail_appends.get() {
            return Err(FakeError("insertion rejected".into()));
        }
        self.touch();
        let mut nodes = self.nodes.borrow_mut();
        for child in children {
            Self::detach(&mut nodes, *child);
            nodes[child.0].parent = Some(*parent);
            nodes[parent.0].children.push(*child);
        }
        Ok(())
    }

    fn clear_children(&self, element: &NodeId) {
        self.touch();
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[element.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
    }

    fn remove(&self, element: &NodeId) {
        self.touch();
        Self::detach(&mut self.nodes.borrow_mut(), *element);
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.touch();
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.touch();
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.touch();
        self.nodes.borrow_mut()[element.0]
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.touch();
        self.nodes.borrow_mut()[element.0]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        self.touch();
        html.clone_into(&mut self.nodes.borrow_mut()[element.0].inner_html);
    }

    fn dispatch_event(&self, element: &NodeId, name: &str) {
        self.dispatched.borrow_mut().push((*element, name.to_owned()));
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
        self.set_scroll(top);
    }

    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn listen(
        &self,
        target: ListenTarget<'_, NodeId>,
        event: WindowEvent,
        handler: EventHandler,
    ) -> FakeListener {
        self.register(
            target.into(),
            Handler::Event(event, Rc::new(RefCell::new(handler))),
        )
    }

    fn listen_pointer(
        &self,
        target: ListenTarget<'_, NodeId>,
        kind: PointerEventKind,
        handler: PointerHandler<NodeId>,
    ) -> FakeListener {
        self.register(
            target.into(),
            Handler::Pointer(kind, Rc::new(RefCell::new(handler))),
        )
    }

    fn observe_resize(&self, element: &NodeId, handler: EventHandler) -> FakeListener {
        self.register(
            Target::Element(*element),
            Handler::Resize(Rc::new(RefCell::new(handler))),
        )
    }

    fn set_timeout(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> FakeTimer {
        let id = self
            .timers
            .borrow_mut()
            .schedule(self.now.get() + delay_ms, callback);
        FakeTimer {
            id,
            queue: Rc::downgrade(&self.timers),
        }
    }
}

/// A long article: a header, three paragraphs in a main element, a footer
/// and one collapsed element.
#[derive(Debug)]
pub(crate) struct Page {
    pub(crate) host: Rc<FakeHost>,
    pub(crate) header: NodeId,
    pub(crate) main: NodeId,
    pub(crate) paragraphs: Vec<NodeId>,
    pub(crate) footer: NodeId,
    pub(crate) collapsed: NodeId,
}

impl Page {
    pub(crate) fn new() -> Self {
        let host = Rc::new(FakeHost::new());
        let body = host.body();
        let header = host.add(body, "header", &[], Rect::new(0.0, 0.0, PAGE_WIDTH, 200.0));
        let main = host.add(
            body,
            "main",
            &[],
            Rect::new(0.0, 200.0, PAGE_WIDTH, PAGE_HEIGHT - 200.0),
        );
        let paragraphs = (0_u8..3)
            .map(|i| {
                let top = 1000.0 + f64::from(i) * 1000.0;
                host.add(main, "p", &["text"], Rect::new(100.0, top, 900.0, top + 100.0))
            })
            .collect();
        let footer = host.add(
            body,
            "footer",
            &[],
            Rect::new(0.0, PAGE_HEIGHT - 200.0, PAGE_WIDTH, PAGE_HEIGHT),
        );
        let collapsed = host.add(main, "p", &["text"], Rect::new(100.0, 4000.0, 900.0, 4000.0));
        Self {
            host,
            header,
            main,
            paragraphs,
            footer,
            collapsed,
        }
    }
}
