// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_timing::{Debounce, Throttle};

use crate::class;
use crate::host::Host;
use crate::plugin::Plugin;

/// Renders the inner markup of a proxy element from its source element.
pub type RenderFn<E> = Rc<dyn Fn(&E) -> String>;

/// Decides whether a matched source element is projected.
pub type ConditionFn<E> = Rc<dyn Fn(&E) -> bool>;

/// How page elements matching a selector are projected into the minimap.
///
/// Rules form a tree: [`children`](Self::children) are evaluated against each
/// element the parent rule matched, and their proxies follow the parent's
/// proxy in the output.
pub struct ElementRule<E> {
    /// CSS selector matched against the search root's descendants.
    pub selector: String,
    /// Background color applied to each proxy.
    pub background_color: Option<String>,
    /// Extra classes applied to each proxy.
    pub classes: Vec<String>,
    /// Rules evaluated relative to each matched element.
    pub children: Vec<Self>,
    /// Produces the proxy's inner markup.
    pub render: Option<RenderFn<E>>,
    /// Filters matched elements; all pass when absent.
    pub condition: Option<ConditionFn<E>>,
    /// Image placed inside each proxy.
    pub image_url: Option<String>,
}

impl<E> ElementRule<E> {
    /// Creates a rule projecting every visible match of `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            background_color: None,
            classes: Vec::new(),
            children: Vec::new(),
            render: None,
            condition: None,
            image_url: None,
        }
    }

    /// Sets the proxy background color.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Adds a class to every proxy.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds a nested rule.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the inner-markup renderer.
    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&E) -> String + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Sets the inclusion predicate.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Fn(&E) -> bool + 'static) -> Self {
        self.condition = Some(Rc::new(condition));
        self
    }

    /// Sets the image placed inside each proxy.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Returns `true` if `element` passes the rule's condition.
    #[must_use]
    pub fn accepts(&self, element: &E) -> bool {
        self.condition.as_ref().is_none_or(|condition| condition(element))
    }
}

impl<E> Clone for ElementRule<E> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            background_color: self.background_color.clone(),
            classes: self.classes.clone(),
            children: self.children.clone(),
            render: self.render.clone(),
            condition: self.condition.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl<E> fmt::Debug for ElementRule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRule")
            .field("selector", &self.selector)
            .field("background_color", &self.background_color)
            .field("classes", &self.classes)
            .field("children", &self.children)
            .field("render", &self.render.is_some())
            .field("condition", &self.condition.is_some())
            .field("image_url", &self.image_url)
            .finish()
    }
}

/// Where the minimap sits on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Vertically centered against the right edge.
    #[default]
    RightCentered,
    /// A caller-provided layout class.
    Custom(String),
}

impl Placement {
    /// Class applied to the minimap root.
    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::RightCentered => class::RIGHT_CENTERED,
            Self::Custom(class) => class,
        }
    }
}

/// Wait windows for the scroll throttle and the resize debounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Scroll handling runs at most once per this many milliseconds.
    pub throttle_ms: u64,
    /// Re-layout runs this many milliseconds after the last resize.
    pub debounce_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            throttle_ms: Throttle::DEFAULT_WAIT_MS,
            debounce_ms: Debounce::DEFAULT_WAIT_MS,
        }
    }
}

/// Configuration of one [`Minimap`](crate::Minimap).
///
/// The options are fixed for the lifetime of the minimap built from them; a
/// new minimap is needed to change them.
///
/// ```rust,ignore
/// let options = MinimapOptions::new()
///     .with_theme("dark-theme")
///     .with_rule(ElementRule::new("header").with_class("minimap-header"))
///     .with_rule(
///         ElementRule::new("main").with_child(ElementRule::new("p").with_class("minimap-p")),
///     )
///     .with_plugin(GradientPlugin);
/// ```
pub struct MinimapOptions<H: Host> {
    page_container: Option<H::Element>,
    static_elements: Vec<H::Element>,
    rules: Vec<ElementRule<H::Element>>,
    theme: Option<String>,
    placement: Placement,
    plugins: Vec<Rc<dyn Plugin<H>>>,
    timings: Timings,
}

impl<H: Host> MinimapOptions<H> {
    /// Default options: the body is the page, nothing is projected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_container: None,
            static_elements: Vec::new(),
            rules: Vec::new(),
            theme: None,
            placement: Placement::default(),
            plugins: Vec::new(),
            timings: Timings::default(),
        }
    }

    /// Uses `container` instead of the body as the page for width, height and
    /// element positions.
    #[must_use]
    pub fn with_page_container(mut self, container: H::Element) -> Self {
        self.page_container = Some(container);
        self
    }

    /// Appends a pre-built element to the minimap content, before all
    /// projected elements.
    #[must_use]
    pub fn with_static_element(mut self, element: H::Element) -> Self {
        self.static_elements.push(element);
        self
    }

    /// Adds a projection rule. Rules render in the order they were added.
    #[must_use]
    pub fn with_rule(mut self, rule: ElementRule<H::Element>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the theme class.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Adds a plugin. Plugins are initialized in the order they were added.
    #[must_use]
    pub fn with_plugin(mut self, plugin: impl Plugin<H> + 'static) -> Self {
        self.plugins.push(Rc::new(plugin));
        self
    }

    /// Overrides the throttle and debounce windows.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// The configured page container, if any.
    #[must_use]
    pub fn page_container(&self) -> Option<&H::Element> {
        self.page_container.as_ref()
    }

    /// Pre-built elements.
    #[must_use]
    pub fn static_elements(&self) -> &[H::Element] {
        &self.static_elements
    }

    /// Projection rules.
    #[must_use]
    pub fn rules(&self) -> &[ElementRule<H::Element>] {
        &self.rules
    }

    /// Theme class applied to the root.
    #[must_use]
    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(class::DEFAULT_THEME)
    }

    /// Placement.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Plugins.
    #[must_use]
    pub fn plugins(&self) -> &[Rc<dyn Plugin<H>>] {
        &self.plugins
    }

    /// Throttle and debounce windows.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }
}

impl<H: Host> Default for MinimapOptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> fmt::Debug for MinimapOptions<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinimapOptions")
            .field("page_container", &self.page_container)
            .field("static_elements", &self.static_elements)
            .field("rules", &self.rules)
            .field("theme", &self.theme())
            .field("placement", &self.placement)
            .field("plugins", &self.plugins.len())
            .field("timings", &self.timings)
            .finish()
    }
}
