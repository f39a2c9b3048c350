// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page and element measurements.
//!
//! The functions here are pure: they work on a [`PageMetrics`] snapshot and on
//! `kurbo` rectangles. [`position`] and [`dimensions`] are thin adapters that
//! read the live values from a [`Host`].

use kurbo::{Point, Rect, Size, Vec2};

use crate::host::Host;

/// Snapshot of the page-level sizes the minimap derives its factors from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMetrics {
    /// `clientHeight` of the document root.
    pub root_client_height: f64,
    /// `scrollHeight` of the document root.
    pub root_scroll_height: f64,
    /// `offsetHeight` of the document root.
    pub root_offset_height: f64,
    /// `scrollHeight` of the body.
    pub body_scroll_height: f64,
    /// `offsetHeight` of the body.
    pub body_offset_height: f64,
    /// `innerHeight` of the window.
    pub inner_height: f64,
    /// Current scroll offset of the window.
    pub scroll: Vec2,
}

impl PageMetrics {
    /// Height of the visible window.
    ///
    /// The larger of the root's client height and the window's inner height;
    /// some engines report zero or a rounded-down value for one of them.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.root_client_height.max(self.inner_height).max(0.0)
    }

    /// Height of the whole page.
    ///
    /// Over-approximates on purpose: pages shorter than the window still
    /// report at least the window height.
    #[must_use]
    pub fn page_height(&self) -> f64 {
        [
            self.body_scroll_height,
            self.body_offset_height,
            self.root_client_height,
            self.root_scroll_height,
            self.root_offset_height,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Length of the scrollable range, `page_height - viewport_height`, never negative.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.page_height() - self.viewport_height()).max(0.0)
    }

    /// Scroll depth as a fraction of the scrollable range.
    ///
    /// Returns `None` when the page has no scrollable range; callers skip any
    /// transform that depends on the ratio in that case.
    #[must_use]
    pub fn scroll_ratio(&self) -> Option<f64> {
        let range = self.page_height() - self.viewport_height();
        (range > 0.0).then(|| self.scroll.y / range)
    }
}

/// Page-relative top-left corner of a window-relative rectangle.
#[must_use]
pub fn page_position(rect: Rect, scroll: Vec2) -> Point {
    rect.origin() + scroll
}

/// Position of `element` relative to the top-left corner of `ancestor`.
///
/// Both rectangles must be measured in the same frame; the scroll offset and
/// any transform of the ancestor cancel out.
#[must_use]
pub fn relative_position(element: Rect, ancestor: Rect) -> Point {
    (element.origin() - ancestor.origin()).to_point()
}

/// Live position of `element`.
///
/// Page-relative when `ancestor` is `None`, otherwise relative to `ancestor`.
pub fn position<H: Host>(host: &H, element: &H::Element, ancestor: Option<&H::Element>) -> Point {
    let rect = host.bounding_rect(element);
    match ancestor {
        Some(ancestor) => relative_position(rect, host.bounding_rect(ancestor)),
        None => page_position(rect, host.metrics().scroll),
    }
}

/// Live size of `element`; zero for collapsed or hidden elements.
pub fn dimensions<H: Host>(host: &H, element: &H::Element) -> Size {
    host.bounding_rect(element).size()
}
