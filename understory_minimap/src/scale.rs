// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale factors between the page, the minimap content and the drag indicator.
//!
//! There are three coordinate spaces:
//!
//! - the page, measured in page pixels, scrolled by the window;
//! - the minimap content, the page shrunk by the scale factor and slid
//!   vertically inside the minimap viewport;
//! - the drag indicator's travel range inside the minimap viewport.
//!
//! [`ScaleState`] captures everything needed to map between them. It is
//! computed in one step from a [`ScaleInputs`] snapshot and replaced as a
//! whole, so a reader never observes factors from two different layouts.

use crate::geometry::PageMetrics;

/// Live measurements a [`ScaleState`] is computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleInputs {
    /// Inner width of the minimap root element.
    pub minimap_width: f64,
    /// Inner width of the page container.
    pub page_width: f64,
    /// Height of the whole page.
    pub page_height: f64,
    /// Height of the visible window.
    pub viewport_height: f64,
    /// Height of the minimap viewport as laid out.
    pub minimap_viewport_height: f64,
}

/// Scale factors derived from one layout of the page and the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    scale_factor: f64,
    page_height: f64,
    viewport_height: f64,
    minimap_viewport_height: f64,
    content_height: f64,
    indicator_height: f64,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            page_height: 0.0,
            viewport_height: 0.0,
            minimap_viewport_height: 0.0,
            content_height: 0.0,
            indicator_height: 0.0,
        }
    }
}

impl ScaleState {
    /// Computes every factor from one snapshot.
    ///
    /// The drag indicator and the content container are sized from the scale
    /// factor, and the minimap viewport is clamped to the content height, the
    /// same way the minimap lays them out.
    #[must_use]
    pub fn compute(inputs: ScaleInputs) -> Self {
        let scale_factor = if inputs.page_width > 0.0 {
            inputs.minimap_width / inputs.page_width
        } else {
            0.0
        };
        let content_height = inputs.page_height * scale_factor;
        Self {
            scale_factor,
            page_height: inputs.page_height,
            viewport_height: inputs.viewport_height,
            minimap_viewport_height: inputs.minimap_viewport_height.min(content_height).max(0.0),
            content_height,
            indicator_height: inputs.viewport_height * scale_factor,
        }
    }

    /// Minimap width divided by page width.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Page scroll pixels per drag-indicator pixel.
    ///
    /// `None` when the indicator has no room to travel (the whole minimap
    /// content fits under it).
    #[must_use]
    pub fn viewport_scroll_factor(&self) -> Option<f64> {
        ratio(self.scroll_range(), self.indicator_travel())
    }

    /// Page pixels per minimap content pixel.
    ///
    /// `None` when the content container has no height.
    #[must_use]
    pub fn content_scroll_factor(&self) -> Option<f64> {
        ratio(self.page_height, self.content_height)
    }

    /// Minimap content pixels per page pixel, used to place projected proxies.
    ///
    /// The inverse of [`content_scroll_factor`](Self::content_scroll_factor),
    /// or zero when the page has no height.
    #[must_use]
    pub fn projection_scale(&self) -> f64 {
        ratio(self.content_height, self.page_height).unwrap_or(0.0)
    }

    /// Height of the drag indicator, the window height scaled down.
    #[must_use]
    pub fn indicator_height(&self) -> f64 {
        self.indicator_height
    }

    /// Height of the content container, the page height scaled down.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Height of the minimap viewport after clamping to the content height.
    #[must_use]
    pub fn minimap_viewport_height(&self) -> f64 {
        self.minimap_viewport_height
    }

    /// Largest offset the drag indicator can take inside the viewport.
    #[must_use]
    pub fn indicator_travel(&self) -> f64 {
        (self.minimap_viewport_height - self.indicator_height).max(0.0)
    }

    /// Page scroll range this state was computed for.
    #[must_use]
    pub fn scroll_range(&self) -> f64 {
        (self.page_height - self.viewport_height).max(0.0)
    }

    /// Drag-indicator offset for a page scroll offset.
    ///
    /// Equal to `scroll_y / viewport_scroll_factor`, evaluated as a single
    /// scaling so the end of the scroll range lands exactly on the end of the
    /// indicator travel. Zero when either range is empty.
    #[must_use]
    pub fn indicator_offset(&self, scroll_y: f64) -> f64 {
        let range = self.scroll_range();
        let travel = self.indicator_travel();
        if range <= 0.0 || travel <= 0.0 {
            return 0.0;
        }
        (scroll_y * travel / range).clamp(0.0, travel)
    }

    /// Upward translation of the content container for the page's current
    /// scroll position.
    ///
    /// `|scroll_ratio * (minimap_viewport_height - content_height)|`; zero when
    /// the page has no scrollable range.
    #[must_use]
    pub fn content_offset(&self, metrics: &PageMetrics) -> f64 {
        let range = metrics.page_height() - metrics.viewport_height();
        if range <= 0.0 {
            return 0.0;
        }
        let overflow = self.minimap_viewport_height - self.content_height;
        (metrics.scroll.y * overflow / range).abs()
    }

    /// Distance from the viewport's top edge to the pointer, less half the
    /// indicator height so the indicator centers under the pointer.
    #[must_use]
    pub fn centered_distance(&self, pointer_page_y: f64, viewport_page_top: f64) -> f64 {
        pointer_page_y - viewport_page_top - self.indicator_height / 2.0
    }

    /// Page scroll target for a click inside the viewport.
    ///
    /// `(content_offset + centered_distance) * content_scroll_factor`.
    #[must_use]
    pub fn click_target(&self, content_offset: f64, centered_distance: f64) -> Option<f64> {
        self.content_scroll_factor()
            .map(|factor| (content_offset + centered_distance) * factor)
    }

    /// Page scroll target while dragging.
    ///
    /// `centered_distance * viewport_scroll_factor`, or `None` when dragging
    /// has no effect.
    #[must_use]
    pub fn drag_target(&self, centered_distance: f64) -> Option<f64> {
        let range = self.scroll_range();
        let travel = self.indicator_travel();
        (travel > 0.0).then(|| centered_distance * range / travel)
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        let value = numerator / denominator;
        value.is_finite().then_some(value)
    } else {
        None
    }
}
