// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fade-out gradients at the ends of the minimap viewport.
//!
//! [`GradientPlugin`] puts [`START_CLASS`] on the viewport while the page is
//! scrolled away from the top and [`END_CLASS`] while it is not scrolled to
//! the bottom. Stylesheets use them to hint that there is more content above
//! or below.
//!
//! The two edges are decided independently from the scroll ratio: a page
//! without a scrollable range shows neither.

use crate::events::MinimapEvent;
use crate::host::Host;
use crate::plugin::{MinimapHandle, Plugin};

/// Class marking that content continues above.
pub const START_CLASS: &str = "minimap-gradient-plugin__start";
/// Class marking that content continues below.
pub const END_CLASS: &str = "minimap-gradient-plugin__end";

/// Which viewport edges should show a gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientEdges {
    /// Content continues above the window.
    pub start: bool,
    /// Content continues below the window.
    pub end: bool,
}

impl GradientEdges {
    /// Edges for a scroll ratio as returned by
    /// [`PageMetrics::scroll_ratio`](crate::PageMetrics::scroll_ratio).
    #[must_use]
    pub fn for_ratio(ratio: Option<f64>) -> Self {
        match ratio {
            Some(ratio) => Self {
                start: ratio > 0.0,
                end: ratio < 1.0,
            },
            None => Self::default(),
        }
    }
}

/// Toggles the gradient classes on every scroll tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct GradientPlugin;

impl<H: Host> Plugin<H> for GradientPlugin {
    fn init(&self, minimap: &MinimapHandle<H>) {
        let host = minimap.host().clone();
        let viewport = minimap.elements().viewport.clone();
        apply(&*host, &viewport);
        minimap.on(MinimapEvent::Scroll, move || apply(&*host, &viewport));
    }
}

fn apply<H: Host>(host: &H, viewport: &H::Element) {
    let edges = GradientEdges::for_ratio(host.metrics().scroll_ratio());
    toggle(host, viewport, START_CLASS, edges.start);
    toggle(host, viewport, END_CLASS, edges.end);
}

fn toggle<H: Host>(host: &H, element: &H::Element, class: &str, on: bool) {
    if on {
        host.add_class(element, class);
    } else {
        host.remove_class(element, class);
    }
}
