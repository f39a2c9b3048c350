// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_minimap --heading-base-level=0

//! Understory Minimap: a scaled-down overview of a long page.
//!
//! A minimap is a narrow column showing a miniature of the page, with a
//! rectangle (the drag indicator) standing for the part of the page currently
//! in the window. It keeps three things in step:
//!
//! - the page scroll position, which moves the indicator and slides the
//!   miniature so the indicator's neighbourhood stays visible;
//! - clicks in the minimap, which jump the page so the indicator centers under
//!   the pointer;
//! - drags of the indicator, which scroll the page continuously.
//!
//! The miniature is not a picture of the page. Callers describe which page
//! elements matter with [`ElementRule`]s (a selector plus presentation), and the
//! [`Projector`] builds one absolutely positioned proxy element per match,
//! scaled by the page-to-minimap width ratio.
//!
//! ## Architecture
//!
//! The crate is headless. Everything it needs from a document (measurement,
//! element mutation, scrolling, event subscription, timers) goes through the
//! [`Host`] trait; `understory_minimap_web` implements it over `web-sys`, and
//! tests implement it in memory.
//!
//! - [`scale`]: pure arithmetic from page and minimap sizes to [`ScaleState`].
//! - [`geometry`]: page metrics and element positions.
//! - [`projector`]: rule evaluation and proxy construction.
//! - [`Minimap`]: the lifecycle (`new → render → destroy`) and the
//!   synchronizer that reacts to scroll (throttled), resize (debounced) and
//!   pointer input.
//! - [`Plugin`]s run once before mounting and can subscribe to
//!   [`MinimapEvent`]s; [`GradientPlugin`] is included.
//!
//! Throttling and debouncing use the ticket state machines from
//! `understory_timing`, so no timing logic lives in hosts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use understory_minimap::{ElementRule, GradientPlugin, Minimap, MinimapOptions};
//!
//! let host = Rc::new(my_host);
//! let options = MinimapOptions::new()
//!     .with_rule(ElementRule::new("h1, h2").with_background_color("#333"))
//!     .with_rule(ElementRule::new("p").with_class("text-line"))
//!     .with_plugin(GradientPlugin);
//! let minimap = Minimap::new(host, options)?;
//! minimap.render()?;
//! // ...
//! minimap.destroy();
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo`, `thiserror` and `tracing`.
//! - `libm`: floating point support for `no_std` builds through `kurbo`.

#![no_std]

extern crate alloc;

pub mod class;
mod css;
mod error;
mod events;
pub mod geometry;
mod gradient;
mod host;
mod minimap;
mod options;
mod plugin;
pub mod projector;
pub mod scale;
mod sync;

pub use error::MinimapError;
pub use events::{MinimapEvent, SubscriptionId, UnknownEvent};
pub use geometry::PageMetrics;
pub use gradient::{
    END_CLASS as GRADIENT_END_CLASS, GradientEdges, GradientPlugin,
    START_CLASS as GRADIENT_START_CLASS,
};
pub use host::{
    EventHandler, Host, ListenTarget, PRIMARY_BUTTON, PointerEventKind, PointerHandler,
    PointerInput, WindowEvent,
};
pub use minimap::{LifecycleState, Minimap, MinimapElements};
pub use options::{ConditionFn, ElementRule, MinimapOptions, Placement, RenderFn, Timings};
pub use plugin::{MinimapHandle, Plugin};
pub use projector::{Projector, RenderedElement};
pub use scale::{ScaleInputs, ScaleState};
