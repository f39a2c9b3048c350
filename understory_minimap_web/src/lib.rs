// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_minimap_web --heading-base-level=0

//! Browser host for `understory_minimap`.
//!
//! This crate provides a `WebHost` implementing `understory_minimap::Host` on
//! top of `web-sys` when targeting `wasm32`. Event subscriptions are
//! `gloo` event listeners, timers are `gloo` timeouts, and container resizes
//! come from a `ResizeObserver`; each is released when its handle drops.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount() -> Result<(), understory_minimap::MinimapError<understory_minimap_web::WebError>> {
//!     use std::rc::Rc;
//!     use understory_minimap::{ElementRule, GradientPlugin, Minimap, MinimapOptions};
//!     use understory_minimap_web::WebHost;
//!
//!     let host = Rc::new(WebHost::new().map_err(understory_minimap::MinimapError::Host)?);
//!     let options = MinimapOptions::new()
//!         .with_rule(ElementRule::new("h1, h2").with_class("minimap-heading"))
//!         .with_rule(ElementRule::new("p"))
//!         .with_plugin(GradientPlugin);
//!     let minimap = Minimap::new(host, options)?;
//!     minimap.render()?;
//!     // Keep `minimap` alive for as long as it should track the page.
//!     core::mem::forget(minimap);
//!     Ok(())
//! }
//! ```
//!
//! Notes:
//! - Scrolling is instant, so a drag follows the pointer without easing.
//! - Positions come from `getBoundingClientRect`, which includes CSS
//!   transforms of the measured elements and their ancestors.
//! - The scroll notification is also dispatched on the minimap root as a
//!   DOM `CustomEvent` named `minimap.scroll`.

#![no_std]

extern crate alloc;

mod error;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod observer;

pub use error::WebError;
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
#[cfg(target_arch = "wasm32")]
pub use observer::ResizeObservation;
