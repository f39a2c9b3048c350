// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names the minimap puts on its elements.
//!
//! Stylesheets target these; they are part of the public surface.

/// Root element.
pub const ROOT: &str = "minimap";
/// Viewport inside the root.
pub const VIEWPORT: &str = "minimap__viewport";
/// Scaled-down page content.
pub const CONTENT: &str = "minimap__content";
/// Draggable window indicator.
pub const DRAG_INDICATOR: &str = "minimap__drag-container";
/// Proxy for a projected page element.
pub const ELEMENT: &str = "minimap__element";
/// Present on the root while a structural-change pass rebuilds the content.
pub const LOADING: &str = "minimap--is-loading";
/// Theme applied when none is configured.
pub const DEFAULT_THEME: &str = "minimap-default-theme";
/// Default placement.
pub const RIGHT_CENTERED: &str = "minimap--is-right-centered";
