// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of page elements into scaled proxy elements.
//!
//! For every rule, in rule order, the projector queries the search root,
//! drops matches that are collapsed (zero height) or fail the rule's
//! condition, and builds one detached proxy per remaining match in document
//! order. Child rules are evaluated with the matched element as their search
//! root, and their proxies directly follow the parent's proxy. The output is
//! a flat, depth-first sequence; inserting it is left to the caller.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::class;
use crate::css::px;
use crate::error::MinimapError;
use crate::geometry::relative_position;
use crate::host::Host;
use crate::options::ElementRule;

/// A detached proxy element built by the [`Projector`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedElement<E> {
    /// The proxy node.
    pub node: E,
    /// The page element it stands for.
    pub source: E,
    /// Position and size of the proxy inside the minimap content, fixed at
    /// creation time.
    pub frame: Rect,
}

/// Builds proxies for projection rules at a fixed scale.
#[derive(Debug)]
pub struct Projector<'a, H: Host> {
    host: &'a H,
    page_container: &'a H::Element,
    scale: f64,
}

impl<'a, H: Host> Projector<'a, H> {
    /// Creates a projector placing proxies relative to `page_container`,
    /// scaled by `scale` (minimap content pixels per page pixel).
    #[must_use]
    pub fn new(host: &'a H, page_container: &'a H::Element, scale: f64) -> Self {
        Self {
            host,
            page_container,
            scale,
        }
    }

    /// Projects every rule in order, searching below `root`.
    pub fn project_all(
        &self,
        rules: &[ElementRule<H::Element>],
        root: &H::Element,
    ) -> Result<Vec<RenderedElement<H::Element>>, MinimapError<H::Error>> {
        let mut out = Vec::new();
        for rule in rules {
            self.project_into(rule, root, &mut out)?;
        }
        Ok(out)
    }

    /// Projects one rule (and its children), searching below `root`.
    pub fn project(
        &self,
        rule: &ElementRule<H::Element>,
        root: &H::Element,
    ) -> Result<Vec<RenderedElement<H::Element>>, MinimapError<H::Error>> {
        let mut out = Vec::new();
        self.project_into(rule, root, &mut out)?;
        Ok(out)
    }

    fn project_into(
        &self,
        rule: &ElementRule<H::Element>,
        root: &H::Element,
        out: &mut Vec<RenderedElement<H::Element>>,
    ) -> Result<(), MinimapError<H::Error>> {
        let matches = self
            .host
            .query_selector_all(root, &rule.selector)
            .map_err(|source| MinimapError::Query {
                selector: rule.selector.clone(),
                source,
            })?;

        for element in matches {
            let rect = self.host.bounding_rect(&element);
            if rect.height() <= 0.0 || !rule.accepts(&element) {
                continue;
            }
            let origin = relative_position(rect, self.host.bounding_rect(self.page_container));
            let (origin, size) = scale_box(origin, rect.size(), self.scale);
            let node = self.proxy(rule, &element, origin, size)?;
            out.push(RenderedElement {
                node,
                source: element.clone(),
                frame: Rect::from_origin_size(origin, size),
            });
            for child in &rule.children {
                self.project_into(child, &element, out)?;
            }
        }
        Ok(())
    }

    fn proxy(
        &self,
        rule: &ElementRule<H::Element>,
        source: &H::Element,
        origin: Point,
        size: Size,
    ) -> Result<H::Element, MinimapError<H::Error>> {
        let host = self.host;
        let node = host.create_element("div").map_err(MinimapError::Host)?;
        host.add_class(&node, class::ELEMENT);
        host.set_style(&node, "top", &px(origin.y));
        host.set_style(&node, "left", &px(origin.x));
        host.set_style(&node, "width", &px(size.width));
        host.set_style(&node, "height", &px(size.height));

        if let Some(color) = &rule.background_color {
            host.set_style(&node, "background-color", color);
        }
        for class in &rule.classes {
            host.add_class(&node, class);
        }
        if let Some(render) = &rule.render {
            host.set_inner_html(&node, &render(source));
        }
        if let Some(url) = &rule.image_url {
            let image = host.create_element("img").map_err(MinimapError::Host)?;
            host.set_attribute(&image, "src", url);
            host.append_children(&node, &[image])
                .map_err(MinimapError::Host)?;
        }
        Ok(node)
    }
}

fn scale_box(origin: Point, size: Size, scale: f64) -> (Point, Size) {
    (
        Point::new(origin.x * scale, origin.y * scale),
        Size::new(size.width * scale, size.height * scale),
    )
}
