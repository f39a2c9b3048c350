// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_minimap::EventHandler;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ResizeObserver};

use crate::WebError;

/// A `ResizeObserver` watching one element. Dropping it disconnects.
pub struct ResizeObservation {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeObservation {
    /// Calls `handler` whenever `element` changes size.
    ///
    /// The notification a `ResizeObserver` delivers as soon as observation
    /// starts is not forwarded.
    pub fn new(element: &HtmlElement, handler: EventHandler) -> Result<Self, WebError> {
        let mut handler = skip_first(handler);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| handler());
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| WebError::js("ResizeObserver", err))?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

fn skip_first(mut handler: EventHandler) -> impl FnMut() {
    let mut primed = false;
    move || {
        if primed {
            handler();
        } else {
            primed = true;
        }
    }
}

impl Drop for ResizeObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl fmt::Debug for ResizeObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeObservation").finish_non_exhaustive()
    }
}
