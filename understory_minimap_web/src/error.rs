// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Failure of a DOM operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// A browser global (`window`, `document`, `body`) is not available.
    #[error("no `{0}` is available")]
    Missing(&'static str),
    /// A DOM call threw.
    #[error("{operation} failed: {message}")]
    Js {
        /// The DOM call, for example `querySelectorAll`.
        operation: &'static str,
        /// The thrown value, stringified.
        message: String,
    },
}

#[cfg(target_arch = "wasm32")]
impl WebError {
    pub(crate) fn js(operation: &'static str, value: wasm_bindgen::JsValue) -> Self {
        use alloc::format;
        use wasm_bindgen::JsCast;

        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { operation, message }
    }
}
