// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

pub(crate) fn translate_y(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0 so an unscrolled page reads `0px`.
    format!("translateY({}px)", value + 0.0)
}
