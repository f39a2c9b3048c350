// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Failure surfaced by [`Minimap`](crate::Minimap) operations.
///
/// `E` is the [`Host`](crate::Host)'s error type.
#[derive(Debug, thiserror::Error)]
pub enum MinimapError<E: core::error::Error + 'static> {
    /// A projection rule's selector could not be queried.
    #[error("failed to query elements matching `{selector}`")]
    Query {
        /// The selector as configured.
        selector: String,
        /// Underlying host failure.
        #[source]
        source: E,
    },
    /// Any other host failure.
    #[error("host operation failed")]
    Host(#[source] E),
    /// The minimap was already destroyed.
    #[error("minimap has been destroyed")]
    Destroyed,
}
