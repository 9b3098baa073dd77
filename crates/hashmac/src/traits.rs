// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::algorithm::Algorithm;
use crate::error::HashmacError;
use crate::output::Output;

/// Incremental digest/MAC computation with a one-shot finalize.
///
/// Implemented by [`Hasher`](crate::Hasher) and [`HmacSigner`](crate::HmacSigner).
pub trait Accumulator {
    /// Algorithm fixed at construction.
    fn algorithm(&self) -> Algorithm;

    /// Feeds more message bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HashmacError::InvalidState`] once the accumulator is finalized.
    fn update(&mut self, data: &[u8]) -> Result<(), HashmacError>;

    /// Produces the output and consumes the internal state.
    ///
    /// # Errors
    ///
    /// Returns [`HashmacError::InvalidState`] on every call after the first.
    fn finalize(&mut self) -> Result<Output, HashmacError>;

    /// `true` after `finalize` (or a signer's `verify`) has run.
    fn is_finalized(&self) -> bool;
}
