// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Accumulating -> Finalized state shared by every accumulator.

use crate::error::HashmacError;

pub(crate) enum Lifecycle<T> {
    Accumulating(T),
    Finalized,
}

impl<T> Lifecycle<T> {
    pub(crate) fn new(inner: T) -> Self {
        Lifecycle::Accumulating(inner)
    }

    pub(crate) fn active_mut(&mut self) -> Result<&mut T, HashmacError> {
        match self {
            Lifecycle::Accumulating(inner) => Ok(inner),
            Lifecycle::Finalized => Err(HashmacError::InvalidState),
        }
    }

    /// Moves the inner state out, leaving `Finalized` behind.
    pub(crate) fn finish(&mut self) -> Result<T, HashmacError> {
        match core::mem::replace(self, Lifecycle::Finalized) {
            Lifecycle::Accumulating(inner) => Ok(inner),
            Lifecycle::Finalized => Err(HashmacError::InvalidState),
        }
    }

    pub(crate) fn is_finalized(&self) -> bool {
        matches!(self, Lifecycle::Finalized)
    }
}
