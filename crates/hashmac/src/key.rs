// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hashmac_rand::EntropySource;
use zeroize::Zeroizing;

use crate::error::HashmacError;

/// Secret HMAC key.
///
/// Bytes are zeroized on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct HmacKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl HmacKey {
    /// Copies caller-supplied key material.
    ///
    /// # Errors
    ///
    /// Returns [`HashmacError::EmptyKey`] if `bytes` is empty.
    pub fn new(bytes: &[u8]) -> Result<Self, HashmacError> {
        if bytes.is_empty() {
            return Err(HashmacError::EmptyKey);
        }

        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Draws `len` fresh bytes from `entropy`.
    ///
    /// # Errors
    ///
    /// - [`HashmacError::EmptyKey`] if `len` is zero
    /// - [`HashmacError::Entropy`] if the source fails
    pub fn generate<E: EntropySource>(entropy: &E, len: usize) -> Result<Self, HashmacError> {
        if len == 0 {
            return Err(HashmacError::EmptyKey);
        }

        let mut bytes = Zeroizing::new(vec![0u8; len]);
        entropy.fill_bytes(&mut bytes)?;

        Ok(Self { bytes })
    }

    /// Raw key material.
    pub fn expose_secret(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes (never zero).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey {{ [protected] }}")
    }
}
