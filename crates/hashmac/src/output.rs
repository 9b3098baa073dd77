// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::algorithm::Algorithm;
use crate::encoding::to_base64;

/// Finalized digest or HMAC tag.
///
/// Length always equals [`Algorithm::output_len`] of the producing algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Output {
    algorithm: Algorithm,
    bytes: Vec<u8>,
}

impl Output {
    pub(crate) fn new(algorithm: Algorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());

        Self { algorithm, bytes }
    }

    /// Algorithm that produced this output.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: every supported algorithm has a non-zero output.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length in bits.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Standard padded base64.
    pub fn to_base64(&self) -> String {
        to_base64(&self.bytes)
    }

    /// `<name> <byte_length> <bit_length> <base64>`, one line per digest.
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.algorithm,
            self.len(),
            self.bit_len(),
            self.to_base64()
        )
    }

    /// Unwraps the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}
