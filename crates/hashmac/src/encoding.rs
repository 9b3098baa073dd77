// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Base64 (RFC 4648, standard alphabet, padded) rendering of binary output.

use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::HashmacError;

/// Encodes bytes as standard padded base64. Empty input yields `""`.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard padded base64.
///
/// # Errors
///
/// Returns [`HashmacError::InvalidEncoding`] on invalid characters, bad
/// padding or truncated input.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, HashmacError> {
    STANDARD
        .decode(encoded)
        .map_err(|_| HashmacError::InvalidEncoding)
}
