// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use hashmac_rand::EntropyError;
use thiserror::Error;

/// Errors produced by digest and HMAC operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashmacError {
    /// `update`, `finalize` or `verify` called on a finalized accumulator
    #[error("accumulator already finalized")]
    InvalidState,

    /// Algorithm name outside sha1/sha224/sha256/sha384/sha512
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// HMAC tag mismatch
    #[error("HMAC verification failed: tag mismatch")]
    Verification,

    /// HMAC key of zero length
    #[error("HMAC key must not be empty")]
    EmptyKey,

    /// Key rejected by the HMAC backend
    #[error("invalid HMAC key length")]
    InvalidKeyLength,

    /// Malformed base64 input
    #[error("invalid base64 encoding")]
    InvalidEncoding,

    /// Key generation failed
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
