// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashmac
//!
//! Message digests (SHA-1, SHA-224, SHA-256, SHA-384, SHA-512) and HMAC tags
//! over the RustCrypto backends, with base64 rendering and constant-time tag
//! verification.
//!
//! ## One-shot API
//!
//! ```rust
//! use hashmac::{Algorithm, HmacKey, compute_digest, compute_hmac, verify_hmac};
//!
//! let digest = compute_digest(Algorithm::Sha256, b"Cryptography 2019");
//! assert_eq!(digest.len(), 32);
//! assert_eq!(digest.bit_len(), 256);
//!
//! let key = HmacKey::new(b"secret key").expect("Failed to build key");
//! let tag = compute_hmac(&key, Algorithm::Sha1, b"Cryptography2019").expect("Failed to sign");
//! verify_hmac(&key, Algorithm::Sha1, b"Cryptography2019", tag.as_bytes())
//!     .expect("Failed to verify");
//! ```
//!
//! ## Accumulators
//!
//! [`Hasher`] and [`HmacSigner`] accept repeated `update` calls and exactly
//! one `finalize` (or `verify` for the signer). Anything after that fails
//! with [`HashmacError::InvalidState`].
//!
//! ```rust
//! use hashmac::{Accumulator, Algorithm, HashmacError, Hasher};
//!
//! let mut hasher = Hasher::new(Algorithm::Sha1);
//! hasher.update(b"Cryptography ").expect("Failed to update");
//! hasher.update(b"2019").expect("Failed to update");
//! let digest = hasher.finalize().expect("Failed to finalize");
//!
//! assert_eq!(digest.len(), 20);
//! assert_eq!(hasher.finalize(), Err(HashmacError::InvalidState));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod encoding;
mod error;
mod hasher;
mod key;
mod lifecycle;
mod output;
mod signer;
mod traits;

pub use algorithm::Algorithm;
pub use encoding::{from_base64, to_base64};
pub use error::HashmacError;
pub use hasher::{Hasher, compute_digest};
pub use key::HmacKey;
pub use output::Output;
pub use signer::{HmacSigner, compute_hmac, verify_hmac};
pub use traits::Accumulator;

pub use hashmac_rand::{EntropyError, EntropySource, SystemEntropySource};
