// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use digest::DynDigest;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::HashmacError;

/// Hash function selector.
///
/// Output length is fixed per variant: 20, 28, 32, 48 and 64 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-224 (224-bit)
    Sha224,
    /// SHA-256 (256-bit)
    Sha256,
    /// SHA-384 (384-bit)
    Sha384,
    /// SHA-512 (512-bit)
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, shortest output first.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Canonical lowercase name (`sha1`, `sha224`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest (and HMAC tag) length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Digest (and HMAC tag) length in bits.
    pub const fn bit_len(self) -> usize {
        self.output_len() * 8
    }

    pub(crate) fn new_digest(self) -> Box<dyn DynDigest + Send> {
        match self {
            Algorithm::Sha1 => Box::new(Sha1::default()),
            Algorithm::Sha224 => Box::new(Sha224::default()),
            Algorithm::Sha256 => Box::new(Sha256::default()),
            Algorithm::Sha384 => Box::new(Sha384::default()),
            Algorithm::Sha512 => Box::new(Sha512::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashmacError;

    /// Accepts the canonical name in any case, with or without the dash
    /// (`sha256`, `SHA256`, `SHA-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| matches_name(s, algorithm.name()))
            .ok_or_else(|| HashmacError::UnsupportedAlgorithm(s.to_owned()))
    }
}

fn matches_name(input: &str, canonical: &str) -> bool {
    let mut input = input.bytes().filter(|b| *b != b'-');
    let mut canonical = canonical.bytes();

    loop {
        match (input.next(), canonical.next()) {
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}
