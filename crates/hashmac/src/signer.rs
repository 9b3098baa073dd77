// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC (RFC 2104) over SHA-1 and SHA-2.

use alloc::vec::Vec;
use core::fmt;

use hashmac_util::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::HashmacError;
use crate::key::HmacKey;
use crate::lifecycle::Lifecycle;
use crate::output::Output;
use crate::traits::Accumulator;

/// Keyed backend state, one variant per algorithm.
enum MacCore {
    Sha1(Hmac<Sha1>),
    Sha224(Hmac<Sha224>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

macro_rules! with_mac {
    ($core:expr, $mac:ident => $body:expr) => {
        match $core {
            MacCore::Sha1($mac) => $body,
            MacCore::Sha224($mac) => $body,
            MacCore::Sha256($mac) => $body,
            MacCore::Sha384($mac) => $body,
            MacCore::Sha512($mac) => $body,
        }
    };
}

fn keyed<M: Mac + KeyInit>(key: &[u8]) -> Result<M, HashmacError> {
    <M as Mac>::new_from_slice(key).map_err(|_| HashmacError::InvalidKeyLength)
}

impl MacCore {
    fn new(algorithm: Algorithm, key: &HmacKey) -> Result<Self, HashmacError> {
        let key = key.expose_secret();

        Ok(match algorithm {
            Algorithm::Sha1 => MacCore::Sha1(keyed(key)?),
            Algorithm::Sha224 => MacCore::Sha224(keyed(key)?),
            Algorithm::Sha256 => MacCore::Sha256(keyed(key)?),
            Algorithm::Sha384 => MacCore::Sha384(keyed(key)?),
            Algorithm::Sha512 => MacCore::Sha512(keyed(key)?),
        })
    }

    fn update(&mut self, data: &[u8]) {
        with_mac!(self, mac => mac.update(data))
    }

    fn finalize(self) -> Vec<u8> {
        with_mac!(self, mac => mac.finalize().into_bytes().to_vec())
    }
}

/// Computes the HMAC tag of `message` under `key` in one call.
///
/// # Errors
///
/// Returns [`HashmacError::InvalidKeyLength`] if the backend rejects the key.
pub fn compute_hmac(
    key: &HmacKey,
    algorithm: Algorithm,
    message: &[u8],
) -> Result<Output, HashmacError> {
    let mut core = MacCore::new(algorithm, key)?;
    core.update(message);

    Ok(Output::new(algorithm, core.finalize()))
}

/// Recomputes the tag of `message` and compares it with `expected_tag` in
/// constant time.
///
/// # Errors
///
/// Returns [`HashmacError::Verification`] on any mismatch, including a tag
/// of the wrong length.
pub fn verify_hmac(
    key: &HmacKey,
    algorithm: Algorithm,
    message: &[u8],
    expected_tag: &[u8],
) -> Result<(), HashmacError> {
    let mut signer = HmacSigner::new(algorithm, key)?;
    signer.update(message)?;
    signer.verify(expected_tag)
}

/// Incremental HMAC.
///
/// Same lifecycle as [`Hasher`](crate::Hasher): any number of updates, then
/// exactly one of [`Accumulator::finalize`] or [`HmacSigner::verify`].
pub struct HmacSigner {
    algorithm: Algorithm,
    state: Lifecycle<MacCore>,
}

impl HmacSigner {
    /// Keys a new accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`HashmacError::InvalidKeyLength`] if the backend rejects the key.
    pub fn new(algorithm: Algorithm, key: &HmacKey) -> Result<Self, HashmacError> {
        Ok(Self {
            algorithm,
            state: Lifecycle::new(MacCore::new(algorithm, key)?),
        })
    }

    /// Finalizes and checks the result against `expected_tag`.
    ///
    /// # Errors
    ///
    /// - [`HashmacError::Verification`] if the tags differ
    /// - [`HashmacError::InvalidState`] if already finalized
    pub fn verify(&mut self, expected_tag: &[u8]) -> Result<(), HashmacError> {
        let tag = self.finalize()?;

        if constant_time_eq(tag.as_bytes(), expected_tag) {
            Ok(())
        } else {
            log::debug!("{} HMAC verification failed", self.algorithm);
            Err(HashmacError::Verification)
        }
    }
}

impl Accumulator for HmacSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HashmacError> {
        self.state.active_mut()?.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Output, HashmacError> {
        let core = self.state.finish()?;
        log::trace!("{} HMAC finalized", self.algorithm);

        Ok(Output::new(self.algorithm, core.finalize()))
    }

    fn is_finalized(&self) -> bool {
        self.state.is_finalized()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HmacSigner {{ algorithm: {:?}, finalized: {}, [protected] }}",
            self.algorithm,
            self.state.is_finalized()
        )
    }
}
