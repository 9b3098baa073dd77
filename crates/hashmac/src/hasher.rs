// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::fmt;

use digest::DynDigest;

use crate::algorithm::Algorithm;
use crate::error::HashmacError;
use crate::lifecycle::Lifecycle;
use crate::output::Output;
use crate::traits::Accumulator;

/// Computes the digest of `message` in one call.
///
/// # Example
///
/// ```rust
/// use hashmac::{Algorithm, compute_digest};
///
/// let digest = compute_digest(Algorithm::Sha1, b"Cryptography 2019");
/// assert_eq!(digest.len(), 20);
/// assert_eq!(digest.bit_len(), 160);
/// ```
pub fn compute_digest(algorithm: Algorithm, message: &[u8]) -> Output {
    let mut core = algorithm.new_digest();
    core.update(message);

    Output::new(algorithm, core.finalize().into_vec())
}

/// Incremental message digest.
///
/// Feed with [`Accumulator::update`], close with a single
/// [`Accumulator::finalize`].
pub struct Hasher {
    algorithm: Algorithm,
    state: Lifecycle<Box<dyn DynDigest + Send>>,
}

impl Hasher {
    /// Creates an empty accumulator for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: Lifecycle::new(algorithm.new_digest()),
        }
    }
}

impl Accumulator for Hasher {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HashmacError> {
        self.state.active_mut()?.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Output, HashmacError> {
        let core = self.state.finish()?;
        log::trace!("{} digest finalized", self.algorithm);

        Ok(Output::new(self.algorithm, core.finalize().into_vec()))
    }

    fn is_finalized(&self) -> bool {
        self.state.is_finalized()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm)
            .field("finalized", &self.state.is_finalized())
            .finish()
    }
}
