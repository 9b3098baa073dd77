// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: digests, an HMAC tag and its verification
//
// Usage: hashmac-demo [MESSAGE]
//
// MESSAGE overrides the digest input (default "Cryptography 2019").
// Each section scopes its own key.

use hashmac::{
    Algorithm, HashmacError, HmacKey, SystemEntropySource, compute_digest, compute_hmac,
    verify_hmac,
};

const DIGEST_MESSAGE: &str = "Cryptography 2019";
const HMAC_MESSAGE: &[u8] = b"Cryptography2019";
const TAMPERED_MESSAGE: &[u8] = b"Cryptography class 2019";
const KEY_LEN: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DIGEST_MESSAGE.to_owned());

    // <name> <bytes> <bits> <base64>
    for algorithm in Algorithm::ALL {
        let digest = compute_digest(algorithm, message.as_bytes());
        println!("{}", digest.summary());
    }

    {
        let key = HmacKey::generate(&SystemEntropySource {}, KEY_LEN)?;
        let tag = compute_hmac(&key, Algorithm::Sha1, HMAC_MESSAGE)?;
        println!("{}", tag.to_base64());

        verify_hmac(&key, Algorithm::Sha1, HMAC_MESSAGE, tag.as_bytes())?;
        println!("Verification succeeded");

        match verify_hmac(&key, Algorithm::Sha1, TAMPERED_MESSAGE, tag.as_bytes()) {
            Ok(()) => return Err("tampered message verified".into()),
            Err(HashmacError::Verification) => println!("Verification failed: tag mismatch"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
