// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer tests: FIPS 180-4 "abc" digests and RFC 2202 / RFC 4231
//! HMAC cases.

use hashmac_util::{bytes_to_hex, hex_to_bytes};

use crate::algorithm::Algorithm;
use crate::hasher::compute_digest;
use crate::key::HmacKey;
use crate::signer::{compute_hmac, verify_hmac};

struct DigestVector {
    algorithm: Algorithm,
    message: &'static [u8],
    digest: &'static str,
}

struct HmacVector {
    algorithm: Algorithm,
    key: &'static [u8],
    message: &'static [u8],
    tag: &'static str,
}

const DIGEST_VECTORS: &[DigestVector] = &[
    DigestVector {
        algorithm: Algorithm::Sha1,
        message: b"abc",
        digest: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    DigestVector {
        algorithm: Algorithm::Sha224,
        message: b"abc",
        digest: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    },
    DigestVector {
        algorithm: Algorithm::Sha256,
        message: b"abc",
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    DigestVector {
        algorithm: Algorithm::Sha384,
        message: b"abc",
        digest: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    DigestVector {
        algorithm: Algorithm::Sha512,
        message: b"abc",
        digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    DigestVector {
        algorithm: Algorithm::Sha1,
        message: b"",
        digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    DigestVector {
        algorithm: Algorithm::Sha256,
        message: b"",
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
];

const JEFE_MESSAGE: &[u8] = b"what do ya want for nothing?";
const LARGE_KEY_MESSAGE: &[u8] = b"Test Using Larger Than Block-Size Key - Hash Key First";

const HMAC_VECTORS: &[HmacVector] = &[
    // RFC 2202 test case 2
    HmacVector {
        algorithm: Algorithm::Sha1,
        key: b"Jefe",
        message: JEFE_MESSAGE,
        tag: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    },
    // RFC 4231 test case 2
    HmacVector {
        algorithm: Algorithm::Sha224,
        key: b"Jefe",
        message: JEFE_MESSAGE,
        tag: "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
    },
    HmacVector {
        algorithm: Algorithm::Sha256,
        key: b"Jefe",
        message: JEFE_MESSAGE,
        tag: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    },
    HmacVector {
        algorithm: Algorithm::Sha384,
        key: b"Jefe",
        message: JEFE_MESSAGE,
        tag: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
    },
    HmacVector {
        algorithm: Algorithm::Sha512,
        key: b"Jefe",
        message: JEFE_MESSAGE,
        tag: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    },
    // RFC 4231 test case 6 (131-byte key, hashed first)
    HmacVector {
        algorithm: Algorithm::Sha256,
        key: &[0xaa; 131],
        message: LARGE_KEY_MESSAGE,
        tag: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    },
    HmacVector {
        algorithm: Algorithm::Sha512,
        key: &[0xaa; 131],
        message: LARGE_KEY_MESSAGE,
        tag: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
    },
];

#[test]
fn test_digest_known_answers() {
    for (i, v) in DIGEST_VECTORS.iter().enumerate() {
        let digest = compute_digest(v.algorithm, v.message);

        assert_eq!(
            bytes_to_hex(digest.as_bytes()),
            v.digest,
            "vector #{i} ({})",
            v.algorithm
        );
    }
}

#[test]
fn test_hmac_known_answers() {
    for (i, v) in HMAC_VECTORS.iter().enumerate() {
        let key = HmacKey::new(v.key).expect("Failed to HmacKey::new(..)");
        let tag = compute_hmac(&key, v.algorithm, v.message).expect("Failed to compute_hmac(..)");

        assert_eq!(
            bytes_to_hex(tag.as_bytes()),
            v.tag,
            "vector #{i} ({})",
            v.algorithm
        );
    }
}

#[test]
fn test_hmac_known_answers_verify() {
    for v in HMAC_VECTORS {
        let key = HmacKey::new(v.key).expect("Failed to HmacKey::new(..)");
        let tag = hex_to_bytes(v.tag);

        verify_hmac(&key, v.algorithm, v.message, &tag).expect("Failed to verify_hmac(..)");
    }
}
