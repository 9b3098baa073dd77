// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use hashmac_util::constant_time_eq;

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_different_slices() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 6]));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4]));
        assert!(!constant_time_eq(&[], &[0]));
    }

    #[test]
    fn test_empty_slices() {
        let a: [u8; 0] = [];
        assert!(constant_time_eq(&a, &a));
    }

    #[test]
    fn test_first_byte_difference() {
        assert!(!constant_time_eq(&[1, 0, 0, 0, 0], &[0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_tag_sized_inputs() {
        let tag = [0xA5u8; 64];
        let mut other = tag;
        assert!(constant_time_eq(&tag, &other));

        other[63] ^= 0x01;
        assert!(!constant_time_eq(&tag, &other));
    }
}
