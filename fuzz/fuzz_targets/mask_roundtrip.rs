// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The escaping grammar under adversarial input.
//!
//! mask must be invertible for every raw string and delimiter, produce
//! grammar-valid output, and is_properly_masked must classify arbitrary
//! input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nomen::{is_properly_masked, mask, unmask, ESCAPE};

fuzz_target!(|input: (String, char)| {
    let (raw, delimiter) = input;
    if delimiter == ESCAPE {
        // rejected at every construction site; nothing to round-trip
        return;
    }

    let encoded = mask(&raw, delimiter);

    // INVARIANT 1: unmask inverts mask exactly.
    assert_eq!(unmask(&encoded), raw);

    // INVARIANT 2: mask output always passes validation for its delimiter.
    is_properly_masked(&encoded, delimiter).expect("mask output is properly masked");

    // INVARIANT 3: validation of the *raw* input never panics, whatever it
    // concludes.
    let _ = is_properly_masked(&raw, delimiter);
    let _ = unmask(&raw);
});
