// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the nomen escaping grammar.
//!
//! This standalone crate extracts the mask/unmask/validate scan over bytes
//! and proves it correct for all bounded inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: mask, unmask, and validate never panic
//! 2. **Roundtrip**: unmask(mask(raw, d)) == raw for all raw, d != ESCAPE
//! 3. **Validity**: mask output always passes validate for its delimiter
//! 4. **Bounds**: mask at most doubles the input length
//!
//! The main crate operates on `char`s; over the ASCII byte inputs modeled
//! here the two scans are step-for-step identical, so the proofs carry.

/// The fixed escape byte, matching `nomen::ESCAPE`.
pub const ESCAPE: u8 = b'\\';

/// Bound on symbolic input length. Every state the scan can reach is
/// reachable within this bound: plain byte, escaped byte, trailing escape,
/// leading/trailing delimiter, adjacent pairs.
pub const MAX_LEN: usize = 6;

// ============================================================================
// THE GRAMMAR SCAN (byte-level rendition of src/escape.rs)
// ============================================================================

/// Encode: prefix every delimiter or escape byte with the escape byte.
pub fn mask(raw: &[u8], delimiter: u8, out: &mut Vec<u8>) {
    for &b in raw {
        if b == delimiter || b == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(b);
    }
}

/// Decode: each escape pair contributes only its second byte.
pub fn unmask(encoded: &[u8], out: &mut Vec<u8>) {
    let mut i = 0;
    while i < encoded.len() {
        if encoded[i] == ESCAPE {
            if i + 1 < encoded.len() {
                out.push(encoded[i + 1]);
            }
            i += 2;
        } else {
            out.push(encoded[i]);
            i += 1;
        }
    }
}

/// Validation outcome for an encoded component.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    TrailingEscape,
    UnescapedDelimiter { position: usize },
}

/// Reject trailing escapes and unescaped delimiters; accept everything else.
pub fn validate(encoded: &[u8], delimiter: u8) -> Result<(), Violation> {
    let mut i = 0;
    while i < encoded.len() {
        if encoded[i] == ESCAPE {
            if i + 1 >= encoded.len() {
                return Err(Violation::TrailingEscape);
            }
            i += 2;
        } else if encoded[i] == delimiter {
            return Err(Violation::UnescapedDelimiter { position: i });
        } else {
            i += 1;
        }
    }
    Ok(())
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn symbolic_input() -> ([u8; MAX_LEN], usize, u8) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut bytes = [0u8; MAX_LEN];
        for i in 0..len {
            bytes[i] = kani::any();
        }
        let delimiter: u8 = kani::any_where(|&d| d != ESCAPE);
        (bytes, len, delimiter)
    }

    /// Verify unmask(mask(raw)) == raw for every bounded input.
    #[kani::proof]
    #[kani::unwind(13)] // 2 * MAX_LEN + 1
    fn verify_mask_roundtrip() {
        let (bytes, len, delimiter) = symbolic_input();
        let raw = &bytes[..len];

        let mut encoded = Vec::new();
        mask(raw, delimiter, &mut encoded);

        kani::assert(
            encoded.len() <= 2 * raw.len(),
            "mask at most doubles the length",
        );
        kani::assert(encoded.len() >= raw.len(), "mask never shrinks input");

        let mut decoded = Vec::new();
        unmask(&encoded, &mut decoded);
        kani::assert(decoded == raw, "unmask must invert mask");
    }

    /// Verify mask output always satisfies the grammar.
    #[kani::proof]
    #[kani::unwind(13)]
    fn verify_mask_output_valid() {
        let (bytes, len, delimiter) = symbolic_input();
        let raw = &bytes[..len];

        let mut encoded = Vec::new();
        mask(raw, delimiter, &mut encoded);

        kani::assert(
            validate(&encoded, delimiter).is_ok(),
            "mask output must be properly masked",
        );
    }

    /// Verify validate and unmask never panic on arbitrary bytes.
    #[kani::proof]
    #[kani::unwind(8)] // MAX_LEN + 2
    fn verify_validate_no_panic() {
        let (bytes, len, delimiter) = symbolic_input();
        let input = &bytes[..len];

        // May accept or reject; must not panic.
        let _ = validate(input, delimiter);
        let mut out = Vec::new();
        unmask(input, &mut out);
        kani::assert(out.len() <= input.len(), "unmask never grows input");
    }

    /// Verify a trailing escape is always rejected.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_trailing_escape_rejected() {
        let (mut bytes, len, delimiter) = symbolic_input();
        kani::assume(len >= 1 && len <= MAX_LEN);
        // Force the last byte to be an escape and every earlier escape to be
        // paired by making earlier bytes non-escape.
        for i in 0..len - 1 {
            kani::assume(bytes[i] != ESCAPE);
            kani::assume(bytes[i] != delimiter);
        }
        bytes[len - 1] = ESCAPE;

        let result = validate(&bytes[..len], delimiter);
        kani::assert(
            matches!(result, Err(Violation::TrailingEscape)),
            "trailing escape must be rejected",
        );
    }
}
