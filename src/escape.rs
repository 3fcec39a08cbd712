// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The escaping grammar: masking, unmasking, and mask validation.
//!
//! A component travels in *encoded* form: every literal occurrence of the
//! active delimiter or of [`ESCAPE`] is prefixed with [`ESCAPE`]. Encoded text
//! is what names store; decoded text is what humans read. The three functions
//! here are pure and stateless, and everything else in the crate composes
//! them rather than reimplementing the scan.
//!
//! # Grammar
//!
//! ```text
//! encoded    := (pair | plain)*
//! pair       := ESCAPE any_char        // any_char, not just delimiter/ESCAPE
//! plain      := any_char except ESCAPE and the active delimiter
//! ```
//!
//! Exactly two defects exist: a trailing unpaired [`ESCAPE`], and an
//! unescaped occurrence of the active delimiter. An escape pair whose second
//! character needed no escaping is *accepted* — the grammar deliberately does
//! not restrict what may follow an escape.

use std::fmt;

/// The process-wide escape character. Never configurable, never a legal
/// delimiter.
pub const ESCAPE: char = '\\';

/// The canonical delimiter used by [`canonical`](crate::Name::canonical)
/// encodings and by constructors that take no delimiter override.
pub const DEFAULT_DELIMITER: char = '.';

/// A violation of the component mask grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskViolation {
    /// The component ends with an unpaired escape character.
    TrailingEscape,
    /// The delimiter occurs without a preceding escape character.
    UnescapedDelimiter {
        /// Byte offset of the offending delimiter within the component.
        position: usize,
    },
}

impl fmt::Display for MaskViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskViolation::TrailingEscape => {
                write!(f, "escape character at end of component")
            }
            MaskViolation::UnescapedDelimiter { position } => {
                write!(f, "unescaped delimiter at byte {}", position)
            }
        }
    }
}

impl std::error::Error for MaskViolation {}

/// Encode a raw string for storage under `delimiter`.
///
/// Every occurrence of `delimiter` or [`ESCAPE`] is prefixed with [`ESCAPE`];
/// all other characters are copied verbatim. Order is preserved and the
/// output is never shorter than the input.
///
/// The result always satisfies [`is_properly_masked`] for the same
/// delimiter.
pub fn mask(raw: &str, delimiter: char) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == delimiter || c == ESCAPE {
            encoded.push(ESCAPE);
        }
        encoded.push(c);
    }
    encoded
}

/// Decode an encoded component back to raw text.
///
/// Each escape pair contributes only its second character; everything else
/// is copied verbatim. Input is assumed to have passed
/// [`is_properly_masked`] — a trailing unpaired escape would have been
/// rejected there, so `unmask` drops one if it sees one rather than
/// guessing at intent.
pub fn unmask(encoded: &str) -> String {
    let mut raw = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(escaped) = chars.next() {
                raw.push(escaped);
            }
        } else {
            raw.push(c);
        }
    }
    raw
}

/// Check that an encoded component is well-formed under `delimiter`.
///
/// Scans left to right. An escape pair is consumed whole and is never itself
/// a defect, whatever its second character. The two rejections:
///
/// - [`MaskViolation::TrailingEscape`]: the scan ends on an unpaired escape.
/// - [`MaskViolation::UnescapedDelimiter`]: `delimiter` appears outside an
///   escape pair.
pub fn is_properly_masked(encoded: &str, delimiter: char) -> Result<(), MaskViolation> {
    let mut chars = encoded.char_indices();
    while let Some((position, c)) = chars.next() {
        if c == ESCAPE {
            if chars.next().is_none() {
                return Err(MaskViolation::TrailingEscape);
            }
        } else if c == delimiter {
            return Err(MaskViolation::UnescapedDelimiter { position });
        }
    }
    Ok(())
}
