// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Escape-aware splitting and joining of flat name strings.
//!
//! [`tokenize`] cuts a flat encoded string into encoded components on every
//! *unescaped* delimiter; [`join`] is its inverse. Components stay in encoded
//! form throughout — no unmasking happens here.

use crate::escape::ESCAPE;

/// Split a flat encoded string into encoded components.
///
/// An escape character and the character after it are copied into the current
/// component as a unit, so escaped delimiters never split. An unescaped
/// delimiter flushes the current component and starts the next one; end of
/// input flushes unconditionally, so a trailing delimiter yields a trailing
/// empty component.
///
/// Two deliberate edge cases:
///
/// - The empty string tokenizes to an *empty list*, not `[""]`. This is what
///   lets a zero-component name and a single-empty-component name have
///   distinct flat encodings.
/// - A trailing unpaired escape is copied into the final component verbatim.
///   It is not this function's job to reject it; component validation at
///   name construction does.
pub fn tokenize(flat: &str, delimiter: char) -> Vec<String> {
    if flat.is_empty() {
        return Vec::new();
    }

    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = flat.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE {
            current.push(c);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    components.push(current);
    components
}

/// Join encoded components with `delimiter`.
///
/// Inverse of [`tokenize`] for any non-empty list of properly masked
/// components: `tokenize(&join(cs, d), d) == cs`.
pub fn join(components: &[String], delimiter: char) -> String {
    let mut flat = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            flat.push(delimiter);
        }
        flat.push_str(component);
    }
    flat
}
