// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts guarding every name operation.
//!
//! One checking function per clause of the name contract. Every mutator runs
//! the `require_*` functions *before* touching state (so a rejected call
//! leaves the receiver exactly as it was), and the `ensure_*` /
//! [`verify_state`] functions *after* (so a bug in a representation surfaces
//! at the operation that introduced it, not three calls later).
//!
//! # Contract table
//!
//! | Function                   | Tier          | Clause                                  |
//! |----------------------------|---------------|-----------------------------------------|
//! | `require_delimiter`        | precondition  | delimiter != ESCAPE                     |
//! | `require_component_index`  | precondition  | index in 0..len for read/set/remove     |
//! | `require_insert_index`     | precondition  | index in 0..=len for insert             |
//! | `require_masked`           | precondition  | component passes the mask grammar       |
//! | `ensure_count`             | postcondition | count arithmetic after a mutation       |
//! | `ensure_component_at`      | postcondition | stored component equals what was given  |
//! | `verify_state`             | invariant     | delimiter + every stored component      |
//!
//! The checks compose rather than inherit: each representation calls them as
//! free functions, so the validation logic exists exactly once.

use crate::error::{Invariant, NameError, Postcondition, Precondition};
use crate::escape::{is_properly_masked, ESCAPE};

// ============================================================================
// PRECONDITIONS — caller errors, checked before any mutation
// ============================================================================

/// The delimiter must not be the escape character. (Length one is enforced
/// by the `char` type.)
pub fn require_delimiter(delimiter: char) -> Result<(), NameError> {
    if delimiter == ESCAPE {
        return Err(Precondition::DelimiterIsEscape.into());
    }
    Ok(())
}

/// Index must address an existing component: `index < len`.
pub fn require_component_index(index: usize, len: usize) -> Result<(), NameError> {
    if index >= len {
        return Err(Precondition::IndexOutOfRange { index, len }.into());
    }
    Ok(())
}

/// Insert may also target one past the end: `index <= len`.
pub fn require_insert_index(index: usize, len: usize) -> Result<(), NameError> {
    if index > len {
        return Err(Precondition::InsertIndexOutOfRange { index, len }.into());
    }
    Ok(())
}

/// A supplied component must already be properly masked for `delimiter`.
pub fn require_masked(component: &str, delimiter: char) -> Result<(), NameError> {
    is_properly_masked(component, delimiter).map_err(|violation| {
        Precondition::ImproperlyMasked {
            component: component.to_string(),
            violation,
        }
        .into()
    })
}

// ============================================================================
// POSTCONDITIONS — implementation defects, checked after a mutation
// ============================================================================

/// Count arithmetic after a mutation: append/insert add one, remove takes
/// one, concat adds the other name's count, set leaves it alone.
pub fn ensure_count(expected: usize, actual: usize) -> Result<(), NameError> {
    if actual != expected {
        return Err(Postcondition::WrongCount { expected, actual }.into());
    }
    Ok(())
}

/// The component now stored at `index` must be exactly what the caller
/// supplied.
pub fn ensure_component_at(index: usize, expected: &str, actual: &str) -> Result<(), NameError> {
    if actual != expected {
        return Err(Postcondition::WrongComponent {
            index,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
        .into());
    }
    Ok(())
}

// ============================================================================
// INVARIANTS — whole-state sweep, re-run after every mutation
// ============================================================================

/// Verify the full structural invariant: the delimiter is legal and every
/// stored component is properly masked for it.
///
/// A failure here means the name corrupted its own state. Callers should
/// treat it as fatal.
pub fn verify_state<'a, I>(delimiter: char, components: I) -> Result<(), NameError>
where
    I: IntoIterator<Item = &'a str>,
{
    if delimiter == ESCAPE {
        return Err(Invariant::CorruptDelimiter { delimiter }.into());
    }
    for (index, component) in components.into_iter().enumerate() {
        if let Err(violation) = is_properly_masked(component, delimiter) {
            return Err(Invariant::CorruptComponent {
                index,
                component: component.to_string(),
                violation,
            }
            .into());
        }
    }
    Ok(())
}
