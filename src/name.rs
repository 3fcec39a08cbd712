// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public name abstraction: one read surface, one mutation surface.
//!
//! [`Name`] is everything you can ask of a name without changing it;
//! [`NameMut`] adds in-place mutation. The two storage representations
//! ([`ArrayName`](crate::ArrayName), [`StringName`](crate::StringName))
//! implement both; the immutable [`NameValue`](crate::NameValue) implements
//! only [`Name`] and offers by-value transformations instead.
//!
//! Every method that can observe state re-verifies the structural invariant
//! first, so a representation bug is reported as
//! [`NameError::Invariant`](crate::NameError) at the first read that touches
//! the corrupt state. For values built through the public API that check can
//! never fire; it exists to catch representation bugs, not caller mistakes.
//!
//! # Observable equivalence
//!
//! The trait has no default-free method that would let a representation leak
//! its storage strategy: `canonical`, `as_string`, `matches`, and
//! `canonical_hash` are all derived from `components()` here, once. A flat
//! string name and a component list name holding the same content are
//! indistinguishable through this interface.

use crate::contracts::require_delimiter;
use crate::error::NameError;
use crate::escape::{mask, unmask, DEFAULT_DELIMITER};
use crate::tokenize::join;
use crate::value::NameValue;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Read-only surface of a delimited, escape-aware name.
pub trait Name {
    /// The delimiter this name stores components under.
    fn delimiter(&self) -> char;

    /// Number of components. Zero is legal: the empty name.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All components in encoded form, after an invariant sweep.
    fn components(&self) -> Result<Vec<String>, NameError>;

    /// The encoded component at `index`.
    fn component(&self, index: usize) -> Result<String, NameError>;

    /// Snapshot this name into an independent immutable [`NameValue`].
    ///
    /// The snapshot compares equal to `self` under [`matches`](Name::matches).
    fn to_value(&self) -> Result<NameValue, NameError> {
        let components = self.components()?;
        NameValue::from_components(components, self.delimiter())
    }

    /// Human-readable form: components decoded and joined with `delimiter`.
    ///
    /// Not guaranteed re-parseable — a delimiter that collides with literal
    /// component content produces an ambiguous string. That is a documented
    /// property of the display form, not a defect; use
    /// [`canonical`](Name::canonical) when the string must round-trip.
    fn as_string_with(&self, delimiter: char) -> Result<String, NameError> {
        require_delimiter(delimiter)?;
        let decoded: Vec<String> = self
            .components()?
            .iter()
            .map(|c| unmask(c))
            .collect();
        Ok(join(&decoded, delimiter))
    }

    /// [`as_string_with`](Name::as_string_with) using the stored delimiter.
    fn as_string(&self) -> Result<String, NameError> {
        self.as_string_with(self.delimiter())
    }

    /// Machine-parseable form: every component re-encoded for
    /// [`DEFAULT_DELIMITER`] and joined with it.
    ///
    /// Always round-trips: tokenizing the result with [`DEFAULT_DELIMITER`]
    /// reconstructs an equal name. This is the form equality, hashing, and
    /// serialization use.
    fn canonical(&self) -> Result<String, NameError> {
        let remasked: Vec<String> = self
            .components()?
            .iter()
            .map(|c| mask(&unmask(c), DEFAULT_DELIMITER))
            .collect();
        Ok(join(&remasked, DEFAULT_DELIMITER))
    }

    /// Structural equality across representations and delimiters: two names
    /// match iff their canonical encodings are identical.
    fn matches(&self, other: &dyn Name) -> Result<bool, NameError> {
        Ok(self.canonical()? == other.canonical()?)
    }

    /// Deterministic hash of the canonical encoding.
    ///
    /// Consistent with [`matches`](Name::matches): matching names hash
    /// equal. Also what the `Hash` impls on the concrete types feed their
    /// hasher.
    fn canonical_hash(&self) -> Result<u64, NameError> {
        let mut hasher = DefaultHasher::new();
        self.canonical()?.hash(&mut hasher);
        Ok(hasher.finish())
    }
}

/// In-place mutation surface.
///
/// Every mutator validates its arguments *before* touching state: a call
/// that fails with a precondition error leaves the receiver exactly as it
/// was. After mutating, each representation re-checks its postconditions and
/// the structural invariant. Instances are single-owner: concurrent mutation
/// requires external synchronization.
pub trait NameMut: Name {
    /// Replace the component at `index`. Count is unchanged.
    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError>;

    /// Insert a component at `index`, shifting the rest right.
    /// `index == len()` appends.
    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError>;

    /// Append a component at the end.
    fn append(&mut self, component: &str) -> Result<(), NameError>;

    /// Remove the component at `index`, shifting the rest left.
    fn remove(&mut self, index: usize) -> Result<(), NameError>;

    /// Append every component of `other`, in order. An empty `other` is a
    /// no-op. `other`'s components are re-masked if its delimiter differs.
    fn concat(&mut self, other: &dyn Name) -> Result<(), NameError>;

    /// Switch the stored delimiter, re-masking every component so decoded
    /// content is preserved.
    fn set_delimiter(&mut self, delimiter: char) -> Result<(), NameError>;

    /// Mask raw (un-encoded) text for the stored delimiter, then append it.
    ///
    /// This is the safe entry point for callers holding plain strings that
    /// may contain the delimiter or escape character, such as file basenames.
    fn append_raw(&mut self, raw: &str) -> Result<(), NameError> {
        self.append(&mask(raw, self.delimiter()))
    }
}

/// Re-encode a component for delimiter `to`, whatever delimiter it was
/// masked for.
///
/// Shared by canonical encoding, delimiter switches, and cross-delimiter
/// `concat`. The decoded content is invariant under this transformation.
pub(crate) fn remask(component: &str, to: char) -> String {
    mask(&unmask(component), to)
}
