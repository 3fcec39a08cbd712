// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier failure taxonomy.
//!
//! Every fallible operation in this crate fails with a [`NameError`], and the
//! top-level variant tells the caller whose fault it is:
//!
//! | Tier                          | Meaning                               |
//! |-------------------------------|---------------------------------------|
//! | [`NameError::Precondition`]   | The caller passed bad input           |
//! | [`NameError::Postcondition`]  | The implementation broke its contract |
//! | [`NameError::Invariant`]      | Stored state failed re-verification   |
//!
//! Precondition failures are ordinary recoverable errors: fix the argument
//! and retry. The other two tiers are defect signals — if one ever surfaces
//! outside a test that corrupts state on purpose, that is a bug in this
//! crate, not in the caller.

use crate::escape::{MaskViolation, ESCAPE};
use std::fmt;

/// A caller error, detected before any state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// The delimiter equals the escape character.
    DelimiterIsEscape,
    /// Index out of range for a read, set, or remove.
    IndexOutOfRange { index: usize, len: usize },
    /// Index out of range for an insert (one past the end is legal).
    InsertIndexOutOfRange { index: usize, len: usize },
    /// A supplied component fails the mask grammar.
    ImproperlyMasked {
        component: String,
        violation: MaskViolation,
    },
}

/// A contract breach detected by the implementation after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postcondition {
    /// Component count after the operation differs from the arithmetic law.
    WrongCount { expected: usize, actual: usize },
    /// The component stored at the target index is not what was supplied.
    WrongComponent {
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Stored state failed an invariant sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invariant {
    /// The stored delimiter equals the escape character.
    CorruptDelimiter { delimiter: char },
    /// A stored component fails the mask grammar.
    CorruptComponent {
        index: usize,
        component: String,
        violation: MaskViolation,
    },
    /// Flat storage disagrees with the cached component count.
    CountMismatch { cached: usize, tokenized: usize },
}

/// Error type for every fallible name operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Precondition(Precondition),
    Postcondition(Postcondition),
    Invariant(Invariant),
}

impl NameError {
    /// True for caller errors — the only tier worth handling at runtime.
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, NameError::Precondition(_))
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::DelimiterIsEscape => {
                write!(f, "delimiter must not be the escape character '{}'", ESCAPE)
            }
            Precondition::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} component(s)", index, len)
            }
            Precondition::InsertIndexOutOfRange { index, len } => {
                write!(f, "insert index {} out of range 0..={}", index, len)
            }
            Precondition::ImproperlyMasked {
                component,
                violation,
            } => {
                write!(f, "component {:?} is not properly masked: {}", component, violation)
            }
        }
    }
}

impl fmt::Display for Postcondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcondition::WrongCount { expected, actual } => {
                write!(
                    f,
                    "component count is {} after the operation, expected {}",
                    actual, expected
                )
            }
            Postcondition::WrongComponent {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "component at {} is {:?} after the operation, expected {:?}",
                    index, actual, expected
                )
            }
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::CorruptDelimiter { delimiter } => {
                write!(f, "stored delimiter '{}' equals the escape character", delimiter)
            }
            Invariant::CorruptComponent {
                index,
                component,
                violation,
            } => {
                write!(
                    f,
                    "stored component {} ({:?}) is not properly masked: {}",
                    index, component, violation
                )
            }
            Invariant::CountMismatch { cached, tokenized } => {
                write!(
                    f,
                    "cached component count {} disagrees with flat storage ({} token(s))",
                    cached, tokenized
                )
            }
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Precondition(p) => write!(f, "precondition violated: {}", p),
            NameError::Postcondition(p) => write!(f, "postcondition violated: {}", p),
            NameError::Invariant(i) => write!(f, "invariant violated: {}", i),
        }
    }
}

impl std::error::Error for NameError {}

impl From<Precondition> for NameError {
    fn from(p: Precondition) -> Self {
        NameError::Precondition(p)
    }
}

impl From<Postcondition> for NameError {
    fn from(p: Postcondition) -> Self {
        NameError::Postcondition(p)
    }
}

impl From<Invariant> for NameError {
    fn from(i: Invariant) -> Self {
        NameError::Invariant(i)
    }
}
