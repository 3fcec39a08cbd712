// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delimited, escape-aware names with contract-checked operations.
//!
//! A name is an ordered sequence of textual components joined by a
//! single-character delimiter. The delimiter and the fixed escape character
//! `\` may appear literally inside a component only when escaped, so
//! `a\.b.c` is two components — `a.b` and `c` — not three.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  escape.rs  │────▶│ tokenize.rs  │────▶│ array_name.rs    │
//! │ (mask,      │     │ (tokenize,   │     │ string_name.rs   │
//! │  unmask)    │     │  join)       │     │ value.rs         │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          ▲
//!        ▼                                          │
//! ┌──────────────────────────────────────┐   ┌─────────────┐
//! │            contracts.rs              │──▶│   name.rs   │
//! │  (require_*, ensure_*, verify_state) │   │ (Name,      │
//! └──────────────────────────────────────┘   │  NameMut)   │
//!                                            └─────────────┘
//! ```
//!
//! # Realizations
//!
//! Three types implement the same observable behavior:
//!
//! | Type         | Storage              | Mutation        |
//! |--------------|----------------------|-----------------|
//! | [`ArrayName`]  | component vector     | in place        |
//! | [`StringName`] | flat encoded string  | in place        |
//! | [`NameValue`]  | shared `Arc` slice   | returns new value |
//!
//! The mutable types are single-owner; [`NameValue`] is `Send + Sync` and
//! freely shareable, which is the point of offering it.
//!
//! # Contracts
//!
//! Every operation is guarded: preconditions are checked before any state
//! changes (a rejected call is a no-op), postconditions and the structural
//! invariant are re-checked after. The three tiers surface as distinct
//! [`NameError`] variants so a caller can tell "I passed bad input" from
//! "this crate has a bug".
//!
//! # Usage
//!
//! ```
//! use nomen::{ArrayName, Name, NameMut};
//!
//! let mut name = ArrayName::new(["oss", "cs", "fau", "de"])?;
//! assert_eq!(name.as_string()?, "oss.cs.fau.de");
//!
//! name.append("www")?;
//! assert_eq!(name.len(), 5);
//!
//! // escaped delimiters stay literal
//! let host = ArrayName::new(["a\\.b"])?;
//! assert_eq!(host.as_string()?, "a.b");
//! assert_eq!(host.len(), 1);
//! # Ok::<(), nomen::NameError>(())
//! ```

pub mod contracts;
pub mod escape;
pub mod tokenize;

mod array_name;
mod error;
mod name;
mod string_name;
mod value;

pub use array_name::ArrayName;
pub use error::{Invariant, NameError, Postcondition, Precondition};
pub use escape::{is_properly_masked, mask, unmask, MaskViolation, DEFAULT_DELIMITER, ESCAPE};
pub use name::{Name, NameMut};
pub use string_name::StringName;
pub use tokenize::{join, tokenize};
pub use value::NameValue;
