// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat-string storage: the whole name as one encoded string plus a cached
//! component count.
//!
//! Components are materialized lazily by tokenizing on unescaped delimiters.
//! The count is cached rather than recomputed because the flat form alone is
//! ambiguous at one point: the empty string is the encoding of *both* the
//! zero-component name and the single-empty-component name. The cache keeps
//! the two distinguishable across arbitrary mutation sequences (remove down
//! to one empty component, then append, and so on).
//!
//! Mutations tokenize, edit the token list, and re-join. That makes them
//! O(total length) instead of [`ArrayName`](crate::ArrayName)'s O(component
//! count) shifts, which is the representation's trade: cheap construction
//! from and conversion to the flat form, costlier edits.

use crate::contracts::{
    ensure_component_at, ensure_count, require_component_index, require_delimiter,
    require_insert_index, require_masked, verify_state,
};
use crate::error::{Invariant, NameError};
use crate::escape::DEFAULT_DELIMITER;
use crate::name::{remask, Name, NameMut};
use crate::tokenize::{join, tokenize};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A mutable name backed by a flat encoded string.
#[derive(Debug, Clone)]
pub struct StringName {
    delimiter: char,
    flat: String,
    /// Component count; tracked explicitly because `flat == ""` encodes both
    /// the empty name and the single-empty-component name.
    count: usize,
}

impl StringName {
    /// Parse a flat encoded string under [`DEFAULT_DELIMITER`].
    ///
    /// The empty string yields the well-formed empty name, per the
    /// tokenizer's empty-input rule.
    pub fn new(flat: &str) -> Result<Self, NameError> {
        Self::with_delimiter(flat, DEFAULT_DELIMITER)
    }

    /// Parse a flat encoded string under an explicit delimiter.
    ///
    /// Every token must be properly masked; a trailing unpaired escape or
    /// other grammar violation is rejected as a precondition failure.
    pub fn with_delimiter(flat: &str, delimiter: char) -> Result<Self, NameError> {
        require_delimiter(delimiter)?;
        let tokens = tokenize(flat, delimiter);
        for token in &tokens {
            require_masked(token, delimiter)?;
        }
        Ok(Self {
            delimiter,
            flat: flat.to_string(),
            count: tokens.len(),
        })
    }

    fn tokens(&self) -> Vec<String> {
        tokenize(&self.flat, self.delimiter)
    }

    /// Tokenize and cross-check against the cached count. The one invariant
    /// [`verify_state`] cannot see from the components alone.
    fn checked_tokens(&self) -> Result<Vec<String>, NameError> {
        let tokens = self.tokens();
        if tokens.len() != self.count {
            // Legal only for the empty name, whose flat form tokenizes to [].
            if !(self.count == 1 && self.flat.is_empty()) {
                return Err(Invariant::CountMismatch {
                    cached: self.count,
                    tokenized: tokens.len(),
                }
                .into());
            }
            return Ok(vec![String::new()]);
        }
        Ok(tokens)
    }

    /// Swap in an edited token list, maintaining the cached count.
    fn store(&mut self, tokens: &[String]) {
        self.flat = join(tokens, self.delimiter);
        self.count = tokens.len();
    }

    fn canonical_key(&self) -> String {
        let remasked: Vec<String> = self
            .tokens_for_read()
            .iter()
            .map(|c| remask(c, DEFAULT_DELIMITER))
            .collect();
        join(&remasked, DEFAULT_DELIMITER)
    }

    // Like checked_tokens but infallible, for Eq/Hash/Display where state
    // was validated at construction and after every mutation.
    fn tokens_for_read(&self) -> Vec<String> {
        if self.count == 1 && self.flat.is_empty() {
            return vec![String::new()];
        }
        self.tokens()
    }
}

impl Name for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn len(&self) -> usize {
        self.count
    }

    fn components(&self) -> Result<Vec<String>, NameError> {
        let tokens = self.checked_tokens()?;
        verify_state(self.delimiter, tokens.iter().map(String::as_str))?;
        Ok(tokens)
    }

    fn component(&self, index: usize) -> Result<String, NameError> {
        let tokens = self.components()?;
        require_component_index(index, tokens.len())?;
        Ok(tokens[index].clone())
    }
}

impl NameMut for StringName {
    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        require_component_index(index, self.count)?;
        require_masked(component, self.delimiter)?;
        let mut tokens = self.checked_tokens()?;
        let old_len = tokens.len();

        tokens[index] = component.to_string();
        self.store(&tokens);

        ensure_count(old_len, self.count)?;
        ensure_component_at(index, component, &tokens[index])?;
        verify_state(self.delimiter, tokens.iter().map(String::as_str))
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        require_insert_index(index, self.count)?;
        require_masked(component, self.delimiter)?;
        let mut tokens = self.checked_tokens()?;
        let old_len = tokens.len();

        tokens.insert(index, component.to_string());
        self.store(&tokens);

        ensure_count(old_len + 1, self.count)?;
        ensure_component_at(index, component, &tokens[index])?;
        verify_state(self.delimiter, tokens.iter().map(String::as_str))
    }

    fn append(&mut self, component: &str) -> Result<(), NameError> {
        self.insert(self.count, component)
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        require_component_index(index, self.count)?;
        let mut tokens = self.checked_tokens()?;
        let old_len = tokens.len();

        tokens.remove(index);
        self.store(&tokens);

        ensure_count(old_len - 1, self.count)?;
        verify_state(self.delimiter, tokens.iter().map(String::as_str))
    }

    fn concat(&mut self, other: &dyn Name) -> Result<(), NameError> {
        let incoming = other.components()?;
        if incoming.is_empty() {
            return Ok(());
        }
        let mut tokens = self.checked_tokens()?;
        let old_len = tokens.len();

        if other.delimiter() == self.delimiter {
            tokens.extend(incoming);
        } else {
            tokens.extend(incoming.iter().map(|c| remask(c, self.delimiter)));
        }
        self.store(&tokens);

        ensure_count(old_len + other.len(), self.count)?;
        verify_state(self.delimiter, tokens.iter().map(String::as_str))
    }

    fn set_delimiter(&mut self, delimiter: char) -> Result<(), NameError> {
        require_delimiter(delimiter)?;
        if delimiter == self.delimiter {
            return Ok(());
        }
        let tokens: Vec<String> = self
            .checked_tokens()?
            .iter()
            .map(|c| remask(c, delimiter))
            .collect();
        self.delimiter = delimiter;
        self.store(&tokens);
        verify_state(self.delimiter, tokens.iter().map(String::as_str))
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.tokens_for_read().iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            f.write_str(&crate::escape::unmask(component))?;
        }
        Ok(())
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for StringName {}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

impl Serialize for StringName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_key())
    }
}

impl<'de> Deserialize<'de> for StringName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let canonical = String::deserialize(deserializer)?;
        StringName::new(&canonical).map_err(D::Error::custom)
    }
}
