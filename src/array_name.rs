// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Discrete-list storage: one `Vec` slot per encoded component.
//!
//! The straightforward representation. Mutations index directly into the
//! vector; the flat string forms are computed on demand. Compare with
//! [`StringName`](crate::StringName), which stores the flat string and
//! tokenizes on demand — both are observably identical behind the
//! [`Name`]/[`NameMut`] traits.

use crate::contracts::{
    ensure_component_at, ensure_count, require_component_index, require_delimiter,
    require_insert_index, require_masked, verify_state,
};
use crate::error::NameError;
use crate::escape::{mask, DEFAULT_DELIMITER};
use crate::name::{remask, Name, NameMut};
use crate::tokenize::tokenize;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A mutable name backed by a component vector.
#[derive(Debug, Clone)]
pub struct ArrayName {
    delimiter: char,
    components: Vec<String>,
}

impl ArrayName {
    /// Build from encoded components under [`DEFAULT_DELIMITER`].
    ///
    /// An empty iterator yields the well-formed empty name.
    pub fn new<I, S>(components: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_delimiter(components, DEFAULT_DELIMITER)
    }

    /// Build from encoded components under an explicit delimiter.
    ///
    /// Every component must already be properly masked for `delimiter`;
    /// an improperly masked one is rejected as a precondition failure.
    pub fn with_delimiter<I, S>(components: I, delimiter: char) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        require_delimiter(delimiter)?;
        let components: Vec<String> = components
            .into_iter()
            .map(|c| {
                require_masked(c.as_ref(), delimiter)?;
                Ok(c.as_ref().to_string())
            })
            .collect::<Result<_, NameError>>()?;
        Ok(Self {
            delimiter,
            components,
        })
    }

    /// Build from *raw* (un-encoded) components, masking each for
    /// `delimiter` first. Never fails on component content — any text is
    /// maskable.
    pub fn from_raw_components<I, S>(raw: I, delimiter: char) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        require_delimiter(delimiter)?;
        let components = raw
            .into_iter()
            .map(|c| mask(c.as_ref(), delimiter))
            .collect();
        Ok(Self {
            delimiter,
            components,
        })
    }

    /// Parse a flat encoded string, tokenizing on unescaped `delimiter`.
    pub fn parse(flat: &str, delimiter: char) -> Result<Self, NameError> {
        require_delimiter(delimiter)?;
        Self::with_delimiter(tokenize(flat, delimiter), delimiter)
    }

    // Canonical form straight off the stored components. Infallible, unlike
    // the invariant-sweeping trait path, so `PartialEq`/`Hash` can use it.
    fn canonical_key(&self) -> String {
        let remasked: Vec<String> = self
            .components
            .iter()
            .map(|c| remask(c, DEFAULT_DELIMITER))
            .collect();
        crate::tokenize::join(&remasked, DEFAULT_DELIMITER)
    }
}

impl Name for ArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn components(&self) -> Result<Vec<String>, NameError> {
        verify_state(self.delimiter, self.components.iter().map(String::as_str))?;
        Ok(self.components.clone())
    }

    fn component(&self, index: usize) -> Result<String, NameError> {
        verify_state(self.delimiter, self.components.iter().map(String::as_str))?;
        require_component_index(index, self.components.len())?;
        Ok(self.components[index].clone())
    }
}

impl NameMut for ArrayName {
    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        require_component_index(index, self.components.len())?;
        require_masked(component, self.delimiter)?;
        let old_len = self.components.len();

        self.components[index] = component.to_string();

        ensure_count(old_len, self.components.len())?;
        ensure_component_at(index, component, &self.components[index])?;
        verify_state(self.delimiter, self.components.iter().map(String::as_str))
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        require_insert_index(index, self.components.len())?;
        require_masked(component, self.delimiter)?;
        let old_len = self.components.len();

        self.components.insert(index, component.to_string());

        ensure_count(old_len + 1, self.components.len())?;
        ensure_component_at(index, component, &self.components[index])?;
        verify_state(self.delimiter, self.components.iter().map(String::as_str))
    }

    fn append(&mut self, component: &str) -> Result<(), NameError> {
        self.insert(self.components.len(), component)
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        require_component_index(index, self.components.len())?;
        let old_len = self.components.len();

        self.components.remove(index);

        ensure_count(old_len - 1, self.components.len())?;
        verify_state(self.delimiter, self.components.iter().map(String::as_str))
    }

    fn concat(&mut self, other: &dyn Name) -> Result<(), NameError> {
        let incoming = other.components()?;
        if incoming.is_empty() {
            return Ok(());
        }
        let old_len = self.components.len();

        // Re-mask when the delimiters disagree; otherwise the components are
        // already in the right encoding.
        if other.delimiter() == self.delimiter {
            self.components.extend(incoming);
        } else {
            self.components
                .extend(incoming.iter().map(|c| remask(c, self.delimiter)));
        }

        ensure_count(old_len + other.len(), self.components.len())?;
        verify_state(self.delimiter, self.components.iter().map(String::as_str))
    }

    fn set_delimiter(&mut self, delimiter: char) -> Result<(), NameError> {
        require_delimiter(delimiter)?;
        if delimiter == self.delimiter {
            return Ok(());
        }
        for component in &mut self.components {
            *component = remask(component, delimiter);
        }
        self.delimiter = delimiter;
        verify_state(self.delimiter, self.components.iter().map(String::as_str))
    }
}

/// Display form: decoded components joined with the stored delimiter.
impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            f.write_str(&crate::escape::unmask(component))?;
        }
        Ok(())
    }
}

/// Canonical-encoding equality: delimiter-agnostic, see
/// [`Name::matches`].
impl PartialEq for ArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for ArrayName {}

impl Hash for ArrayName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

/// Wire form is the canonical string; see [`Name::canonical`].
impl Serialize for ArrayName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_key())
    }
}

impl<'de> Deserialize<'de> for ArrayName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let canonical = String::deserialize(deserializer)?;
        ArrayName::parse(&canonical, DEFAULT_DELIMITER).map_err(D::Error::custom)
    }
}
