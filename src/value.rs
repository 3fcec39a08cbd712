// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The immutable value realization.
//!
//! A [`NameValue`] is validated once at construction and never changes.
//! Every transformation returns a *new* `NameValue`; the receiver is left
//! untouched, so values can be shared freely across threads with no locking.
//! Component storage is an `Arc<[String]>` — cloning a value or deriving one
//! that keeps a tail of components shares the allocation, which is never
//! observable because nothing can write through it.
//!
//! Because the invariant is established at construction, the read paths here
//! cannot actually fail; the `Result` returns exist to keep the [`Name`]
//! surface uniform across realizations.

use crate::contracts::{
    ensure_component_at, ensure_count, require_component_index, require_delimiter,
    require_insert_index, require_masked,
};
use crate::error::NameError;
use crate::escape::{mask, DEFAULT_DELIMITER};
use crate::name::{remask, Name};
use crate::tokenize::{join, tokenize};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable name. Transformations derive new values.
#[derive(Debug, Clone)]
pub struct NameValue {
    delimiter: char,
    components: Arc<[String]>,
}

impl NameValue {
    /// Build from encoded components under an explicit delimiter.
    pub fn from_components<I, S>(components: I, delimiter: char) -> Result<Self, NameError>
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
            components: components.into(),
        })
    }

    /// Build from encoded components under [`DEFAULT_DELIMITER`].
    pub fn new<I, S>(components: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_components(components, DEFAULT_DELIMITER)
    }

    /// Parse a flat encoded string, tokenizing on unescaped `delimiter`.
    pub fn parse(flat: &str, delimiter: char) -> Result<Self, NameError> {
        require_delimiter(delimiter)?;
        Self::from_components(tokenize(flat, delimiter), delimiter)
    }

    /// Build from raw (un-encoded) components, masking each for `delimiter`.
    pub fn from_raw_components<I, S>(raw: I, delimiter: char) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        require_delimiter(delimiter)?;
        let components: Vec<String> = raw
            .into_iter()
            .map(|c| mask(c.as_ref(), delimiter))
            .collect();
        Ok(Self {
            delimiter,
            components: components.into(),
        })
    }

    /// The empty name under [`DEFAULT_DELIMITER`].
    pub fn empty() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            components: Vec::new().into(),
        }
    }

    // Derivations. Each validates its arguments against the *current* value,
    // builds the new component list, and wraps it without re-validating
    // unchanged components.

    /// A value with the component at `index` replaced.
    pub fn set_component(&self, index: usize, component: &str) -> Result<Self, NameError> {
        require_component_index(index, self.components.len())?;
        require_masked(component, self.delimiter)?;

        let mut components = self.components.to_vec();
        components[index] = component.to_string();
        let derived = Self {
            delimiter: self.delimiter,
            components: components.into(),
        };

        ensure_count(self.components.len(), derived.components.len())?;
        ensure_component_at(index, component, &derived.components[index])?;
        Ok(derived)
    }

    /// A value with `component` inserted at `index`.
    pub fn insert(&self, index: usize, component: &str) -> Result<Self, NameError> {
        require_insert_index(index, self.components.len())?;
        require_masked(component, self.delimiter)?;

        let mut components = self.components.to_vec();
        components.insert(index, component.to_string());
        let derived = Self {
            delimiter: self.delimiter,
            components: components.into(),
        };

        ensure_count(self.components.len() + 1, derived.components.len())?;
        ensure_component_at(index, component, &derived.components[index])?;
        Ok(derived)
    }

    /// A value with `component` appended.
    pub fn append(&self, component: &str) -> Result<Self, NameError> {
        self.insert(self.components.len(), component)
    }

    /// A value with raw text masked for the stored delimiter and appended.
    pub fn append_raw(&self, raw: &str) -> Result<Self, NameError> {
        self.append(&mask(raw, self.delimiter))
    }

    /// A value with the component at `index` removed.
    pub fn remove(&self, index: usize) -> Result<Self, NameError> {
        require_component_index(index, self.components.len())?;

        let mut components = self.components.to_vec();
        components.remove(index);
        let derived = Self {
            delimiter: self.delimiter,
            components: components.into(),
        };

        ensure_count(self.components.len() - 1, derived.components.len())?;
        Ok(derived)
    }

    /// A value with every component of `other` appended in order.
    ///
    /// When `other` is empty this returns a value equal to `self` — cheaply,
    /// by sharing the component storage.
    pub fn concat(&self, other: &dyn Name) -> Result<Self, NameError> {
        let incoming = other.components()?;
        if incoming.is_empty() {
            return Ok(self.clone());
        }

        let mut components = self.components.to_vec();
        if other.delimiter() == self.delimiter {
            components.extend(incoming);
        } else {
            components.extend(incoming.iter().map(|c| remask(c, self.delimiter)));
        }
        let derived = Self {
            delimiter: self.delimiter,
            components: components.into(),
        };

        ensure_count(self.components.len() + other.len(), derived.components.len())?;
        Ok(derived)
    }

    /// The same name under a different delimiter, components re-masked.
    pub fn with_delimiter(&self, delimiter: char) -> Result<Self, NameError> {
        require_delimiter(delimiter)?;
        if delimiter == self.delimiter {
            return Ok(self.clone());
        }
        let components: Vec<String> = self
            .components
            .iter()
            .map(|c| remask(c, delimiter))
            .collect();
        Ok(Self {
            delimiter,
            components: components.into(),
        })
    }

    fn canonical_key(&self) -> String {
        let remasked: Vec<String> = self
            .components
            .iter()
            .map(|c| remask(c, DEFAULT_DELIMITER))
            .collect();
        join(&remasked, DEFAULT_DELIMITER)
    }
}

impl Name for NameValue {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn components(&self) -> Result<Vec<String>, NameError> {
        // Validated at construction; immutable since.
        Ok(self.components.to_vec())
    }

    fn component(&self, index: usize) -> Result<String, NameError> {
        require_component_index(index, self.components.len())?;
        Ok(self.components[index].clone())
    }

    fn to_value(&self) -> Result<NameValue, NameError> {
        Ok(self.clone())
    }
}

impl fmt::Display for NameValue {
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

impl PartialEq for NameValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for NameValue {}

impl Hash for NameValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

impl Serialize for NameValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_key())
    }
}

impl<'de> Deserialize<'de> for NameValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let canonical = String::deserialize(deserializer)?;
        NameValue::parse(&canonical, DEFAULT_DELIMITER).map_err(D::Error::custom)
    }
}
