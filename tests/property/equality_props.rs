// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality and hash laws: canonical-encoding equality is an equivalence
//! relation, hash is consistent with it, and neither cares about the storage
//! realization or the stored delimiter.

use nomen::{ArrayName, Name, NameValue, StringName};
use proptest::prelude::*;
use std::collections::HashSet;

fn raw_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.#\\\\]{0,8}").unwrap()
}

fn raws_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(raw_strategy(), 0..5)
}

proptest! {
    /// Reflexivity and symmetry across realizations.
    #[test]
    fn prop_matches_is_reflexive_and_symmetric(raws in raws_strategy()) {
        let array = ArrayName::from_raw_components(raws.iter(), '.').unwrap();
        let value = NameValue::from_raw_components(raws.iter(), '.').unwrap();

        prop_assert!(array.matches(&array).unwrap());
        prop_assert!(value.matches(&value).unwrap());
        prop_assert_eq!(
            array.matches(&value).unwrap(),
            value.matches(&array).unwrap()
        );
        prop_assert!(array.matches(&value).unwrap());
    }

    /// Transitivity across three independently built realizations.
    #[test]
    fn prop_matches_is_transitive(raws in raws_strategy()) {
        let a = ArrayName::from_raw_components(raws.iter(), '.').unwrap();
        let b = a.to_value().unwrap();
        let c = StringName::new(&a.canonical().unwrap()).unwrap();

        prop_assert!(a.matches(&b).unwrap());
        prop_assert!(b.matches(&c).unwrap());
        prop_assert!(a.matches(&c).unwrap());
    }

    /// Matching names hash identically.
    #[test]
    fn prop_hash_consistent_with_matches(raws in raws_strategy()) {
        let array = ArrayName::from_raw_components(raws.iter(), '.').unwrap();
        let string = StringName::new(&array.canonical().unwrap()).unwrap();
        let value = array.to_value().unwrap();

        prop_assert!(array.matches(&string).unwrap());
        let h = array.canonical_hash().unwrap();
        prop_assert_eq!(h, string.canonical_hash().unwrap());
        prop_assert_eq!(h, value.canonical_hash().unwrap());
    }

    /// The delimiter is presentation, not identity: re-delimited values
    /// compare equal and coexist as one set member.
    #[test]
    fn prop_equality_ignores_delimiter(raws in raws_strategy()) {
        let dotted = NameValue::from_raw_components(raws.iter(), '.').unwrap();
        let hashed = dotted.with_delimiter('#').unwrap();

        prop_assert_eq!(&dotted, &hashed);
        prop_assert!(dotted.matches(&hashed).unwrap());

        let mut set = HashSet::new();
        set.insert(dotted.clone());
        set.insert(hashed);
        prop_assert_eq!(set.len(), 1);
        prop_assert!(set.contains(&dotted));
    }

    /// Unequal component lists do not match.
    #[test]
    fn prop_distinct_content_does_not_match(raws in raws_strategy(), extra in "[a-z]{1,4}") {
        let base = NameValue::from_raw_components(raws.iter(), '.').unwrap();
        let longer = base.append_raw(&extra).unwrap();
        prop_assert!(!base.matches(&longer).unwrap());
        prop_assert_ne!(base, longer);
    }
}
