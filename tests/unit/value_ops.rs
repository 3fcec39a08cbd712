// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scenarios specific to the immutable `NameValue` realization.

use nomen::{Name, NameValue, StringName};

#[test]
fn derivations_never_alias() {
    let a = NameValue::parse("a.b.c", '.').unwrap();
    let b = a.set_component(0, "x").unwrap();

    assert_eq!(a.component(0).unwrap(), "a");
    assert_eq!(b.component(0).unwrap(), "x");
    assert_ne!(a, b);

    let c = a.insert(1, "mid").unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(c.len(), 4);
    assert_eq!(c.as_string().unwrap(), "a.mid.b.c");

    let d = a.remove(2).unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(d.as_string().unwrap(), "a.b");
}

#[test]
fn chained_derivations() {
    let name = NameValue::empty()
        .append("oss")
        .and_then(|n| n.append("cs"))
        .and_then(|n| n.concat(&NameValue::parse("fau.de", '.').unwrap()))
        .unwrap();
    assert_eq!(name.as_string().unwrap(), "oss.cs.fau.de");
    assert_eq!(name.len(), 4);
}

#[test]
fn failed_derivation_returns_error_and_changes_nothing() {
    let a = NameValue::parse("a.b", '.').unwrap();
    assert!(a.set_component(2, "x").is_err());
    assert!(a.insert(3, "x").is_err());
    assert!(a.append("trailing\\").is_err());
    assert_eq!(a.as_string().unwrap(), "a.b");
}

#[test]
fn value_is_shareable_across_threads() {
    let name = NameValue::parse("a\\.b.c", '.').unwrap();
    let cloned = name.clone();
    let handle = std::thread::spawn(move || cloned.canonical().unwrap());
    let from_thread = handle.join().unwrap();
    assert_eq!(from_thread, name.canonical().unwrap());
}

#[test]
fn append_raw_on_values() {
    let dir = NameValue::parse("root", '.').unwrap();
    let full = dir.append_raw("notes.2024").unwrap();
    assert_eq!(full.len(), 2);
    assert_eq!(full.as_string().unwrap(), "root.notes.2024");
    // the raw dot is escaped in storage, so the canonical form keeps it
    // inside one component
    let reparsed = NameValue::parse(&full.canonical().unwrap(), '.').unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed.component(1).unwrap(), "notes\\.2024");
}

#[test]
fn matches_across_realizations() {
    let value = NameValue::parse("a\\.b.c", '.').unwrap();
    let string = StringName::new("a\\.b.c").unwrap();
    assert!(value.matches(&string).unwrap());
    assert_eq!(
        value.canonical_hash().unwrap(),
        string.canonical_hash().unwrap()
    );
}
