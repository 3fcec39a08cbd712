// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tokenizer under adversarial input.
//!
//! Whatever bytes arrive — half escape sequences, delimiter runs, multi-byte
//! UTF-8 straddling an escape — tokenize must terminate without panicking,
//! and joining the tokens back must reproduce the input exactly. Name
//! construction over the same input must either succeed or return a
//! classified error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nomen::{join, tokenize, Name, StringName};

fuzz_target!(|input: (String, char)| {
    let (flat, delimiter) = input;

    // INVARIANT 1: tokenize never panics and never loses characters.
    let tokens = tokenize(&flat, delimiter);
    assert_eq!(join(&tokens, delimiter), flat);

    // INVARIANT 2: the empty input is the only one with zero tokens.
    assert_eq!(tokens.is_empty(), flat.is_empty());

    // INVARIANT 3: construction validates instead of panicking, and a
    // successfully constructed name agrees with the tokenizer.
    if let Ok(name) = StringName::with_delimiter(&flat, delimiter) {
        assert_eq!(name.len(), tokens.len());
        let canonical = name.canonical().expect("valid name has a canonical form");
        let reparsed = StringName::new(&canonical).expect("canonical form re-parses");
        assert!(reparsed.matches(&name).expect("comparison cannot fail"));
    }
});
