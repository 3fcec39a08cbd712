// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Laws of the escaping grammar and the tokenizer.

use nomen::{is_properly_masked, join, mask, tokenize, unmask};
use proptest::prelude::*;

/// Raw component text, biased toward the characters that matter: delimiters
/// and backslashes.
fn raw_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.#/\\\\]{0,12}").unwrap()
}

fn delimiter_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['.', '#', '/', ','])
}

/// Arbitrary flat input, masked or not.
fn flat_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z.#\\\\]{0,16}").unwrap()
}

proptest! {
    /// unmask is a left inverse of mask, for every raw string and delimiter.
    #[test]
    fn prop_unmask_inverts_mask(raw in raw_strategy(), delim in delimiter_strategy()) {
        prop_assert_eq!(unmask(&mask(&raw, delim)), raw);
    }

    /// mask output always satisfies the grammar it encodes for.
    #[test]
    fn prop_mask_output_is_properly_masked(raw in raw_strategy(), delim in delimiter_strategy()) {
        let encoded = mask(&raw, delim);
        prop_assert!(is_properly_masked(&encoded, delim).is_ok());
    }

    /// mask never loses or reorders content: output length grows by exactly
    /// the number of characters needing escapes.
    #[test]
    fn prop_mask_length_accounting(raw in raw_strategy(), delim in delimiter_strategy()) {
        let escapable = raw.chars().filter(|&c| c == delim || c == '\\').count();
        let encoded = mask(&raw, delim);
        prop_assert_eq!(encoded.chars().count(), raw.chars().count() + escapable);
    }

    /// mask(unmask(c)) is the identity on canonically masked components.
    #[test]
    fn prop_remask_fixpoint(raw in raw_strategy(), delim in delimiter_strategy()) {
        let encoded = mask(&raw, delim);
        prop_assert_eq!(mask(&unmask(&encoded), delim), encoded);
    }

    /// join is a right inverse of tokenize on *any* input, masked or not —
    /// the tokenizer never drops or reorders characters.
    #[test]
    fn prop_join_inverts_tokenize(flat in flat_strategy(), delim in delimiter_strategy()) {
        let tokens = tokenize(&flat, delim);
        prop_assert_eq!(join(&tokens, delim), flat);
    }

    /// tokenize is a left inverse of join on masked component lists.
    #[test]
    fn prop_tokenize_inverts_join(
        raws in prop::collection::vec(raw_strategy(), 1..5),
        delim in delimiter_strategy(),
    ) {
        let components: Vec<String> = raws.iter().map(|r| mask(r, delim)).collect();
        let flat = join(&components, delim);
        prop_assert_eq!(tokenize(&flat, delim), components);
    }

    /// Component count equals unescaped-delimiter count plus one (for
    /// non-empty input); the empty string is the one exception.
    #[test]
    fn prop_token_count(flat in flat_strategy(), delim in delimiter_strategy()) {
        let tokens = tokenize(&flat, delim);
        if flat.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            let mut unescaped = 0;
            let mut chars = flat.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    chars.next();
                } else if c == delim {
                    unescaped += 1;
                }
            }
            prop_assert_eq!(tokens.len(), unescaped + 1);
        }
    }
}
