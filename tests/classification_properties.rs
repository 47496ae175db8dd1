//! Tests de propiedades del clasificador de palabras

use articulo::article::exceptions::{NEEDS_A, NEEDS_AN};
use articulo::article::{NEEDS_AN_TABLE, NEEDS_A_TABLE};
use articulo::{classify, Classification, Config, Corrector};
use proptest::prelude::*;

/// Quita el comodín para que un prefijo sea una palabra concreta
fn entry_word(entry: &str) -> &str {
    entry.strip_suffix('*').unwrap_or(entry)
}

fn in_any_table(word: &str) -> bool {
    NEEDS_A_TABLE.matches(word) || NEEDS_AN_TABLE.matches(word)
}

#[test]
fn test_every_needs_a_entry_classifies_as_a() {
    for entry in NEEDS_A {
        let result = classify(entry_word(entry));
        assert!(
            matches!(result, Classification::A | Classification::AOrAn),
            "'{}' debería pedir \"a\", obtuvo {}",
            entry,
            result
        );
    }
}

#[test]
fn test_every_needs_an_entry_classifies_as_an() {
    for entry in NEEDS_AN {
        let result = classify(entry_word(entry));
        assert!(
            matches!(result, Classification::An | Classification::AOrAn),
            "'{}' debería pedir \"an\", obtuvo {}",
            entry,
            result
        );
    }
}

proptest! {
    #[test]
    fn test_lowercase_words_follow_the_vowel_rule(word in "[a-z]{1,12}") {
        prop_assume!(!in_any_table(&word));
        let expected = if word.starts_with(['a', 'e', 'i', 'o', 'u']) {
            Classification::An
        } else {
            Classification::A
        };
        prop_assert_eq!(classify(&word), expected);
    }

    #[test]
    fn test_capitalized_words_without_exception_are_unknown(word in "[A-Z][a-zA-Z]{0,10}") {
        prop_assume!(!in_any_table(&word));
        prop_assert_eq!(classify(&word), Classification::Unknown);
    }

    #[test]
    fn test_suffix_after_separator_is_ignored(word in "[a-z]{1,8}", suffix in "[a-z]{1,8}") {
        let hyphenated = format!("{}-{}", word, suffix);
        prop_assert_eq!(classify(&hyphenated), classify(&word));
    }

    #[test]
    fn test_classification_is_deterministic(word in "[a-zA-Z0-9'-]{1,16}") {
        prop_assert_eq!(classify(&word), classify(&word));
    }

    #[test]
    fn test_checking_never_panics_and_is_idempotent(text in "[aAn \\-'.,()a-z0-9\n]{0,60}") {
        let corrector = Corrector::new(&Config::default()).unwrap();
        let first = corrector.check(&text);
        let second = corrector.check(&text);
        prop_assert_eq!(first, second);
    }
}
