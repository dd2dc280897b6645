//! Text normalization applied to resume text before it reaches the vectorizer.
//!
//! Rules, applied in a single pass over the lowercased characters:
//! - ASCII letters `a`–`z` are kept
//! - any whitespace (space, tab, newline, Unicode spaces, and the U+001C–U+001F
//!   separators) becomes a space, and a run of whitespace collapses to one space
//! - everything else (digits, punctuation, symbols, non-ASCII letters) is dropped
//!
//! Dropped characters do not break a whitespace run: `"a - b"` normalizes to `"a b"`.
//! Leading/trailing whitespace is collapsed, never trimmed.

/// Normalizes raw text for classification. Total over any input and idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() {
            out.push(c);
            last_space = false;
        } else if c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_reference_sentence() {
        let raw = "Experienced Python developer with 5 years in data science.";
        assert_eq!(
            normalize(raw),
            "experienced python developer with years in data science"
        );
    }

    #[test]
    fn test_normalize_empty_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_whitespace_only_collapses_to_single_space() {
        assert_eq!(normalize(" \n\t  "), " ");
    }

    #[test]
    fn test_normalize_keeps_leading_and_trailing_space() {
        assert_eq!(normalize("  Rust  "), " rust ");
    }

    #[test]
    fn test_normalize_dropped_symbols_do_not_split_runs() {
        assert_eq!(normalize("C++ / Go - Rust"), "c go rust");
        assert_eq!(normalize("a - b"), "a b");
    }

    #[test]
    fn test_normalize_strips_digits_inside_words() {
        assert_eq!(normalize("Web3 k8s"), "web ks");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Café Résumé"), "caf rsum");
    }

    #[test]
    fn test_normalize_newlines_become_spaces() {
        assert_eq!(normalize("SKILLS\nPython\r\nSQL"), "skills python sql");
    }

    #[test]
    fn test_normalize_information_separators_are_whitespace() {
        assert_eq!(normalize("a\x1cb\x1dc\x1e\x1fd"), "a b c d");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_output_is_lowercase_letters_and_single_spaces(s in any::<String>()) {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn prop_output_has_no_digits(s in "[a-zA-Z0-9 .,!\n\t-]{0,64}") {
            prop_assert!(!normalize(&s).chars().any(|c| c.is_ascii_digit()));
        }
    }
}
