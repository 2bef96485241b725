//! Anchor id derivation for heading blocks.
//!
//! The renderer stamps each heading element with an id derived from its
//! text, and the outline links to the same id. Both sides call
//! [`anchor_id`]; in-page navigation relies on the two never drifting apart.

/// Derive the DOM/URL-safe anchor id for a heading text.
///
/// Lowercases the text and collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen. Total and deterministic: never fails,
/// and an empty result (e.g. for punctuation-only text) is valid — the
/// renderer simply omits the id attribute in that case.
///
/// Leading and trailing runs are kept as hyphens rather than trimmed:
/// `"Getting Started: Part 1!"` derives `"getting-started-part-1-"`.
///
/// Two headings with the same text derive the same id. That collision is
/// not deduplicated: the last rendered element wins the id, and outline
/// links to earlier duplicates land on the last instance.
#[must_use]
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if in_run {
                id.push('-');
                in_run = false;
            }
            id.push(ch);
        } else {
            in_run = true;
        }
    }
    if in_run {
        id.push('-');
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(anchor_id("Getting Started: Part 1!"), "getting-started-part-1-");
        assert_eq!(anchor_id("Setup"), "setup");
        assert_eq!(anchor_id("What   is   Rust?"), "what-is-rust-");
    }

    #[test]
    fn lowercases_everything() {
        assert_eq!(anchor_id("API Reference"), "api-reference");
        assert_eq!(anchor_id("HTTP/2 Basics"), "http-2-basics");
    }

    #[test]
    fn leading_run_becomes_leading_hyphen() {
        assert_eq!(anchor_id("¡Hola Mundo!"), "-hola-mundo-");
    }

    #[test]
    fn non_ascii_letters_collapse() {
        // Only [a-z0-9] survives; accented characters join the hyphen run.
        assert_eq!(anchor_id("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn empty_and_punctuation_only_inputs() {
        assert_eq!(anchor_id(""), "");
        assert_eq!(anchor_id("!!!"), "-");
    }

    #[test]
    fn duplicate_texts_collide() {
        assert_eq!(anchor_id("Summary"), anchor_id("Summary"));
    }

    proptest! {
        #[test]
        fn total_over_arbitrary_input(text in ".*") {
            let id = anchor_id(&text);
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn idempotent(text in ".*") {
            let once = anchor_id(&text);
            prop_assert_eq!(anchor_id(&once), once);
        }

        #[test]
        fn no_adjacent_hyphens(text in ".*") {
            prop_assert!(!anchor_id(&text).contains("--"));
        }
    }
}
