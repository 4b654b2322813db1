//! Tokenization and canonical forms.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::fold::FOLD_MAP;

/// Mentions and links preceded by start-of-text or whitespace.
static MENTIONS_AND_LINKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|\s)(https?://\S+|@[a-zA-Z0-9_]+)").expect("static pattern is valid")
});

/// Apostrophe variants that count as part of a word ("it's", "don`t", "it’s").
const APOSTROPHES: [char; 4] = ['\'', '`', '\u{2019}', '\u{02BC}'];

/// Whether `c` belongs to a word.
///
/// Letters of any script, ASCII digits and apostrophes. Hyphens and every other
/// punctuation mark separate words.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_alphabetic() || APOSTROPHES.contains(&c)
}

/// Split text into maximal runs of word characters, in order of appearance.
///
/// `"It's bed-time, 20ft!"` yields `["It's", "bed", "time", "20ft"]`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lowercase `token` and replace folded letters with their ASCII counterparts.
///
/// Letters missing from the fold table are kept as lowercased.
pub fn canonicalize(token: &str) -> String {
    let lowered = token.to_lowercase();
    if lowered.is_ascii() {
        return lowered;
    }

    let mut out = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match FOLD_MAP.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Remove `@mentions` and links from a post body.
pub fn strip_mentions_and_links(text: &str) -> String {
    MENTIONS_AND_LINKS.replace_all(text, "").into_owned()
}

/// Canonical tokens of a post body, as used for word matching.
pub fn post_terms(text: &str) -> Vec<String> {
    let stripped = strip_mentions_and_links(text);
    tokenize(&stripped).into_iter().map(canonicalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tokenize_basic_punctuation() {
        assert_eq!(tokenize("Foo, bar... Qux?"), vec!["Foo", "bar", "Qux"]);
    }

    #[test]
    fn test_tokenize_hyphen_separates_apostrophe_joins() {
        assert_eq!(
            tokenize("It's bed-time, don`t stop"),
            vec!["It's", "bed", "time", "don`t", "stop"]
        );
    }

    #[test]
    fn test_tokenize_numbers_are_words() {
        assert_eq!(
            tokenize("It is 40000 km long, i18n 20ft"),
            vec!["It", "is", "40000", "km", "long", "i18n", "20ft"]
        );
    }

    #[test]
    fn test_tokenize_multi_script() {
        assert_eq!(
            tokenize("Привет, мир! こんにちは Ωmega"),
            vec!["Привет", "мир", "こんにちは", "Ωmega"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_separator_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- ,,, !!").is_empty());
    }

    #[test]
    fn test_tokenize_is_repeatable() {
        let text = "Ground control to Major Tom - take your protein pills";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_canonicalize_lowercases_and_folds() {
        assert_eq!(canonicalize("Ground"), "ground");
        assert_eq!(canonicalize("Café"), "cafe");
        assert_eq!(canonicalize("ÆON"), "aeon");
        assert_eq!(canonicalize("Ñandú"), "nandu");
        assert_eq!(canonicalize("Żółć"), "zolc");
    }

    #[test]
    fn test_canonicalize_keeps_unfolded_scripts() {
        assert_eq!(canonicalize("Привет"), "привет");
        assert_eq!(canonicalize("こんにちは"), "こんにちは");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for input in ["Ground", "Café", "İstanbul", "ǅemal", "Ⓐⓑ", "ΣΊΣΥΦΟΣ", "", "ﬁne", "\u{008C}"] {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_strip_mentions_and_links() {
        assert_eq!(
            strip_mentions_and_links("@bowie ground control https://t.co/abc123 to @major_tom"),
            " ground control to"
        );
        // Mentions glued to a word are kept
        assert_eq!(strip_mentions_and_links("mail@example"), "mail@example");
    }

    #[test]
    fn test_post_terms() {
        assert_eq!(
            post_terms("@someone Ground Contrôl https://t.co/x #SingWithBowie"),
            vec!["ground", "control", "singwithbowie"]
        );
    }

    proptest! {
        #[test]
        fn test_canonicalize_idempotent_for_any_input(input in any::<String>()) {
            let once = canonicalize(&input);
            let twice = canonicalize(&once);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn test_tokenize_repeatable_for_any_input(text in any::<String>()) {
            prop_assert_eq!(tokenize(&text), tokenize(&text));
        }
    }
}
