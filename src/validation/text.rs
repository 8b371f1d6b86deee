//! Text scanning helpers used by the copy and content validators.

use std::ops::Range;

/// Count words that contain at least one alphanumeric character.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Lower-case text with typographic apostrophes folded to ASCII.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'")
}

/// Phrases from `phrases` that occur in `text` (case-insensitive, whole
/// words only).
pub fn find_phrases<'a, S: AsRef<str>>(text: &str, phrases: &'a [S]) -> Vec<&'a str> {
    let haystack = normalize(text);
    phrases
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !phrase_spans(&haystack, p).is_empty())
        .collect()
}

/// Byte ranges where `phrase` occurs in an already normalized `haystack`.
///
/// A phrase edge that is a letter or digit must sit on a word boundary, so
/// "meh" does not match inside "somehow".
pub fn phrase_spans(haystack: &str, phrase: &str) -> Vec<Range<usize>> {
    let needle = normalize(phrase);
    let needle = needle.trim();
    if needle.is_empty() {
        return Vec::new();
    }
    let starts_word = needle.starts_with(char::is_alphanumeric);
    let ends_word = needle.ends_with(char::is_alphanumeric);

    haystack
        .match_indices(needle)
        .map(|(start, m)| start..start + m.len())
        .filter(|span| {
            let before = haystack[..span.start].chars().next_back();
            let after = haystack[span.end..].chars().next();
            !(starts_word && before.is_some_and(char::is_alphanumeric))
                && !(ends_word && after.is_some_and(char::is_alphanumeric))
        })
        .collect()
}

/// Whether `c` is a pictographic emoji codepoint.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // mahjong .. symbols & pictographs ext-A
            | 0x2600..=0x27BF   // misc symbols, dingbats
            | 0x2B50 | 0x2B55   // star, circle
            | 0x2300..=0x23FF   // misc technical (⌚, ⏰)
            | 0x1FC00..=0x1FFFF
    )
}

pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// Words written entirely in capitals, ignoring acronyms of four letters
/// or fewer.
pub fn all_caps_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| {
            let letters: Vec<char> = w.chars().filter(|c| c.is_alphabetic()).collect();
            letters.len() > 4 && letters.iter().all(|c| c.is_uppercase())
        })
        .map(str::to_string)
        .collect()
}

const FIRST_PERSON: &[&str] = &[
    "i", "i'm", "i've", "i'll", "i'd", "me", "my", "mine", "myself", "we", "we're", "we've",
    "we'll", "our", "ours", "us",
];

/// First-person pronouns present in `text`.
pub fn first_person_words(text: &str) -> Vec<String> {
    tokens(text)
        .filter(|t| FIRST_PERSON.contains(&t.as_str()))
        .collect()
}

const SLANG: &[&str] = &[
    "gonna", "wanna", "gotta", "lol", "lmao", "bruh", "af", "fam", "yolo", "tbh", "ngl", "lowkey",
    "highkey", "vibes",
];

/// Slang tokens present in `text`.
pub fn slang_words(text: &str) -> Vec<String> {
    tokens(text)
        .filter(|t| SLANG.contains(&t.as_str()))
        .collect()
}

/// Lower-cased word tokens with surrounding punctuation removed.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| normalize(w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')))
        .map(|w| w.trim_matches('\'').to_string())
        .filter(|w| !w.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
