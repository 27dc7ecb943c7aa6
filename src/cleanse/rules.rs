//! Fixed stage patterns for the cleansing pipeline.
//!
//! Dictionary-independent transformations live here; the dictionary-driven
//! stages are compiled per-entry in `dictionary.rs` with [`whole_word_rule`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal `\xNN` two-hex-digit escapes, literal `\n` / `\t` token
/// sequences, and raw tab characters.
static ESCAPE_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\x[0-9a-fA-F]{2}|\\n|\\t|\t").unwrap());

/// Maximal run of digits, optionally interleaved with whitespace.
static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\d\s*)+").unwrap());

/// Whole token of letters immediately followed by digits.
static REPEAT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([a-z]+)(\d+)\b").unwrap());

/// Replace escape tokens with a single space each.
pub(crate) fn strip_escape_tokens(text: &str) -> String {
    ESCAPE_TOKENS.replace_all(text, " ").into_owned()
}

/// Collapse standalone digit runs into a single space.
///
/// A run glued to the end of a word (a word character immediately before
/// it) is a repetition marker candidate and must survive for the
/// expansion stage; only free-standing runs like `42`, `1 2 3`, or the
/// trailing `1` of `gila!!1` are noise.
///
/// The guard cannot live in the pattern itself (`regex` has no
/// lookbehind), so the preceding character is checked per match.
pub(crate) fn collapse_digit_noise(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in DIGIT_RUNS.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let glued = text[..m.start()]
            .chars()
            .next_back()
            .map(|c| c.is_alphanumeric() || c == '_')
            .unwrap_or(false);
        if glued {
            out.push_str(m.as_str());
        } else {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Expand a `<letters><digits>` token into `<letters>-<letters>`.
///
/// The digit suffix is discarded outright, never used as a repeat count.
pub(crate) fn expand_repetition_markers(text: &str) -> String {
    REPEAT_TOKEN.replace_all(text, "$1-$1").into_owned()
}

/// Drop every character that is not an ASCII letter or whitespace.
pub(crate) fn strip_non_alphabetic(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compile a case-insensitive whole-word matcher for a dictionary term.
///
/// The term is escaped first: metacharacters in dictionary entries match
/// literally, never as patterns.
pub(crate) fn whole_word_rule(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
}
