//! Cleansing engine - applies the fixed stage sequence to one string.

use std::borrow::Cow;

use regex::NoExpand;

use super::dictionary::Dictionaries;
use super::rules;

/// Reusable cleansing engine.
///
/// Holds the compiled dictionaries for one pipeline run; `cleanse` borrows
/// them read-only, so one engine can serve any number of concurrent callers.
pub struct CleanseEngine {
    dictionaries: Dictionaries,
}

impl CleanseEngine {
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self { dictionaries }
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Cleanse one text.
    ///
    /// Total function: any input yields a (possibly empty) string, never an
    /// error. The output contains only lowercase ASCII letters and single
    /// interior spaces.
    pub fn cleanse(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // 1. Lowercase (letters without a lowercase mapping pass through)
        let mut text = text.to_lowercase();

        // 2. Escape tokens and raw tabs become spaces
        text = rules::strip_escape_tokens(&text);

        // 3. Standalone digit runs become separators; word-glued runs
        //    survive for stage 6
        text = rules::collapse_digit_noise(&text);

        // 4. Kamus alay substitution, declaration order. Each rule runs on
        //    the previous rule's output, so overlapping keys can chain.
        //    Replacements are inserted literally.
        for rule in self.dictionaries.slang_rules() {
            if let Cow::Owned(replaced) = rule.matcher.replace_all(&text, NoExpand(&rule.normal)) {
                text = replaced;
            }
        }

        // 5. Abusive words are deleted outright, not replaced by a space
        for rule in self.dictionaries.abusive_rules() {
            if let Cow::Owned(replaced) = rule.matcher.replace_all(&text, "") {
                text = replaced;
            }
        }

        // 6. letters+digits token doubles its stem; the hyphen it
        //    introduces is transient and dies in stage 7
        text = rules::expand_repetition_markers(&text);

        // 7 + 8
        let text = rules::strip_non_alphabetic(&text);
        rules::collapse_whitespace(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CleanseEngine {
        let dict = Dictionaries::from_entries(
            vec![("bgt".to_string(), "banget".to_string())],
            vec!["anjing".to_string()],
        )
        .unwrap();
        CleanseEngine::new(dict)
    }

    #[test]
    fn test_stage_order_trace() {
        // "bgt2" must survive the digit and substitution stages intact,
        // expand to "bgt-bgt", and lose the hyphen at the end.
        let result = engine().cleanse("Bgt2 bgt gila!!1");
        assert_eq!(result, "bgtbgt banget gila");
    }

    #[test]
    fn test_abusive_word_deleted() {
        assert_eq!(engine().cleanse("anjing kamu jahat"), "kamu jahat");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(engine().cleanse(""), "");
    }

    #[test]
    fn test_digits_only_input() {
        assert_eq!(engine().cleanse("12345"), "");
    }

    #[test]
    fn test_punctuation_only_input() {
        assert_eq!(engine().cleanse("!!! ??? ..."), "");
    }

    #[test]
    fn test_escape_tokens_stripped() {
        assert_eq!(engine().cleanse(r"halo\xe2\ndunia\tbgt"), "halo dunia banget");
    }

    #[test]
    fn test_case_insensitive() {
        let engine = engine();
        let input = "ANJING kamu BGT jahat";
        assert_eq!(engine.cleanse(input), engine.cleanse(&input.to_lowercase()));
        assert_eq!(engine.cleanse(input), "kamu banget jahat");
    }

    #[test]
    fn test_whole_word_only() {
        // "anjinganjing" and "bgtan" contain dictionary terms only as
        // substrings and must stay untouched by both passes
        assert_eq!(engine().cleanse("anjinganjing bgtan"), "anjinganjing bgtan");
    }

    #[test]
    fn test_idempotent_on_cleaned_output() {
        let engine = engine();
        for input in [
            "Bgt2 bgt gila!!1",
            "anjing kamu jahat",
            "halo   dunia",
            "",
            "12345",
        ] {
            let once = engine.cleanse(input);
            assert_eq!(engine.cleanse(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_alphabet() {
        let result = engine().cleanse("Halo!! 123 \\xAB dunia\t maya 99x");
        assert!(!result.starts_with(' ') && !result.ends_with(' '));
        assert!(result
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!result.contains("  "));
    }

    #[test]
    fn test_substitution_chains_in_order() {
        // The second rule must see the first rule's output
        let dict = Dictionaries::from_entries(
            vec![
                ("yg".to_string(), "yang".to_string()),
                ("yang".to_string(), "yang benar".to_string()),
            ],
            Vec::new(),
        )
        .unwrap();
        let engine = CleanseEngine::new(dict);
        assert_eq!(engine.cleanse("yg"), "yang benar");
    }

    #[test]
    fn test_metacharacter_terms_matched_literally() {
        let dict = Dictionaries::from_entries(
            vec![("a.b".to_string(), "ab".to_string())],
            vec!["c+d".to_string()],
        )
        .unwrap();
        let engine = CleanseEngine::new(dict);
        // "axb" must not match the "a.b" entry
        assert_eq!(engine.cleanse("axb"), "axb");
        assert_eq!(engine.cleanse("kamu c+d jahat"), "kamu jahat");
    }

    #[test]
    fn test_repetition_marker_discards_count() {
        assert_eq!(engine().cleanse("makan2 jalan5"), "makanmakan jalanjalan");
    }
}
