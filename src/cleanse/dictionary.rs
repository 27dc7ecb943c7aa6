//! Dictionary store - kamus alay pairs and the abusive word list.
//!
//! Both tables are compiled once at load time into literal, case-insensitive
//! whole-word matchers so that a batch never re-parses its dictionaries.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use regex::Regex;
use thiserror::Error;

use super::rules::whole_word_rule;

/// Header name of the word column in the abusive table.
const ABUSIVE_COLUMN: &str = "ABUSIVE";

/// Dictionary tables could not be parsed into the expected shape.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse dictionary table: {0}")]
    Csv(#[from] csv::Error),
    #[error("slang table row {row} has {got} columns, expected 2")]
    BadSlangRow { row: usize, got: usize },
    #[error("abusive table has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("dictionary term {word:?} cannot be compiled for matching: {source}")]
    BadTerm {
        word: String,
        #[source]
        source: regex::Error,
    },
}

/// One kamus alay substitution, compiled for whole-word matching.
#[derive(Debug)]
pub(crate) struct SlangRule {
    pub(crate) matcher: Regex,
    pub(crate) normal: String,
}

/// One abusive word, compiled for whole-word elision.
#[derive(Debug)]
pub(crate) struct AbusiveRule {
    pub(crate) matcher: Regex,
}

/// Read-only dictionary pair for one pipeline run.
///
/// Slang rules keep their declaration order; the substitution pass applies
/// them sequentially, so later rules see earlier rules' output.
#[derive(Debug)]
pub struct Dictionaries {
    slang_rules: Vec<SlangRule>,
    /// Lowercased alay word -> canonical form. Duplicate keys resolve
    /// last-declared-wins, matching map-style lookup semantics.
    slang_index: HashMap<String, String>,
    abusive_rules: Vec<AbusiveRule>,
    abusive_index: HashSet<String>,
}

impl Dictionaries {
    /// Load the two tables.
    ///
    /// The slang table has two columns and no header; the abusive table has
    /// a header row with an `ABUSIVE` column carrying one word per row.
    pub fn load(slang_table: impl Read, abusive_table: impl Read) -> Result<Self, LoadError> {
        let mut pairs = Vec::new();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(slang_table);
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                return Err(LoadError::BadSlangRow {
                    row,
                    got: record.len(),
                });
            }
            let alay = record.get(0).unwrap_or_default().trim();
            let normal = record.get(1).unwrap_or_default().trim();
            if alay.is_empty() {
                continue;
            }
            pairs.push((alay.to_string(), normal.to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(abusive_table);
        let column = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == ABUSIVE_COLUMN)
            .ok_or(LoadError::MissingColumn(ABUSIVE_COLUMN))?;
        let mut words = Vec::new();
        for record in reader.records() {
            let record = record?;
            let word = record.get(column).unwrap_or_default().trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        Self::from_entries(pairs, words)
    }

    /// Build dictionaries from already-parsed entries.
    ///
    /// Slang pair order is preserved; abusive words are deduplicated
    /// case-insensitively (membership, not order, matters there).
    pub fn from_entries<I, J>(slang_pairs: I, abusive_words: J) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (String, String)>,
        J: IntoIterator<Item = String>,
    {
        let mut slang_rules = Vec::new();
        let mut slang_index = HashMap::new();
        for (alay, normal) in slang_pairs {
            let matcher = whole_word_rule(&alay).map_err(|source| LoadError::BadTerm {
                word: alay.clone(),
                source,
            })?;
            slang_index.insert(alay.to_lowercase(), normal.clone());
            slang_rules.push(SlangRule { matcher, normal });
        }

        let mut abusive_rules = Vec::new();
        let mut abusive_index = HashSet::new();
        for word in abusive_words {
            if !abusive_index.insert(word.to_lowercase()) {
                continue;
            }
            let matcher = whole_word_rule(&word).map_err(|source| LoadError::BadTerm {
                word: word.clone(),
                source,
            })?;
            abusive_rules.push(AbusiveRule { matcher });
        }

        Ok(Self {
            slang_rules,
            slang_index,
            abusive_rules,
            abusive_index,
        })
    }

    /// Canonical form for an alay word, case-insensitive.
    pub fn lookup_slang(&self, word: &str) -> Option<&str> {
        self.slang_index
            .get(&word.to_lowercase())
            .map(String::as_str)
    }

    /// Whether a word is on the abusive list, case-insensitive.
    pub fn is_abusive(&self, word: &str) -> bool {
        self.abusive_index.contains(&word.to_lowercase())
    }

    /// Number of slang substitution rules.
    pub fn slang_len(&self) -> usize {
        self.slang_rules.len()
    }

    /// Number of distinct abusive words.
    pub fn abusive_len(&self) -> usize {
        self.abusive_rules.len()
    }

    pub(crate) fn slang_rules(&self) -> &[SlangRule] {
        &self.slang_rules
    }

    pub(crate) fn abusive_rules(&self) -> &[AbusiveRule] {
        &self.abusive_rules
    }
}
