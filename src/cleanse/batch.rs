//! Batch application of the engine across a record collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::CleanseEngine;

/// One dataset row: the original text paired with its cleaned form.
///
/// `cleaned` is populated exactly once, by the batch pass; a record that
/// already carries a cleaned value is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub original: String,
    pub cleaned: Option<String>,
}

impl TextRecord {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            cleaned: None,
        }
    }
}

/// A tabular input lacks the expected text column.
///
/// This is a structural mismatch with the caller's data and fails the whole
/// batch up front; it is never raised per-record.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("input table has no `{column}` column")]
pub struct MissingFieldError {
    pub column: String,
}

/// Locate the text column in a header row.
pub fn find_text_column<S: AsRef<str>>(
    headers: &[S],
    column: &str,
) -> Result<usize, MissingFieldError> {
    headers
        .iter()
        .position(|h| h.as_ref().trim() == column)
        .ok_or_else(|| MissingFieldError {
            column: column.to_string(),
        })
}

/// Cleanse every record, preserving order and index alignment.
///
/// Infallible: `cleanse` is total, and each record is independent.
pub fn apply_all(records: Vec<TextRecord>, engine: &CleanseEngine) -> Vec<TextRecord> {
    records
        .into_iter()
        .map(|mut record| {
            if record.cleaned.is_none() {
                record.cleaned = Some(engine.cleanse(&record.original));
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanse::Dictionaries;

    fn engine() -> CleanseEngine {
        let dict = Dictionaries::from_entries(
            vec![("bgt".to_string(), "banget".to_string())],
            vec!["anjing".to_string()],
        )
        .unwrap();
        CleanseEngine::new(dict)
    }

    #[test]
    fn test_apply_all_preserves_order_and_pairing() {
        let records = vec![
            TextRecord::new("keren bgt!!"),
            TextRecord::new("anjing kamu"),
            TextRecord::new(""),
        ];
        let cleaned = apply_all(records, &engine());
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[0].original, "keren bgt!!");
        assert_eq!(cleaned[0].cleaned.as_deref(), Some("keren banget"));
        assert_eq!(cleaned[1].cleaned.as_deref(), Some("kamu"));
        assert_eq!(cleaned[2].cleaned.as_deref(), Some(""));
    }

    #[test]
    fn test_apply_all_leaves_precleaned_records_alone() {
        let records = vec![TextRecord {
            original: "bgt".to_string(),
            cleaned: Some("sudah bersih".to_string()),
        }];
        let cleaned = apply_all(records, &engine());
        assert_eq!(cleaned[0].cleaned.as_deref(), Some("sudah bersih"));
    }

    #[test]
    fn test_find_text_column() {
        let headers = ["id".to_string(), "Tweet".to_string(), "label".to_string()];
        assert_eq!(find_text_column(&headers, "Tweet"), Ok(1));
    }

    #[test]
    fn test_find_text_column_missing() {
        let headers = ["id".to_string(), "text".to_string()];
        let err = find_text_column(&headers, "Tweet").unwrap_err();
        assert_eq!(err.column, "Tweet");
        assert_eq!(err.to_string(), "input table has no `Tweet` column");
    }
}
