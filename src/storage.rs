//! SQLite persistence for cleaned tweets.

use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::cleanse::TextRecord;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cleaned_tweets (
    id INTEGER PRIMARY KEY,
    original_tweet TEXT,
    cleaned_tweet TEXT
)";

const INSERT_ROW: &str =
    "INSERT INTO cleaned_tweets (original_tweet, cleaned_tweet) VALUES (?1, ?2)";

/// Persist every original/cleaned pair in a single transaction.
///
/// Returns the number of rows written.
pub fn save_records(db_path: &Path, records: &[TextRecord]) -> Result<usize, StorageError> {
    let mut conn = Connection::open(db_path)?;
    conn.execute(CREATE_TABLE, [])?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(INSERT_ROW)?;
        for record in records {
            stmt.execute(params![
                record.original,
                record.cleaned.as_deref().unwrap_or("")
            ])?;
        }
    }
    tx.commit()?;

    Ok(records.len())
}
