//! Tweet dataset loading and export.
//!
//! The raw CSVs circulate with broken encodings, so files are read in byte
//! mode and decoded lossily (invalid sequences become U+FFFD) before the
//! table is parsed. The text column is named `Tweet`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::cleanse::{find_text_column, MissingFieldError, TextRecord};

/// Header name of the dataset's text column.
pub const TEXT_COLUMN: &str = "Tweet";

/// Header name of the exported cleaned column.
pub const CLEANED_COLUMN: &str = "cleaned_tweet";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset table: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// Read a file as raw bytes and decode as UTF-8 with replacement.
pub fn read_lossy(path: &Path) -> Result<String, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse dataset CSV text into records, keyed on the `Tweet` column.
pub fn load_records(csv_text: &str) -> Result<Vec<TextRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let column = find_text_column(&headers, TEXT_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Short rows yield an empty text field rather than failing the batch
        records.push(TextRecord::new(row.get(column).unwrap_or_default()));
    }
    Ok(records)
}

/// Read and parse the dataset file in one step.
pub fn load_records_from_path(path: &Path) -> Result<Vec<TextRecord>, DatasetError> {
    let decoded = read_lossy(path)?;
    load_records(&decoded)
}

/// Export `(Tweet, cleaned_tweet)` pairs.
pub fn write_cleaned_csv(path: &Path, records: &[TextRecord]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([TEXT_COLUMN, CLEANED_COLUMN])?;
    for record in records {
        writer.write_record([
            record.original.as_str(),
            record.cleaned.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
