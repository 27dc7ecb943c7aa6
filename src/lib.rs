//! bersih - social-media text cleansing service.
//!
//! Loads the kamus alay and abusive-word dictionaries, cleanses the tweet
//! dataset, persists the results, and serves the cleansing HTTP API.

pub mod cleanse;
pub mod config;
pub mod dataset;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};

use cleanse::{apply_all, CleanseEngine, Dictionaries};
use config::AppConfig;

/// End-to-end flow: load dictionaries, cleanse the bundled dataset, export
/// the cleaned CSV, persist to SQLite, then serve the HTTP API.
pub async fn run(config: AppConfig) -> Result<()> {
    let slang = dataset::read_lossy(&config.kamusalay_path).with_context(|| {
        format!("reading kamus alay from {}", config.kamusalay_path.display())
    })?;
    let abusive = dataset::read_lossy(&config.abusive_path).with_context(|| {
        format!("reading abusive table from {}", config.abusive_path.display())
    })?;
    let dictionaries = Dictionaries::load(slang.as_bytes(), abusive.as_bytes())
        .context("parsing dictionary tables")?;
    tracing::info!(
        slang = dictionaries.slang_len(),
        abusive = dictionaries.abusive_len(),
        "dictionaries loaded"
    );

    let engine = Arc::new(CleanseEngine::new(dictionaries));

    let records = dataset::load_records_from_path(&config.dataset_path).with_context(|| {
        format!("loading dataset from {}", config.dataset_path.display())
    })?;
    let total = records.len();
    let cleaned = apply_all(records, &engine);
    tracing::info!(records = total, "dataset cleansed");

    dataset::write_cleaned_csv(&config.cleaned_output_path, &cleaned).with_context(|| {
        format!(
            "writing cleaned dataset to {}",
            config.cleaned_output_path.display()
        )
    })?;

    let saved = storage::save_records(&config.db_path, &cleaned)
        .with_context(|| format!("saving cleaned tweets to {}", config.db_path.display()))?;
    tracing::info!(rows = saved, db = %config.db_path.display(), "cleaned tweets persisted");

    server::serve(engine, &config.listen_addr)
        .await
        .context("running HTTP server")?;
    Ok(())
}
