//! Application configuration.
//!
//! Defaults match the bundled data layout; every setting can be overridden
//! with a `BERSIH_*` environment variable.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tweet dataset CSV (must carry a `Tweet` column).
    pub dataset_path: PathBuf,
    /// Abusive-word table (header with an `ABUSIVE` column).
    pub abusive_path: PathBuf,
    /// Kamus alay table (two columns, no header).
    pub kamusalay_path: PathBuf,
    /// Where the cleaned dataset CSV is exported.
    pub cleaned_output_path: PathBuf,
    /// SQLite database for cleaned tweets.
    pub db_path: PathBuf,
    /// HTTP listen address.
    pub listen_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/dataset.csv"),
            abusive_path: PathBuf::from("data/abusive.csv"),
            kamusalay_path: PathBuf::from("data/new_kamusalay.csv"),
            cleaned_output_path: PathBuf::from("data/cleaned_dataset_final.csv"),
            db_path: PathBuf::from("tweets.db"),
            listen_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var("BERSIH_DATASET") {
            config.dataset_path = value.into();
        }
        if let Ok(value) = env::var("BERSIH_ABUSIVE") {
            config.abusive_path = value.into();
        }
        if let Ok(value) = env::var("BERSIH_KAMUSALAY") {
            config.kamusalay_path = value.into();
        }
        if let Ok(value) = env::var("BERSIH_CLEANED_OUTPUT") {
            config.cleaned_output_path = value.into();
        }
        if let Ok(value) = env::var("BERSIH_DB") {
            config.db_path = value.into();
        }
        if let Ok(value) = env::var("BERSIH_LISTEN") {
            config.listen_addr = value;
        }
        config
    }
}
