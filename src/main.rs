use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bersih_lib::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load();
    bersih_lib::run(config).await
}
