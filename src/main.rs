use anyhow::Result;
use nonprofit_site::config::Config;
use nonprofit_site::i18n::TableValidator;
use nonprofit_site::server::{self, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nonprofit_site=info".parse()?),
        )
        .init();

    info!("Starting nonprofit site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Default language: {}, port: {}",
        config.default_language, config.port
    );

    // Build the translation table and check it before serving
    let table = server::load_translations(&config)?;
    let report = TableValidator::validate(&table);
    for warning in &report.warnings {
        warn!("Translation: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            tracing::error!("Translation: {}", error);
        }
        anyhow::bail!(
            "Translation table has {} error(s); refusing to start",
            report.errors.len()
        );
    }

    server::serve(AppState::new(config, table)).await
}
