use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use crate::server::{config::Config, data::store::JsonStore, error::AppError};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and falls back to an info-level filter for the
/// application and the HTTP trace layer.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("teamboard=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the collection store under the configured data directory.
///
/// Creates the directory if it does not exist and loads any collection files
/// already present. Missing files start their collection out empty.
///
/// # Arguments
/// - `config` - Application configuration containing the data directory
///
/// # Returns
/// - `Ok(JsonStore)` - Store with all three collections loaded
/// - `Err(AppError)` - Directory creation or a collection file failed to load
pub async fn open_store(config: &Config) -> Result<JsonStore, AppError> {
    tracing::info!("Opening collection store at {}", config.data_dir.display());

    Ok(JsonStore::open(&config.data_dir).await?)
}
