use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "racedash=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the race database and optionally runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database, schema up to date when migrations run
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}

/// Builds the CORS layer for the dashboard.
///
/// Only `GET` is allowed. When no origin is configured any origin may read the API.
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured layer
/// - `Err(AppError::ConfigErr)` - The configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let layer = match &config.cors_allowed_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGIN".to_string(),
                value: origin.clone(),
            })?;
            layer.allow_origin(value)
        }
        None => layer.allow_origin(Any),
    };

    Ok(layer)
}
