use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,

    pub bind_addr: SocketAddr,
    /// Single origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,

    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or a value malformed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| invalid("BIND_ADDR", &bind_addr))?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("RUN_MIGRATIONS", &value).into()),
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.trim().is_empty()),
            run_migrations,
        })
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}
