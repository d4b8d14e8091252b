use crate::services::classify::DEFAULT_CLASSIFY_URL;
use crate::state::DEFAULT_STATIC_DIR;
use reqwest::Url;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key} ({value}): {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub backend_type: BackendType,
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub classify_url: Url,
    pub templates_dir: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend_raw = var("BACKEND_TYPE", "postgres");
        let backend_type = match backend_raw.to_lowercase().as_str() {
            "memory" => BackendType::Memory,
            "postgres" | "postgresql" => BackendType::Postgres,
            _ => {
                warn!("Unknown BACKEND_TYPE {:?}, falling back to postgres", backend_raw);
                BackendType::Postgres
            }
        };

        let db_port_raw = var("DB_PORT", "5432");
        let db_port = db_port_raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
            key: "DB_PORT",
            value: db_port_raw.clone(),
            reason: e.to_string(),
        })?;

        let classify_raw = var("CLASSIFY_URL", DEFAULT_CLASSIFY_URL);
        let classify_url = Url::parse(&classify_raw).map_err(|e| ConfigError::Invalid {
            key: "CLASSIFY_URL",
            value: classify_raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            port: var("PORT", "8080"),
            backend_type,
            database_url: lookup("DATABASE_URL"),
            db_host: var("DB_HOST", "localhost"),
            db_port,
            db_user: var("DB_USER", "benjaminxerri"),
            db_password: var("DB_PASSWORD", "root"),
            db_name: var("DB_NAME", "books"),
            classify_url,
            templates_dir: var("TEMPLATES_DIR", "templates"),
            static_dir: var("STATIC_DIR", DEFAULT_STATIC_DIR),
        })
    }

    /// Connection options for postgres. `DATABASE_URL` wins over the
    /// discrete `DB_*` settings, which always connect without TLS.
    pub fn pg_connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL",
                value: url.clone(),
                reason: e.to_string(),
            });
        }

        Ok(PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Disable))
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
