//! Application configuration loaded from environment variables.
//!
//! Database connection settings live in `db_infra::config::db`; this module
//! covers the HTTP server and the API behaviour.

use db_infra::db::{db_kind_from_env, DbKind};

use crate::error::AppError;

pub const DEFAULT_QUESTIONS_PER_PAGE: u64 = 10;
const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    /// Fixed page size of every paginated listing.
    pub questions_per_page: u64,
    pub cors_allowed_origins: Vec<String>,
    pub max_json_payload_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            db_kind: DbKind::Postgres,
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
            cors_allowed_origins: Vec::new(),
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        }
    }
}

impl AppConfig {
    /// Load and validate the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::from_lookup(|name| std::env::var(name).ok())?;
        config.db_kind = db_kind_from_env()?;
        Ok(config)
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    ///
    /// `db_kind` keeps its default; it is resolved by `db_infra`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("BACKEND_HOST").unwrap_or(defaults.host);

        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
            None => defaults.port,
        };

        let questions_per_page = match lookup("QUESTIONS_PER_PAGE") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "QUESTIONS_PER_PAGE must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => defaults.questions_per_page,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let max_json_payload_size = lookup("MAX_JSON_PAYLOAD_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.max_json_payload_size);

        Ok(Self {
            host,
            port,
            db_kind: defaults.db_kind,
            questions_per_page,
            cors_allowed_origins,
            max_json_payload_size,
        })
    }
}
