use std::env;
use std::time::Duration;

use crate::log_info;
use crate::modules::i18n::Locale;
use crate::shared::errors::{AppError, AppResult};

const DEFAULT_TABLE: &str = "vehicles";
const DEFAULT_ROW_LIMIT: usize = 100;
const MAX_ROW_LIMIT: usize = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PREFETCH_STALE_SECS: u64 = 600;

/// Runtime configuration read from the environment (and `.env` via dotenvy)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the hosted listing store, e.g. `https://xyz.supabase.co`
    pub store_url: String,
    /// Anonymous (read-only) API key for the store
    pub store_key: String,
    pub table: String,
    /// Row cap for the "list newest first" query
    pub row_limit: usize,
    pub http_timeout: Duration,
    /// How long a prefetched list stays fresh before a prefetch refetches it
    pub prefetch_stale_time: Duration,
    pub locale: Locale,
}

impl AppConfig {
    /// Load `.env` (if present) and read the configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_url = lookup("SUPABASE_URL").ok_or_else(|| {
            AppError::ConfigError("SUPABASE_URL environment variable not found".to_string())
        })?;
        let store_key = lookup("SUPABASE_ANON_KEY").ok_or_else(|| {
            AppError::ConfigError("SUPABASE_ANON_KEY environment variable not found".to_string())
        })?;

        let row_limit = match lookup("LISTINGS_ROW_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>()?,
            None => DEFAULT_ROW_LIMIT,
        };
        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let stale_secs = match lookup("PREFETCH_STALE_SECS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => DEFAULT_PREFETCH_STALE_SECS,
        };
        let locale = match lookup("CARMARKET_LOCALE") {
            Some(code) => Locale::from_code(&code).ok_or_else(|| {
                AppError::ConfigError(format!("Unsupported locale '{}'", code))
            })?,
            None => Locale::default(),
        };

        let config = Self {
            store_url: store_url.trim().trim_end_matches('/').to_string(),
            store_key: store_key.trim().to_string(),
            table: lookup("LISTINGS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            row_limit,
            http_timeout: Duration::from_secs(timeout_secs),
            prefetch_stale_time: Duration::from_secs(stale_secs),
            locale,
        };
        config.validate()?;

        // Log the target host without exposing the key
        log_info!(
            "Listing store configured: {} (table '{}', limit {})",
            config
                .store_url
                .split("://")
                .last()
                .unwrap_or("unknown_host"),
            config.table,
            config.row_limit
        );

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.store_url.starts_with("https://") && !self.store_url.starts_with("http://") {
            return Err(AppError::ConfigError(
                "Invalid store URL format. Must start with http:// or https://".to_string(),
            ));
        }

        if self.store_key.is_empty() {
            return Err(AppError::ConfigError("Store API key is empty".to_string()));
        }

        if self.table.trim().is_empty() {
            return Err(AppError::ConfigError("Listing table name is empty".to_string()));
        }

        if self.row_limit == 0 || self.row_limit > MAX_ROW_LIMIT {
            return Err(AppError::ConfigError(format!(
                "Row limit must be between 1 and {}, got {}",
                MAX_ROW_LIMIT, self.row_limit
            )));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::ConfigError("HTTP timeout must be > 0".to_string()));
        }

        Ok(())
    }
}
