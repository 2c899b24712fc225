//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one [`AppConfig`] that
//! is shared read-only through `AppState`. Only `DATABASE_URL` and
//! `IDENTITY_API_KEY` are required; everything else has a default.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_IDENTITY_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";
pub const DEFAULT_PUBLIC_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub identity_api_key: String,
    pub identity_base_url: String,
    pub identity_token_url: String,
    pub public_origin: String,
    pub cookie_secure: bool,
    pub db_max_connections: u32,
    pub session_ttl_hours: i64,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required: `DATABASE_URL`, `IDENTITY_API_KEY`.
    ///
    /// Optional: `PORT`, `IDENTITY_BASE_URL`, `IDENTITY_TOKEN_URL`,
    /// `PUBLIC_ORIGIN`, `COOKIE_SECURE`, `DB_MAX_CONNECTIONS`,
    /// `SESSION_TTL_HOURS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric/boolean variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let identity_api_key = required("IDENTITY_API_KEY")?;
        let identity_base_url = lookup("IDENTITY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let identity_token_url = lookup("IDENTITY_TOKEN_URL")
            .unwrap_or_else(|| DEFAULT_IDENTITY_TOKEN_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let public_origin = lookup("PUBLIC_ORIGIN")
            .unwrap_or_else(|| DEFAULT_PUBLIC_ORIGIN.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => public_origin.starts_with("https://"),
        };

        Ok(Self {
            database_url,
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            identity_api_key,
            identity_base_url,
            identity_token_url,
            public_origin,
            cookie_secure,
            db_max_connections: env_parse(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            session_ttl_hours: env_parse(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?,
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
