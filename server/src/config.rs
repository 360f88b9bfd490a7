//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` builds one `ServerConfig` at startup. A missing or malformed value is
//! a startup failure: the process logs the error and exits with code 1.

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not defined in environment variables")]
    Missing { var: &'static str },
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Which origins may make credentialed cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Development: the request's own origin is echoed back.
    MirrorAny,
    /// Production: only the configured client origin.
    Only(HeaderValue),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub production: bool,
    pub client_url: HeaderValue,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `APP_ENV`: `production` restricts CORS to `CLIENT_URL`
    /// - `CLIENT_URL`: default `http://localhost:5173`
    /// - `DB_MAX_CONNECTIONS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is absent or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = non_blank(lookup("DATABASE_URL"))
            .ok_or(ConfigError::Missing { var: "DATABASE_URL" })?;

        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };

        let production = lookup("APP_ENV").is_some_and(|v| is_production(&v));

        let client_url = non_blank(lookup("CLIENT_URL").map(|v| v.trim().trim_end_matches('/').to_owned()))
            .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_owned());
        let client_url = HeaderValue::from_str(&client_url)
            .map_err(|e| ConfigError::Invalid { var: "CLIENT_URL", reason: e.to_string() })?;

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { database_url, port, production, client_url, db_max_connections })
    }

    #[must_use]
    pub fn cors_policy(&self) -> CorsPolicy {
        if self.production {
            CorsPolicy::Only(self.client_url.clone())
        } else {
            CorsPolicy::MirrorAny
        }
    }
}

/// Blank values count as unset, so defaults still apply.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_production(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "production" | "prod")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
