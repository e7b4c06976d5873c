//! Application configuration loaded from environment variables.
//!
//! Read once at startup; the resulting values are immutable for the life of
//! the process.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

use warden_infra::{Argon2Config, JwtConfig};

#[cfg(feature = "postgres")]
use warden_infra::DatabaseConfig;

const DEV_JWT_SECRET: &str = "change-me-in-production";
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Configuration errors - fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("JWT_SECRET must be at least 32 bytes in production")]
    WeakSecret,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub production: bool,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("RUST_ENV")
            .map(|v| v == "production" || v == "prod")
            .unwrap_or(false);

        #[cfg(feature = "postgres")]
        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 100)?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 10)?,
            }),
            None => None,
        };

        if cfg!(not(feature = "postgres")) && lookup("DATABASE_URL").is_some() {
            tracing::warn!("DATABASE_URL is set but the postgres feature is disabled; ignoring");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            production,
            #[cfg(feature = "postgres")]
            database,
            jwt: jwt_config(&lookup, production)?,
            argon2: argon2_config(&lookup)?,
        })
    }
}

fn jwt_config<F>(lookup: &F, production: bool) -> Result<JwtConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secret = match lookup("JWT_SECRET") {
        Some(secret) if production && secret.len() < MIN_PRODUCTION_SECRET_LEN => {
            return Err(ConfigError::WeakSecret);
        }
        Some(secret) => secret,
        None if production => return Err(ConfigError::Missing("JWT_SECRET")),
        None => {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            DEV_JWT_SECRET.to_string()
        }
    };

    let ttl_secs: i64 = parse_or(lookup, "JWT_TTL_SECS", 24 * 3600)?;
    if ttl_secs <= 0 {
        return Err(ConfigError::Invalid {
            key: "JWT_TTL_SECS",
            reason: "must be positive".to_string(),
        });
    }

    Ok(JwtConfig::new(
        secret.into_bytes(),
        TimeDelta::seconds(ttl_secs),
        lookup("JWT_ISSUER").unwrap_or_else(|| "warden".to_string()),
    ))
}

fn argon2_config<F>(lookup: &F) -> Result<Argon2Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Argon2Config::default();

    Ok(Argon2Config {
        memory_kib: parse_or(lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
        iterations: parse_or(lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
        parallelism: parse_or(lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
