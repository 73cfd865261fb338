//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use inkwell_infra::auth::{DEFAULT_ISSUER, MAX_EXPIRATION_HOURS};
use inkwell_infra::{DatabaseConfig, JwtConfig};

use crate::telemetry::TelemetryConfig;

/// Errors raised while reading configuration. Any of them aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration shared by the GraphQL and REST servers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub graphql_port: u16,
    pub rest_port: u16,
    /// `None` when no database URL is set; only acceptable without the `postgres` feature.
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL").or_else(|| lookup("DB_URI")) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 2)?,
                connect_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_CONNECT_TIMEOUT_SECS",
                    10,
                )?),
            }),
            None => None,
        };

        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt = JwtConfig {
            secret,
            expiration_hours: expiration_hours(&lookup)?,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
        };

        let telemetry = TelemetryConfig {
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            service_name: lookup("SERVICE_NAME"),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            graphql_port: parse_or(&lookup, "GRAPHQL_PORT", 4040)?,
            rest_port: parse_or(&lookup, "REST_PORT", 5050)?,
            database,
            jwt,
            telemetry,
        })
    }
}

/// Token lifetime in hours, between one hour and [`MAX_EXPIRATION_HOURS`].
fn expiration_hours<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const NAME: &str = "JWT_EXPIRATION_HOURS";

    let hours: i64 = parse_or(lookup, NAME, 24)?;
    if (1..=MAX_EXPIRATION_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::Invalid {
            name: NAME,
            value: hours.to_string(),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
