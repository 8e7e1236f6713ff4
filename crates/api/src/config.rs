//! Application configuration loaded from environment variables.

use std::time::Duration;

use domain::{DomainError, Profile, ProfileField};
use fact_client::{DEFAULT_TIMEOUT, DEFAULT_URL};
use thiserror::Error;

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more `USER_*` variables were unset or empty.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingProfileFields(Vec<&'static str>),

    /// The profile could not be built.
    #[error("Invalid profile: {0}")]
    Profile(#[source] DomainError),

    /// A variable was set to something that could not be used.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `USER_EMAIL`, `USER_NAME`, `USER_STACK` — profile fields (required)
/// - `CAT_FACTS_API_URL` — upstream fact endpoint (default: `https://catfact.ninja/fact`)
/// - `API_TIMEOUT` — upstream timeout in whole seconds (default: `5`)
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `5000`)
/// - `DEBUG` — `true` enables debug logging (default: `false`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`, or `"debug"` with `DEBUG`)
/// - `LOG_FORMAT` — `json` for JSON log lines (default: text)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub log_format: LogFormat,
    pub fact_api_url: String,
    pub fact_api_timeout: Duration,
    pub profile: Profile,
}

impl Config {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = Profile::new(
            lookup(profile_var(ProfileField::Email)).unwrap_or_default(),
            lookup(profile_var(ProfileField::Name)).unwrap_or_default(),
            lookup(profile_var(ProfileField::Stack)).unwrap_or_default(),
        )
        .map_err(|err| match err {
            DomainError::MissingProfileFields(fields) => {
                ConfigError::MissingProfileFields(fields.into_iter().map(profile_var).collect())
            }
            other => ConfigError::Profile(other),
        })?;

        let port: u16 = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => 5000,
        };

        let fact_api_timeout = match lookup("API_TIMEOUT") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "API_TIMEOUT",
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let debug = lookup("DEBUG").is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| {
            if debug {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            debug,
            log_level,
            log_format,
            fact_api_url: lookup("CAT_FACTS_API_URL").unwrap_or_else(|| DEFAULT_URL.to_string()),
            fact_api_timeout,
            profile,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn profile_var(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Email => "USER_EMAIL",
        ProfileField::Name => "USER_NAME",
        ProfileField::Stack => "USER_STACK",
    }
}
