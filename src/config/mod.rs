pub mod database;
pub mod logging;
pub mod server;
pub mod validation;

use std::{ env, str::FromStr };

pub use database::{ DatabaseConfig, ConfigError, PgPool };
pub use server::{ Environment, ServerConfig };

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::new()?,
            server: ServerConfig::new()?,
        })
    }
}

/// Read `key` from the environment, falling back to `default` when unset.
pub(crate) fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
    where T: FromStr, T::Err: std::fmt::Display
{
    match env::var(key) {
        Ok(value) =>
            value
                .trim()
                .parse()
                .map_err(|e| ConfigError::Config(format!("Failed to parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::MissingEnv(e)),
    }
}

pub(crate) fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_flag(key, &value),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::MissingEnv(e)),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}
