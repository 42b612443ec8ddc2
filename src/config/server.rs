use std::{ env, net::{ IpAddr, SocketAddr } };

use crate::config::{ env_or, env_flag, ConfigError, validation::ConfigValidator };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::Config(format!("Unknown ENVIRONMENT '{}'", other))),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub csrf_secret: Option<String>,
    pub csrf_protection: bool,
}

impl ServerConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let host: String = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let environment: String = env
            ::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        let config = Self {
            host: host
                .parse()
                .map_err(|e| ConfigError::Config(format!("Failed to parse HOST: {}", e)))?,
            port: env_or("PORT", 8080)?,
            environment: Environment::parse(&environment)?,
            csrf_secret: env::var("CSRF_SECRET").ok().filter(|s| !s.is_empty()),
            csrf_protection: env_flag("CSRF_PROTECTION", true)?,
        };

        ConfigValidator::validate_server_config(&config)?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::parse("production").unwrap(), Environment::Production);
        assert_eq!(Environment::parse(" Dev ").unwrap(), Environment::Development);
        assert!(Environment::parse("staging").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 3000,
            environment: Environment::Development,
            csrf_secret: None,
            csrf_protection: true,
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }
}
