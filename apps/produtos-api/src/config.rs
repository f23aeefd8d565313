//! Configuration for Produtos API

use core_config::{FromEnv, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_loads_with_legacy_dsn_variable() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None),
                ("DB_DSN", Some("postgres://app:secret@db:5432/loja")),
                ("PORT", Some("9090")),
                ("SHUTDOWN_TIMEOUT_SECS", None),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.database.url(), "postgres://app:secret@db:5432/loja");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.shutdown_timeout, Duration::from_secs(5));
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_missing_dsn_fails() {
        temp_env::with_vars_unset(["DATABASE_URL", "DB_DSN"], || {
            let err = Config::from_env().unwrap_err();

            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/loja")),
                ("PORT", Some("eighty")),
            ],
            || {
                let err = Config::from_env().unwrap_err();

                assert!(err.to_string().contains("PORT"));
            },
        );
    }
}
