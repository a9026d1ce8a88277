use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub url: UrlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
    pub base_url: String,
    pub short_code_length: usize,
    pub short_code_max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid PORT".to_string()))?;
        let debug = env::var("DEBUG")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid DEBUG".to_string()))?;

        // Falls back to a local file-based store when DATABASE_URL is unset
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid DB_MAX_CONNECTIONS".to_string()))?;

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));
        let short_code_length = env::var("SHORT_CODE_LENGTH")
            .unwrap_or_else(|_| "6".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SHORT_CODE_LENGTH".to_string()))?;
        let short_code_max_attempts = env::var("SHORT_CODE_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SHORT_CODE_MAX_ATTEMPTS".to_string()))?;

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
                debug,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: db_max_connections,
            },
            url: UrlConfig {
                base_url,
                short_code_length,
                short_code_max_attempts,
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DB_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        // The short_code column caps out at 64 characters
        if self.url.short_code_length < 1 || self.url.short_code_length > 64 {
            return Err(AppError::Configuration(
                "SHORT_CODE_LENGTH must be between 1 and 64".to_string(),
            ));
        }

        if self.url.short_code_max_attempts < 1 || self.url.short_code_max_attempts > 100 {
            return Err(AppError::Configuration(
                "SHORT_CODE_MAX_ATTEMPTS must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}
