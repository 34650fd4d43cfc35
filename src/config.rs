//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BATCH_DEADLINE_SECONDS, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_JUDGE_TIMEOUT_SECONDS, DEFAULT_MAX_CONCURRENT_CALLS, DEFAULT_RUN_FAILURE_POLICY,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SUBMIT_FAILURE_POLICY,
};
use crate::judge::FailurePolicy;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub judge: JudgeConfig,
    pub evaluation: EvaluationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT verification configuration (tokens are issued externally)
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

/// External judge service configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    pub url: String,
    pub api_key: String,
    pub api_host: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Evaluation pipeline configuration
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Maximum concurrent in-flight judge calls per submission
    pub max_concurrent_calls: usize,
    /// Overall deadline for one evaluation batch in seconds
    pub batch_deadline_secs: u64,
    /// Failure policy for the submit path
    pub submit_failure_policy: FailurePolicy,
    /// Failure policy for the run path
    pub run_failure_policy: FailurePolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            evaluation: EvaluationConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("JUDGE_URL").map_err(|_| ConfigError::Missing("JUDGE_URL".to_string()))?,
            api_key: env::var("JUDGE_API_KEY")
                .map_err(|_| ConfigError::Missing("JUDGE_API_KEY".to_string()))?,
            api_host: env::var("JUDGE_API_HOST")
                .map_err(|_| ConfigError::Missing("JUDGE_API_HOST".to_string()))?,
            request_timeout_secs: env::var("JUDGE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_TIMEOUT_SECONDS".to_string()))?,
        })
    }
}

impl EvaluationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_concurrent_calls: env::var("MAX_CONCURRENT_JUDGE_CALLS")
                .unwrap_or_else(|_| DEFAULT_MAX_CONCURRENT_CALLS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("MAX_CONCURRENT_JUDGE_CALLS".to_string())
                })?,
            batch_deadline_secs: env::var("BATCH_DEADLINE_SECONDS")
                .unwrap_or_else(|_| DEFAULT_BATCH_DEADLINE_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BATCH_DEADLINE_SECONDS".to_string()))?,
            submit_failure_policy: env::var("SUBMIT_FAILURE_POLICY")
                .unwrap_or_else(|_| DEFAULT_SUBMIT_FAILURE_POLICY.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SUBMIT_FAILURE_POLICY".to_string()))?,
            run_failure_policy: env::var("RUN_FAILURE_POLICY")
                .unwrap_or_else(|_| DEFAULT_RUN_FAILURE_POLICY.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RUN_FAILURE_POLICY".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_failure_policy_parsing() {
        assert_eq!(
            "substitute".parse::<FailurePolicy>().unwrap(),
            FailurePolicy::Substitute
        );
        assert_eq!(
            "fail_fast".parse::<FailurePolicy>().unwrap(),
            FailurePolicy::FailFast
        );
        assert!("whatever".parse::<FailurePolicy>().is_err());
    }
}
