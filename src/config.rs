use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::adapters::in_memory_result_repository::DEFAULT_CAPACITY;

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:8080",
    "https://localhost:3000",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Error)]
#[error("expected 'json' or 'text', got '{0}'")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub service_name: String,
    pub service_version: String,
    pub cors_allowed_origins: Vec<String>,
    pub log_request_body: bool,
    pub rules_path: Option<PathBuf>,
    pub result_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        Ok(Config {
            server_port: parse_var("PORT", 8081)?,
            environment: var_or("ENVIRONMENT", "development"),
            log_level: var_or("LOG_LEVEL", "info"),
            log_format: parse_var("LOG_FORMAT", LogFormat::Json)?,
            service_name: var_or("SERVICE_NAME", "validation-service"),
            service_version: var_or("SERVICE_VERSION", "1.0.0-SNAPSHOT"),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()),
            log_request_body: parse_var("LOG_REQUEST_BODY", false)?,
            rules_path: env::var("RULES_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            result_capacity: parse_var("RESULT_CAPACITY", DEFAULT_CAPACITY)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }
        if self.result_capacity == 0 {
            anyhow::bail!("RESULT_CAPACITY must be greater than 0");
        }
        if let Some(path) = &self.rules_path {
            if !path.is_file() {
                anyhow::bail!("RULES_PATH {} is not a file", path.display());
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8081,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            service_name: "validation-service".to_string(),
            service_version: "1.0.0-SNAPSHOT".to_string(),
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            log_request_body: false,
            rules_path: None,
            result_capacity: DEFAULT_CAPACITY,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: '{}'", key, raw)),
        _ => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_origin_list() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            ["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_parses_log_format() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            server_port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_rules_file() {
        let config = Config {
            rules_path: Some(PathBuf::from("/nonexistent/rules.json")),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
