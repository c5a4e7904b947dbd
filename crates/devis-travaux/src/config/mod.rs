use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::estimator::{Catalog, CatalogError};
use crate::workflows::leads::DEFAULT_NOTIFY_ADDRESS;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the estimate service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub estimator: EstimatorConfig,
    pub leads: LeadsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            AppEnvironment::from_str(&setting("APP_ENV").unwrap_or_else(|| "development".into()));

        let host = setting("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match setting("APP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort)?,
            None => 3000,
        };

        let log_level = setting("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let catalog_path = setting("ESTIMATOR_CATALOG_PATH").map(PathBuf::from);

        let notify_address = setting("LEADS_NOTIFY_ADDRESS")
            .unwrap_or_else(|| DEFAULT_NOTIFY_ADDRESS.to_string());
        if !notify_address.contains('@') {
            return Err(ConfigError::InvalidNotifyAddress(notify_address));
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            estimator: EstimatorConfig { catalog_path },
            leads: LeadsConfig { notify_address },
        })
    }
}

/// Trimmed variable value; unset and blank are the same.
fn setting(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the question catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct EstimatorConfig {
    pub catalog_path: Option<PathBuf>,
}

impl EstimatorConfig {
    /// Built-in categories unless a JSON catalog file is configured.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::standard()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeadsConfig {
    pub notify_address: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNotifyAddress(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNotifyAddress(value) => {
                write!(f, "LEADS_NOTIFY_ADDRESS '{value}' is not an e-mail address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidNotifyAddress(_) => None,
        }
    }
}
