use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_path = env::var("KINDRED_CATALOG_PATH")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let suggestion_limit = env::var("KINDRED_SUGGESTION_LIMIT")
            .unwrap_or_else(|_| DEFAULT_SUGGESTION_LIMIT.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidSuggestionLimit)?;
        let parallel_threshold = env::var("KINDRED_PARALLEL_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_PARALLEL_THRESHOLD.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidParallelThreshold)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig {
                catalog_path,
                suggestion_limit,
                parallel_threshold,
            },
        })
    }
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub const DEFAULT_SUGGESTION_LIMIT: u32 = 10;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Knobs for the compatibility engine and its catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON catalog definition; the built-in standard catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub suggestion_limit: u32,
    /// Candidate pools at least this large are scored on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSuggestionLimit,
    InvalidParallelThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSuggestionLimit => {
                write!(f, "KINDRED_SUGGESTION_LIMIT must be a non-negative integer")
            }
            ConfigError::InvalidParallelThreshold => {
                write!(f, "KINDRED_PARALLEL_THRESHOLD must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidSuggestionLimit
            | ConfigError::InvalidParallelThreshold => None,
        }
    }
}
