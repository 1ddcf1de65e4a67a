//! # Configuration
//!
//! Layered application configuration, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `partsel.toml` in the working directory)
//! 3. Environment variables
//! 4. CLI flags (applied by the command that needs them)
//!
//! ## Environment Variables
//!
//! - `PARTSEL_HOST`, `PARTSEL_PORT`: bind address for `partsel server`
//! - `PARTSEL_CORS_ORIGINS`: comma-separated origins, or "*" for all
//! - `PARTSEL_RATE_LIMIT`: requests per second (0 disables)
//! - `PARTSEL_API_KEY`: if set, requires Bearer token authentication

use partsel_core::PartselError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "partsel.toml";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// `None` means localhost only; `["*"]` allows every origin.
    pub cors_origins: Option<Vec<String>>,
    /// Requests per second across all clients. 0 disables the limiter.
    pub rate_limit: u32,
    /// Bearer token required on every route except `/health`.
    pub api_key: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_origins: None,
            rate_limit: 100,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub body_limit_bytes: usize,
    /// Page size for `/history` when the caller does not pass `limit`.
    pub history_page_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            body_limit_bytes: 2 * 1024 * 1024,
            history_page_size: 50,
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Load defaults, then the config file, then the process environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, PartselError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, PartselError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PartselError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PartselError::DeserializationError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| PartselError::IoError(format!("Read config: {}", e)))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, PartselError> {
        toml::from_str(text)
            .map_err(|e| PartselError::DeserializationError(format!("Invalid config: {}", e)))
    }

    /// Overlay environment variables read through `lookup`.
    ///
    /// Unparseable numbers are ignored with a warning; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("PARTSEL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PARTSEL_PORT") {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PARTSEL_PORT"),
            }
        }
        if let Some(origins) = get("PARTSEL_CORS_ORIGINS") {
            self.security.cors_origins = Some(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }
        if let Some(rate) = get("PARTSEL_RATE_LIMIT") {
            match rate.trim().parse() {
                Ok(rate) => self.security.rate_limit = rate,
                Err(_) => tracing::warn!(value = %rate, "Ignoring invalid PARTSEL_RATE_LIMIT"),
            }
        }
        if let Some(key) = get("PARTSEL_API_KEY") {
            self.security.api_key = Some(key);
        }
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.security
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
