//! Environment-backed configuration.
//!
//! All settings have defaults. Override with `HOST`, `PORT`, `DEBUG` and
//! `TEXTSIM_MODEL_PATH`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind to. Default: `0.0.0.0`.
    pub host: IpAddr,

    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// Verbose error reporting and debug-level logging. Default: `false`.
    pub debug: bool,

    /// Sentence-embedding model directory (`config.json`, `model.safetensors`,
    /// `tokenizer.json`). When unset the embedder runs in stub mode.
    pub model_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            debug: false,
            model_path: None,
        }
    }
}

impl Config {
    const ENV_HOST: &'static str = "HOST";
    const ENV_PORT: &'static str = "PORT";
    const ENV_DEBUG: &'static str = "DEBUG";
    const ENV_MODEL_PATH: &'static str = "TEXTSIM_MODEL_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = Self::parse_host_from_env(defaults.host)?;
        let port = Self::parse_port_from_env(defaults.port)?;
        let debug = Self::parse_bool_from_env(Self::ENV_DEBUG, defaults.debug)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);

        Ok(Self {
            host,
            port,
            debug,
            model_path,
        })
    }

    /// Validates paths (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{host}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.host {
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }

    fn parse_host_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_HOST) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidHost { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.trim().parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Ok(value) = env::var(var_name) else {
            return Ok(default);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                name: var_name,
                value,
            }),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
