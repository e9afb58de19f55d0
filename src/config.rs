use crate::error::{Error, Result};
use log::warn;

/// Default API base URL for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Placeholder API base URL used on a deployed host without an explicit URL
pub const DEFAULT_PRODUCTION_BASE_URL: &str = "https://your-backend-api.herokuapp.com";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default upload limit in bytes (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Hostname treated as local development
pub const LOCAL_HOSTNAME: &str = "localhost";

/// Process variables read by [`Environment::from_process`]
pub mod env_vars {
    pub const HOSTNAME: &str = "MITRAVERIFY_HOSTNAME";
    pub const API_URL: &str = "MITRAVERIFY_API_URL";
    pub const API_TIMEOUT: &str = "MITRAVERIFY_API_TIMEOUT";
    pub const MAX_FILE_SIZE: &str = "MITRAVERIFY_MAX_FILE_SIZE";
}

/// Snapshot of the ambient values configuration is resolved from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Host the application is served from; `None` outside a deployed context
    pub hostname: Option<String>,

    /// Explicit API base URL
    pub api_url: Option<String>,

    /// Request timeout in milliseconds, unparsed
    pub api_timeout: Option<String>,

    /// Upload limit in bytes, unparsed
    pub max_file_size: Option<String>,
}

impl Environment {
    /// Read the process environment
    pub fn from_process() -> Self {
        Self {
            hostname: std::env::var(env_vars::HOSTNAME).ok(),
            api_url: std::env::var(env_vars::API_URL).ok(),
            api_timeout: std::env::var(env_vars::API_TIMEOUT).ok(),
            max_file_size: std::env::var(env_vars::MAX_FILE_SIZE).ok(),
        }
    }

    /// Whether we are running on a deployed (non-local) host
    pub fn is_deployed(&self) -> bool {
        match non_blank(&self.hostname) {
            Some(host) => !host.eq_ignore_ascii_case(LOCAL_HOSTNAME),
            None => false,
        }
    }
}

/// Configuration for the MitraVerify client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL for the API
    pub base_url: String,

    /// Timeout in milliseconds for each request
    pub timeout_ms: u64,

    /// Largest accepted upload in bytes
    pub max_file_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self::resolve(&Environment::from_process())
    }

    /// Resolve configuration from an environment snapshot.
    ///
    /// Never fails: missing or malformed values fall back to defaults.
    pub fn resolve(env: &Environment) -> Self {
        let fallback_url = if env.is_deployed() {
            DEFAULT_PRODUCTION_BASE_URL
        } else {
            DEFAULT_BASE_URL
        };

        let base_url = non_blank(&env.api_url)
            .unwrap_or(fallback_url)
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            timeout_ms: parse_or(
                env_vars::API_TIMEOUT,
                &env.api_timeout,
                DEFAULT_TIMEOUT_MS,
            ),
            max_file_size: parse_or(
                env_vars::MAX_FILE_SIZE,
                &env.max_file_size,
                DEFAULT_MAX_FILE_SIZE,
            ),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("Base URL cannot be empty".to_string()));
        }

        crate::utils::validate_base_url(&self.base_url)?;

        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(Error::InvalidConfig(
                "Max file size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the timeout as a duration
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_or(name: &str, value: &Option<String>, default: u64) -> u64 {
    match non_blank(value) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {name}={raw:?}, using default {default}");
            default
        }),
        None => default,
    }
}
