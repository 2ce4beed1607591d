//! Service configuration read from the environment.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "data";
const DEFAULT_HOST: &str = "[::1]";
const DEFAULT_PORT: u16 = 50051;
const DEFAULT_ORCA_URL: &str = "http://localhost:8000/api01/rv2/interaction_check";
const DEFAULT_ORCA_USER: &str = "ormaster";
const DEFAULT_ORCA_PASSWORD: &str = "password";
const DEFAULT_PATIENT_ID: &str = "99999999";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors in configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("Invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Value found.
        value: String,
        /// What would have been accepted.
        expected: &'static str,
    },
}

/// Which interaction sources a check consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Local reference table only.
    Table,
    /// External authority only.
    Authority,
    /// Both, local matches first.
    #[default]
    Both,
}

impl SourceMode {
    /// Returns true if the local table is consulted.
    pub fn uses_table(self) -> bool {
        matches!(self, Self::Table | Self::Both)
    }

    /// Returns true if the external authority is consulted.
    pub fn uses_authority(self) -> bool {
        matches!(self, Self::Authority | Self::Both)
    }
}

impl FromStr for SourceMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "authority" => Ok(Self::Authority),
            "both" => Ok(Self::Both),
            _ => Err(()),
        }
    }
}

/// Connection settings for the ORCA interaction-check API.
#[derive(Clone)]
pub struct AuthorityConfig {
    /// Endpoint URL.
    pub endpoint: String,
    /// Basic-auth user.
    pub user: String,
    /// Basic-auth password.
    pub password: String,
    /// Placeholder patient identifier sent with every request.
    pub patient_id: String,
    /// Answer locally instead of calling the endpoint.
    pub simulate: bool,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ORCA_URL.to_string(),
            user: DEFAULT_ORCA_USER.to_string(),
            password: DEFAULT_ORCA_PASSWORD.to_string(),
            patient_id: DEFAULT_PATIENT_ID.to_string(),
            simulate: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for AuthorityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorityConfig")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("password", &"***")
            .field("patient_id", &self.patient_id)
            .field("simulate", &self.simulate)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the interaction table and catalog files.
    pub data_path: PathBuf,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Sources consulted per check.
    pub sources: SourceMode,
    /// External authority settings.
    pub authority: AuthorityConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sources: SourceMode::default(),
            authority: AuthorityConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);

        let port = match lookup("MEDCHECK_PORT") {
            Some(value) => value.trim().parse().map_err(|_| invalid("MEDCHECK_PORT", &value, "a port number"))?,
            None => defaults.port,
        };

        let sources = match lookup("MEDCHECK_SOURCES") {
            Some(value) => value
                .parse()
                .map_err(|_| invalid("MEDCHECK_SOURCES", &value, "table, authority or both"))?,
            None => defaults.sources,
        };

        let simulate = match lookup("ORCA_MOCK_MODE") {
            Some(value) => parse_bool(&value).ok_or_else(|| invalid("ORCA_MOCK_MODE", &value, "true or false"))?,
            None => defaults.authority.simulate,
        };

        let timeout = match lookup("ORCA_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| invalid("ORCA_TIMEOUT_SECS", &value, "a positive number of seconds"))?,
            None => defaults.authority.timeout,
        };

        Ok(Self {
            data_path: lookup("MEDCHECK_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            host: text("MEDCHECK_HOST", defaults.host),
            port,
            sources,
            authority: AuthorityConfig {
                endpoint: text("ORCA_API_URL", defaults.authority.endpoint),
                user: text("ORCA_USER", defaults.authority.user),
                password: text("ORCA_PASSWORD", defaults.authority.password),
                patient_id: text("DUMMY_PATIENT_ID", defaults.authority.patient_id),
                simulate,
                timeout,
            },
        })
    }

    /// Returns the socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| invalid("MEDCHECK_HOST", &self.host, "an IP address"))
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
