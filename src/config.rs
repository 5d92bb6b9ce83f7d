//! Cluster target configuration.
//!
//! Settings come from `$LATTICE_CLI_HOME/.lattice/config.json` (falling back
//! to `$HOME`), then environment variables override individual fields.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Directory holding the config file, overriding `$HOME`.
pub const CONFIG_HOME_ENV: &str = "LATTICE_CLI_HOME";
/// Overrides the configured target domain.
pub const TARGET_ENV: &str = "LTC_TARGET";
/// Overrides the configured receptor username.
pub const USERNAME_ENV: &str = "LTC_USERNAME";
/// Overrides the configured receptor password.
pub const PASSWORD_ENV: &str = "LTC_PASSWORD";
/// Request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "LTC_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatticeConfig {
    /// Target domain, e.g. `192.168.11.11.xip.io`.
    #[serde(default)]
    pub target: String,
    /// Receptor basic-auth username.
    #[serde(default)]
    pub username: String,
    /// Receptor basic-auth password.
    #[serde(default)]
    pub password: String,
    /// HTTP request timeout.
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            username: String::new(),
            password: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LatticeConfig {
    /// Loads the config file (if any) and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error string if the config file exists but cannot be read
    /// or parsed, or if an override has an invalid value.
    pub fn load() -> Result<Self, String> {
        let base = match config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    format!("Failed to read config file {}: {e}", path.display())
                })?;
                Self::from_json(&content).map_err(|e| {
                    format!("Failed to parse config file {}: {e}", path.display())
                })?
            }
            _ => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Parses a config file body.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON is malformed.
    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Unset or empty variables leave the field untouched.
    ///
    /// # Errors
    ///
    /// Returns an error string if the timeout override is not a whole number
    /// of seconds.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(target) = get(TARGET_ENV) {
            self.target = target;
        }
        if let Some(username) = get(USERNAME_ENV) {
            self.username = username;
        }
        if let Some(password) = get(PASSWORD_ENV) {
            self.password = password;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}"))?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Base URL of the receptor API, or `None` when no target is set.
    #[must_use]
    pub fn receptor_url(&self) -> Option<String> {
        if self.target.is_empty() {
            None
        } else {
            Some(format!("http://receptor.{}", self.target))
        }
    }

    /// Basic-auth credentials, when a username is configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() {
            None
        } else {
            Some((self.username.as_str(), self.password.as_str()))
        }
    }
}

/// Location of the config file.
fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_HOME_ENV)
        .or_else(|| env::var_os("HOME"))
        .map(|home| PathBuf::from(home).join(".lattice").join("config.json"))
}
