use std::env::{self, VarError};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FETCH_DELAY_MS: u64 = 1_000;
const DEFAULT_USER_AGENT: &str = concat!("nolasales/", env!("CARGO_PKG_VERSION"));
const DATA_FILE_NAME: &str = "nolasales-data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the aggregator, sourced from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Location of the persisted state blob.
    pub data_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between requests during a bulk refresh.
    pub fetch_delay_ms: u64,
}

/// Builds an [`AppConfig`] from the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a numeric variable cannot be
/// parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| env::var(key))
}

/// Builds an [`AppConfig`] from an injectable env lookup, so tests can
/// exercise parsing without touching the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a numeric variable cannot be
/// parsed.
pub fn build_app_config(
    lookup: impl Fn(&str) -> Result<String, VarError>,
) -> Result<AppConfig, ConfigError> {
    let data_path = match lookup("NOLASALES_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => default_data_path(),
    };

    Ok(AppConfig {
        data_path,
        request_timeout_secs: read_u64(&lookup, "NOLASALES_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        user_agent: lookup("NOLASALES_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_owned()),
        fetch_delay_ms: read_u64(&lookup, "NOLASALES_FETCH_DELAY_MS", DEFAULT_FETCH_DELAY_MS)?,
    })
}

/// `<user data dir>/nolasales/nolasales-data.json`, falling back to the
/// working directory when no home directory can be resolved.
fn default_data_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "nolasales").map_or_else(
        || PathBuf::from(DATA_FILE_NAME),
        |dirs| dirs.data_dir().join(DATA_FILE_NAME),
    )
}

fn read_u64(
    lookup: impl Fn(&str) -> Result<String, VarError>,
    var: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(var) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            var: var.to_owned(),
            reason: format!("expected an integer, got \"{raw}\""),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
