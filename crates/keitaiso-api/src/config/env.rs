//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use keitaiso::config::{AnalyzerConfig, DictionaryConfig, DictionaryPreset};

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_NAME,
  DEFAULT_SERVICE_TITLE, DEFAULT_SERVICE_VERSION, MAX_TEXT_LENGTH,
};
use crate::errors::ApiError;

/// Service identity reported by `GET /` and `GET /health`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
  /// Service name (e.g. "sudachipy-api")
  pub name: String,
  /// Service version (e.g. "1.0.0")
  pub version: String,
  /// Human readable title (e.g. "SudachiPy API")
  pub title: String,
}

impl Default for ServiceIdentity {
  fn default() -> Self {
    Self {
      name: DEFAULT_SERVICE_NAME.to_string(),
      version: DEFAULT_SERVICE_VERSION.to_string(),
      title: DEFAULT_SERVICE_TITLE.to_string(),
    }
  }
}

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
  /// Any origin (`*`)
  Any,
  /// Explicit list of origins
  List(Vec<String>),
}

impl FromStr for CorsOrigins {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s == "*" {
      return Ok(Self::Any);
    }

    let origins: Vec<String> =
      s.split(',').map(str::trim).filter(|o| !o.is_empty()).map(str::to_string).collect();

    if origins.is_empty() {
      return Err("CORS origins must be '*' or a comma-separated list".to_string());
    }

    // A wildcard anywhere in the list means any origin
    if origins.iter().any(|o| o == "*") {
      return Ok(Self::Any);
    }

    Ok(Self::List(origins))
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8000")
  pub bind_addr: String,
  /// Analyzer (dictionary) configuration
  pub analyzer: AnalyzerConfig,
  /// Identity returned by the metadata endpoints
  pub service: ServiceIdentity,
  /// Allowed CORS origins
  pub cors: CorsOrigins,
  /// Upper bound of one analysis request
  pub request_timeout: Duration,
  /// Include analyzer error details in 500 responses
  pub expose_error_details: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      analyzer: analyzer_config(DictionaryPreset::UnidicCwj, None, None),
      service: ServiceIdentity::default(),
      cors: CorsOrigins::Any,
      request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
      expose_error_details: true,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// `from_env` passes `std::env::var`; tests pass a map so that no process-wide
  /// environment variable has to be changed.
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    let bind_addr = var("KEITAISO_BIND_ADDR", DEFAULT_BIND_ADDR);

    let preset = DictionaryPreset::from_str(&var("KEITAISO_PRESET_DICT", DEFAULT_PRESET_DICT))
      .map_err(ApiError::config)?;

    let dict_path = lookup("KEITAISO_DICT_PATH").map(PathBuf::from);
    let cache_dir = lookup("KEITAISO_DICT_CACHE_DIR").map(PathBuf::from);

    let service = ServiceIdentity {
      name: var("KEITAISO_SERVICE_NAME", DEFAULT_SERVICE_NAME),
      version: var("KEITAISO_SERVICE_VERSION", DEFAULT_SERVICE_VERSION),
      title: var("KEITAISO_SERVICE_TITLE", DEFAULT_SERVICE_TITLE),
    };

    let cors = CorsOrigins::from_str(&var("KEITAISO_CORS_ORIGINS", "*")).map_err(ApiError::config)?;

    let timeout_secs = match lookup("KEITAISO_REQUEST_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| {
          ApiError::config(format!(
            "KEITAISO_REQUEST_TIMEOUT_SECS must be a positive integer: {raw}"
          ))
        })?,
      None => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    let expose_error_details = match lookup("KEITAISO_EXPOSE_ERROR_DETAILS") {
      Some(raw) => parse_bool(&raw).ok_or_else(|| {
        ApiError::config(format!("KEITAISO_EXPOSE_ERROR_DETAILS must be true or false: {raw}"))
      })?,
      None => true,
    };

    Ok(Self {
      bind_addr,
      analyzer: analyzer_config(preset, cache_dir, dict_path),
      service,
      cors,
      request_timeout: Duration::from_secs(timeout_secs),
      expose_error_details,
    })
  }
}

fn analyzer_config(
  preset: DictionaryPreset,
  cache_dir: Option<PathBuf>,
  path: Option<PathBuf>,
) -> AnalyzerConfig {
  AnalyzerConfig {
    dictionary: DictionaryConfig {
      preset,
      cache_dir,
      path,
    },
    max_text_length: MAX_TEXT_LENGTH,
  }
}

fn parse_bool(raw: &str) -> Option<bool> {
  match raw.trim().to_lowercase().as_str() {
    "true" | "1" | "yes" | "on" => Some(true),
    "false" | "0" | "no" | "off" => Some(false),
    _ => None,
  }
}
