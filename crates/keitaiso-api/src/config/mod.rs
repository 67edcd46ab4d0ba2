//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_NAME,
  DEFAULT_SERVICE_TITLE, DEFAULT_SERVICE_VERSION, MAX_TEXT_LENGTH,
};
pub use env::{Config, CorsOrigins, ServiceIdentity};
