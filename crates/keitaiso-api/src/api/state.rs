//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::KeitaisoApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Morphological Analysis Service
  ///
  /// - Production: `Arc::new(KeitaisoApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(KeitaisoApiServiceFull::with_analyzer(stub, true))`
  pub service: Arc<dyn KeitaisoApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn KeitaisoApiService>) -> Self {
    Self { config, service }
  }
}
