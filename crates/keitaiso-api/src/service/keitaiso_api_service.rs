//! Morphological Analysis Service

use std::sync::Arc;

use tracing::{debug, error};

use keitaiso::analyzer::{MorphologicalAnalyzer, VibratoAnalyzer};
use keitaiso::errors::AnalysisFailure;
use keitaiso::models::Sentence;
use keitaiso::processor::{BatchProcessor, SentenceOutcome, TextProcessor};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{TokenizeRequest, TokenizeResponse};

/// Message of the 500 response when analyzer details are hidden
const HIDDEN_ANALYSIS_DETAIL: &str = "internal analyzer error";

/// Common interface for morphological analysis service
///
/// This trait allows swapping production implementation (`KeitaisoApiServiceFull`) with
/// test stubs/mocks.
pub trait KeitaisoApiService: Send + Sync {
  /// Analyzes a single text
  ///
  /// # Errors
  /// - Input error (blank text, length exceeded)
  /// - Analysis failure
  fn tokenize(&self, request: TokenizeRequest) -> Result<TokenizeResponse>;

  /// Analyzes one sentence of a batch
  ///
  /// Blank sentences are skipped and failures are degraded, so there is no error path.
  fn process_sentence(&self, sentence: &Sentence) -> SentenceOutcome;
}

/// Morphological Analysis Service
#[derive(Clone)]
pub struct KeitaisoApiServiceFull {
  processor: TextProcessor,
  batch: BatchProcessor,
  expose_error_details: bool,
}

impl KeitaisoApiServiceFull {
  /// Initializes the service, loading the dictionary
  ///
  /// # Arguments
  /// * `config` - Configuration (including dictionary preset)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the dictionary load fails
  pub fn new(config: &Config) -> Result<Self> {
    let analyzer = VibratoAnalyzer::from_config(&config.analyzer)?;
    Ok(Self::with_analyzer(Arc::new(analyzer), config.expose_error_details))
  }

  /// Builds the service over an already constructed analyzer
  #[must_use]
  pub fn with_analyzer(
    analyzer: Arc<dyn MorphologicalAnalyzer>,
    expose_error_details: bool,
  ) -> Self {
    let processor = TextProcessor::new(analyzer);
    Self {
      batch: BatchProcessor::new(processor.clone()),
      processor,
      expose_error_details,
    }
  }

  /// Analyzes a single text
  ///
  /// # Errors
  /// - If text is blank
  /// - If text exceeds maximum length
  /// - If the analyzer fails
  pub fn tokenize(&self, request: TokenizeRequest) -> Result<TokenizeResponse> {
    if request.text.trim().is_empty() {
      return Err(ApiError::invalid_input("Text cannot be empty"));
    }

    let text_bytes = request.text.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let processed =
      self.processor.process(&request.text).map_err(|failure| self.analysis_error(failure))?;

    Ok(TokenizeResponse::new(request.text, processed))
  }

  /// Analyzes one sentence of a batch
  pub fn process_sentence(&self, sentence: &Sentence) -> SentenceOutcome {
    let outcome = self.batch.process_sentence(sentence);
    debug!(
      sentence_id = sentence.id,
      skipped = matches!(outcome, SentenceOutcome::Skipped),
      "Sentence processed"
    );
    outcome
  }

  fn analysis_error(&self, failure: AnalysisFailure) -> ApiError {
    error!(error = %failure, text_len = failure.text.len(), "Error processing text");

    if self.expose_error_details {
      failure.into()
    } else {
      ApiError::analysis(HIDDEN_ANALYSIS_DETAIL)
    }
  }
}

/// Production implementation of trait `KeitaisoApiService`
impl KeitaisoApiService for KeitaisoApiServiceFull {
  fn tokenize(&self, request: TokenizeRequest) -> Result<TokenizeResponse> {
    // Writing `self.tokenize(...)` would recursively call the trait method
    KeitaisoApiServiceFull::tokenize(self, request)
  }

  fn process_sentence(&self, sentence: &Sentence) -> SentenceOutcome {
    KeitaisoApiServiceFull::process_sentence(self, sentence)
  }
}
