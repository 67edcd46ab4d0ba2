//! Morphological analyzer backed by vibrato-rkyv

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::feature::FeatureLayout;
use super::morpheme::{Morpheme, MorphologicalAnalyzer};
use crate::config::{AnalyzerConfig, DEFAULT_MAX_TEXT_LENGTH};
use crate::dictionary::DictionaryManager;
use crate::errors::{AnalyzerError, DictionaryError, KeitaisoResult};

/// Japanese morphological analyzer using vibrato-rkyv
///
/// - Holds only the tokenizer (shared dictionary reference)
/// - `Clone + Send + Sync`, one worker is created per call
/// - Spaces are ignored by the tokenizer itself (MeCab compatible)
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
  layout: FeatureLayout,
  max_text_length: usize,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// # Errors
  /// Returns `DictionaryError::SpaceCategoryMissing` if the dictionary defines no
  /// `SPACE` character category.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use keitaiso::analyzer::{FeatureLayout, VibratoAnalyzer};
  /// # use keitaiso::dictionary::DictionaryManager;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let analyzer = VibratoAnalyzer::from_shared_dictionary(dict, FeatureLayout::IPADIC).unwrap();
  /// ```
  pub fn from_shared_dictionary(
    dict: Arc<Dictionary>,
    layout: FeatureLayout,
  ) -> Result<Self, DictionaryError> {
    let inner = VibratoImpl::from_shared_dictionary(dict)
      .ignore_space(true)
      .map_err(|e| DictionaryError::SpaceCategoryMissing(Arc::new(e)))?;

    Ok(Self {
      inner,
      layout,
      max_text_length: DEFAULT_MAX_TEXT_LENGTH,
    })
  }

  /// Sets the maximum accepted text length (bytes).
  #[must_use]
  pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
    self.max_text_length = max_text_length;
    self
  }

  /// Validates the configuration, loads the dictionary and builds the analyzer.
  ///
  /// # Errors
  /// - Invalid configuration
  /// - Dictionary download or load failure
  pub fn from_config(config: &AnalyzerConfig) -> KeitaisoResult<Self> {
    config.validate()?;

    let manager = DictionaryManager::from_config(&config.dictionary)?;
    let dict = manager.load()?;

    Ok(
      Self::from_shared_dictionary(dict, config.feature_layout())?
        .with_max_text_length(config.max_text_length),
    )
  }

  fn tokenize(&self, text: &str) -> Vec<Morpheme> {
    // The worker holds the lattice and scratch space, so it is created per call
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    let morphemes: Vec<Morpheme> = worker
      .token_iter()
      .map(|token| self.layout.morpheme(token.surface(), token.feature()))
      .collect();

    debug!(text_len = text.len(), morphemes = morphemes.len(), "Morphological analysis completed");

    morphemes
  }
}

impl MorphologicalAnalyzer for VibratoAnalyzer {
  fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
    if text.len() > self.max_text_length {
      return Err(AnalyzerError::TextTooLong {
        actual: text.len(),
        max: self.max_text_length,
      });
    }

    catch_panic(|| self.tokenize(text))
  }
}

/// Runs `f`, turning a panic into `AnalyzerError::Panicked`.
///
/// vibrato does not report errors, a panic is the only failure it can raise.
fn catch_panic<F>(f: F) -> Result<Vec<Morpheme>, AnalyzerError>
where
  F: FnOnce() -> Vec<Morpheme>,
{
  panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| AnalyzerError::Panicked {
    message: panic_message(payload.as_ref()),
  })
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    (*s).to_string()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic".to_string()
  }
}
