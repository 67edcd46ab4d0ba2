//! Morpheme and the analyzer seam

use crate::errors::AnalyzerError;

/// One unit returned by the morphological analyzer.
///
/// Lives only for the duration of a single `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
  /// Text as it appears in the input
  pub surface: String,
  /// Dictionary (base) form
  pub normalized_form: String,
  /// Part-of-speech tags, most general first
  pub part_of_speech: Vec<String>,
  /// Reading of the surface, if the lexicon provides one
  pub reading_form: Option<String>,
}

/// Common interface of morphological analyzers
///
/// The production implementation is `VibratoAnalyzer`; tests inject stubs.
/// Implementations are shared across requests behind an `Arc`, so they must be
/// safe for concurrent read-only use.
pub trait MorphologicalAnalyzer: Send + Sync {
  /// Splits `text` into morphemes, in input order.
  ///
  /// # Errors
  /// Returns an `AnalyzerError` when the text cannot be analyzed.
  fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError>;
}
