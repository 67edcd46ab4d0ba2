//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Sentinel part-of-speech tag used when the analyzer gives none ("unknown").
pub const UNKNOWN_POS: &str = "不明";

/// Token in the response shape
///
/// Flattened projection of one `Morpheme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Surface form
  pub surface: String,
  /// Base (dictionary) form
  pub base: String,
  /// Display part of speech (first tag)
  pub pos: String,
  /// Reading, serialized as `null` when absent
  #[serde(default)]
  pub reading: Option<String>,
}

/// Result of processing one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
  /// Base forms concatenated without separator
  pub normalized: String,
  /// Base forms joined with a single space
  pub normalized_spaced: String,
  /// Tokens in analyzer order
  pub tokens: Vec<Token>,
}

/// Caller supplied sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
  /// Caller identifier, carried through unchanged
  pub id: i64,
  /// Raw text
  pub raw: String,
}

/// Processed sentence in a batch response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedSentence {
  /// Identifier of the input sentence
  pub id: i64,
  /// Raw text of the input sentence
  pub raw: String,
  /// Base forms concatenated without separator
  pub normalized: String,
  /// Base forms joined with a single space
  pub normalized_spaced: String,
  /// Tokens in analyzer order
  pub tokens: Vec<Token>,
}

impl Sentence {
  /// Constructor for Sentence
  pub fn new(id: i64, raw: impl Into<String>) -> Self {
    Self { id, raw: raw.into() }
  }

  /// Whether the sentence is empty after trimming whitespace
  pub fn is_blank(&self) -> bool {
    self.raw.trim().is_empty()
  }
}

impl ProcessedSentence {
  /// Attaches a processed text to its sentence
  pub fn from_processed(sentence: &Sentence, processed: ProcessedText) -> Self {
    Self {
      id: sentence.id,
      raw: sentence.raw.clone(),
      normalized: processed.normalized,
      normalized_spaced: processed.normalized_spaced,
      tokens: processed.tokens,
    }
  }

  /// Degraded form used when analysis fails: the raw text stands in for both
  /// normalized fields and there are no tokens.
  pub fn degraded(sentence: &Sentence) -> Self {
    Self {
      id: sentence.id,
      raw: sentence.raw.clone(),
      normalized: sentence.raw.clone(),
      normalized_spaced: sentence.raw.clone(),
      tokens: Vec::new(),
    }
  }
}
