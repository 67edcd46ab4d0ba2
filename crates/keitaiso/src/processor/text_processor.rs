//! Text processor: one raw string to tokens and normalized text

use std::sync::Arc;

use tracing::debug;

use crate::analyzer::{Morpheme, MorphologicalAnalyzer};
use crate::errors::AnalysisFailure;
use crate::models::{ProcessedText, Token, UNKNOWN_POS};

/// Returns the first tag, or `default` when there is none.
pub fn first_tag_or<'a>(tags: &'a [String], default: &'a str) -> &'a str {
  tags.first().map_or(default, String::as_str)
}

/// Turns analyzer output into the response shape.
///
/// Cheap to clone; the analyzer is shared.
#[derive(Clone)]
pub struct TextProcessor {
  analyzer: Arc<dyn MorphologicalAnalyzer>,
}

impl TextProcessor {
  /// Creates a processor over a shared analyzer
  pub fn new(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
    Self { analyzer }
  }

  /// Analyzes `text` and builds tokens and normalized strings.
  ///
  /// # Errors
  /// Returns `AnalysisFailure` with the original text when the analyzer fails.
  /// No partial result is returned.
  pub fn process(&self, text: &str) -> Result<ProcessedText, AnalysisFailure> {
    let morphemes = self.analyzer.analyze(text).map_err(|e| AnalysisFailure::new(text, &e))?;

    debug!(text_len = text.len(), morphemes = morphemes.len(), "Text analyzed");

    Ok(build_processed_text(morphemes))
  }
}

fn to_token(morpheme: Morpheme) -> Token {
  let pos = first_tag_or(&morpheme.part_of_speech, UNKNOWN_POS).to_string();
  Token {
    surface: morpheme.surface,
    base: morpheme.normalized_form,
    pos,
    reading: morpheme.reading_form,
  }
}

fn build_processed_text(morphemes: Vec<Morpheme>) -> ProcessedText {
  let tokens: Vec<Token> = morphemes.into_iter().map(to_token).collect();

  let bases: Vec<&str> = tokens.iter().map(|t| t.base.as_str()).collect();
  let normalized = bases.concat();
  let normalized_spaced = bases.join(" ");

  ProcessedText {
    normalized,
    normalized_spaced,
    tokens,
  }
}
