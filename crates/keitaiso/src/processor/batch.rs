//! Batch processing with per-sentence error isolation
//!
//! Each sentence is reduced to a [`SentenceOutcome`]:
//! - blank sentences are skipped and absent from the output
//! - analysis failures are degraded (raw text, no tokens) and never abort the batch

use tracing::{info, warn};

use super::report::BatchReport;
use super::text_processor::TextProcessor;
use crate::errors::AnalysisFailure;
use crate::models::{ProcessedSentence, Sentence};

/// Outcome of one sentence in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceOutcome {
  /// Analysis succeeded
  Processed(ProcessedSentence),
  /// Analysis failed, the degraded sentence replaces the result
  Degraded {
    /// Degraded representation
    sentence: ProcessedSentence,
    /// Failure that caused the degradation
    failure: AnalysisFailure,
  },
  /// Blank input, dropped from the output
  Skipped,
}

impl SentenceOutcome {
  /// Degraded outcome for `sentence`
  pub fn degraded(sentence: &Sentence, failure: AnalysisFailure) -> Self {
    Self::Degraded {
      sentence: ProcessedSentence::degraded(sentence),
      failure,
    }
  }

  /// Sentence to emit, `None` for skipped input
  pub fn into_sentence(self) -> Option<ProcessedSentence> {
    match self {
      Self::Processed(sentence) | Self::Degraded { sentence, .. } => Some(sentence),
      Self::Skipped => None,
    }
  }
}

/// Output of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
  /// Emitted sentences, in input order
  pub sentences: Vec<ProcessedSentence>,
  /// Tally of outcomes
  pub report: BatchReport,
}

impl BatchOutput {
  /// Reduces per-sentence outcomes, in input order, into the batch output.
  ///
  /// Each degraded sentence is logged at `warn` with its id and failure.
  pub fn from_outcomes<I>(outcomes: I) -> Self
  where
    I: IntoIterator<Item = SentenceOutcome>,
  {
    let mut report = BatchReport::default();
    let mut emitted = Vec::new();

    for outcome in outcomes {
      report.record_total();

      match &outcome {
        SentenceOutcome::Processed(_) => report.record_processed(),
        SentenceOutcome::Degraded { sentence, failure } => {
          warn!(sentence_id = sentence.id, error = %failure, "Error processing sentence");
          report.record_degraded();
        }
        SentenceOutcome::Skipped => report.record_skipped(),
      }

      if let Some(processed) = outcome.into_sentence() {
        emitted.push(processed);
      }
    }

    info!(
      total = report.total,
      processed = report.processed,
      degraded = report.degraded,
      skipped = report.skipped,
      "Batch processed"
    );

    Self {
      sentences: emitted,
      report,
    }
  }
}

/// Runs the text processor on batch sentences, one outcome per sentence.
#[derive(Clone)]
pub struct BatchProcessor {
  processor: TextProcessor,
}

impl BatchProcessor {
  /// Creates a batch processor
  pub fn new(processor: TextProcessor) -> Self {
    Self { processor }
  }

  /// Processes a single sentence into its outcome.
  pub fn process_sentence(&self, sentence: &Sentence) -> SentenceOutcome {
    if sentence.is_blank() {
      return SentenceOutcome::Skipped;
    }

    match self.processor.process(&sentence.raw) {
      Ok(processed) => {
        SentenceOutcome::Processed(ProcessedSentence::from_processed(sentence, processed))
      }
      Err(failure) => SentenceOutcome::degraded(sentence, failure),
    }
  }
}
