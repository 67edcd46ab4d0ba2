//! Response Model Definition

use std::collections::BTreeMap;

use serde::Serialize;

use keitaiso::models::{ProcessedSentence, ProcessedText, Token};

use crate::config::ServiceIdentity;

/// Single text analysis response (POST /tokenize)
#[derive(Debug, Serialize)]
pub struct TokenizeResponse {
  /// Always `true` on success
  pub success: bool,
  /// Input text as received
  pub raw: String,
  /// Base forms concatenated without separator
  pub normalized: String,
  /// Base forms joined with a single space
  pub normalized_spaced: String,
  /// Tokens in analyzer order
  pub tokens: Vec<Token>,
}

impl TokenizeResponse {
  /// Builds the success response for `raw`
  #[must_use]
  pub fn new(raw: String, processed: ProcessedText) -> Self {
    Self {
      success: true,
      raw,
      normalized: processed.normalized,
      normalized_spaced: processed.normalized_spaced,
      tokens: processed.tokens,
    }
  }
}

/// Batch analysis response (POST /process)
///
/// `success` is `true` even when individual sentences were degraded.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
  /// Always `true`
  pub success: bool,
  /// Processed sentences, in input order
  pub sentences: Vec<ProcessedSentence>,
}

impl ProcessResponse {
  /// Wraps processed sentences
  #[must_use]
  pub fn new(sentences: Vec<ProcessedSentence>) -> Self {
    Self {
      success: true,
      sentences,
    }
  }
}

/// Health check response (GET /health)
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// "healthy"
  pub status: &'static str,
  /// Service name
  pub service: String,
  /// Service version
  pub version: String,
}

impl HealthResponse {
  /// Healthy response for the given identity
  #[must_use]
  pub fn healthy(identity: &ServiceIdentity) -> Self {
    Self {
      status: "healthy",
      service: identity.name.clone(),
      version: identity.version.clone(),
    }
  }
}

/// Service metadata response (GET /)
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
  /// Service title
  pub message: String,
  /// "running"
  pub status: &'static str,
  /// Endpoint path → description
  pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceInfoResponse {
  /// Metadata for the given identity
  #[must_use]
  pub fn running(identity: &ServiceIdentity) -> Self {
    let endpoints = BTreeMap::from([
      ("/health", "Health check"),
      ("/tokenize", "Tokenize single text"),
      ("/process", "Process multiple sentences"),
    ]);

    Self {
      message: identity.title.clone(),
      status: "running",
      endpoints,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_text() -> ProcessedText {
    ProcessedText {
      normalized: "東京は".to_string(),
      normalized_spaced: "東京 は".to_string(),
      tokens: vec![
        Token {
          surface: "東京".to_string(),
          base: "東京".to_string(),
          pos: "名詞".to_string(),
          reading: Some("トウキョウ".to_string()),
        },
        Token {
          surface: "は".to_string(),
          base: "は".to_string(),
          pos: "助詞".to_string(),
          reading: None,
        },
      ],
    }
  }

  #[test]
  fn tokenize_response_serialization() {
    let response = TokenizeResponse::new("東京は".to_string(), sample_text());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["raw"], "東京は");
    assert_eq!(json["normalized"], "東京は");
    assert_eq!(json["normalized_spaced"], "東京 は");
    assert_eq!(json["tokens"][0]["reading"], "トウキョウ");
    assert!(json["tokens"][1]["reading"].is_null());
  }

  #[test]
  fn health_response_uses_identity() {
    let json = serde_json::to_value(HealthResponse::healthy(&ServiceIdentity::default())).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "status": "healthy", "service": "sudachipy-api", "version": "1.0.0" })
    );
  }

  #[test]
  fn service_info_lists_endpoints() {
    let json = serde_json::to_value(ServiceInfoResponse::running(&ServiceIdentity::default())).unwrap();
    assert_eq!(json["message"], "SudachiPy API");
    assert_eq!(json["status"], "running");
    assert_eq!(json["endpoints"]["/tokenize"], "Tokenize single text");
    assert_eq!(json["endpoints"]["/process"], "Process multiple sentences");
    assert_eq!(json["endpoints"]["/health"], "Health check");
  }
}
