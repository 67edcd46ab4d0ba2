//! リクエストモデル定義

use serde::Deserialize;

use keitaiso::models::Sentence;

use crate::errors::{ApiError, Result};

/// 単一テキストの解析リクエスト（POST /tokenize）
#[derive(Debug, Deserialize)]
pub struct TokenizeRequest {
  /// 解析対象のテキスト
  pub text: String,
}

/// 複数文の解析リクエスト（POST /process）
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
  /// 解析対象の文（入力順に処理する）
  pub sentences: Vec<Sentence>,
}

impl ProcessRequest {
  /// 文リストが空でないことを検証する（各文の解析前に行う）
  ///
  /// # Errors
  /// 文リストが空の場合は `InvalidInput`
  pub fn validate(&self) -> Result<()> {
    if self.sentences.is_empty() {
      return Err(ApiError::invalid_input("Sentences list cannot be empty"));
    }
    Ok(())
  }
}
