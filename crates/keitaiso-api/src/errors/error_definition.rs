//! APIエラー定義

use std::time::Duration;

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// keitaiso クレートのエラー型をインポート
use keitaiso::errors::{AnalysisFailure, KeitaisoError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// テキストが長すぎる
  TextTooLong,
  /// 形態素解析の失敗
  Analysis,
  /// 解析がタイムアウトした
  Timeout,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Analysis => "analysis_failed",
      Self::Timeout => "timeout",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
      Self::Analysis | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効（メッセージはそのままクライアントに返す）
  #[error("{0}")]
  InvalidInput(String),

  /// テキストが長すぎる
  #[error("Text is too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// 形態素解析の失敗
  #[error("Error processing text: {0}")]
  Analysis(String),

  /// 解析がタイムアウトした
  #[error("Text processing timed out after {} ms", .0.as_millis())]
  Timeout(Duration),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Analysis(_) => ApiErrorKind::Analysis,
      Self::Timeout(_) => ApiErrorKind::Timeout,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 解析失敗エラーを作成
  #[must_use]
  pub fn analysis(details: impl Into<String>) -> Self {
    Self::Analysis(details.into())
  }

  /// タイムアウトエラーを作成
  #[must_use]
  pub fn timeout(limit: Duration) -> Self {
    Self::Timeout(limit)
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
///
/// `detail` は FastAPI 互換のクライアント向け、`error` は構造化されたエラー情報。
#[derive(Serialize)]
struct ErrorResponse {
  detail: String,
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = self.to_string();
    let body = ErrorResponse {
      detail: message.clone(),
      error: ErrorBody {
        code: self.code(),
        message,
      },
    };

    (status, Json(body)).into_response()
  }
}

/// AnalysisFailure から ApiError への変換（単一テキストの経路）
impl From<AnalysisFailure> for ApiError {
  fn from(failure: AnalysisFailure) -> Self {
    ApiError::analysis(failure.message)
  }
}

/// KeitaisoError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<KeitaisoError> for ApiError {
  fn from(err: KeitaisoError) -> Self {
    match err {
      KeitaisoError::Analyzer(e) => ApiError::analysis(e.to_string()),
      KeitaisoError::Dictionary(_) => ApiError::config(format!("dictionary error: {err}")),
      KeitaisoError::Config(e) => ApiError::config(e.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
