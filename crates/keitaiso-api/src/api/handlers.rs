//! HTTPハンドラー定義

use std::time::Duration;

use axum::{Json, extract::State};
use tracing::{debug, error, info, warn};

use keitaiso::errors::{AnalysisFailure, AnalyzerError};
use keitaiso::models::Sentence;
use keitaiso::processor::{BatchOutput, SentenceOutcome};

use crate::errors::{ApiError, Result};
use crate::models::{
  HealthResponse, ProcessRequest, ProcessResponse, ServiceInfoResponse, TokenizeRequest,
  TokenizeResponse,
};

use super::state::AppState;

/// GET / エンドポイント
///
/// サービスのメタ情報とエンドポイント一覧を返す。
pub async fn get_root(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
  Json(ServiceInfoResponse::running(&state.config.service))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
  Json(HealthResponse::healthy(&state.config.service))
}

/// POST /tokenize エンドポイント
///
/// 日本語テキスト 1 件の形態素解析を実行する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 解析失敗
/// - 504 Gateway Timeout: 解析がタイムアウト
pub async fn post_tokenize(
  State(state): State<AppState>,
  Json(request): Json<TokenizeRequest>,
) -> Result<Json<TokenizeResponse>> {
  debug!(text_len = request.text.len(), "形態素解析リクエストを受信");

  let service = state.service.clone();
  let response =
    run_blocking(state.config.request_timeout, move || service.tokenize(request)).await?;

  info!(token_count = response.tokens.len(), "形態素解析完了");

  Ok(Json(response))
}

/// POST /process エンドポイント
///
/// 複数の文を入力順に解析する。解析に失敗した文やタイムアウトした文は
/// 縮退表現で返し、バッチ全体は常に `success: true` となる。
///
/// # Request Body
/// ```json
/// { "sentences": [{ "id": 1, "raw": "今日は" }] }
/// ```
///
/// # Response
/// - 200 OK: 解析完了
/// - 400 Bad Request: 文リストが空
pub async fn post_process(
  State(state): State<AppState>,
  Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>> {
  debug!(sentence_count = request.sentences.len(), "バッチ解析リクエストを受信");

  request.validate()?;

  // 制限時間は文ごとに適用する
  let mut outcomes = Vec::with_capacity(request.sentences.len());
  for sentence in request.sentences {
    outcomes.push(process_sentence(&state, sentence).await);
  }
  let output = BatchOutput::from_outcomes(outcomes);

  info!(sentence_count = output.sentences.len(), "バッチ解析完了");

  Ok(Json(ProcessResponse::new(output.sentences)))
}

/// 文 1 件を制限時間付きで解析する
///
/// タイムアウトやブロッキングタスクの失敗は、その文だけの縮退表現になる。
async fn process_sentence(state: &AppState, sentence: Sentence) -> SentenceOutcome {
  let service = state.service.clone();
  let input = sentence.clone();

  match run_blocking(state.config.request_timeout, move || Ok(service.process_sentence(&input)))
    .await
  {
    Ok(outcome) => outcome,
    Err(err) => {
      let failure =
        AnalysisFailure::new(sentence.raw.clone(), &AnalyzerError::other(err.to_string()));
      SentenceOutcome::degraded(&sentence, failure)
    }
  }
}

/// CPUバウンドな処理を spawn_blocking で実行し、タイムアウトで打ち切る
///
/// タイムアウト時もブロッキングタスク自体はキャンセルされず、結果は破棄される。
async fn run_blocking<T, F>(timeout: Duration, f: F) -> Result<T>
where
  F: FnOnce() -> Result<T> + Send + 'static,
  T: Send + 'static,
{
  match tokio::time::timeout(timeout, tokio::task::spawn_blocking(f)).await {
    Ok(joined) => joined.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })?,
    Err(_) => {
      warn!(timeout = ?timeout, "形態素解析がタイムアウトしました");
      Err(ApiError::timeout(timeout))
    }
  }
}
