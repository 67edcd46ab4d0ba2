//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブ解析器を使用するため、辞書ロード不要で軽量かつ高速なテスト。

use std::sync::Arc;
use std::time::Duration;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use keitaiso::analyzer::{Morpheme, MorphologicalAnalyzer};
use keitaiso::errors::AnalyzerError;
use keitaiso_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  service::{KeitaisoApiService, KeitaisoApiServiceFull},
};

/// 統合テスト用の軽量スタブ解析器
///
/// - 文字単位に分割し、base は表層形そのもの
/// - 「今」は品詞なし（不明）になる
/// - "X" を含むテキスト: エラー
/// - "SLOW" を含むテキスト: 200ms ブロックする
struct StubAnalyzer;

impl MorphologicalAnalyzer for StubAnalyzer {
  fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
    if text.contains('X') {
      return Err(AnalyzerError::other("stub analyzer rejected input"));
    }
    if text.contains("SLOW") {
      std::thread::sleep(Duration::from_millis(200));
    }

    Ok(
      text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Morpheme {
          surface: c.to_string(),
          normalized_form: c.to_string(),
          part_of_speech: if c == '今' {
            Vec::new()
          } else {
            vec!["名詞".to_string(), "一般".to_string()]
          },
          reading_form: (c == '日').then(|| "ヒ".to_string()),
        })
        .collect(),
    )
  }
}

fn app_with(config: Config) -> Router {
  let service: Arc<dyn KeitaisoApiService> = Arc::new(KeitaisoApiServiceFull::with_analyzer(
    Arc::new(StubAnalyzer),
    config.expose_error_details,
  ));
  create_router(AppState::new(config, service))
}

/// テスト用の Router を構築する
fn test_app() -> Router {
  app_with(Config {
    bind_addr: "127.0.0.1:0".to_string(),
    ..Config::default()
  })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
  let response = app.oneshot(request).await.expect("request should succeed");
  let status = response.status();
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
  (status, json)
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap()
}

// ============================================================================
// メタ情報・ヘルスチェック
// ============================================================================

#[tokio::test]
async fn health_check_returns_identity() {
  let (status, json) = send(test_app(), get("/health")).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    json,
    serde_json::json!({ "status": "healthy", "service": "sudachipy-api", "version": "1.0.0" })
  );
}

#[tokio::test]
async fn health_check_uses_configured_identity() {
  let mut config = Config::default();
  config.service.name = "morph-api".to_string();
  config.service.version = "2.3.4".to_string();

  let (_, json) = send(app_with(config), get("/health")).await;
  assert_eq!(json["service"], "morph-api");
  assert_eq!(json["version"], "2.3.4");
}

#[tokio::test]
async fn root_lists_endpoints() {
  let (status, json) = send(test_app(), get("/")).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["status"], "running");
  assert_eq!(json["message"], "SudachiPy API");
  assert!(json["endpoints"].get("/health").is_some());
  assert!(json["endpoints"].get("/tokenize").is_some());
  assert!(json["endpoints"].get("/process").is_some());
}

// ============================================================================
// POST /tokenize
// ============================================================================

#[tokio::test]
async fn tokenize_success_returns_tokens() {
  let payload = serde_json::json!({ "text": "今日は" });
  let (status, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);
  assert_eq!(json["raw"], "今日は");
  assert_eq!(json["normalized"], "今日は");
  assert_eq!(json["normalized_spaced"], "今 日 は");

  let tokens = json["tokens"].as_array().expect("tokens should be an array");
  assert_eq!(tokens.len(), 3);
  assert_eq!(tokens[0]["pos"], "不明");
  assert_eq!(tokens[1]["pos"], "名詞");
  assert_eq!(tokens[1]["reading"], "ヒ");
  assert!(tokens[2]["reading"].is_null());
}

#[tokio::test]
async fn tokenize_spaced_form_matches_normalized() {
  let payload = serde_json::json!({ "text": "東京タワー" });
  let (_, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  let normalized = json["normalized"].as_str().unwrap();
  let spaced = json["normalized_spaced"].as_str().unwrap();
  assert_eq!(spaced.replace(' ', ""), normalized);
}

#[tokio::test]
async fn tokenize_is_deterministic() {
  let payload = serde_json::json!({ "text": "東京タワー" });
  let (_, first) = send(test_app(), post_json("/tokenize", &payload)).await;
  let (_, second) = send(test_app(), post_json("/tokenize", &payload)).await;
  assert_eq!(first["tokens"], second["tokens"]);
}

#[tokio::test]
async fn tokenize_empty_text_returns_400() {
  let payload = serde_json::json!({ "text": "" });
  let (status, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["detail"], "Text cannot be empty");
  assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn tokenize_whitespace_text_returns_400() {
  let payload = serde_json::json!({ "text": "   \n" });
  let (status, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(json["detail"].as_str().unwrap().contains("cannot be empty"));
}

#[tokio::test]
async fn tokenize_analysis_failure_returns_500() {
  let payload = serde_json::json!({ "text": "X" });
  let (status, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(json["detail"], "Error processing text: stub analyzer rejected input");
  assert_eq!(json["error"]["code"], "analysis_failed");
}

#[tokio::test]
async fn tokenize_analysis_failure_hides_details_when_configured() {
  let config = Config {
    expose_error_details: false,
    ..Config::default()
  };
  let payload = serde_json::json!({ "text": "X" });
  let (status, json) = send(app_with(config), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(json["detail"], "Error processing text: internal analyzer error");
}

#[tokio::test]
async fn tokenize_timeout_returns_504() {
  let config = Config {
    request_timeout: Duration::from_millis(20),
    ..Config::default()
  };
  let payload = serde_json::json!({ "text": "SLOW" });
  let (status, json) = send(app_with(config), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
  assert_eq!(json["error"]["code"], "timeout");
  assert_eq!(json["detail"], "Text processing timed out after 20 ms");
}

#[tokio::test]
async fn tokenize_too_long_text_is_rejected() {
  // MAX_TEXT_LENGTH + 1 バイトのテキスト（Axum のボディ上限 2MB 未満）
  let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
  let payload = serde_json::json!({ "text": long_text });
  let (status, json) = send(test_app(), post_json("/tokenize", &payload)).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["error"]["code"], "text_too_long");
}

// ============================================================================
// POST /process
// ============================================================================

#[tokio::test]
async fn process_empty_list_returns_400() {
  let payload = serde_json::json!({ "sentences": [] });
  let (status, json) = send(test_app(), post_json("/process", &payload)).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["detail"], "Sentences list cannot be empty");
}

#[tokio::test]
async fn process_drops_blank_sentences() {
  let payload = serde_json::json!({
    "sentences": [{ "id": 1, "raw": "今日は" }, { "id": 2, "raw": "  " }]
  });
  let (status, json) = send(test_app(), post_json("/process", &payload)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);

  let sentences = json["sentences"].as_array().unwrap();
  assert_eq!(sentences.len(), 1);
  assert_eq!(sentences[0]["id"], 1);
  assert_eq!(sentences[0]["raw"], "今日は");
  assert_eq!(sentences[0]["normalized"], "今日は");
  assert_eq!(sentences[0]["tokens"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn process_degrades_failed_sentence() {
  let payload = serde_json::json!({
    "sentences": [
      { "id": 1, "raw": "東京" },
      { "id": 3, "raw": "X" },
      { "id": 4, "raw": "大阪" }
    ]
  });
  let (status, json) = send(test_app(), post_json("/process", &payload)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);

  let sentences = json["sentences"].as_array().unwrap();
  assert_eq!(sentences.len(), 3);
  assert_eq!(
    sentences[1],
    serde_json::json!({
      "id": 3,
      "raw": "X",
      "normalized": "X",
      "normalized_spaced": "X",
      "tokens": []
    })
  );
  assert_eq!(sentences[2]["normalized_spaced"], "大 阪");
}

#[tokio::test]
async fn process_preserves_order_and_ids() {
  let payload = serde_json::json!({
    "sentences": [
      { "id": 42, "raw": "猫" },
      { "id": 7, "raw": "" },
      { "id": -3, "raw": "X線" },
      { "id": 0, "raw": "犬" }
    ]
  });
  let (_, json) = send(test_app(), post_json("/process", &payload)).await;

  let ids: Vec<i64> =
    json["sentences"].as_array().unwrap().iter().map(|s| s["id"].as_i64().unwrap()).collect();
  assert_eq!(ids, vec![42, -3, 0]);
}

#[tokio::test]
async fn process_timeout_degrades_only_the_slow_sentence() {
  let config = Config {
    request_timeout: Duration::from_millis(50),
    ..Config::default()
  };
  let payload = serde_json::json!({
    "sentences": [
      { "id": 1, "raw": "東京" },
      { "id": 2, "raw": "SLOW" },
      { "id": 3, "raw": "大阪" }
    ]
  });
  let (status, json) = send(app_with(config), post_json("/process", &payload)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);

  let sentences = json["sentences"].as_array().unwrap();
  let ids: Vec<i64> = sentences.iter().map(|s| s["id"].as_i64().unwrap()).collect();
  assert_eq!(ids, vec![1, 2, 3]);

  assert_eq!(sentences[0]["normalized_spaced"], "東 京");
  assert_eq!(
    sentences[1],
    serde_json::json!({
      "id": 2,
      "raw": "SLOW",
      "normalized": "SLOW",
      "normalized_spaced": "SLOW",
      "tokens": []
    })
  );
  assert_eq!(sentences[2]["normalized_spaced"], "大 阪");
}

#[tokio::test]
async fn process_all_blank_returns_empty_success() {
  let payload = serde_json::json!({ "sentences": [{ "id": 1, "raw": "" }] });
  let (status, json) = send(test_app(), post_json("/process", &payload)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);
  assert!(json["sentences"].as_array().unwrap().is_empty());
}

// ============================================================================
// JSON パースエラーテスト（Axum 側）
// ============================================================================

#[tokio::test]
async fn tokenize_invalid_json_returns_client_error() {
  let request = Request::builder()
    .method("POST")
    .uri("/tokenize")
    .header("content-type", "application/json")
    .body(Body::from("{ invalid json"))
    .unwrap();
  let (status, _) = send(test_app(), request).await;

  // Axum の Json extractor が返すステータス（400 or 422 等）を許容
  assert!(status.is_client_error(), "expected 4xx, got: {}", status);
}

#[tokio::test]
async fn process_missing_field_returns_client_error() {
  let payload = serde_json::json!({ "foo": "bar" });
  let (status, _) = send(test_app(), post_json("/process", &payload)).await;

  assert!(status.is_client_error(), "expected 4xx, got: {}", status);
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
  let request = Request::builder()
    .method("GET")
    .uri("/health")
    .header("origin", "https://frontend.example")
    .body(Body::empty())
    .unwrap();
  let response = test_app().oneshot(request).await.expect("request should succeed");

  assert_eq!(
    response.headers().get("access-control-allow-origin").map(|v| v.to_str().unwrap()),
    Some("*")
  );
}
