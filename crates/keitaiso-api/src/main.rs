//! keitaiso-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use keitaiso_api::ApiError;
use keitaiso_api::api::AppState;
use keitaiso_api::api::run_server;
use keitaiso_api::config::Config;
use keitaiso_api::service::KeitaisoApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  // RUST_LOG が未設定なら info、keitaiso 系クレートは debug
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,keitaiso=debug,keitaiso_api=debug"));
  tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    preset = %config.analyzer.dictionary.preset,
    service = %config.service.name,
    version = %config.service.version,
    "設定を読み込みました"
  );

  // サービスの初期化（辞書のロードは起動時に 1 回だけ）
  // 初回はプリセット辞書のダウンロードが発生するためブロッキングスレッドで実行する
  let service_config = config.clone();
  let service = tokio::task::spawn_blocking(move || KeitaisoApiServiceFull::new(&service_config))
    .await
    .map_err(|e| ApiError::internal(format!("サービスの初期化に失敗しました: {}", e)))??;
  tracing::info!("形態素解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, Arc::new(service));

  // サーバー起動
  run_server(state).await
}
