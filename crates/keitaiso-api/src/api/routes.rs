//! ルーター定義

use axum::{
  Router,
  http::HeaderValue,
  routing::{get, post},
};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{get_root, health_check, post_process, post_tokenize};
use super::state::AppState;
use crate::config::CorsOrigins;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let cors = cors_layer(&state.config.cors);

  Router::new()
    .route("/", get(get_root))
    .route("/health", get(health_check))
    .route("/tokenize", post(post_tokenize))
    .route("/process", post(post_process))
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
    .with_state(state)
}

/// CORS 設定から CorsLayer を作成する
///
/// ワイルドカードの場合は全オリジン・全メソッド・全ヘッダーを許可する。
/// ヘッダー値として不正なオリジンは警告を出して無視する。
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
  let allow_origin = match origins {
    CorsOrigins::Any => AllowOrigin::from(Any),
    CorsOrigins::List(list) => {
      let values: Vec<HeaderValue> = list
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
          Ok(value) => Some(value),
          Err(_) => {
            warn!(origin = %origin, "不正な CORS オリジンを無視します");
            None
          }
        })
        .collect();
      AllowOrigin::list(values)
    }
  };

  CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

/// サーバーを起動する
///
/// SIGINT / SIGTERM を受けるとグレースフルシャットダウンする。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  info!("サーバーを停止しました");
  Ok(())
}

/// SIGTERM または SIGINT (Ctrl+C) を待つ
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      warn!("Ctrl+C ハンドラーの登録に失敗しました: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        warn!("SIGTERM ハンドラーの登録に失敗しました: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  info!("シャットダウンシグナルを受信しました");
}
