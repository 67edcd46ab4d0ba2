//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// Axum のデフォルトのリクエストボディ上限（2MB）より小さい値とし、
/// 長すぎるテキストは解析前に 400 で拒否する。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// デフォルトの辞書プリセット名
///
/// UniDic (CWJ) をデフォルトとして使用。
/// 現代日本語書き言葉コーパスに基づくフルサイズの辞書。
pub const DEFAULT_PRESET_DICT: &str = "unidic-cwj";

/// ヘルスチェックで返すサービス名
pub const DEFAULT_SERVICE_NAME: &str = "sudachipy-api";

/// ヘルスチェックで返すバージョン
pub const DEFAULT_SERVICE_VERSION: &str = "1.0.0";

/// `GET /` で返すサービスのタイトル
pub const DEFAULT_SERVICE_TITLE: &str = "SudachiPy API";

/// 解析処理のタイムアウト（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
