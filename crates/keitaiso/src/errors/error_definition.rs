//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（AnalyzerConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// max_text_length < 1
  #[error("max_text_length は 1 以上である必要があります: actual={actual}")]
  InvalidMaxTextLength {
    /// 実際に指定された値
    actual: usize,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// dictionary.path がファイルとして存在しない
  #[error("dictionary.path に辞書ファイルが存在しません: path={path:?}")]
  DictionaryFileNotFound {
    /// 指定されたパス
    path: PathBuf,
  },
}

/// 辞書関連のエラー
/// Vibrato では mecab, ipadic, unidic 等の辞書を使用可能
/// これらのエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// 辞書の char.def に SPACE カテゴリがなく、空白を無視するトークナイザーを構築できない
  #[error("辞書に SPACE カテゴリが定義されていません: {0}")]
  SpaceCategoryMissing(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 形態素解析器（アダプター）が返すエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 入力テキストが解析器の上限を超えている
  #[error("text is too long: {actual} bytes (max: {max} bytes)")]
  TextTooLong {
    /// 入力のバイト数
    actual: usize,
    /// 許容される最大バイト数
    max: usize,
  },

  /// 解析器内部で panic が発生した
  #[error("analyzer panicked: {message}")]
  Panicked {
    /// panic ペイロードから取り出したメッセージ
    message: String,
  },

  /// その他の解析器エラー（外部実装やスタブ用）
  #[error("{0}")]
  Other(String),
}

impl AnalyzerError {
  /// 任意のメッセージから `Other` を作成
  #[must_use]
  pub fn other(message: impl Into<String>) -> Self {
    Self::Other(message.into())
  }
}

/// テキスト 1 件の解析失敗
///
/// 元のテキストと解析器のエラーメッセージを保持する。
/// トークンの部分的な結果は持たない。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AnalysisFailure {
  /// 解析に失敗したテキスト
  pub text: String,
  /// 解析器のエラーメッセージ
  pub message: String,
}

impl AnalysisFailure {
  /// 解析器エラーから作成する
  #[must_use]
  pub fn new(text: impl Into<String>, source: &AnalyzerError) -> Self {
    Self {
      text: text.into(),
      message: source.to_string(),
    }
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `KeitaisoResult<T>` = `Result<T, KeitaisoError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KeitaisoError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 解析器関連エラー
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// keitaiso クレートの標準 Result 型エイリアス
pub type KeitaisoResult<T> = Result<T, KeitaisoError>;
