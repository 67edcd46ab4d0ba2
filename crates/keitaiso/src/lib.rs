//! keitaiso 形態素解析ライブラリー
//!
//! vibrato-rkyv を用いた日本語の形態素解析結果を、トークン列と正規化テキストに整形する

/// 解析器モジュール - Morpheme, MorphologicalAnalyzer と vibrato-rkyv 実装を提供
pub mod analyzer;

/// 設定モジュール - AnalyzerConfig, DictionaryPreset 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - KeitaisoError, AnalysisFailure 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Token, Sentence, ProcessedSentence 等のデータ構造を定義
pub mod models;

/// 処理モジュール - 単一テキストとバッチの処理を提供
pub mod processor;

/// 再エクスポート
pub use analyzer::{Morpheme, MorphologicalAnalyzer, VibratoAnalyzer};
pub use config::{AnalyzerConfig, DictionaryPreset};
pub use errors::{AnalysisFailure, KeitaisoError, KeitaisoResult};
pub use processor::{BatchProcessor, TextProcessor};
