//! models モジュール
pub mod model_definition;

/// 再エクスポート
pub use model_definition::{ProcessedSentence, ProcessedText, Sentence, Token, UNKNOWN_POS};
