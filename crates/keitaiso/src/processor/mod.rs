//! processor モジュール
pub mod batch;
pub mod report;
pub mod text_processor;

/// 再エクスポート
pub use batch::{BatchOutput, BatchProcessor, SentenceOutcome};
pub use report::BatchReport;
pub use text_processor::{TextProcessor, first_tag_or};
