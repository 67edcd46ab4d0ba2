//! analyzer モジュール
pub mod feature;
pub mod morpheme;
pub mod vibrato_analyzer;

/// 再エクスポート
pub use feature::FeatureLayout;
pub use morpheme::{Morpheme, MorphologicalAnalyzer};
pub use vibrato_analyzer::VibratoAnalyzer;
