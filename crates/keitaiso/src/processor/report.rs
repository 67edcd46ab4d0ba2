//! バッチ処理結果のレポート型定義
//!
//! 文ごとの処理結果（成功・縮退・スキップ）を集計する型を定義します。

use serde::{Deserialize, Serialize};

/// `BatchProcessor::process` の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
  /// 入力バッチの文の総数
  pub total: usize,
  /// 解析に成功した件数
  pub processed: usize,
  /// 解析に失敗し縮退表現で返した件数
  pub degraded: usize,
  /// 空文のため出力から除外した件数
  pub skipped: usize,
}

impl BatchReport {
  /// 解析成功を記録
  pub fn record_processed(&mut self) {
    self.processed += 1;
  }

  /// 縮退を記録
  pub fn record_degraded(&mut self) {
    self.degraded += 1;
  }

  /// スキップを記録
  pub fn record_skipped(&mut self) {
    self.skipped += 1;
  }

  /// 合計件数を記録
  pub fn record_total(&mut self) {
    self.total += 1;
  }
}
