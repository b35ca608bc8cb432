//! パフォーマンス測定モジュール
//!
//! バイナリから使う簡易ランナーを提供。統計的な計測は `benches/` の criterion で行う。

pub mod stopwatch;

pub use stopwatch::{ScenarioReport, StopwatchRunner, SuiteReport};
