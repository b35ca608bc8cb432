//! プロセス内で使う簡易ランナー
//!
//! 各シナリオを指定回数実行し、1回あたりの平均・最小・最大時間を記録する。
//! 信頼区間やウォームアップは扱わない（詳細な計測は criterion 側で行う）。

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::{BenchmarkRunner, SuiteError, SuiteResult};

/// シナリオ1件分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub samples: usize,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl ScenarioReport {
    pub fn from_samples(name: impl Into<String>, timings: &[Duration]) -> Self {
        let total: Duration = timings.iter().sum();
        let mean = if timings.is_empty() {
            Duration::ZERO
        } else {
            total / timings.len() as u32
        };

        Self {
            name: name.into(),
            samples: timings.len(),
            mean,
            min: timings.iter().min().copied().unwrap_or_default(),
            max: timings.iter().max().copied().unwrap_or_default(),
        }
    }
}

/// JSONレポートの全体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub timestamp: String,
    pub results: Vec<ScenarioReport>,
}

type PendingBody<'a> = (String, Box<dyn FnMut() + 'a>);

/// `Instant` ベースの逐次ランナー
pub struct StopwatchRunner<'a> {
    samples: usize,
    pending: Vec<PendingBody<'a>>,
    results: Vec<ScenarioReport>,
}

impl<'a> StopwatchRunner<'a> {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            pending: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn results(&self) -> &[ScenarioReport] {
        &self.results
    }

    /// 平均時間が最も短いシナリオ
    pub fn fastest(&self) -> Option<&ScenarioReport> {
        self.results.iter().min_by_key(|r| r.mean)
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 多態アクセスコスト比較サマリー");
        println!("{}", "=".repeat(72));

        for report in &self.results {
            println!(
                "{:<36} mean {:>12?}  min {:>12?}  max {:>12?}",
                report.name, report.mean, report.min, report.max
            );
        }

        if let Some(best) = self.fastest() {
            println!();
            println!("🏆 Fastest: {} ({:?})", best.name, best.mean);
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> SuiteResult<()> {
        let report = SuiteReport {
            timestamp: Utc::now().to_rfc3339(),
            results: self.results.clone(),
        };

        let json = serde_json::to_string_pretty(&report).map_err(SuiteError::report)?;
        std::fs::write(path, json).map_err(|e| SuiteError::io(path.display().to_string(), e))?;

        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}

impl<'a> BenchmarkRunner<'a> for StopwatchRunner<'a> {
    fn register(&mut self, name: &str, body: Box<dyn FnMut() + 'a>) {
        self.pending.push((name.to_string(), body));
    }

    fn run_all(&mut self) -> SuiteResult<()> {
        for (name, mut body) in std::mem::take(&mut self.pending) {
            let mut timings = Vec::with_capacity(self.samples);
            for _ in 0..self.samples {
                let start = Instant::now();
                body();
                timings.push(start.elapsed());
            }

            let report = ScenarioReport::from_samples(name, &timings);
            debug!(scenario = %report.name, mean = ?report.mean, "scenario finished");
            self.results.push(report);
        }
        Ok(())
    }
}
