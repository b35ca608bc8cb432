//! 多態性の実現方式ごとに、整数フィールド1つの読み出しとメソッド1つの呼び出しの
//! コストを比較するマイクロベンチマークスイート。
//!
//! 直接アクセス、`impl Trait`（静的解決）、`dyn Any`、`dyn PolymorphicValue`、
//! ヒープ上の参照型を比較する。時間計測そのものは外部ランナーに委ねる。

pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod guards;
pub mod holder;
pub mod scenarios;
pub mod slots;

use tracing::info;

use crate::config::SuiteConfig;
use crate::core::SuiteResult;
use crate::generator::SharedPool;

/// 起動処理: 設定を検証し、共有プールを一度だけ構築する
///
/// 返されたプールはシナリオ登録より前に存在し、プロセス終了まで変更されない。
pub fn initialize(config: &SuiteConfig) -> SuiteResult<SharedPool> {
    config.validate()?;
    let pool = SharedPool::initialize(config.pool_len())?;
    info!(
        inner_loop = config.inner_loop(),
        pool_len = pool.len(),
        "benchmark suite initialized"
    );
    Ok(pool)
}
