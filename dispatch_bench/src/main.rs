use anyhow::{Context, Result};
use clap::Parser;
use tracing::metadata::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use dispatch_bench::{
    benchmarks::StopwatchRunner,
    cli::Cli,
    core::BenchmarkRunner,
    scenarios::{ScenarioContext, ScenarioRegistry},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(cli.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("ロガーの初期化に失敗しました")?;

    let registry = ScenarioRegistry::standard();
    if cli.list {
        for scenario in registry.scenarios() {
            let marker = if scenario.is_misleading() { " (MISLEADING)" } else { "" };
            println!("{}{marker}\t{}", scenario.name(), scenario.measures());
        }
        return Ok(());
    }

    // 1. 共有プールの構築（シナリオ登録より前に一度だけ）
    let config = cli.suite_config();
    let pool = dispatch_bench::initialize(&config)?;
    let ctx = ScenarioContext::new(&pool, config.inner_loop());

    // 2. ソース順でシナリオを登録し、ランナーに制御を渡す
    let mut runner = StopwatchRunner::new(config.samples());
    registry.register_with(&mut runner, &ctx, config.filter())?;

    println!("🚀 多態アクセスコスト計測 ({} iterations/scenario)", config.inner_loop());
    runner.run_all()?;
    runner.print_summary();

    // 3. レポート出力
    if let Some(path) = &cli.json {
        if let Err(e) = runner.export_json_report(path) {
            eprintln!("⚠️  レポート出力エラー: {e}");
        }
    }

    Ok(())
}
