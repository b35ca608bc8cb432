use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::metadata::LevelFilter;
use tracing::Level;

use crate::config::{SuiteConfig, DEFAULT_POOL_LEN, DEFAULT_SAMPLES};
use crate::guards::INNER_LOOP;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Parser, Debug)]
#[command(name = "dispatch_bench")]
#[command(about = "Measures the cost of polymorphic field access and method calls")]
#[command(version)]
pub struct Cli {
    /// Iterations of the anchored loop inside every scenario
    #[arg(long, default_value_t = INNER_LOOP)]
    pub inner_loop: usize,

    /// Length of the shared heterogeneous pool
    #[arg(long, default_value_t = DEFAULT_POOL_LEN)]
    pub pool_len: usize,

    /// Timed executions per scenario
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Only run scenarios whose name contains this string
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Write a JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Print scenario names in registration order and exit
    #[arg(long)]
    pub list: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn suite_config(&self) -> SuiteConfig {
        SuiteConfig::new()
            .with_inner_loop(self.inner_loop)
            .with_pool_len(self.pool_len)
            .with_samples(self.samples)
            .with_filter(self.filter.clone())
    }
}
