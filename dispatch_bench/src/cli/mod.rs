// CLI層 - コマンドライン引数の定義
// 引数はそのまま SuiteConfig に写像される

pub mod args;

// 公開API
pub use args::*;
