// テスト用のシンクとランナー
// mockallの自動生成モック(MockPolymorphicValue)はライブラリ側から再エクスポート

use dispatch_bench::core::{BenchmarkRunner, Escape, SuiteResult};

pub use dispatch_bench::core::MockPolymorphicValue;

/// 観測された値をすべて記録するエスケープシンク
#[derive(Debug, Default)]
pub struct RecordingEscape {
    pub observed: Vec<i64>,
}

impl RecordingEscape {
    pub fn new() -> Self {
        Self::default()
    }

    /// 唯一の観測値（ちょうど一度でなければ失敗）
    pub fn single(&self) -> i64 {
        assert_eq!(self.observed.len(), 1, "エスケープは一度だけ呼ばれるべきです");
        self.observed[0]
    }
}

impl Escape for RecordingEscape {
    fn observe(&mut self, value: i64) {
        self.observed.push(value);
    }
}

/// 登録名を記録し、run_allで各本体を一度ずつ実行するランナー
#[derive(Default)]
pub struct RecordingRunner<'a> {
    pub registered: Vec<String>,
    bodies: Vec<Box<dyn FnMut() + 'a>>,
    pub executed: usize,
}

impl<'a> RecordingRunner<'a> {
    pub fn new() -> Self {
        Self {
            registered: Vec::new(),
            bodies: Vec::new(),
            executed: 0,
        }
    }
}

impl<'a> BenchmarkRunner<'a> for RecordingRunner<'a> {
    fn register(&mut self, name: &str, body: Box<dyn FnMut() + 'a>) {
        self.registered.push(name.to_string());
        self.bodies.push(body);
    }

    fn run_all(&mut self) -> SuiteResult<()> {
        for body in self.bodies.iter_mut() {
            body();
            self.executed += 1;
        }
        Ok(())
    }
}
