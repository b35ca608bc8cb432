// ベンチマークスイートの境界となるトレイト定義

use mockall::automock;

use super::error::SuiteResult;
use super::types::ValueKind;

/// 多態値の能力セット
///
/// `value` はデータの読み出し、`get_value` は振る舞いの呼び出しを表す。
/// 同一インスタンスに対して両者は必ず同じ整数を返す。
/// 実装側は `#[inline(never)]` を付けること。インライン展開されて定数畳み込み
/// されると、そのシナリオは何も測定しなくなる。
#[automock]
pub trait PolymorphicValue {
    /// 保持している整数を読み出す
    fn value(&self) -> i64;

    /// 保持している整数を返すメソッド呼び出し
    fn get_value(&self) -> i64;

    /// 具象種別
    fn kind(&self) -> ValueKind;
}

/// シナリオ末尾で累積値を外部から観測可能にするシンク
pub trait Escape {
    fn observe(&mut self, value: i64);
}

/// 外部ベンチマークランナーへの登録インターフェース
///
/// シナリオは起動時にソース順で一度ずつ登録され、その後 `run_all` で
/// ランナーに制御が渡る。計測方法・出力形式はランナー側の責務。
pub trait BenchmarkRunner<'a> {
    /// 名前付きの本体を登録する
    fn register(&mut self, name: &str, body: Box<dyn FnMut() + 'a>);

    /// 登録済みの全シナリオを実行する
    fn run_all(&mut self) -> SuiteResult<()>;
}
