// 実データに近い条件でのシナリオ
// 異種コレクションの走査、毎回の生成、依存ホルダー、分割ループ

use crate::core::{Escape, PolymorphicValue, SharedCell, ValueCell};
use crate::generator::generate;
use crate::guards::opaque;
use crate::holder::DependencyHolder;
use crate::slots::ErasedSlot;

use super::ScenarioContext;

/// 小さなリテラルの異種コレクションを走査する
///
/// 呼び出し回数が `inner_loop` を超えないよう、外側のループは要素数で割る。
pub fn heterogeneous_literal_iteration(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let items = [
        ErasedSlot::from(42_i64),
        ErasedSlot::from(ValueCell::default()),
        ErasedSlot::from(SharedCell::default()),
    ];
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() / items.len() {
        for item in opaque(&items) {
            sum = sum.wrapping_add(item.get_value());
        }
    }
    sink.observe(sum);
}

/// 共有プールを折り返し添字で読み出す（反復ごとの確保なし）
pub fn heterogeneous_shared_pool(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let pool = ctx.pool();
    let mut sum = 0_i64;
    for i in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(pool.get(i).get_value());
    }
    sink.observe(sum);
}

/// 反復ごとにジェネレータで新しい値を作り、メソッドを呼ぶ
///
/// 参照型が選ばれた反復ではヒープ確保のコストも含まれる。
pub fn heterogeneous_fresh_generated(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let mut sum = 0_i64;
    for i in 0..ctx.inner_loop() {
        let value = generate(opaque(i as i64));
        sum = sum.wrapping_add(value.get_value());
    }
    sink.observe(sum);
}

/// 実行時まで未知の依存を一度だけ注入したホルダー経由の反復呼び出し
pub fn holder_dependency_run(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let holder = DependencyHolder::new(generate(opaque(2)));
    sink.observe(holder.run(ctx.inner_loop()));
}

/// 型消去値と直接のプリミティブを同じ計測窓の中で交互に読む
///
/// 実行ごとの計時環境のばらつきを両者が同じだけ受けるようにする。
/// エスケープするのは両者の合計のみ。型消去側の上乗せ分は、同じ実行の
/// `baseline/primitive_arithmetic` との差分から読む。
pub fn split_erased_vs_direct(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let erased = generate(opaque(0));
    let direct = 42_i64;
    let mut erased_sum = 0_i64;
    let mut direct_sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        erased_sum = erased_sum.wrapping_add(erased.get_value());
        direct_sum = direct_sum.wrapping_add(opaque(direct));
    }
    sink.observe(erased_sum.wrapping_add(direct_sum));
}
