// dyn PolymorphicValue 越しのアクセス
//
// *_misleading は対比のために残している。スロットに入る具象型がコンパイラから
// 見えているため、脱仮想化されて直接呼び出しと同じ速度になりうる。
// 実際の動的ディスパッチのコストは *_unknown 側で測る。

use crate::core::{Escape, PolymorphicValue};
use crate::generator::generate;
use crate::guards::opaque;
use crate::slots::ErasedSlot;

use super::ScenarioContext;

/// 型消去スロット越しのフィールド読み出し（MISLEADING）
pub fn erased_field_misleading(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let slot = ErasedSlot::from(42_i64);
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(slot.value());
    }
    sink.observe(sum);
}

/// 型消去スロット越しのフィールド読み出し（初回使用後に再代入）
pub fn erased_field_unknown(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let mut slot = ErasedSlot::from(42_i64);
    let mut sum = slot.value();
    slot = generate(opaque(1));
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(slot.value());
    }
    sink.observe(sum);
}

/// 型消去スロット越しのメソッド呼び出し（MISLEADING）
pub fn erased_method_misleading(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let slot = ErasedSlot::from(42_i64);
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(slot.get_value());
    }
    sink.observe(sum);
}

/// ジェネレータ由来の値に対するメソッド呼び出し
pub fn erased_method_unknown(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let slot = generate(opaque(2));
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(slot.get_value());
    }
    sink.observe(sum);
}
