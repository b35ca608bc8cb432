// 型消去を伴わない（または dyn Any のみを伴う）シナリオ

use crate::core::{Escape, PolymorphicValue, SharedCell, ValueCell};
use crate::guards::opaque;
use crate::slots::AnySlot;

use super::ScenarioContext;

/// ループと算術のみの下限コスト
///
/// 各反復で `opaque` を通さないと、ループ全体が `n * 43` に畳み込まれる。
pub fn baseline_primitive_arithmetic(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let base = 42_i64;
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(opaque(base).wrapping_add(1));
    }
    sink.observe(sum);
}

/// プリミティブを `dyn Any` に入れ、毎反復で取り出す
pub fn any_primitive_unbox(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let slot = AnySlot::new(opaque(42_i64));
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(*opaque(&slot).force::<i64>());
    }
    sink.observe(sum);
}

/// 具象型のままの参照型フィールドアクセス
pub fn reference_direct_field(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let cell = SharedCell::new(opaque(42));
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(opaque(&cell).field);
    }
    sink.observe(sum);
}

/// 参照型を `dyn Any` に入れ、毎反復で強制ダウンキャストする
pub fn reference_any_downcast(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let slot = AnySlot::new(SharedCell::new(opaque(42)));
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(opaque(&slot).force::<SharedCell>().field);
    }
    sink.observe(sum);
}

// 呼び出し側からは具象型が見えないが、単相化により静的に解決される
fn make_static_value() -> impl PolymorphicValue {
    ValueCell::new(opaque(42))
}

/// `impl Trait` 越しの能力アクセス（型消去コストはゼロのはず）
pub fn opaque_static_field(ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
    let value = make_static_value();
    let mut sum = 0_i64;
    for _ in 0..ctx.inner_loop() {
        sum = sum.wrapping_add(opaque(&value).value());
    }
    sink.observe(sum);
}
