//! 最適化による測定対象の消失を防ぐガード
//!
//! - `escape`: 累積値を外部から観測可能なものとして扱わせ、ループごと
//!   デッドコード除去されるのを防ぐ
//! - `INNER_LOOP`: ループ制御のオーバーヘッドを償却できる固定反復回数
//! - `opaque`: 値の由来をコンパイラから隠し、静的な特殊化を防ぐ
//!
//! どちらのガードも `std::hint::black_box` に依存している。これは rustc/LLVM
//! に対して最善努力の保証しか与えないため、生成命令の確認や実行時の入力変化
//! で各シナリオが意図した操作を測定しているかを確かめること。

use std::hint::black_box;

use crate::core::Escape;

/// アンカーループの反復回数
pub const INNER_LOOP: usize = 1_000_000;

/// 値を観測済みとしてオプティマイザに扱わせる
#[inline]
pub fn escape(value: i64) {
    black_box(value);
}

/// コンパイル時には未知の値として扱わせる
#[inline]
pub fn opaque<T>(value: T) -> T {
    black_box(value)
}

/// 本番用のエスケープシンク
#[derive(Debug, Default, Clone, Copy)]
pub struct BlackHole;

impl Escape for BlackHole {
    #[inline]
    fn observe(&mut self, value: i64) {
        escape(value);
    }
}
