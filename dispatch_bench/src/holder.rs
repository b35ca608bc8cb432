// 多態な依存を保持するコンポーネントのシミュレーション
// 依存はコンストラクタで一度だけ注入され、以後は変更されない

use crate::core::PolymorphicValue;
use crate::slots::ErasedSlot;

/// 型消去された依存を一つだけ所有するホルダー
#[derive(Debug)]
pub struct DependencyHolder {
    dependency: ErasedSlot,
}

impl DependencyHolder {
    /// 新しいホルダーを作成（コンストラクタインジェクション）
    pub fn new(dependency: ErasedSlot) -> Self {
        Self { dependency }
    }

    pub fn dependency(&self) -> &ErasedSlot {
        &self.dependency
    }

    /// 依存のメソッドを `iterations` 回呼び出し、ラップアラウンド加算した合計を返す
    #[inline(never)]
    pub fn run(&self, iterations: usize) -> i64 {
        let mut sum = 0_i64;
        for _ in 0..iterations {
            sum = sum.wrapping_add(self.dependency.get_value());
        }
        sum
    }
}
