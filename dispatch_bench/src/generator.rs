//! 異種の多態値を生成するジェネレータと、プロセス共有の異種配列

use tracing::debug;

use crate::core::{
    PolymorphicValue, SharedCell, SuiteResult, ValidationError, ValueCell, ValueKind,
    DEFAULT_FIELD,
};
use crate::guards::opaque;
use crate::slots::ErasedSlot;

/// シードから多態値を決定的に生成する
///
/// `seed mod 3` で種別を選ぶ: 0 → プリミティブ(42)、1 → 値型、2 → 参照型。
/// 負のシードも `rem_euclid` により同じ規則で扱う。
/// ヒープ確保が発生するのは参照型を選んだときだけ。
pub fn generate(seed: i64) -> ErasedSlot {
    match seed.rem_euclid(3) {
        0 => ErasedSlot::from(DEFAULT_FIELD),
        1 => ErasedSlot::from(ValueCell::default()),
        _ => ErasedSlot::from(SharedCell::default()),
    }
}

/// シードから選ばれる種別（値を生成せずに判定する）
pub fn kind_for_seed(seed: i64) -> ValueKind {
    match seed.rem_euclid(3) {
        0 => ValueKind::Primitive,
        1 => ValueKind::ValueType,
        _ => ValueKind::ReferenceType,
    }
}

/// 起動時に一度だけ構築される読み取り専用の異種配列
///
/// 全シナリオの登録前に構築し、以降は変更しない。変更用のAPIは持たない。
/// 空の配列は作れないため、折り返し添字の読み出しは常に成功する。
#[derive(Debug)]
pub struct SharedPool {
    slots: Vec<ErasedSlot>,
}

impl SharedPool {
    /// `len` 個の値を生成して配列を構築する（`len` は1以上）
    pub fn initialize(len: usize) -> SuiteResult<Self> {
        if len == 0 {
            return Err(ValidationError::new("pool_len", "1以上である必要があります").into());
        }

        let slots: Vec<ErasedSlot> = (0..len).map(|i| generate(opaque(i as i64))).collect();
        debug!(len, "shared heterogeneous pool initialized");
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 構築時に空を拒否しているため常に `false`
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 添字を配列長で折り返して読み出す
    #[inline]
    pub fn get(&self, index: usize) -> &ErasedSlot {
        &self.slots[index % self.slots.len()]
    }

    pub fn kinds(&self) -> impl Iterator<Item = ValueKind> + '_ {
        self.slots.iter().map(|slot| slot.kind())
    }
}
