// 2種類の型消去コンテナ
//
// AnySlot   : 能力を何も持たない形に消去する（dyn Any）
// ErasedSlot: 能力セットは既知、具象型は未知の形に消去する（dyn PolymorphicValue）
//
// コストの性質が異なるため、両者を一つにまとめてはいけない。

use std::any::{type_name, Any};

use crate::core::{PolymorphicValue, SharedCell, SuiteError, SuiteResult, ValueCell, ValueKind};

/// 汎用「任意型」コンテナ
pub struct AnySlot {
    inner: Box<dyn Any>,
    type_name: &'static str,
}

impl AnySlot {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// 格納時の型名
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 具象型を復元する
    pub fn recover<T: Any>(&self) -> SuiteResult<&T> {
        self.inner
            .downcast_ref::<T>()
            .ok_or_else(|| SuiteError::downcast(type_name::<T>(), self.type_name))
    }

    /// 具象型を強制的に復元する
    ///
    /// シナリオは格納した型と同じ型でのみ復元するため、失敗はシナリオ構築の
    /// バグを意味する。回復は試みず即座に停止する。
    #[inline]
    pub fn force<T: Any>(&self) -> &T {
        match self.recover::<T>() {
            Ok(value) => value,
            Err(e) => panic!("不変条件違反: {e}"),
        }
    }
}

impl std::fmt::Debug for AnySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnySlot")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// 能力セット付きの型消去コンテナ
///
/// 既知の3バリアントはインラインに保持し、プリミティブと値型は確保を伴わない。
/// 参照型は自身の `Rc` 分の確保のみ。呼び出しは常に `as_dyn` の
/// `&dyn PolymorphicValue` を経由する。`Boxed` は意図的にヒープで消去する
/// 場合（テストダブルの注入など）にのみ使う。
/// 構築に成功すれば必ずいずれか一つの値を保持しており、読み出しと呼び出しは失敗しない。
pub enum ErasedSlot {
    Primitive(i64),
    Value(ValueCell),
    Reference(SharedCell),
    Boxed(Box<dyn PolymorphicValue>),
}

impl ErasedSlot {
    /// 任意の実装をヒープ上に確保して消去する
    pub fn boxed<V: PolymorphicValue + 'static>(value: V) -> Self {
        Self::Boxed(Box::new(value))
    }

    #[inline]
    pub fn as_dyn(&self) -> &dyn PolymorphicValue {
        match self {
            Self::Primitive(value) => value,
            Self::Value(value) => value,
            Self::Reference(value) => value,
            Self::Boxed(value) => value.as_ref(),
        }
    }
}

impl From<i64> for ErasedSlot {
    fn from(value: i64) -> Self {
        Self::Primitive(value)
    }
}

impl From<ValueCell> for ErasedSlot {
    fn from(value: ValueCell) -> Self {
        Self::Value(value)
    }
}

impl From<SharedCell> for ErasedSlot {
    fn from(value: SharedCell) -> Self {
        Self::Reference(value)
    }
}

impl PolymorphicValue for ErasedSlot {
    #[inline]
    fn value(&self) -> i64 {
        self.as_dyn().value()
    }

    #[inline]
    fn get_value(&self) -> i64 {
        self.as_dyn().get_value()
    }

    fn kind(&self) -> ValueKind {
        self.as_dyn().kind()
    }
}

impl std::fmt::Debug for ErasedSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedSlot")
            .field("kind", &self.kind())
            .field("boxed", &matches!(self, Self::Boxed(_)))
            .finish()
    }
}
