// 多態値の具象表現
// プリミティブ・値型・参照型の3種類のみを扱う（拡張は想定しない）

use std::ops::Deref;
use std::rc::Rc;

use super::traits::PolymorphicValue;

/// 値型・参照型が既定で保持する値
pub const DEFAULT_FIELD: i64 = 42;

/// 多態値の具象種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// インラインのプリミティブ整数
    Primitive,
    /// コピーセマンティクスの小さな集約
    ValueType,
    /// ヒープ上の参照型オブジェクト
    ReferenceType,
}

impl ValueKind {
    /// 種別の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::ValueType => "value_type",
            Self::ReferenceType => "reference_type",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PolymorphicValue for i64 {
    #[inline(never)]
    fn value(&self) -> i64 {
        *self
    }

    #[inline(never)]
    fn get_value(&self) -> i64 {
        *self
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Primitive
    }
}

/// 値型バリアント - スタック上に置かれ、コピーで受け渡される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCell {
    pub field: i64,
}

impl ValueCell {
    pub const fn new(field: i64) -> Self {
        Self { field }
    }
}

impl Default for ValueCell {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD)
    }
}

impl PolymorphicValue for ValueCell {
    #[inline(never)]
    fn value(&self) -> i64 {
        self.field
    }

    #[inline(never)]
    fn get_value(&self) -> i64 {
        self.field
    }

    fn kind(&self) -> ValueKind {
        ValueKind::ValueType
    }
}

/// 参照型バリアントの実体（ヒープに確保される）
#[derive(Debug)]
pub struct HeapField {
    pub field: i64,
}

/// 参照型バリアント
///
/// `Rc`で共有されるため、クローンは同一のオブジェクトを指す。
/// 値型との違いは確保とポインタ追跡のコストにある。
#[derive(Debug, Clone)]
pub struct SharedCell {
    inner: Rc<HeapField>,
}

impl SharedCell {
    pub fn new(field: i64) -> Self {
        Self {
            inner: Rc::new(HeapField { field }),
        }
    }

    /// 2つのハンドルが同一のヒープオブジェクトを指しているか
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedCell {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD)
    }
}

// 具象型のままフィールドへ直接アクセスするための間接参照
impl Deref for SharedCell {
    type Target = HeapField;

    fn deref(&self) -> &HeapField {
        &self.inner
    }
}

impl PolymorphicValue for SharedCell {
    #[inline(never)]
    fn value(&self) -> i64 {
        self.inner.field
    }

    #[inline(never)]
    fn get_value(&self) -> i64 {
        self.inner.field
    }

    fn kind(&self) -> ValueKind {
        ValueKind::ReferenceType
    }
}
