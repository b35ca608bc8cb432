// コアレイヤー - 能力セット、具象表現、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ErrorSeverity, SuiteError, SuiteResult, ValidationError, ValidationResult};
pub use traits::{BenchmarkRunner, Escape, MockPolymorphicValue, PolymorphicValue};
pub use types::{HeapField, SharedCell, ValueCell, ValueKind, DEFAULT_FIELD};
