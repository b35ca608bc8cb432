// ベンチマークスイートのエラー型定義
//
// シナリオ内部の強制ダウンキャスト失敗は不変条件違反であり、呼び出し側では
// panic として扱う。ここで定義するのはその判定結果と、プロセス境界
// （設定・レポート出力）で発生しうるエラーのみ。

use thiserror::Error;

/// スイート固有のエラー型
#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("ダウンキャストエラー: {expected} を期待しましたが {actual} が格納されています")]
    Downcast {
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("シナリオが見つかりません: {filter}")]
    UnknownScenario { filter: String },

    #[error("レポート生成エラー: {source}")]
    Report {
        #[source]
        source: serde_json::Error,
    },

    #[error("入出力エラー: {path} - {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SuiteError {
    /// ダウンキャストエラーの作成
    pub fn downcast(expected: &'static str, actual: &'static str) -> Self {
        Self::Downcast { expected, actual }
    }

    /// 該当シナリオなしエラーの作成
    pub fn unknown_scenario(filter: impl Into<String>) -> Self {
        Self::UnknownScenario {
            filter: filter.into(),
        }
    }

    /// レポート生成エラーの作成
    pub fn report(source: serde_json::Error) -> Self {
        Self::Report { source }
    }

    /// 入出力エラーの作成
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Downcast { .. } => ErrorSeverity::Critical,
            Self::Validation(_) | Self::UnknownScenario { .. } => ErrorSeverity::High,
            Self::Report { .. } | Self::Io { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 計測結果そのものは失われないため、レポート出力の失敗のみ回復可能。
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Report { .. } | Self::Io { .. })
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - シナリオ構築のバグ
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// スイートの結果型
pub type SuiteResult<T> = std::result::Result<T, SuiteError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// 新しいバリデーションエラーを作成
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
