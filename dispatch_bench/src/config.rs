// スイート実行設定

use crate::core::{ValidationError, ValidationResult};
use crate::guards::INNER_LOOP;

/// 共有プールの既定の長さ
pub const DEFAULT_POOL_LEN: usize = 1_024;

/// シナリオごとの既定の計測回数
pub const DEFAULT_SAMPLES: usize = 10;

/// スイート実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    inner_loop: usize,
    pool_len: usize,
    samples: usize,
    filter: Option<String>,
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self {
            inner_loop: INNER_LOOP,
            pool_len: DEFAULT_POOL_LEN,
            samples: DEFAULT_SAMPLES,
            filter: None,
        }
    }

    pub fn with_inner_loop(mut self, inner_loop: usize) -> Self {
        self.inner_loop = inner_loop;
        self
    }

    pub fn with_pool_len(mut self, pool_len: usize) -> Self {
        self.pool_len = pool_len;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn inner_loop(&self) -> usize {
        self.inner_loop
    }

    pub fn pool_len(&self) -> usize {
        self.pool_len
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// 全ての回数が1以上であることを検証
    pub fn validate(&self) -> ValidationResult<()> {
        let counts = [
            ("inner_loop", self.inner_loop),
            ("pool_len", self.pool_len),
            ("samples", self.samples),
        ];

        for (field, value) in counts {
            if value == 0 {
                return Err(ValidationError::new(field, "1以上である必要があります"));
            }
        }
        Ok(())
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self::new()
    }
}
