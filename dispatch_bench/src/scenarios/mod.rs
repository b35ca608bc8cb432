//! シナリオレジストリ
//!
//! 各シナリオは固定の実験を一つだけ行う独立した本体で、エスケープガード以外に
//! 副作用を持たない。シナリオ間で共有されるのは読み取り専用の `SharedPool` のみ。
//! 本体は最終的な累積値を末尾で一度だけ `Escape` に渡す。

mod direct;
mod erased;
mod realistic;

use tracing::{debug, info};

use crate::core::{BenchmarkRunner, Escape, SuiteError, SuiteResult};
use crate::generator::SharedPool;
use crate::guards::BlackHole;

pub use direct::{
    any_primitive_unbox, baseline_primitive_arithmetic, opaque_static_field,
    reference_any_downcast, reference_direct_field,
};
pub use erased::{
    erased_field_misleading, erased_field_unknown, erased_method_misleading,
    erased_method_unknown,
};
pub use realistic::{
    heterogeneous_fresh_generated, heterogeneous_literal_iteration, heterogeneous_shared_pool,
    holder_dependency_run, split_erased_vs_direct,
};

/// シナリオ本体の型
pub type ScenarioFn = fn(&ScenarioContext<'_>, &mut dyn Escape);

/// シナリオ実行時に参照できる読み取り専用の環境
#[derive(Debug, Clone, Copy)]
pub struct ScenarioContext<'p> {
    pool: &'p SharedPool,
    inner_loop: usize,
}

impl<'p> ScenarioContext<'p> {
    pub fn new(pool: &'p SharedPool, inner_loop: usize) -> Self {
        Self { pool, inner_loop }
    }

    pub fn pool(&self) -> &'p SharedPool {
        self.pool
    }

    /// アンカーループの反復回数
    pub fn inner_loop(&self) -> usize {
        self.inner_loop
    }
}

/// 名前付きシナリオ
#[derive(Clone, Copy)]
pub struct Scenario {
    name: &'static str,
    measures: &'static str,
    misleading: bool,
    body: ScenarioFn,
}

impl Scenario {
    pub const fn new(name: &'static str, measures: &'static str, body: ScenarioFn) -> Self {
        Self {
            name,
            measures,
            misleading: false,
            body,
        }
    }

    /// コンパイラが具象型を証明できてしまう対比用シナリオ
    pub const fn misleading(name: &'static str, measures: &'static str, body: ScenarioFn) -> Self {
        Self {
            name,
            measures,
            misleading: true,
            body,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn measures(&self) -> &'static str {
        self.measures
    }

    pub fn is_misleading(&self) -> bool {
        self.misleading
    }

    /// 本体を一度実行する
    pub fn run(&self, ctx: &ScenarioContext<'_>, sink: &mut dyn Escape) {
        (self.body)(ctx, sink)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("misleading", &self.misleading)
            .finish()
    }
}

/// 登録順を保持するシナリオ一覧
#[derive(Debug, Clone)]
pub struct ScenarioRegistry {
    scenarios: Vec<Scenario>,
}

impl ScenarioRegistry {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// 標準のシナリオセット（ソース順）
    pub fn standard() -> Self {
        Self::new(vec![
            Scenario::new(
                "baseline/primitive_arithmetic",
                "loop + arithmetic floor cost",
                baseline_primitive_arithmetic,
            ),
            Scenario::new(
                "any/primitive_unbox",
                "dyn Any round-trip of a primitive every iteration",
                any_primitive_unbox,
            ),
            Scenario::new(
                "reference/direct_field",
                "heap indirection without type erasure",
                reference_direct_field,
            ),
            Scenario::new(
                "reference/any_downcast",
                "heap indirection + dyn Any erasure + forced downcast",
                reference_any_downcast,
            ),
            Scenario::new(
                "opaque/static_field",
                "capability access through impl Trait (static dispatch)",
                opaque_static_field,
            ),
            Scenario::misleading(
                "erased/field_misleading",
                "dyn field access, concrete type provable by the compiler",
                erased_field_misleading,
            ),
            Scenario::new(
                "erased/field_unknown",
                "dyn field access, slot reassigned after first use",
                erased_field_unknown,
            ),
            Scenario::misleading(
                "erased/method_misleading",
                "dyn method call, concrete type provable by the compiler",
                erased_method_misleading,
            ),
            Scenario::new(
                "erased/method_unknown",
                "dyn method call on a generator-produced value",
                erased_method_unknown,
            ),
            Scenario::new(
                "heterogeneous/literal_iteration",
                "traversal of a small literal mixed collection",
                heterogeneous_literal_iteration,
            ),
            Scenario::new(
                "heterogeneous/shared_pool",
                "wrapped-index reads from the shared mixed pool",
                heterogeneous_shared_pool,
            ),
            Scenario::new(
                "heterogeneous/fresh_generated",
                "fresh generator value per iteration, then method call",
                heterogeneous_fresh_generated,
            ),
            Scenario::new(
                "holder/dependency_run",
                "component holding a polymorphic collaborator",
                holder_dependency_run,
            ),
            Scenario::new(
                "split/erased_vs_direct",
                "erased and direct primitive interleaved in one window",
                split_erased_vs_direct,
            ),
        ])
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scenarios.iter().map(Scenario::name)
    }

    pub fn find(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// 名前に `filter` を含むシナリオを登録順で返す
    pub fn filtered(&self, filter: Option<&str>) -> SuiteResult<Vec<&Scenario>> {
        let selected: Vec<&Scenario> = self
            .scenarios
            .iter()
            .filter(|s| filter.is_none_or(|f| s.name.contains(f)))
            .collect();

        match filter {
            Some(f) if selected.is_empty() => Err(SuiteError::unknown_scenario(f)),
            _ => Ok(selected),
        }
    }

    /// 選択されたシナリオをソース順でランナーに登録する
    ///
    /// 各本体は `BlackHole` をエスケープシンクとして使う引数なしクロージャになる。
    /// 戻り値は登録したシナリオ数。
    pub fn register_with<'a, R>(
        &self,
        runner: &mut R,
        ctx: &'a ScenarioContext<'_>,
        filter: Option<&str>,
    ) -> SuiteResult<usize>
    where
        R: BenchmarkRunner<'a> + ?Sized,
    {
        let selected = self.filtered(filter)?;

        for scenario in &selected {
            let body = scenario.body;
            debug!(scenario = scenario.name, "registering scenario");
            runner.register(
                scenario.name,
                Box::new(move || {
                    let mut sink = BlackHole;
                    body(ctx, &mut sink);
                }),
            );
        }

        info!(count = selected.len(), "scenarios registered");
        Ok(selected.len())
    }
}

impl Default for ScenarioRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
