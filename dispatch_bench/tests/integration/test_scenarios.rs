// シナリオ本体のエンドツーエンドテスト
// 計時には依存せず、累積値がエスケープされることだけを確認する
use dispatch_bench::{
    core::SharedCell,
    generator::SharedPool,
    guards::INNER_LOOP,
    scenarios::{self, ScenarioContext, ScenarioRegistry},
    slots::AnySlot,
};

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::RecordingEscape;

const SMALL_LOOP: usize = 300;

fn run_single(body: scenarios::ScenarioFn, inner_loop: usize) -> i64 {
    let pool = SharedPool::initialize(16).unwrap();
    let ctx = ScenarioContext::new(&pool, inner_loop);
    let mut sink = RecordingEscape::new();
    body(&ctx, &mut sink);
    sink.single()
}

#[test]
fn test_baseline_with_anchored_loop() {
    let sum = run_single(scenarios::baseline_primitive_arithmetic, INNER_LOOP);

    assert_eq!(sum, (INNER_LOOP as i64).wrapping_mul(43));
    assert_eq!(sum, 43_000_000);
}

#[test]
fn test_field_and_method_scenarios_accumulate_42_per_iteration() {
    let n = SMALL_LOOP as i64;
    let cases: [(&str, scenarios::ScenarioFn, i64); 13] = [
        ("any/primitive_unbox", scenarios::any_primitive_unbox, 42 * n),
        ("reference/direct_field", scenarios::reference_direct_field, 42 * n),
        ("reference/any_downcast", scenarios::reference_any_downcast, 42 * n),
        ("opaque/static_field", scenarios::opaque_static_field, 42 * n),
        ("erased/field_misleading", scenarios::erased_field_misleading, 42 * n),
        // 再代入前の初回読み出し分が1回多い
        ("erased/field_unknown", scenarios::erased_field_unknown, 42 * (n + 1)),
        ("erased/method_misleading", scenarios::erased_method_misleading, 42 * n),
        ("erased/method_unknown", scenarios::erased_method_unknown, 42 * n),
        ("heterogeneous/literal_iteration", scenarios::heterogeneous_literal_iteration, 42 * n),
        ("heterogeneous/shared_pool", scenarios::heterogeneous_shared_pool, 42 * n),
        ("heterogeneous/fresh_generated", scenarios::heterogeneous_fresh_generated, 42 * n),
        ("holder/dependency_run", scenarios::holder_dependency_run, 42 * n),
        ("split/erased_vs_direct", scenarios::split_erased_vs_direct, 84 * n),
    ];

    for (name, body, expected) in cases {
        assert_eq!(run_single(body, SMALL_LOOP), expected, "{name}");
    }
}

#[test]
fn test_literal_iteration_rounds_down_to_whole_passes() {
    // 3要素を丸ごと走査できる回数だけ回る
    assert_eq!(run_single(scenarios::heterogeneous_literal_iteration, 10), 42 * 9);
    assert_eq!(run_single(scenarios::heterogeneous_literal_iteration, 2), 0);
}

#[test]
fn test_zero_iterations_still_escape_once() {
    assert_eq!(run_single(scenarios::baseline_primitive_arithmetic, 0), 0);
    assert_eq!(run_single(scenarios::erased_field_unknown, 0), 42);
    assert_eq!(run_single(scenarios::holder_dependency_run, 0), 0);
}

#[test]
fn test_registry_bodies_match_exported_functions() {
    let pool = SharedPool::initialize(16).unwrap();
    let ctx = ScenarioContext::new(&pool, SMALL_LOOP);
    let registry = ScenarioRegistry::standard();

    let baseline = registry.find("baseline/primitive_arithmetic").unwrap();
    let mut sink = RecordingEscape::new();
    baseline.run(&ctx, &mut sink);

    assert_eq!(sink.single(), 43 * SMALL_LOOP as i64);
}

#[test]
fn test_forced_downcast_never_fails_on_suite_inputs() {
    let primitive = AnySlot::new(42_i64);
    let reference = AnySlot::new(SharedCell::default());

    assert_eq!(*primitive.force::<i64>(), 42);
    assert_eq!(reference.force::<SharedCell>().field, 42);
}

#[test]
#[should_panic(expected = "不変条件違反")]
fn test_forced_downcast_mismatch_is_fatal_in_isolation() {
    let reference = AnySlot::new(SharedCell::default());
    let _ = reference.force::<i64>();
}
