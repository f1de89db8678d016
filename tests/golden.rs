//! End-to-end checks on the 22-item hiking instance (capacity 400).

use knapsack_engine::bnb::BnbSolver;
use knapsack_engine::dp::{CachePolicy, MemoConfig, MemoSolver, TabulationSolver};
use knapsack_engine::driver::{self, KnapsackData, SolveRequest};
use knapsack_engine::greedy::{GreedyConfig, GreedySolver};
use knapsack_engine::instance::ProblemInstance;
use knapsack_engine::solver::{Solution, Solver, SolverKind};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/ks_22.json");

fn load() -> KnapsackData {
    KnapsackData::from_json_file(FIXTURE).unwrap()
}

fn assert_golden(solution: &Solution) {
    assert_eq!(solution.total_weight(), 396.0);
    assert_eq!(solution.total_value(), 1030.0);
    let item_value: f64 = solution.items().iter().map(|i| i.value()).sum();
    assert_eq!(item_value, 1030.0);
}

#[test]
fn test_fixture_loads_and_sorts() {
    let data = load();
    assert_eq!(data.num_items, 22);
    assert_eq!(data.capacity, 400.0);
    data.validate().unwrap();

    let instance = data.to_instance(true);
    let first = &instance.items()[0];
    assert_eq!((first.value(), first.weight()), (150.0, 9.0));
    assert_eq!(first.density(), 50.0 / 3.0);
    let last = &instance.items()[21];
    assert_eq!((last.value(), last.weight()), (10.0, 52.0));
    assert_eq!(last.density(), 5.0 / 26.0);
}

#[test]
fn test_greedy_integral() {
    let instance = load().to_instance(true);
    let solution = Solver::new(&instance, GreedySolver::new(GreedyConfig::integral()))
        .run()
        .unwrap();
    assert_golden(&solution);
}

#[test]
fn test_greedy_fractional() {
    let instance = load().to_instance(true);
    let solution = Solver::new(&instance, GreedySolver::new(GreedyConfig::fractional()))
        .run()
        .unwrap();
    assert_eq!(solution.total_weight(), 400.0);
    assert!((solution.total_value() - 1035.217_391_304_347_8).abs() < 1e-9);
}

#[test]
fn test_tabulation() {
    let instance = load().to_instance(false);
    assert_golden(&Solver::new(&instance, TabulationSolver::default()).run().unwrap());
}

#[test]
fn test_memoized_unbounded_and_lru() {
    let instance = load().to_instance(false);
    assert_golden(&Solver::new(&instance, MemoSolver::default()).run().unwrap());

    let lru = MemoSolver::new(MemoConfig::default().with_cache(CachePolicy::Lru { capacity: 256 }));
    assert_golden(&Solver::new(&instance, lru).run().unwrap());
}

#[test]
fn test_branch_and_bound() {
    let instance = load().to_instance(true);
    assert_golden(&Solver::new(&instance, BnbSolver::default()).run().unwrap());
}

#[test]
fn test_exact_strategies_pick_the_same_items() {
    let data = load();
    let mut selections: Vec<Vec<usize>> = [
        SolverKind::DynProg,
        SolverKind::DynProgRecurrent,
        SolverKind::BranchAndBound,
    ]
    .into_iter()
    .map(|kind| {
        let instance: ProblemInstance = data.to_instance(kind.requires_sorted());
        let mut indices = driver::solve_instance(&instance, kind)
            .unwrap()
            .selected_indices();
        indices.sort_unstable();
        indices
    })
    .collect();
    selections.dedup();
    // the optimum of this instance is unique
    assert_eq!(selections.len(), 1);
}

#[test]
fn test_driver_every_kind() {
    for kind in SolverKind::ALL {
        let response = driver::solve(&SolveRequest::new(kind, load())).unwrap();
        assert_eq!(response.value, 1030.0, "{kind:?}");
        assert_eq!(response.weight, 396.0, "{kind:?}");
        assert!(response.items.iter().all(|r| r.name.is_some()));
    }
}

#[test]
fn test_rerun_is_idempotent() {
    let instance = load().to_instance(true);
    let first = Solver::new(&instance, BnbSolver::default()).run().unwrap();
    let second = Solver::new(&instance, BnbSolver::default()).run().unwrap();
    assert_eq!(first, second);
}
