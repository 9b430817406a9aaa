use cagey::{
    puzzles::{cagey::{cagey_model, sample_3x3}, queens::n_queens},
    solver::{
        engine::BacktrackingSolver,
        heuristics::{
            DegreeHeuristic, MinimumRemainingValuesHeuristic, SelectFirstHeuristic,
            VariableOrdering,
        },
        propagators::{ForwardChecking, Gac, PlainBacktracking, Propagator},
    },
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn n_queens_propagator_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Propagators");
    let board_size = 10;

    let (csp, _vars) = n_queens(board_size).unwrap();

    let propagators: Vec<(&str, fn() -> Box<dyn Propagator>)> = vec![
        ("PlainBacktracking", || Box::new(PlainBacktracking)),
        ("ForwardChecking", || Box::new(ForwardChecking)),
        ("Gac", || Box::new(Gac)),
    ];
    for (name, make) in propagators {
        group.bench_function(format!("N=10, {name}"), |b| {
            let solver = BacktrackingSolver::new(make(), Box::new(SelectFirstHeuristic));
            b.iter_batched(
                || csp.clone(),
                |mut csp| {
                    let (outcome, _stats) = solver.solve(black_box(&mut csp)).unwrap();
                    outcome
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn n_queens_heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Heuristics");
    let board_size = 10;

    let (csp, _vars) = n_queens(board_size).unwrap();

    let orderings: Vec<(&str, fn() -> Box<dyn VariableOrdering>)> = vec![
        ("SelectFirst", || Box::new(SelectFirstHeuristic)),
        ("MinRemainingValues", || {
            Box::new(MinimumRemainingValuesHeuristic)
        }),
        ("Degree", || Box::new(DegreeHeuristic)),
    ];
    for (name, make) in orderings {
        group.bench_function(format!("N=10, {name}"), |b| {
            let solver = BacktrackingSolver::new(Box::new(ForwardChecking), make());
            b.iter_batched(
                || csp.clone(),
                |mut csp| {
                    let (outcome, _stats) = solver.solve(black_box(&mut csp)).unwrap();
                    outcome
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn cagey_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cagey");

    let puzzle = sample_3x3();
    let (csp, _vars) = cagey_model(&puzzle).unwrap();

    group.bench_function("3x3 sample, GAC + MRV", |b| {
        let solver = BacktrackingSolver::new(
            Box::new(Gac),
            Box::new(MinimumRemainingValuesHeuristic),
        );
        b.iter_batched(
            || csp.clone(),
            |mut csp| {
                let (outcome, _stats) = solver.solve(black_box(&mut csp)).unwrap();
                outcome
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    n_queens_propagator_benchmarks,
    n_queens_heuristic_benchmarks,
    cagey_benchmarks
);
criterion_main!(benches);
