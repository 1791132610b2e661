//! Benchmarks for construction and the hot combinators

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spcell::{combine, map, non_zero_cells, Cell, CsrMatrix};

fn random_cells(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> Vec<Cell<f64>> {
    let mut taken = std::collections::HashSet::with_capacity(nnz);
    let mut cells = Vec::with_capacity(nnz);
    while cells.len() < nnz {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        if taken.insert((row, col)) {
            cells.push(Cell::new(row, col, rng.gen_range(0.1..10.0)));
        }
    }
    cells
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("build");

    for &nnz in &[1_000usize, 10_000, 100_000] {
        let cells = random_cells(&mut rng, 1_000, 1_000, nnz);
        group.bench_with_input(BenchmarkId::from_parameter(nnz), &cells, |b, cells| {
            b.iter(|| CsrMatrix::from_cells(1_000, 1_000, cells.iter().copied()).unwrap());
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let cells = random_cells(&mut rng, 1_000, 1_000, 50_000);
    let matrix = CsrMatrix::from_cells(1_000, 1_000, cells).unwrap();

    c.bench_function("map_scale_50k", |b| {
        b.iter(|| {
            map(black_box(&matrix), non_zero_cells(&matrix), |cell| {
                cell.with_value(cell.value * 2.0)
            })
            .unwrap()
        });
    });
}

fn bench_combine(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = CsrMatrix::from_cells(1_000, 1_000, random_cells(&mut rng, 1_000, 1_000, 25_000))
        .unwrap();
    let b_matrix =
        CsrMatrix::from_cells(1_000, 1_000, random_cells(&mut rng, 1_000, 1_000, 25_000)).unwrap();

    c.bench_function("combine_add_25k_25k", |b| {
        b.iter(|| {
            combine(
                black_box(&a),
                black_box(&b_matrix),
                non_zero_cells(&a),
                non_zero_cells(&b_matrix),
                |x, y| x + y,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_build, bench_map, bench_combine);
criterion_main!(benches);
