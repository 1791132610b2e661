//! Build a graph Laplacian from an adjacency matrix and inspect it
//!
//! Run with: cargo run --example laplacian

use spcell::{degree_matrix, laplacian, non_zero_cells, sp_mv, Cell, CsrMatrix};

fn main() -> spcell::Result<()> {
    // 4-node cycle: 0-1-2-3-0, unit edge weights
    let adjacency = CsrMatrix::from_cells(
        4,
        4,
        [
            Cell::new(0, 1, 1.0),
            Cell::new(1, 0, 1.0),
            Cell::new(1, 2, 1.0),
            Cell::new(2, 1, 1.0),
            Cell::new(2, 3, 1.0),
            Cell::new(3, 2, 1.0),
            Cell::new(0, 3, 1.0),
            Cell::new(3, 0, 1.0),
        ],
    )?;
    println!("adjacency: {}", adjacency.summary());

    let degree = degree_matrix(&adjacency);
    println!("degree:    {}", degree.summary());

    let lap = laplacian(&adjacency)?;
    println!("laplacian: {}", lap.summary());

    println!("\nnon-zero cells of the laplacian:");
    for cell in non_zero_cells(&lap) {
        println!("  ({}, {}) = {}", cell.row, cell.col, cell.value);
    }

    // The Laplacian annihilates the constant vector.
    let ones = vec![1.0; 4];
    println!("\nL * 1 = {:?}", sp_mv(&lap, &ones)?);

    Ok(())
}
