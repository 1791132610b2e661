//! Flood-fill over a graph stored as a CSR adjacency matrix
//!
//! Exercises the engine the way a graph consumer does: row slices as
//! adjacency lists, filter to threshold edges, submatrix to extract the
//! reached component.

use spcell::{filter, non_zero_cells, submatrix, Cell, CsrMatrix, MatrixOperations};

/// Spread a power budget from a start vertex, splitting it evenly across
/// outgoing edges and paying each edge's weight as a cost. Returns the set
/// of vertices reached with power to spare.
fn flood(graph: &CsrMatrix<f64>, start: usize, power: f64) -> Vec<usize> {
    let mut visited = vec![false; graph.rows()];
    let mut frontier = vec![(start, power)];
    visited[start] = true;

    while let Some((vertex, remaining)) = frontier.pop() {
        let connections = graph.get_row(vertex);
        if connections.is_empty() {
            continue;
        }

        let share = remaining / connections.len() as f64;
        for cell in connections {
            let cost = cell.value;
            let next = cell.col;
            if share >= cost && !visited[next] {
                visited[next] = true;
                frontier.push((next, share - cost));
            }
        }
    }

    (0..graph.rows()).filter(|&v| visited[v]).collect()
}

/// Path graph 0 -> 1 -> 2 -> 3 with rising edge costs, plus an expensive
/// shortcut 0 -> 3.
fn weighted_path() -> CsrMatrix<f64> {
    CsrMatrix::from_cells(
        4,
        4,
        [
            Cell::new(0, 1, 1.0),
            Cell::new(0, 3, 50.0),
            Cell::new(1, 2, 2.0),
            Cell::new(2, 3, 4.0),
        ],
    )
    .unwrap()
}

#[test]
fn flood_reaches_everything_with_enough_power() {
    let graph = weighted_path();
    assert_eq!(flood(&graph, 0, 1000.0), vec![0, 1, 2, 3]);
}

#[test]
fn flood_stops_when_power_runs_out() {
    let graph = weighted_path();
    // 6 power: split over 2 edges at vertex 0 gives 3 per edge, enough for
    // the cost-1 edge to 1 (2 left) but edge 1->2 costs 2, leaving 0 at 2,
    // where edge 2->3 costs 4.
    assert_eq!(flood(&graph, 0, 6.0), vec![0, 1, 2]);
}

#[test]
fn flood_from_sink_goes_nowhere() {
    let graph = weighted_path();
    assert_eq!(flood(&graph, 3, 100.0), vec![3]);
}

#[test]
fn cheap_edges_then_flood_matches_thresholded_graph() {
    let graph = weighted_path();

    // Drop edges costing 4 or more, then flood with modest power.
    let cheap = filter(&graph, non_zero_cells(&graph), |c| c.value < 4.0).unwrap();
    let reached = flood(&cheap, 0, 8.0);
    assert_eq!(reached, vec![0, 1, 2]);

    // The reached component extracted as a submatrix keeps only the cheap
    // edges among reached vertices.
    let component = submatrix(&cheap, (0, 2), (0, 2)).unwrap();
    assert_eq!(component.nnz(), 2);
    assert_eq!(component.get(0, 1), 1.0);
    assert_eq!(component.get(1, 2), 2.0);
}
