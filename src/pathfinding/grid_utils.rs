//! Shared grid helpers for the pathfinding strategies

use smallvec::SmallVec;

use crate::model::grid::{Coord, GridState, UNREACHED};

/// Neighbor buffer: at most 8 per cell, kept inline.
pub type Neighbors = SmallVec<[Coord; 8]>;

/// Offsets in expansion order: N, E, S, W.
const CARDINAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Diagonal offsets, appended after the cardinals: NE, SE, SW, NW.
const DIAGONAL: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// In-bounds, non-wall neighbors of `coord`, in fixed order.
pub fn neighbors(state: &GridState, coord: Coord, allow_diagonal: bool) -> Neighbors {
    let mut out = Neighbors::new();
    let diagonals = if allow_diagonal { &DIAGONAL[..] } else { &[] };
    for &(dr, dc) in CARDINAL.iter().chain(diagonals) {
        let row = coord.0 as isize + dr;
        let col = coord.1 as isize + dc;
        if state.in_bounds(row, col) {
            let next = (row as usize, col as usize);
            if !state.cell(next).is_wall {
                out.push(next);
            }
        }
    }
    out
}

/// Manhattan distance between two coordinates.
pub fn manhattan_distance(a: Coord, b: Coord) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Walk parent coordinates from `end` back to the start and return the
/// path in start-to-end order. Returns just `[end]` when `end` has no
/// parent.
pub fn reconstruct_path(state: &GridState, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(parent) = state.cell(current).parent {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Flag every path cell except the start and end endpoints.
pub fn mark_path(state: &mut GridState, path: &[Coord]) {
    for &coord in path {
        let cell = state.cell_mut(coord);
        if !cell.is_start && !cell.is_end {
            cell.is_path = true;
        }
    }
}

/// Clear all per-run bookkeeping: visited/path flags, distances (start back
/// to 0), heuristics, parents, and the open-set overlay.
pub fn reset_visited_and_path(state: &mut GridState) {
    let start = state.start;
    for row in 0..state.rows() {
        for col in 0..state.cols() {
            let cell = state.cell_mut((row, col));
            cell.is_visited = false;
            cell.is_path = false;
            cell.distance = UNREACHED;
            cell.heuristic = 0;
            cell.parent = None;
        }
    }
    if let Some(start) = start {
        state.cell_mut(start).distance = 0;
    }
    state.open_set.clear();
}
