//! Greedy best-first search: ordered by heuristic alone, never revises.

use rustc_hash::FxHashSet;

use crate::model::grid::{Coord, GridState};
use crate::trace::StepSink;

use super::grid_utils::{manhattan_distance, neighbors};
use super::record_outcome;

pub(super) fn run(
    state: &mut GridState,
    start: Coord,
    end: Coord,
    allow_diagonal: bool,
    sink: &mut StepSink<'_, '_, GridState>,
) {
    let mut open: Vec<Coord> = vec![start];
    let mut closed: FxHashSet<Coord> = FxHashSet::default();
    state.cell_mut(start).heuristic = manhattan_distance(start, end);
    sink.emit(|| {
        (
            state.clone(),
            format!(
                "Starting greedy best-first search at ({}, {})",
                start.0, start.1
            ),
        )
    });

    while !open.is_empty() {
        // Stable sort: equal heuristics keep insertion order.
        open.sort_by_key(|&coord| state.cell(coord).heuristic);
        let current = open.remove(0);
        closed.insert(current);
        state.cell_mut(current).is_visited = true;
        state.open_set = open.clone();
        sink.emit(|| {
            (
                state.clone(),
                format!(
                    "Evaluating cell ({}, {}) with heuristic {}",
                    current.0,
                    current.1,
                    state.cell(current).heuristic
                ),
            )
        });
        if current == end {
            break;
        }
        for next in neighbors(state, current, allow_diagonal) {
            // First discovery wins; the estimate is never revised.
            if closed.contains(&next) || open.contains(&next) {
                continue;
            }
            let cell = state.cell_mut(next);
            cell.heuristic = manhattan_distance(next, end);
            cell.parent = Some(current);
            open.push(next);
            state.open_set = open.clone();
            sink.emit(|| {
                (
                    state.clone(),
                    format!(
                        "Added ({}, {}) to the open set with heuristic {}",
                        next.0,
                        next.1,
                        state.cell(next).heuristic
                    ),
                )
            });
        }
    }

    record_outcome(state, start, end, sink);
}
