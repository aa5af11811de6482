//! A* search: Dijkstra ordered by distance plus an admissible heuristic.

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
            format!("Starting A* search at ({}, {})", start.0, start.1),
        )
    });

    while !open.is_empty() {
        // Stable sort: equal total costs keep insertion order.
        open.sort_by_key(|&coord| state.cell(coord).total_cost());
        let current = open.remove(0);
        closed.insert(current);
        state.cell_mut(current).is_visited = true;
        state.open_set = open.clone();
        sink.emit(|| {
            (
                state.clone(),
                format!(
                    "Evaluating cell ({}, {}) with total cost {}",
                    current.0,
                    current.1,
                    state.cell(current).total_cost()
                ),
            )
        });
        if current == end {
            break;
        }
        let current_distance = state.cell(current).distance;
        for next in neighbors(state, current, allow_diagonal) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = current_distance + state.cell(next).weight;
            if !open.contains(&next) {
                let cell = state.cell_mut(next);
                cell.distance = tentative;
                cell.heuristic = manhattan_distance(next, end);
                cell.parent = Some(current);
                open.push(next);
                state.open_set = open.clone();
                sink.emit(|| {
                    (
                        state.clone(),
                        format!(
                            "Added ({}, {}) to the open set with total cost {}",
                            next.0,
                            next.1,
                            state.cell(next).total_cost()
                        ),
                    )
                });
            } else if tentative < state.cell(next).distance {
                let cell = state.cell_mut(next);
                cell.distance = tentative;
                cell.parent = Some(current);
                sink.emit(|| {
                    (
                        state.clone(),
                        format!(
                            "Improved path to ({}, {}) with distance {}",
                            next.0, next.1, tentative
                        ),
                    )
                });
            }
        }
    }

    record_outcome(state, start, end, sink);
}
