//! Pathfinding strategies over a grid
//!
//! Five strategies behind one enum, all sharing the contract: clone the
//! caller's state, reset per-run bookkeeping, search from the designated
//! start to the designated end, and reconstruct the path from parent
//! coordinates if the goal was reached.
//!
//! Each strategy is written once as a stepped core; [`PathfindingAlgorithm::execute`]
//! runs it against a silent sink and [`PathfindingAlgorithm::trace`] against a
//! recording one, so the two entry points cannot disagree on the terminal
//! state.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
pub mod grid_utils;
mod greedy;

use tracing::debug;

use crate::model::grid::{Coord, GridState};
use crate::trace::{Step, StepRecorder, StepSink};

/// Selects one of the grid search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathfindingAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
}

impl PathfindingAlgorithm {
    pub const ALL: [PathfindingAlgorithm; 5] = [
        PathfindingAlgorithm::Bfs,
        PathfindingAlgorithm::Dfs,
        PathfindingAlgorithm::Dijkstra,
        PathfindingAlgorithm::AStar,
        PathfindingAlgorithm::GreedyBestFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PathfindingAlgorithm::Bfs => "Breadth-First Search",
            PathfindingAlgorithm::Dfs => "Depth-First Search",
            PathfindingAlgorithm::Dijkstra => "Dijkstra's Algorithm",
            PathfindingAlgorithm::AStar => "A* Search",
            PathfindingAlgorithm::GreedyBestFirst => "Greedy Best-First Search",
        }
    }

    /// One-sentence summary of the strategy and its guarantee.
    pub fn description(self) -> &'static str {
        match self {
            PathfindingAlgorithm::Bfs => {
                "Explores the grid level by level from the start, guaranteeing the \
                 shortest path by edge count on unweighted grids."
            }
            PathfindingAlgorithm::Dfs => {
                "Follows each branch as deep as it goes before backtracking; finds a \
                 path but not necessarily a short one."
            }
            PathfindingAlgorithm::Dijkstra => {
                "Always expands the unvisited cell with the smallest tentative \
                 distance, yielding the cheapest path on weighted grids."
            }
            PathfindingAlgorithm::AStar => {
                "Orders the frontier by path cost plus a Manhattan-distance estimate \
                 to the goal; optimal as long as the estimate never overshoots."
            }
            PathfindingAlgorithm::GreedyBestFirst => {
                "Chases the goal by heuristic alone, ignoring path cost so far; fast \
                 but not guaranteed to find the shortest path."
            }
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            PathfindingAlgorithm::Bfs | PathfindingAlgorithm::Dfs => "O(V + E)",
            PathfindingAlgorithm::Dijkstra => "O((V + E) log V)",
            PathfindingAlgorithm::AStar | PathfindingAlgorithm::GreedyBestFirst => "O(E log V)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        "O(V)"
    }

    /// Run the search to completion and return the final grid.
    ///
    /// The input is never mutated. If the grid has no designated start or
    /// end, the clone is returned untouched.
    pub fn execute(self, state: &GridState, allow_diagonal: bool) -> GridState {
        let mut working = state.clone();
        debug!(
            algorithm = self.name(),
            rows = working.rows(),
            cols = working.cols(),
            "executing pathfinding run"
        );
        let (Some(start), Some(end)) = (working.start, working.end) else {
            return working;
        };
        grid_utils::reset_visited_and_path(&mut working);
        self.run(&mut working, start, end, allow_diagonal, &mut StepSink::Silent);
        working
    }

    /// Run the search, recording every step. Empty when the grid has no
    /// designated start or end.
    pub fn trace(self, state: &GridState, allow_diagonal: bool) -> Vec<Step<GridState>> {
        let mut recorder = StepRecorder::new();
        self.trace_into(state, allow_diagonal, &mut recorder);
        recorder.into_steps()
    }

    /// Trace into a caller-provided recorder, e.g. one carrying an observer.
    pub fn trace_into(
        self,
        state: &GridState,
        allow_diagonal: bool,
        recorder: &mut StepRecorder<'_, GridState>,
    ) {
        let mut working = state.clone();
        debug!(
            algorithm = self.name(),
            rows = working.rows(),
            cols = working.cols(),
            "tracing pathfinding run"
        );
        let (Some(start), Some(end)) = (working.start, working.end) else {
            return;
        };
        grid_utils::reset_visited_and_path(&mut working);
        self.run(
            &mut working,
            start,
            end,
            allow_diagonal,
            &mut StepSink::Recording(recorder),
        );
    }

    fn run(
        self,
        state: &mut GridState,
        start: Coord,
        end: Coord,
        allow_diagonal: bool,
        sink: &mut StepSink<'_, '_, GridState>,
    ) {
        match self {
            PathfindingAlgorithm::Bfs => bfs::run(state, start, end, allow_diagonal, sink),
            PathfindingAlgorithm::Dfs => dfs::run(state, start, end, allow_diagonal, sink),
            PathfindingAlgorithm::Dijkstra => dijkstra::run(state, start, end, allow_diagonal, sink),
            PathfindingAlgorithm::AStar => astar::run(state, start, end, allow_diagonal, sink),
            PathfindingAlgorithm::GreedyBestFirst => {
                greedy::run(state, start, end, allow_diagonal, sink)
            }
        }
    }
}

/// Shared epilogue: reconstruct and mark the path if the goal was reached,
/// then record the outcome. The frontier overlay is cleared first so the
/// terminal state is identical whether or not steps were recorded.
fn record_outcome(
    state: &mut GridState,
    start: Coord,
    end: Coord,
    sink: &mut StepSink<'_, '_, GridState>,
) {
    state.open_set.clear();
    if state.cell(end).parent.is_some() || start == end {
        let path = grid_utils::reconstruct_path(state, end);
        grid_utils::mark_path(state, &path);
        let length = path.len();
        sink.emit(|| {
            (
                state.clone(),
                format!("Path found with {length} cells"),
            )
        });
    } else {
        sink.emit(|| {
            (
                state.clone(),
                "No path exists between start and end".to_string(),
            )
        });
    }
}
