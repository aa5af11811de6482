use steptrace::model::grid::{Coord, GridState, UNREACHED};
use steptrace::pathfinding::PathfindingAlgorithm;

fn open_grid(rows: usize, cols: usize, start: Coord, end: Coord) -> GridState {
    let mut grid = GridState::new(rows, cols);
    grid.set_start(start);
    grid.set_end(end);
    grid
}

fn path_cells(state: &GridState) -> Vec<Coord> {
    state
        .iter_cells()
        .filter(|cell| cell.is_path || cell.is_start || cell.is_end)
        .map(|cell| cell.coord())
        .collect()
}

#[test]
fn every_algorithm_carries_metadata() {
    for algorithm in PathfindingAlgorithm::ALL {
        assert!(!algorithm.description().is_empty());
        assert!(algorithm.time_complexity().starts_with("O("));
        assert_eq!(algorithm.space_complexity(), "O(V)");
    }
    assert_eq!(PathfindingAlgorithm::Dijkstra.time_complexity(), "O((V + E) log V)");
    assert_eq!(PathfindingAlgorithm::Bfs.time_complexity(), "O(V + E)");
}

#[test]
fn bfs_finds_shortest_path_on_open_grid() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    let result = PathfindingAlgorithm::Bfs.execute(&grid, false);
    assert_eq!(result.cell((2, 2)).distance, 4);
    // 4 moves from corner to corner means 5 cells on the path.
    assert_eq!(path_cells(&result).len(), 5);
}

#[test]
fn bfs_trace_ends_with_found_path_step() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    let steps = PathfindingAlgorithm::Bfs.trace(&grid, false);
    let last = steps.last().unwrap();
    assert_eq!(last.description, "Path found with 5 cells");
}

#[test]
fn every_algorithm_reaches_a_reachable_goal() {
    for algorithm in PathfindingAlgorithm::ALL {
        let grid = open_grid(4, 4, (0, 0), (3, 3));
        let result = algorithm.execute(&grid, false);
        assert!(
            result.cell((3, 3)).parent.is_some(),
            "{} never reached the goal",
            algorithm.name()
        );
    }
}

#[test]
fn walled_off_goal_reports_no_path() {
    for algorithm in PathfindingAlgorithm::ALL {
        let mut grid = open_grid(3, 3, (0, 0), (2, 2));
        grid.set_wall((1, 2), true);
        grid.set_wall((2, 1), true);
        let result = algorithm.execute(&grid, false);
        assert!(result.cell((2, 2)).parent.is_none());
        assert!(!result.iter_cells().any(|cell| cell.is_path));
        let steps = algorithm.trace(&grid, false);
        assert_eq!(
            steps.last().unwrap().description,
            "No path exists between start and end"
        );
    }
}

#[test]
fn missing_start_returns_untouched_clone_and_empty_trace() {
    let mut grid = GridState::new(2, 2);
    grid.set_end((1, 1));
    for algorithm in PathfindingAlgorithm::ALL {
        let result = algorithm.execute(&grid, false);
        assert_eq!(result, grid);
        assert!(algorithm.trace(&grid, false).is_empty());
    }
}

#[test]
fn input_grid_is_never_mutated() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    let before = grid.clone();
    for algorithm in PathfindingAlgorithm::ALL {
        algorithm.execute(&grid, false);
        algorithm.trace(&grid, false);
    }
    assert_eq!(grid, before);
}

#[test]
fn bfs_matches_dijkstra_on_uniform_grids() {
    let grid = open_grid(5, 7, (0, 0), (4, 6));
    let bfs = PathfindingAlgorithm::Bfs.execute(&grid, false);
    let dijkstra = PathfindingAlgorithm::Dijkstra.execute(&grid, false);
    let manhattan = 4 + 6;
    assert_eq!(bfs.cell((4, 6)).distance, manhattan);
    assert_eq!(dijkstra.cell((4, 6)).distance, manhattan);
}

#[test]
fn astar_matches_dijkstra_cost_on_weighted_grid() {
    let mut grid = open_grid(4, 4, (0, 0), (3, 3));
    grid.set_wall((1, 1), true);
    grid.set_weight((0, 1), 9);
    grid.set_weight((1, 2), 3);
    grid.set_weight((2, 2), 2);
    let dijkstra = PathfindingAlgorithm::Dijkstra.execute(&grid, false);
    let astar = PathfindingAlgorithm::AStar.execute(&grid, false);
    assert_ne!(dijkstra.cell((3, 3)).distance, UNREACHED);
    assert_eq!(astar.cell((3, 3)).distance, dijkstra.cell((3, 3)).distance);
}

#[test]
fn greedy_reaches_goal_without_distance_bookkeeping() {
    let grid = open_grid(4, 4, (0, 0), (3, 3));
    let result = PathfindingAlgorithm::GreedyBestFirst.execute(&grid, false);
    assert!(result.cell((3, 3)).parent.is_some());
    assert!(!path_cells(&result).is_empty());
}

#[test]
fn dfs_trace_records_backtracking() {
    let mut grid = open_grid(3, 3, (0, 0), (2, 2));
    // Dead-end pocket in the first column forces the stack to unwind.
    grid.set_wall((1, 1), true);
    grid.set_wall((2, 1), true);
    let steps = PathfindingAlgorithm::Dfs.trace(&grid, false);
    assert!(steps
        .iter()
        .any(|step| step.description.starts_with("Backtracking")));
}

#[test]
fn trace_terminal_state_matches_execute() {
    let mut grid = open_grid(5, 5, (0, 3), (4, 1));
    grid.set_wall((2, 2), true);
    grid.set_wall((2, 3), true);
    grid.set_weight((3, 1), 4);
    for algorithm in PathfindingAlgorithm::ALL {
        let executed = algorithm.execute(&grid, false);
        let steps = algorithm.trace(&grid, false);
        assert_eq!(
            steps.last().unwrap().state,
            executed,
            "{} diverged between execute and trace",
            algorithm.name()
        );
    }
}

#[test]
fn start_equals_end_is_a_trivial_path() {
    let grid = open_grid(3, 3, (1, 1), (1, 1));
    for algorithm in PathfindingAlgorithm::ALL {
        let steps = algorithm.trace(&grid, false);
        assert_eq!(
            steps.last().unwrap().description,
            "Path found with 1 cells"
        );
    }
}

#[test]
fn diagonal_movement_shortens_bfs_paths() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    let result = PathfindingAlgorithm::Bfs.execute(&grid, true);
    assert_eq!(result.cell((2, 2)).distance, 2);
}

#[test]
fn snapshots_are_isolated_from_later_steps() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    let steps = PathfindingAlgorithm::Bfs.trace(&grid, false);
    let first = &steps[0].state;
    // The first snapshot predates any path marking.
    assert!(!first.iter_cells().any(|cell| cell.is_path));
    assert!(steps
        .last()
        .unwrap()
        .state
        .iter_cells()
        .any(|cell| cell.is_path));
}

#[test]
fn informed_traces_carry_the_frontier_and_clear_it_at_the_end() {
    let grid = open_grid(4, 4, (0, 0), (3, 3));
    for algorithm in [
        PathfindingAlgorithm::AStar,
        PathfindingAlgorithm::GreedyBestFirst,
    ] {
        let steps = algorithm.trace(&grid, false);
        assert!(
            steps.iter().any(|step| !step.state.open_set.is_empty()),
            "{} snapshots never carried the open set",
            algorithm.name()
        );
        assert!(
            steps.last().unwrap().state.open_set.is_empty(),
            "{} left a stale frontier in the terminal state",
            algorithm.name()
        );
    }
}

#[test]
fn uninformed_traces_leave_the_frontier_overlay_empty() {
    let grid = open_grid(4, 4, (0, 0), (3, 3));
    for algorithm in [
        PathfindingAlgorithm::Bfs,
        PathfindingAlgorithm::Dfs,
        PathfindingAlgorithm::Dijkstra,
    ] {
        let steps = algorithm.trace(&grid, false);
        assert!(
            steps.iter().all(|step| step.state.open_set.is_empty()),
            "{} populated the open set",
            algorithm.name()
        );
    }
}

#[test]
fn sequence_numbers_are_strictly_increasing() {
    let grid = open_grid(3, 3, (0, 0), (2, 2));
    for algorithm in PathfindingAlgorithm::ALL {
        let steps = algorithm.trace(&grid, false);
        for (expected, step) in steps.iter().enumerate() {
            assert_eq!(step.sequence, expected);
        }
    }
}
