//! # Introduction
//!
//! steptrace runs classic algorithms — grid pathfinding, comparison sorts,
//! and binary search tree operations — deterministically, either straight to
//! their final state or as an ordered trace of fully isolated state
//! snapshots with human-readable descriptions.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input state → clone → stepped algorithm core → StepSink → Steps / final state
//! ```
//!
//! 1. [`model`] — the state value types: [`model::grid::GridState`],
//!    [`model::sorting::SortingState`], and [`model::tree::TreeState`], each
//!    cloning as a true deep copy.
//! 2. [`trace`] — [`trace::Step`]s, the append-only
//!    [`trace::StepRecorder`], and the [`trace::StepSink`] the algorithm
//!    cores emit into.
//! 3. [`pathfinding`] — BFS, DFS, Dijkstra, A*, and greedy best-first over a
//!    grid, behind [`pathfinding::PathfindingAlgorithm`].
//! 4. [`sorting`] — bubble, insertion, merge, quick, and heap sort, behind
//!    [`sorting::SortingAlgorithm`].
//! 5. [`tree`] — BST insert, delete, search, and traversal plus node layout,
//!    behind [`tree::TreeOperation`].
//!
//! ## Consistency guarantee
//!
//! Every algorithm has a single core shared by its `execute` and `trace`
//! entry points; recording steps can never change the terminal state, and
//! the final meaningful step of a trace always carries the state `execute`
//! returns for the same input.

pub mod model;
pub mod pathfinding;
pub mod sorting;
pub mod trace;
pub mod tree;
