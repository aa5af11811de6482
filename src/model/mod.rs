//! State model for the trace engine
//!
//! This module provides the value types the algorithm engines operate on:
//! - [`grid`]: pathfinding grids ([`grid::GridCell`], [`grid::GridState`])
//! - [`sorting`]: array snapshots with per-index annotations ([`sorting::SortingState`])
//! - [`tree`]: binary search trees ([`tree::TreeNode`], [`tree::TreeState`])
//!
//! # Snapshot Isolation
//!
//! Every state type implements `Clone` as a true deep copy: two clones share
//! no mutable data. Back-references that would alias across copies in a
//! pointer-based representation are stored as *keys* instead:
//!
//! - a grid cell's parent is a `(row, col)` coordinate into the owning grid;
//! - the tree traversal path is a list of node *values*, re-resolved against
//!   whichever tree owns the list.
//!
//! Because of this, the derived `Clone` is already a correct remapping copy,
//! and a snapshot taken mid-run can never observe later mutations.

pub mod grid;
pub mod sorting;
pub mod tree;
