//! Node layout for rendering.
//!
//! Root at the origin, each level a fixed vertical step below the last, and
//! the horizontal offset to a node's children halving with depth down to a
//! minimum clamp so deep subtrees stay separated.

use crate::model::tree::TreeNode;

/// Vertical distance between adjacent levels.
pub const VERTICAL_STEP: f64 = 1.5;

/// Horizontal offset from the root to its children.
pub const INITIAL_SPACING: f64 = 5.0;

/// Smallest horizontal offset between a node and its children.
pub const MIN_SPACING: f64 = 0.7;

/// Recompute the coordinates of every node in the tree.
pub fn assign_positions(root: &mut Option<Box<TreeNode>>) {
    if let Some(root) = root.as_deref_mut() {
        place(root, 0.0, 0.0, INITIAL_SPACING);
    }
}

fn place(node: &mut TreeNode, x: f64, y: f64, spacing: f64) {
    node.x = x;
    node.y = y;
    let child_spacing = (spacing / 2.0).max(MIN_SPACING);
    if let Some(left) = node.left.as_deref_mut() {
        place(left, x - spacing, y - VERTICAL_STEP, child_spacing);
    }
    if let Some(right) = node.right.as_deref_mut() {
        place(right, x + spacing, y - VERTICAL_STEP, child_spacing);
    }
}
