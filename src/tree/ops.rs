//! Stepped cores for insert, search, and delete.
//!
//! Navigation never holds a node borrow across a step emission: nodes are
//! re-resolved by value ([`TreeState::find`]) or by a root-relative side
//! path ([`Side`]). The side path matters for deletion, where copying the
//! in-order successor's value briefly leaves two nodes with equal values
//! and value lookup would be ambiguous.

use crate::model::tree::{TreeNode, TreeState};
use crate::trace::StepSink;

/// One branch choice in a root-to-node path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Node at the end of `path`, if the path exists.
fn node_at<'t>(state: &'t TreeState, path: &[Side]) -> Option<&'t TreeNode> {
    let mut node = state.root.as_deref()?;
    for side in path {
        node = match side {
            Side::Left => node.left.as_deref()?,
            Side::Right => node.right.as_deref()?,
        };
    }
    Some(node)
}

/// The child slot addressed by `path`, rooted at `slot` (the root slot for
/// an empty path).
fn slot_at_mut<'t>(
    slot: &'t mut Option<Box<TreeNode>>,
    path: &[Side],
) -> Option<&'t mut Option<Box<TreeNode>>> {
    match path.split_first() {
        None => Some(slot),
        Some((side, rest)) => {
            let node = slot.as_deref_mut()?;
            let child = match side {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            };
            slot_at_mut(child, rest)
        }
    }
}

fn node_at_mut<'t>(state: &'t mut TreeState, path: &[Side]) -> Option<&'t mut TreeNode> {
    slot_at_mut(&mut state.root, path)?.as_deref_mut()
}

/// Flag the node at `path` as the one being examined and emit a comparison
/// step, then demote the flag to a path highlight.
fn emit_comparison(
    state: &mut TreeState,
    path: &[Side],
    description: String,
    sink: &mut StepSink<'_, '_, TreeState>,
) {
    if let Some(node) = node_at_mut(state, path) {
        node.active = true;
    }
    sink.emit(|| (state.clone(), description));
    if let Some(node) = node_at_mut(state, path) {
        node.active = false;
        node.highlighted = true;
    }
}

pub(super) fn insert(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    if state.root.is_none() {
        let mut node = TreeNode::new(value);
        node.highlighted = true;
        state.root = Some(Box::new(node));
        sink.emit(|| (state.clone(), format!("Inserted {value} as the root")));
        return;
    }
    let mut path: Vec<Side> = Vec::new();
    loop {
        let Some(current) = node_at(state, &path).map(|node| node.value) else {
            return;
        };
        emit_comparison(state, &path, format!("Comparing {value} with {current}"), sink);
        if value == current {
            sink.emit(|| {
                (
                    state.clone(),
                    format!("{value} already exists; tree unchanged"),
                )
            });
            return;
        }
        let side = if value < current { Side::Left } else { Side::Right };
        path.push(side);
        if node_at(state, &path).is_none() {
            if let Some(slot) = slot_at_mut(&mut state.root, &path) {
                let mut node = TreeNode::new(value);
                node.highlighted = true;
                *slot = Some(Box::new(node));
            }
            let branch = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            sink.emit(|| {
                (
                    state.clone(),
                    format!("Inserted {value} as the {branch} child of {current}"),
                )
            });
            return;
        }
    }
}

pub(super) fn search(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    if state.root.is_none() {
        sink.emit(|| (state.clone(), "Tree is empty".to_string()));
        return;
    }
    let mut path: Vec<Side> = Vec::new();
    loop {
        let Some(current) = node_at(state, &path).map(|node| node.value) else {
            sink.emit(|| (state.clone(), format!("{value} is not in the tree")));
            return;
        };
        state.path.push(current);
        emit_comparison(state, &path, format!("Comparing {value} with {current}"), sink);
        if value == current {
            if let Some(node) = node_at_mut(state, &path) {
                node.result = true;
            }
            sink.emit(|| (state.clone(), format!("Found {value}")));
            return;
        }
        let side = if value < current { Side::Left } else { Side::Right };
        let branch = match side {
            Side::Left => "left",
            Side::Right => "right",
        };
        sink.emit(|| {
            (
                state.clone(),
                format!("Descending into the {branch} subtree of {current}"),
            )
        });
        path.push(side);
    }
}

pub(super) fn delete(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    if state.root.is_none() {
        sink.emit(|| (state.clone(), "Tree is empty; nothing to delete".to_string()));
        return;
    }
    let mut path: Vec<Side> = Vec::new();
    loop {
        let Some(current) = node_at(state, &path).map(|node| node.value) else {
            sink.emit(|| (state.clone(), format!("{value} is not in the tree")));
            return;
        };
        emit_comparison(state, &path, format!("Comparing {value} with {current}"), sink);
        if value == current {
            break;
        }
        path.push(if value < current { Side::Left } else { Side::Right });
    }
    delete_at(state, &path, sink);
}

/// Remove the node at `path`, narrating the leaf, single-child, and
/// two-children cases. The two-children case copies the in-order successor
/// value into place and recurses to remove the successor node, which has at
/// most a right child.
fn delete_at(state: &mut TreeState, path: &[Side], sink: &mut StepSink<'_, '_, TreeState>) {
    let Some((value, has_left, has_right)) = node_at(state, path)
        .map(|node| (node.value, node.left.is_some(), node.right.is_some()))
    else {
        return;
    };
    match (has_left, has_right) {
        (false, false) => {
            if let Some(slot) = slot_at_mut(&mut state.root, path) {
                *slot = None;
            }
            sink.emit(|| (state.clone(), format!("Removed leaf node {value}")));
        }
        (true, false) | (false, true) => {
            let mut spliced = None;
            if let Some(slot) = slot_at_mut(&mut state.root, path) {
                if let Some(mut node) = slot.take() {
                    let child = node.left.take().or_else(|| node.right.take());
                    spliced = child.as_deref().map(|c| c.value);
                    *slot = child;
                }
            }
            let Some(spliced) = spliced else {
                return;
            };
            sink.emit(|| {
                (
                    state.clone(),
                    format!("Replaced {value} with its only child {spliced}"),
                )
            });
        }
        (true, true) => {
            let mut successor_path = path.to_vec();
            successor_path.push(Side::Right);
            while node_at(state, &successor_path).is_some_and(|node| node.left.is_some()) {
                successor_path.push(Side::Left);
            }
            let Some(successor) = node_at(state, &successor_path).map(|node| node.value) else {
                return;
            };
            sink.emit(|| {
                (
                    state.clone(),
                    format!("In-order successor of {value} is {successor}"),
                )
            });
            if let Some(node) = node_at_mut(state, path) {
                node.value = successor;
            }
            sink.emit(|| {
                (
                    state.clone(),
                    format!("Copied {successor} into the removed node's position"),
                )
            });
            delete_at(state, &successor_path, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepRecorder;

    fn silent() -> StepSink<'static, 'static, TreeState> {
        StepSink::Silent
    }

    #[test]
    fn insert_attaches_by_comparison() {
        let mut state = TreeState::from_values(&[5, 3]);
        insert(&mut state, 4, &mut silent());
        assert_eq!(state.in_order_values(), vec![3, 4, 5]);
        assert!(state.find(4).is_some_and(|node| node.highlighted));
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut state = TreeState::from_values(&[5, 3]);
        insert(&mut state, 3, &mut silent());
        assert_eq!(state.in_order_values(), vec![3, 5]);
    }

    #[test]
    fn search_flags_found_node_and_records_path() {
        let mut state = TreeState::from_values(&[5, 3, 8, 1]);
        search(&mut state, 1, &mut silent());
        assert_eq!(state.path, vec![5, 3, 1]);
        assert!(state.find(1).is_some_and(|node| node.result));
    }

    #[test]
    fn delete_leaf_detaches_it() {
        let mut state = TreeState::from_values(&[5, 3, 8]);
        delete(&mut state, 3, &mut silent());
        assert_eq!(state.in_order_values(), vec![5, 8]);
    }

    #[test]
    fn delete_single_child_splices() {
        let mut state = TreeState::from_values(&[5, 3, 8, 9]);
        delete(&mut state, 8, &mut silent());
        assert_eq!(state.in_order_values(), vec![3, 5, 9]);
        assert!(state.find(5).is_some_and(|node| {
            node.right.as_deref().map(|child| child.value) == Some(9)
        }));
    }

    #[test]
    fn delete_two_children_promotes_successor() {
        let mut state = TreeState::from_values(&[5, 3, 8, 1]);
        delete(&mut state, 5, &mut silent());
        assert_eq!(state.root.as_deref().map(|root| root.value), Some(8));
        assert_eq!(state.in_order_values(), vec![1, 3, 8]);
    }

    #[test]
    fn delete_missing_value_leaves_tree_intact() {
        let mut state = TreeState::from_values(&[5, 3, 8]);
        let mut recorder = StepRecorder::new();
        delete(&mut state, 7, &mut StepSink::Recording(&mut recorder));
        assert_eq!(state.in_order_values(), vec![3, 5, 8]);
        let steps = recorder.into_steps();
        assert!(steps
            .last()
            .is_some_and(|step| step.description.contains("not in the tree")));
    }
}
