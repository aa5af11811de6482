//! Stepped traversals in the four standard orders.

use std::collections::VecDeque;

use crate::model::tree::TreeState;
use crate::trace::StepSink;

use super::TraversalOrder;

pub(super) fn run(
    state: &mut TreeState,
    order: TraversalOrder,
    sink: &mut StepSink<'_, '_, TreeState>,
) {
    let Some(root) = state.root.as_deref().map(|node| node.value) else {
        sink.emit(|| (state.clone(), "Tree is empty".to_string()));
        return;
    };
    match order {
        TraversalOrder::InOrder => walk_in_order(state, root, sink),
        TraversalOrder::PreOrder => walk_pre_order(state, root, sink),
        TraversalOrder::PostOrder => walk_post_order(state, root, sink),
        TraversalOrder::LevelOrder => walk_level_order(state, root, sink),
    }
    let visited = state.path.len();
    sink.emit(|| (state.clone(), format!("Traversal visited {visited} nodes")));
}

/// Left and right child values of the node holding `value`.
fn children_of(state: &TreeState, value: i32) -> (Option<i32>, Option<i32>) {
    match state.find(value) {
        Some(node) => (
            node.left.as_deref().map(|child| child.value),
            node.right.as_deref().map(|child| child.value),
        ),
        None => (None, None),
    }
}

/// Flag the node as visited, append it to the path, and emit a step.
fn visit(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    if let Some(node) = state.find_mut(value) {
        node.result = true;
    }
    state.path.push(value);
    sink.emit(|| (state.clone(), format!("Visited node {value}")));
}

fn walk_in_order(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    let (left, right) = children_of(state, value);
    if let Some(left) = left {
        walk_in_order(state, left, sink);
    }
    visit(state, value, sink);
    if let Some(right) = right {
        walk_in_order(state, right, sink);
    }
}

fn walk_pre_order(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    visit(state, value, sink);
    let (left, right) = children_of(state, value);
    if let Some(left) = left {
        walk_pre_order(state, left, sink);
    }
    if let Some(right) = right {
        walk_pre_order(state, right, sink);
    }
}

fn walk_post_order(state: &mut TreeState, value: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    let (left, right) = children_of(state, value);
    if let Some(left) = left {
        walk_post_order(state, left, sink);
    }
    if let Some(right) = right {
        walk_post_order(state, right, sink);
    }
    visit(state, value, sink);
}

fn walk_level_order(state: &mut TreeState, root: i32, sink: &mut StepSink<'_, '_, TreeState>) {
    let mut queue = VecDeque::new();
    queue.push_back((root, 0usize));
    let mut level = 0usize;
    while let Some((value, depth)) = queue.pop_front() {
        if depth > level {
            level = depth;
            sink.emit(|| (state.clone(), format!("Descending to level {level}")));
        }
        visit(state, value, sink);
        let (left, right) = children_of(state, value);
        if let Some(left) = left {
            queue.push_back((left, depth + 1));
        }
        if let Some(right) = right {
            queue.push_back((right, depth + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traverse_path(values: &[i32], order: TraversalOrder) -> Vec<i32> {
        let mut state = TreeState::from_values(values);
        run(&mut state, order, &mut StepSink::Silent);
        state.path
    }

    #[test]
    fn in_order_yields_ascending_values() {
        assert_eq!(
            traverse_path(&[5, 3, 8, 1, 4], TraversalOrder::InOrder),
            vec![1, 3, 4, 5, 8]
        );
    }

    #[test]
    fn pre_order_visits_parents_first() {
        assert_eq!(
            traverse_path(&[5, 3, 8, 1, 4], TraversalOrder::PreOrder),
            vec![5, 3, 1, 4, 8]
        );
    }

    #[test]
    fn post_order_visits_parents_last() {
        assert_eq!(
            traverse_path(&[5, 3, 8, 1, 4], TraversalOrder::PostOrder),
            vec![1, 4, 3, 8, 5]
        );
    }

    #[test]
    fn level_order_visits_breadth_first() {
        assert_eq!(
            traverse_path(&[5, 3, 8, 1, 4], TraversalOrder::LevelOrder),
            vec![5, 3, 8, 1, 4]
        );
    }
}
