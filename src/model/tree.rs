//! Binary search tree state
//!
//! Nodes own their children exclusively ([`Option<Box<TreeNode>>`]), so the
//! derived `Clone` duplicates whole subtrees and two tree states never share
//! a node. The traversal path in [`TreeState`] holds node *values* rather
//! than node references; values are unique in a BST, so a path entry can be
//! re-resolved inside any clone with [`TreeState::find`].

/// A node in a binary search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Value stored in the node; unique within the tree.
    pub value: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
    /// Whether the node is on the path being walked.
    pub highlighted: bool,
    /// Whether the node is the one currently being examined.
    pub active: bool,
    /// Whether the node is part of the operation's result.
    pub result: bool,
    /// Layout x-coordinate, recomputed after every operation.
    pub x: f64,
    /// Layout y-coordinate, recomputed after every operation.
    pub y: f64,
}

impl TreeNode {
    pub fn new(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            highlighted: false,
            active: false,
            result: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// The state of a tree operation: the tree itself plus the in-flight
/// operation's target value and traversal path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeState {
    pub root: Option<Box<TreeNode>>,
    /// Value being inserted, deleted, or searched for, if any.
    pub target: Option<i32>,
    /// Values of the nodes visited so far, in visit order.
    pub path: Vec<i32>,
}

impl TreeState {
    pub fn new() -> Self {
        TreeState::default()
    }

    /// Build a BST by inserting `values` in order. Duplicates are dropped.
    pub fn from_values(values: &[i32]) -> Self {
        let mut state = TreeState::new();
        for &value in values {
            state.root = insert_plain(state.root.take(), value);
        }
        state
    }

    /// Find the node holding `value` by BST descent.
    pub fn find(&self, value: i32) -> Option<&TreeNode> {
        let mut node = self.root.as_deref()?;
        loop {
            if value == node.value {
                return Some(node);
            }
            node = if value < node.value {
                node.left.as_deref()?
            } else {
                node.right.as_deref()?
            };
        }
    }

    /// Mutable variant of [`TreeState::find`].
    pub fn find_mut(&mut self, value: i32) -> Option<&mut TreeNode> {
        let mut node = self.root.as_deref_mut()?;
        loop {
            if value == node.value {
                return Some(node);
            }
            node = if value < node.value {
                node.left.as_deref_mut()?
            } else {
                node.right.as_deref_mut()?
            };
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// All values in ascending (in-order) sequence.
    pub fn in_order_values(&self) -> Vec<i32> {
        fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push(node.value);
                walk(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn node_count(&self) -> usize {
        fn count(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
        }
        count(self.root.as_deref())
    }

    /// Clear all visualization flags, leaving structure and layout intact.
    pub fn clear_flags(&mut self) {
        fn clear(node: Option<&mut TreeNode>) {
            if let Some(node) = node {
                node.highlighted = false;
                node.active = false;
                node.result = false;
                clear(node.left.as_deref_mut());
                clear(node.right.as_deref_mut());
            }
        }
        clear(self.root.as_deref_mut());
    }
}

/// Ownership-passing BST insert used by [`TreeState::from_values`]. Equal
/// values are rejected unchanged.
fn insert_plain(node: Option<Box<TreeNode>>, value: i32) -> Option<Box<TreeNode>> {
    match node {
        None => Some(Box::new(TreeNode::new(value))),
        Some(mut n) => {
            if value < n.value {
                n.left = insert_plain(n.left.take(), value);
            } else if value > n.value {
                n.right = insert_plain(n.right.take(), value);
            }
            Some(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_builds_ordered_tree() {
        let state = TreeState::from_values(&[5, 3, 8, 1, 4]);
        assert_eq!(state.in_order_values(), vec![1, 3, 4, 5, 8]);
        assert_eq!(state.node_count(), 5);
    }

    #[test]
    fn from_values_drops_duplicates() {
        let state = TreeState::from_values(&[5, 3, 5, 3]);
        assert_eq!(state.in_order_values(), vec![3, 5]);
    }

    #[test]
    fn find_descends_by_comparison() {
        let state = TreeState::from_values(&[5, 3, 8, 1]);
        assert_eq!(state.find(1).map(|n| n.value), Some(1));
        assert!(state.find(7).is_none());
    }

    #[test]
    fn clone_duplicates_whole_subtrees() {
        let state = TreeState::from_values(&[5, 3, 8]);
        let mut copy = state.clone();
        if let Some(node) = copy.find_mut(3) {
            node.highlighted = true;
            node.value = 2;
        }
        assert!(state.find(3).is_some_and(|n| !n.highlighted));
        assert_eq!(state.in_order_values(), vec![3, 5, 8]);
    }

    #[test]
    fn path_entries_resolve_in_clones() {
        let mut state = TreeState::from_values(&[5, 3, 8]);
        state.path = vec![5, 8];
        let copy = state.clone();
        for value in &copy.path {
            assert!(copy.find(*value).is_some());
        }
    }
}
