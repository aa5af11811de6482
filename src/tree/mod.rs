//! Binary search tree operations
//!
//! Insert, delete, search, and traverse behind [`TreeOperation`], sharing the
//! stepped-core pattern of the other engines. Node positions are recomputed
//! by [`layout`] after every operation.
//!
//! Operations taking a value receive it as `Option<i32>`; traversal order is
//! selected through a string-keyed options map whose only recognized key is
//! `traversalOrder`.

pub mod layout;
mod ops;
mod traverse;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::model::tree::TreeState;
use crate::trace::{Step, StepRecorder, StepSink};

/// String-keyed operation options, e.g. `{"traversalOrder": "PreOrder"}`.
pub type TreeOptions = FxHashMap<String, String>;

/// Order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    #[default]
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::LevelOrder => "level-order",
        }
    }

    /// Read the `traversalOrder` key; absent or unrecognized values fall
    /// back to in-order.
    pub fn from_options(options: &TreeOptions) -> Self {
        match options.get("traversalOrder").map(String::as_str) {
            Some("PreOrder") => TraversalOrder::PreOrder,
            Some("PostOrder") => TraversalOrder::PostOrder,
            Some("LevelOrder") => TraversalOrder::LevelOrder,
            _ => TraversalOrder::InOrder,
        }
    }
}

/// Selects one of the tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeOperation {
    Insert,
    Delete,
    Search,
    Traverse,
}

impl TreeOperation {
    pub fn name(self) -> &'static str {
        match self {
            TreeOperation::Insert => "insert",
            TreeOperation::Delete => "delete",
            TreeOperation::Search => "search",
            TreeOperation::Traverse => "traverse",
        }
    }

    /// One-sentence summary of the operation.
    pub fn description(self) -> &'static str {
        match self {
            TreeOperation::Insert => {
                "Descends by comparison and attaches the value as a new leaf; \
                 duplicates are rejected unchanged."
            }
            TreeOperation::Delete => {
                "Locates the value and removes its node, splicing out a lone child \
                 or promoting the in-order successor."
            }
            TreeOperation::Search => {
                "Descends by comparison, recording the path, until the value is \
                 found or a missing child proves it absent."
            }
            TreeOperation::Traverse => {
                "Visits every node in the selected order: in-order, pre-order, \
                 post-order, or level-order."
            }
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            TreeOperation::Traverse => "O(n)",
            _ => "O(h), where h is the height of the tree",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            TreeOperation::Traverse => "O(n)",
            _ => "O(h)",
        }
    }

    /// Apply the operation to a clone of `state` and return the result.
    ///
    /// Insert, delete, and search require `value`; without one the clone is
    /// returned untouched.
    pub fn execute(
        self,
        state: &TreeState,
        value: Option<i32>,
        options: &TreeOptions,
    ) -> TreeState {
        let mut working = state.clone();
        debug!(
            operation = self.name(),
            value,
            nodes = working.node_count(),
            "executing tree operation"
        );
        self.run(
            &mut working,
            value,
            TraversalOrder::from_options(options),
            &mut StepSink::Silent,
        );
        working
    }

    /// Apply the operation to a clone of `state`, recording every step.
    pub fn trace(
        self,
        state: &TreeState,
        value: Option<i32>,
        options: &TreeOptions,
    ) -> Vec<Step<TreeState>> {
        let mut recorder = StepRecorder::new();
        self.trace_into(state, value, options, &mut recorder);
        recorder.into_steps()
    }

    /// Trace into a caller-provided recorder, e.g. one carrying an observer.
    pub fn trace_into(
        self,
        state: &TreeState,
        value: Option<i32>,
        options: &TreeOptions,
        recorder: &mut StepRecorder<'_, TreeState>,
    ) {
        let mut working = state.clone();
        debug!(
            operation = self.name(),
            value,
            nodes = working.node_count(),
            "tracing tree operation"
        );
        self.run(
            &mut working,
            value,
            TraversalOrder::from_options(options),
            &mut StepSink::Recording(recorder),
        );
    }

    fn run(
        self,
        state: &mut TreeState,
        value: Option<i32>,
        order: TraversalOrder,
        sink: &mut StepSink<'_, '_, TreeState>,
    ) {
        if self != TreeOperation::Traverse && value.is_none() {
            return;
        }
        state.clear_flags();
        state.path.clear();
        state.target = value;
        match self {
            TreeOperation::Traverse => {
                sink.emit(|| {
                    (
                        state.clone(),
                        format!("Starting {} traversal", order.name()),
                    )
                });
                traverse::run(state, order, sink);
            }
            operation => {
                // Checked above; traverse is the only value-less operation.
                let Some(value) = value else {
                    return;
                };
                sink.emit(|| {
                    (
                        state.clone(),
                        format!("Starting {} of {value}", operation.name()),
                    )
                });
                match operation {
                    TreeOperation::Insert => ops::insert(state, value, sink),
                    TreeOperation::Delete => ops::delete(state, value, sink),
                    TreeOperation::Search => ops::search(state, value, sink),
                    TreeOperation::Traverse => unreachable!(),
                }
            }
        }
        layout::assign_positions(&mut state.root);
        sink.emit(|| (state.clone(), "Recomputed node positions".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_order(order: &str) -> TreeOptions {
        let mut options = TreeOptions::default();
        options.insert("traversalOrder".to_string(), order.to_string());
        options
    }

    #[test]
    fn order_defaults_to_in_order() {
        assert_eq!(
            TraversalOrder::from_options(&TreeOptions::default()),
            TraversalOrder::InOrder
        );
        assert_eq!(
            TraversalOrder::from_options(&options_with_order("Sideways")),
            TraversalOrder::InOrder
        );
    }

    #[test]
    fn order_reads_recognized_values() {
        assert_eq!(
            TraversalOrder::from_options(&options_with_order("PreOrder")),
            TraversalOrder::PreOrder
        );
        assert_eq!(
            TraversalOrder::from_options(&options_with_order("PostOrder")),
            TraversalOrder::PostOrder
        );
        assert_eq!(
            TraversalOrder::from_options(&options_with_order("LevelOrder")),
            TraversalOrder::LevelOrder
        );
    }

    #[test]
    fn value_operations_without_value_are_no_ops() {
        let state = TreeState::from_values(&[5, 3, 8]);
        let result = TreeOperation::Delete.execute(&state, None, &TreeOptions::default());
        assert_eq!(result, state);
        let steps = TreeOperation::Insert.trace(&state, None, &TreeOptions::default());
        assert!(steps.is_empty());
    }
}
