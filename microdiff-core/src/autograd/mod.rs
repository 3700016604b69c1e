//! # Autograd
//!
//! Backward propagation over the graph recorded by [`crate::ops`].
//!
//! Because every local derivative is a constant fixed at construction, the
//! backward pass is linear in the incoming gradient: a contribution may be
//! pushed to a node's parents as soon as it arrives, without waiting for the
//! node's other contributions. The naive per-edge strategies rely on this.
//! Ordering only matters for cost: the topological strategy touches every edge
//! once, the per-edge strategies once per path.

pub mod grad_check;
pub mod graph;
pub(crate) mod propagate;

/// Traversal used by [`Node::backward_with`](crate::Node::backward_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackwardStrategy {
    /// Reverse topological sweep, O(nodes + edges). Iterative.
    #[default]
    Topological,
    /// Per-edge rule with an explicit work-list. Iterative, but revisits a
    /// node once per distinct downstream path.
    PerEdge,
    /// Per-edge rule by native recursion. Stack depth grows with the longest
    /// path, so deep graphs can overflow the stack.
    PerEdgeRecursive,
}

/// Work done by one backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropagationStats {
    /// Number of times a gradient was accumulated into a node.
    pub node_visits: usize,
    /// Number of times a contribution was pushed along an edge.
    pub edge_traversals: usize,
}
