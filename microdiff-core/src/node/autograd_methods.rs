use super::Node;
use crate::autograd::graph::reachable_nodes;
use crate::autograd::propagate::{propagate_recursive, propagate_topological, propagate_worklist};
use crate::autograd::{BackwardStrategy, PropagationStats};
use log::debug;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// Adds 1 to this node's gradient and, for every ancestor, adds the partial
    /// derivative of this node's value with respect to that ancestor, summed
    /// over every path between them. Uses [`BackwardStrategy::Topological`].
    ///
    /// Gradients accumulate: calling `backward` twice without
    /// [`zero_grad_graph`](Node::zero_grad_graph) in between doubles every
    /// reachable gradient. Resetting is left to the caller.
    pub fn backward(&self) {
        self.backward_with(BackwardStrategy::default());
    }

    /// Performs the backward pass with an explicit traversal strategy.
    ///
    /// All strategies leave the same gradients (up to floating-point summation
    /// order); they differ in cost, reported in the returned stats.
    pub fn backward_with(&self, strategy: BackwardStrategy) -> PropagationStats {
        debug!(
            "backward: strategy={:?}, output value={}",
            strategy,
            self.value()
        );

        let stats = match strategy {
            BackwardStrategy::Topological => propagate_topological(self, 1.0),
            BackwardStrategy::PerEdge => propagate_worklist(self, 1.0),
            BackwardStrategy::PerEdgeRecursive => {
                let mut stats = PropagationStats::default();
                propagate_recursive(self, 1.0, &mut stats);
                stats
            }
        };

        debug!(
            "backward: done, {} node visits, {} edge traversals",
            stats.node_visits, stats.edge_traversals
        );
        stats
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.data.grad.set(0.0);
    }

    /// Resets the gradient of every node reachable from this one (inclusive).
    pub fn zero_grad_graph(&self) {
        let nodes = reachable_nodes(self);
        debug!("zero_grad_graph: resetting {} nodes", nodes.len());
        for node in &nodes {
            node.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
