// src/autograd/propagate.rs
//
// The three backward traversals. Each one adds `seed` to the output's
// gradient and pushes `local_grad * incoming` along every edge, adding to
// (never overwriting) the gradients already stored on the nodes.

use super::graph::{topological_sort, NodeId};
use super::PropagationStats;
use crate::node::Node;
use log::trace;
use std::collections::HashMap;

/// Naive rule by native recursion:
/// `propagate(node, g)`: `node.grad += g`, then `propagate(parent, local * g)`
/// for every recorded edge.
pub(crate) fn propagate_recursive(node: &Node, incoming: f64, stats: &mut PropagationStats) {
    node.accumulate_grad(incoming);
    stats.node_visits += 1;
    for edge in node.parents() {
        stats.edge_traversals += 1;
        propagate_recursive(edge.parent(), edge.local_grad() * incoming, stats);
    }
}

/// Naive rule with an explicit work-list instead of the call stack.
///
/// Visits exactly the (node, contribution) pairs the recursive version does,
/// in the same order.
pub(crate) fn propagate_worklist(output: &Node, seed: f64) -> PropagationStats {
    let mut stats = PropagationStats::default();
    let mut pending: Vec<(Node, f64)> = vec![(output.clone(), seed)];

    while let Some((node, incoming)) = pending.pop() {
        node.accumulate_grad(incoming);
        stats.node_visits += 1;
        // Reversed so the first parent is popped first.
        for edge in node.parents().iter().rev() {
            stats.edge_traversals += 1;
            pending.push((edge.parent().clone(), edge.local_grad() * incoming));
        }
    }
    stats
}

/// Single sweep in reverse topological order.
///
/// Contributions for this pass are summed in a local map first; a node is
/// processed only after every node built from it, so its pass total is
/// complete when it is pushed to its parents. Each total is then added to the
/// node's stored gradient.
pub(crate) fn propagate_topological(output: &Node, seed: f64) -> PropagationStats {
    let mut stats = PropagationStats::default();
    let sorted_nodes = topological_sort(output);

    let mut pass_grads: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
    pass_grads.insert(output.id(), seed);

    for node in sorted_nodes.iter().rev() {
        // Every sorted node is an ancestor of `output`, so all its
        // contributions have been recorded by now.
        let node_grad = pass_grads.get(&node.id()).copied().unwrap_or(0.0);
        node.accumulate_grad(node_grad);
        stats.node_visits += 1;
        trace!("propagate_topological: node {:?} pass grad {}", node.op(), node_grad);

        for edge in node.parents() {
            stats.edge_traversals += 1;
            *pass_grads.entry(edge.parent().id()).or_insert(0.0) += edge.local_grad() * node_grad;
        }
    }
    stats
}

#[cfg(test)]
#[path = "propagate_test.rs"]
mod tests;
