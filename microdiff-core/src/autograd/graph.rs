// src/autograd/graph.rs

use crate::node::{Node, NodeData};
use log::trace;
use std::collections::HashSet;

/// Identity of a node: the address of its shared data.
///
/// Valid as long as some `Node` handle keeps the data alive, which the
/// traversals below guarantee by holding clones of every node they return.
pub(crate) type NodeId = *const NodeData;

/// Topological order of every node reachable from `root` (inclusive).
///
/// Parents come before the nodes built from them: leaves first, `root` last.
/// Iterative depth-first post-order, so graph depth never touches the native
/// stack.
pub fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Node> = Vec::new();
    // (node, children already pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        stack.push((node.clone(), true));
        // Reversed so the first parent is expanded first.
        for edge in node.parents().iter().rev() {
            if !visited.contains(&edge.parent().id()) {
                stack.push((edge.parent().clone(), false));
            }
        }
    }

    trace!("topological_sort: {} nodes reachable", sorted.len());
    sorted
}

/// Every node reachable from `root` (inclusive), each exactly once, in no
/// particular order.
pub fn reachable_nodes(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.id()) {
            continue;
        }
        for edge in node.parents() {
            stack.push(edge.parent().clone());
        }
        nodes.push(node);
    }
    nodes
}

/// Number of recorded edges among the nodes reachable from `root`.
pub fn edge_count(root: &Node) -> usize {
    reachable_nodes(root)
        .iter()
        .map(|node| node.parents().len())
        .sum()
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
