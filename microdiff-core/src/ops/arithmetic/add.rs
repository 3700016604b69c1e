use crate::node::{Edge, Node};
use crate::ops::Op;

/// Adds two nodes.
///
/// `d(a + b)/da = d(a + b)/db = 1`.
pub fn add_op(a: &Node, b: &Node) -> Node {
    Node::from_parts(
        a.value() + b.value(),
        vec![Edge::new(a, 1.0), Edge::new(b, 1.0)],
        Op::Add,
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
