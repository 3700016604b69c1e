use crate::node::{Edge, Node};
use crate::ops::Op;

/// Multiplies two nodes.
///
/// `d(a * b)/da = b` and `d(a * b)/db = a`, both taken at the forward values.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    Node::from_parts(
        a.value() * b.value(),
        vec![Edge::new(a, b.value()), Edge::new(b, a.value())],
        Op::Mul,
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
