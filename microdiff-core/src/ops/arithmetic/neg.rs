use crate::node::Node;
use crate::ops::arithmetic::mul::mul_op;

/// Negates a node, as `mul(leaf(-1), a)`.
pub fn neg_op(a: &Node) -> Node {
    mul_op(&Node::leaf(-1.0), a)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
