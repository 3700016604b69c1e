use crate::node::{Edge, Node};
use crate::ops::Op;

/// Rectified Linear Unit: `max(a, 0)`.
///
/// The local derivative is 1 for a strictly positive input and 0 otherwise,
/// so the subgradient at exactly 0 is 0.
pub fn relu_op(a: &Node) -> Node {
    let x = a.value();
    let (value, local_grad) = if x > 0.0 { (x, 1.0) } else { (0.0, 0.0) };
    Node::from_parts(value, vec![Edge::new(a, local_grad)], Op::Relu)
}

impl Node {
    /// Applies ReLU. See [`relu_op`].
    pub fn relu(&self) -> Node {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
