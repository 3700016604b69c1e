use crate::node::{Edge, Node};
use crate::ops::Op;

/// Hyperbolic tangent, with local derivative `1 - tanh(a)^2`.
pub fn tanh_op(a: &Node) -> Node {
    let t = a.value().tanh();
    Node::from_parts(t, vec![Edge::new(a, 1.0 - t * t)], Op::Tanh)
}

impl Node {
    /// Applies `tanh`. See [`tanh_op`].
    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
