use crate::node::Node;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};

/// Subtracts `b` from `a`, as `add(a, neg(b))`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
