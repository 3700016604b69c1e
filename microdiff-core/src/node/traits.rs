// src/node/traits.rs
//
// Standard trait implementations for `Node`: formatting, arithmetic operators,
// `AddAssign` and `Sum`. The operators are thin wrappers around the `_op`
// functions in `crate::ops`.

use super::Node;
use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(v={:.4}, grad={:.4})", self.value(), self.grad())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op())
            .field("num_parents", &self.parents().len())
            .finish()
    }
}

/// Implements a binary operator for every combination of owned and borrowed
/// nodes, and for `f64` on either side (the scalar becomes a leaf).
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'b> $trait<&'b Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, &Node::leaf(rhs))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(&self, &Node::leaf(rhs))
            }
        }

        impl<'b> $trait<&'b Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(&Node::leaf(self), rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&Node::leaf(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(&self)
    }
}

/// `node += rhs` rebinds `node` to a new sum node; the old node stays in the
/// graph as its first parent.
impl AddAssign<Node> for Node {
    fn add_assign(&mut self, rhs: Node) {
        *self = add_op(self, &rhs);
    }
}

impl<'b> AddAssign<&'b Node> for Node {
    fn add_assign(&mut self, rhs: &'b Node) {
        *self = add_op(self, rhs);
    }
}

impl AddAssign<f64> for Node {
    fn add_assign(&mut self, rhs: f64) {
        *self = add_op(self, &Node::leaf(rhs));
    }
}

/// Left fold with `add`. An empty iterator sums to a zero leaf.
impl Sum<Node> for Node {
    fn sum<I: Iterator<Item = Node>>(mut iter: I) -> Node {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, n| add_op(&acc, &n)),
            None => Node::leaf(0.0),
        }
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Node {
        iter.cloned().sum()
    }
}
