//! # Operations Module (`ops`)
//!
//! Every differentiable operation lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`, `pow_op`, ...)
//!   that computes the forward value and records the parents of the new node
//!   together with their local derivatives. Local derivatives are evaluated
//!   eagerly from the forward values and never recomputed.
//! - **Composed operations:** `neg`, `sub` and `div` have no derivative rules
//!   of their own; they are built from `add`, `mul` and `pow`.
//! - **`Node` methods and operators** (`a + b`, `a.relu()`, ...) delegate to these
//!   functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`activation`]: relu, tanh.

use crate::ops::arithmetic::pow::Exponent;

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};

/// The primitive operation that produced a node.
///
/// Only primitives appear here: a node created by `neg`, `sub` or `div` carries
/// the tag of the primitive it was composed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Directly constructed constant.
    Leaf,
    Add,
    Mul,
    Pow(Exponent),
    Relu,
    Tanh,
}
