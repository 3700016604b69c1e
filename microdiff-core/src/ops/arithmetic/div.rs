use crate::node::Node;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::{pow_unchecked, Exponent};

/// Divides `a` by `b`, as `mul(a, pow(b, -1))`.
///
/// Never fails. Dividing by a zero-valued node gives `inf` (or `NaN` for
/// `0 / 0`), and those values flow through later operations and through
/// backward like any other number. The reciprocal skips `pow`'s domain check
/// for that reason.
pub fn div_op(a: &Node, b: &Node) -> Node {
    mul_op(a, &pow_unchecked(b, Exponent::Int(-1)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
