use super::*;
use crate::ops::Op;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Node::leaf(3.5);
    let n = neg_op(&a);

    assert_eq!(n.value(), -3.5);
    assert_eq!(n.op(), Op::Mul);
    let constant = n.parents()[0].parent();
    assert!(constant.is_leaf());
    assert_eq!(constant.value(), -1.0);
    assert_eq!(n.parents()[1].local_grad(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Node::leaf(3.5);
    let n = -&a;
    n.backward();

    assert_eq!(a.grad(), -1.0);
    // The hidden -1 constant receives a gradient too, like any leaf.
    assert_eq!(n.parents()[0].parent().grad(), 3.5);
}

#[test]
fn test_double_negation() {
    let a = Node::leaf(-2.0);
    let n = -(-&a);
    n.backward();

    assert_eq!(n.value(), -2.0);
    assert_eq!(a.grad(), 1.0);
}
