use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_add_forward_and_edges() {
    let a = Node::leaf(1.5);
    let b = Node::leaf(-4.0);
    let c = add_op(&a, &b);

    assert_relative_eq!(c.value(), -2.5);
    assert_eq!(c.op(), Op::Add);
    assert_eq!(c.parents().len(), 2);
    assert_eq!(c.parents()[0].local_grad(), 1.0);
    assert_eq!(c.parents()[1].local_grad(), 1.0);
    assert_eq!(c.parents()[0].parent().id(), a.id());
    assert_eq!(c.parents()[1].parent().id(), b.id());
}

#[test]
fn test_add_backward() {
    let a = Node::leaf(2.0);
    let b = Node::leaf(3.0);
    let c = add_op(&a, &b);
    c.backward();

    assert_eq!(c.grad(), 1.0);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_node_twice() {
    // Both edges point at `a`, so it receives both contributions.
    let a = Node::leaf(7.0);
    let c = add_op(&a, &a);
    c.backward();

    assert_eq!(c.value(), 14.0);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_grad_check() {
    let result = check_grad(|x| Ok(add_op(&x[0], &x[1])), &[0.3, -1.7], 1e-6, 1e-6);
    assert!(result.is_ok(), "add grad check failed: {:?}", result.err());
}
