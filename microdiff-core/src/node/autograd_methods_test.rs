use super::*;
use crate::utils::testing::{check_grad_near, diamond_ladder};
use approx::assert_relative_eq;

#[test]
fn test_backward_seeds_output_with_one() {
    let x = Node::leaf(5.0);
    x.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_backward_twice_doubles_gradients() {
    let x = Node::leaf(-4.0);
    let z = 2.0 * &x + 2.0 + &x;
    let y = &z * &x + z.relu();

    y.backward();
    let (gx, gz, gy) = (x.grad(), z.grad(), y.grad());
    y.backward();

    assert_eq!(x.grad(), 2.0 * gx);
    assert_eq!(z.grad(), 2.0 * gz);
    assert_eq!(y.grad(), 2.0 * gy);
}

#[test]
fn test_backward_twice_doubles_for_every_strategy() {
    for strategy in [
        BackwardStrategy::Topological,
        BackwardStrategy::PerEdge,
        BackwardStrategy::PerEdgeRecursive,
    ] {
        let x = Node::leaf(0.7);
        let y = diamond_ladder(&x, 5);
        y.backward_with(strategy);
        let once = x.grad();
        y.backward_with(strategy);
        assert_relative_eq!(x.grad(), 2.0 * once, max_relative = 1e-12);
    }
}

#[test]
fn test_zero_grad_graph_resets_reachable_only() {
    let a = Node::leaf(2.0);
    let b = Node::leaf(3.0);
    let c = &a * &b;
    let d = &c + 1.0;
    d.backward();
    assert_eq!(a.grad(), 3.0);

    // A node built on top of `d` is not reachable from `d`.
    let e = &d * 2.0;
    e.backward();
    assert_eq!(d.grad(), 3.0);

    d.zero_grad_graph();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);
    assert_eq!(d.grad(), 0.0);
    assert_eq!(e.grad(), 1.0);

    d.backward();
    check_grad_near(&a, 3.0, 1e-12);
}

#[test]
fn test_zero_grad_single_node() {
    let a = Node::leaf(2.0);
    let b = &a * &a;
    b.backward();
    b.zero_grad();
    assert_eq!(b.grad(), 0.0);
    assert_eq!(a.grad(), 4.0);
}

#[test]
fn test_backward_with_reports_stats() {
    let a = Node::leaf(1.0);
    let b = &a + &a;
    let stats = b.backward_with(BackwardStrategy::Topological);
    assert_eq!(
        stats,
        PropagationStats {
            node_visits: 2,
            edge_traversals: 2
        }
    );

    b.zero_grad_graph();
    let stats = b.backward_with(BackwardStrategy::PerEdge);
    assert_eq!(stats.node_visits, 3);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_default_strategy_is_topological() {
    assert_eq!(BackwardStrategy::default(), BackwardStrategy::Topological);
}
