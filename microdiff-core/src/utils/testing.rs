use crate::node::Node;

/// Checks that a node's value and gradient are within `tolerance` of the
/// expected ones. Panics with both numbers on mismatch.
pub fn check_node_near(actual: &Node, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value_diff = (actual.value() - expected_value).abs();
    if value_diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.value(),
            expected_value,
            value_diff,
            tolerance
        );
    }
    check_grad_near(actual, expected_grad, tolerance);
}

/// Checks that a node's gradient is within `tolerance` of `expected_grad`.
pub fn check_grad_near(actual: &Node, expected_grad: f64, tolerance: f64) {
    let grad_diff = (actual.grad() - expected_grad).abs();
    if grad_diff > tolerance {
        panic!(
            "Gradient mismatch on {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.grad(),
            expected_grad,
            grad_diff,
            tolerance
        );
    }
}

/// Builds `depth` stacked diamonds on top of `x`: each layer feeds the
/// previous node into two branches and adds them back together, so the number
/// of paths from the result back to `x` doubles per layer.
pub fn diamond_ladder(x: &Node, depth: usize) -> Node {
    let mut node = x.clone();
    for _ in 0..depth {
        let left = &node * 0.5;
        let right = node.tanh();
        node = &left + &right;
    }
    node
}
