use crate::error::MicroDiffError;
use crate::node::Node;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] MicroDiffError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },
}

/// Central-difference estimate of `d func / d inputs[input_index]`:
/// `(f(x + h) - f(x - h)) / 2h`, each side evaluated on a fresh graph.
pub fn numerical_grad<F>(
    func: &F,
    inputs: &[f64],
    input_index: usize,
    epsilon: f64,
) -> Result<(f64, f64, f64), MicroDiffError>
where
    F: Fn(&[Node]) -> Result<Node, MicroDiffError>,
{
    let evaluate = |delta: f64| -> Result<f64, MicroDiffError> {
        let leaves: Vec<Node> = inputs
            .iter()
            .enumerate()
            .map(|(i, &x)| Node::leaf(if i == input_index { x + delta } else { x }))
            .collect();
        Ok(func(&leaves)?.value())
    };

    let loss_plus = evaluate(epsilon)?;
    let loss_minus = evaluate(-epsilon)?;
    Ok(((loss_plus - loss_minus) / (2.0 * epsilon), loss_plus, loss_minus))
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds one leaf per entry of `inputs`, runs `func` and `backward`, then
/// compares every leaf's gradient with [`numerical_grad`]. A pair passes if
/// either the absolute or the relative difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, MicroDiffError>,
{
    let leaves: Vec<Node> = inputs.iter().map(|&x| Node::leaf(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical_grad,
            });
        }

        let (numerical, loss_plus, loss_minus) =
            numerical_grad(&func, inputs, input_index, epsilon)?;
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical).abs();
        let scale = analytical_grad.abs().max(numerical.abs()).max(1.0);
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            input_index, analytical_grad, numerical, difference
        );
        if difference > tolerance && difference / scale > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad: numerical,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
