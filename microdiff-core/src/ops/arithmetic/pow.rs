// src/ops/arithmetic/pow.rs

use crate::error::MicroDiffError;
use crate::node::{Edge, Node};
use crate::ops::Op;
use log::debug;
use std::fmt;

/// A constant exponent for [`pow_op`].
///
/// The exponent is never a node and never receives a gradient.
/// Integer exponents allow negative bases; float exponents do too when they
/// are integral (`(-2.0) ** 2.0 == 4.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Int(i32),
    Float(f64),
}

impl Exponent {
    /// The exponent as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Exponent::Int(e) => f64::from(e),
            Exponent::Float(e) => e,
        }
    }

    fn is_integral(self) -> bool {
        match self {
            Exponent::Int(_) => true,
            Exponent::Float(e) => e.fract() == 0.0,
        }
    }
}

impl From<i32> for Exponent {
    fn from(e: i32) -> Self {
        Exponent::Int(e)
    }
}

impl From<f64> for Exponent {
    fn from(e: f64) -> Self {
        Exponent::Float(e)
    }
}

impl From<f32> for Exponent {
    fn from(e: f32) -> Self {
        Exponent::Float(f64::from(e))
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Int(e) => write!(f, "{}", e),
            Exponent::Float(e) => write!(f, "{}", e),
        }
    }
}

/// Raises `base` to a constant power.
///
/// Records one parent, `base`, with local derivative `p * base^(p - 1)`
/// (0 when `p == 0`).
///
/// # Errors
/// * [`MicroDiffError::InvalidExponent`] if a float exponent is NaN or infinite.
/// * [`MicroDiffError::PowDomain`] if the power is undefined over the reals:
///   a negative base with a non-integral exponent, or a zero base with a
///   negative exponent.
///
/// Both are detected before any node is created.
pub fn pow_op<E>(base: &Node, exponent: E) -> Result<Node, MicroDiffError>
where
    E: Into<Exponent>,
{
    let exponent = exponent.into();
    check_pow_domain(base.value(), exponent)?;
    Ok(pow_unchecked(base, exponent))
}

/// Validates `base ** exponent` over the reals.
fn check_pow_domain(base: f64, exponent: Exponent) -> Result<(), MicroDiffError> {
    let p = exponent.as_f64();
    if !p.is_finite() {
        debug!("pow: rejected non-finite exponent {}", p);
        return Err(MicroDiffError::InvalidExponent { exponent: p });
    }
    if base < 0.0 && !exponent.is_integral() {
        debug!("pow: rejected negative base {} with exponent {}", base, p);
        return Err(MicroDiffError::PowDomain {
            base,
            exponent: p,
            reason: "negative base with non-integer exponent",
        });
    }
    if base == 0.0 && p < 0.0 {
        debug!("pow: rejected zero base with exponent {}", p);
        return Err(MicroDiffError::PowDomain {
            base,
            exponent: p,
            reason: "zero base with negative exponent",
        });
    }
    Ok(())
}

/// Power node without the domain check.
///
/// `div_op` goes through here so that dividing by zero produces infinity/NaN
/// instead of an error.
pub(crate) fn pow_unchecked(base: &Node, exponent: Exponent) -> Node {
    let x = base.value();
    let (value, local_grad) = match exponent {
        Exponent::Int(0) => (1.0, 0.0),
        Exponent::Int(e) => {
            // e - 1 only overflows for i32::MIN
            let x_pow_e_minus_1 = match e.checked_sub(1) {
                Some(m) => x.powi(m),
                None => x.powf(f64::from(e) - 1.0),
            };
            (x.powi(e), f64::from(e) * x_pow_e_minus_1)
        }
        Exponent::Float(e) if e == 0.0 => (1.0, 0.0),
        Exponent::Float(e) => (x.powf(e), e * x.powf(e - 1.0)),
    };
    Node::from_parts(value, vec![Edge::new(base, local_grad)], Op::Pow(exponent))
}

impl Node {
    /// `self ** exponent`. See [`pow_op`].
    pub fn pow<E>(&self, exponent: E) -> Result<Node, MicroDiffError>
    where
        E: Into<Exponent>,
    {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
