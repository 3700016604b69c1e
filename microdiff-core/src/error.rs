use thiserror::Error;

/// Custom error type for microdiff.
///
/// Every variant is raised synchronously by the operation that detects it,
/// before any node is created. Division by a zero-valued node is deliberately
/// *not* an error: it yields IEEE infinity or NaN (see [`crate::ops::div_op`]).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroDiffError {
    /// A leaf was requested from a value with no real-number representation.
    #[error("Value {value} cannot be represented as a real number")]
    NotARealNumber { value: String },

    /// The exponent handed to `pow` is not a usable real constant (NaN or infinite).
    #[error("Invalid exponent for pow: {exponent} is not a finite real number")]
    InvalidExponent { exponent: f64 },

    /// `base ** exponent` is undefined over the reals.
    #[error("Domain error in pow: {base} ** {exponent} is undefined over the reals ({reason})")]
    PowDomain {
        base: f64,
        exponent: f64,
        reason: &'static str,
    },
}
