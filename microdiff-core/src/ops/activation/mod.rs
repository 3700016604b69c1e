//! # Activation Functions
//!
//! Non-linear unary operations.
//!
//! ## Currently Implemented:
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit, subgradient 0 at the kink.
//! - [`tanh`](tanh/fn.tanh_op.html): Hyperbolic tangent.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
