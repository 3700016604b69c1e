//! # microdiff-core
//!
//! Scalar reverse-mode automatic differentiation.
//!
//! Every arithmetic operation on a [`Node`] records itself as a new node in a
//! directed acyclic graph, together with the local derivative with respect to
//! each of its inputs. Calling [`Node::backward`] on an output then walks that
//! graph once and accumulates, in every ancestor, the partial derivative of the
//! output with respect to that ancestor.
//!
//! ```rust
//! use microdiff_core::Node;
//!
//! let x = Node::leaf(-4.0);
//! let z = 2.0 * &x + 2.0 + &x;
//! let q = z.relu() + &z * &x;
//! let h = (&z * &z).relu();
//! let y = &h + &q + &q * &x;
//! y.backward();
//!
//! assert_eq!(y.value(), -20.0);
//! assert_eq!(x.grad(), 46.0);
//! ```

// Core modules of the crate
pub mod autograd;
pub mod error;
pub mod node;
pub mod ops;
pub mod utils;

// Re-export the main types so they are reachable as `microdiff_core::Node` etc.
pub use autograd::{BackwardStrategy, PropagationStats};
pub use error::MicroDiffError;
pub use node::{Edge, Node};
pub use ops::arithmetic::pow::Exponent;
pub use ops::Op;
// Re-export traits required by public functions
pub use num_traits;
