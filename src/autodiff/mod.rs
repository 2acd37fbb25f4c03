//! Forward-mode automatic differentiation on dual numbers.
//!
//! Functions written once against [`Scalar`] run on plain floats and on
//! [`Dual`] values alike; running them on a seeded `Dual` yields the exact
//! derivative alongside the value.
//!
//! ```
//! use dualgrad::autodiff::{differentiate, Scalar};
//!
//! fn poly<S: Scalar>(x: S) -> S {
//!     x * x + S::from_constant(3) * x + S::from_constant(2)
//! }
//!
//! assert_eq!(poly(5.0), 42.0);
//! assert_eq!(differentiate(poly, 5.0), 13.0);
//! ```

pub mod scalar;
pub mod dual;
pub mod differentiate;

pub use scalar::Scalar;
pub use dual::Dual;
pub use differentiate::{differentiate, evaluate, second_derivative};
