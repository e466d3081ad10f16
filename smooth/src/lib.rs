//! Exact symbolic differentiation of smooth functions of one variable.
//!
//! A [`SmoothFn`] is an expression tree built from the identity function, constants, the four
//! arithmetic operators, and function composition. It can be evaluated at any point, and
//! differentiated any number of times by structurally rewriting the tree with the sum,
//! difference, product, quotient, and chain rules. Nothing is approximated numerically, and
//! nothing is simplified: the derivative of `x * x` is the tree `1 * x + x * 1`.
//!
//! ```
//! use smooth::SmoothFn;
//!
//! let x = SmoothFn::<f64>::identity();
//! let square = &x * &x;
//!
//! // (x^2 ∘ (x + 1))' = 2(x + 1)
//! let f = &square << &(&x + &SmoothFn::constant(1.0));
//! assert_eq!(f.eval(2.0).unwrap(), 9.0);
//! assert_eq!(f.derivative().eval(2.0).unwrap(), 6.0);
//! ```
//!
//! Functions are generic over the [`Scalar`] they are evaluated with: `f32`, `f64`, and
//! [`rug`]'s arbitrary-precision `Float`, exact `Rational`, and `Complex` are supported.
//!
//! # Errors
//!
//! Evaluating a quotient whose denominator is zero at the given point is an error, never a
//! silently infinite value. Errors are [`smooth_error::Error`]s whose spans point into the
//! rendered function, so they can be reported with [`ariadne`]:
//!
//! ```
//! use ariadne::Source;
//! use smooth::{error::kind::DivisionByZero, SmoothFn};
//!
//! let x = SmoothFn::<f64>::identity();
//! let f = &x / &(&x - &SmoothFn::constant(1.0));
//!
//! let err = f.eval(1.0).unwrap_err();
//! assert!(err.is::<DivisionByZero>());
//!
//! let mut report = Vec::new();
//! err.build_report("f").write(("f", Source::from(f.to_string())), &mut report).unwrap();
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for [`Node`] and [`SmoothFn`].
//! - `bin`: Builds the `tabulate` demo binary, which logs through `tracing-subscriber`.

pub mod error;
pub mod func;
pub mod node;
pub mod primitive;
pub mod scalar;

pub use func::SmoothFn;
pub use node::{Branch, Node};
pub use scalar::Scalar;
