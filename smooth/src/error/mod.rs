//! Errors raised while evaluating and differentiating smooth functions.
//!
//! At the [`Node`](crate::node::Node) level, evaluation reports an [`EvalFault`], which only
//! records where in the tree the fault happened. [`SmoothFn`](crate::SmoothFn) turns faults into
//! [`Error`]s whose spans point into its rendered form, ready to be reported with [`ariadne`].

pub mod kind;

use crate::node::Branch;

pub use smooth_error::{Error, ErrorKind};

/// A quotient was evaluated at a point where its denominator is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalFault {
    /// The path from the root of the evaluated tree to the failing quotient.
    path: Vec<Branch>,
}

impl EvalFault {
    /// Creates a fault for the quotient found at `path`.
    pub(crate) fn new(path: Vec<Branch>) -> Self {
        Self { path }
    }

    /// Returns the path from the root of the evaluated tree to the failing quotient.
    pub fn path(&self) -> &[Branch] {
        &self.path
    }
}
