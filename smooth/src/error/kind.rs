use ariadne::Fmt;
use smooth_attrs::ErrorKind;
use smooth_error::{ErrorKind, EXPR};

/// A quotient was evaluated at a point where its denominator is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = [
        "this quotient is undefined at the given point",
        "this denominator evaluated to zero",
    ],
    help = format!(
        "evaluate the function at a point where {} is not zero",
        (&self.denominator).fg(EXPR),
    ),
)]
pub struct DivisionByZero {
    /// The rendered denominator of the failing quotient.
    pub denominator: String,
}

/// The order of a derivative was negative, or too large to count.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take a derivative of order {}", self.order),
    labels = ["this function"],
    help = "the order of a derivative must be a non-negative integer",
)]
pub struct InvalidOrder {
    /// The order that was requested.
    pub order: i64,
}
