//! The public handle to a smooth function.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Neg, Shl, Shr, Sub},
};
use tracing::{debug, trace};
use crate::{
    error::{kind::{DivisionByZero, InvalidOrder}, Error, EvalFault},
    node::{Branch, Node},
    scalar::Scalar,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A smooth function of one variable, represented by the expression tree it was built from.
///
/// Functions are built from [`SmoothFn::identity`] and [`SmoothFn::constant`] using the
/// arithmetic operators `+`, `-`, `*`, `/` and unary `-`, and composed with
/// [`SmoothFn::compose_after`] / [`SmoothFn::compose_before`] (or `<<` / `>>`). Operators on
/// references duplicate their operands, so the operands stay usable; operators on owned values
/// move the trees into the result.
///
/// A function can be evaluated at any point, and differentiated any number of times; every
/// derivative is a new, independent function.
///
/// ```
/// use smooth::SmoothFn;
///
/// let x = SmoothFn::<f64>::identity();
/// let f = &x * &x * &x;
///
/// assert_eq!(f.eval(2.0).unwrap(), 8.0);
/// assert_eq!(f.derivative().eval(2.0).unwrap(), 12.0);
/// assert_eq!(f.nth_derivative(2).eval(2.0).unwrap(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SmoothFn<T> {
    node: Node<T>,
}

impl<T: Scalar> SmoothFn<T> {
    /// Creates the identity function, `f(x) = x`.
    pub fn identity() -> Self {
        Self { node: Node::Identity }
    }

    /// Creates the constant function `f(x) = value`.
    pub fn constant(value: T) -> Self {
        Self { node: Node::Constant(value) }
    }

    /// Wraps an expression tree.
    pub fn from_node(node: Node<T>) -> Self {
        Self { node }
    }

    /// Returns the expression tree of the function.
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Unwraps the expression tree of the function.
    pub fn into_node(self) -> Node<T> {
        self.node
    }

    /// Returns the number of nodes in the expression tree.
    pub fn size(&self) -> usize {
        self.node.size()
    }

    /// Returns the height of the expression tree.
    pub fn depth(&self) -> usize {
        self.node.depth()
    }

    /// Evaluates the function at `x`.
    ///
    /// Returns a [`DivisionByZero`] error if a quotient's denominator evaluates to zero. The
    /// error's spans point at the quotient and its denominator in this function's rendered form
    /// (its [`Display`] output).
    pub fn eval(&self, x: T) -> Result<T, Error> {
        self.node.eval(&x).map_err(|fault| self.division_by_zero(fault))
    }

    /// Builds the error reported for an evaluation fault.
    fn division_by_zero(&self, fault: EvalFault) -> Error {
        debug!(path = ?fault.path(), "division by zero while evaluating `{}`", self);

        let quotient = fault.path();
        let mut denominator_path = quotient.to_vec();
        denominator_path.push(Branch::Right);
        let (_, spans) = self.node.render_spans(&[quotient, denominator_path.as_slice()]);
        let denominator = self.node
            .get(&denominator_path)
            .map(ToString::to_string)
            .unwrap_or_default();

        Error::new(spans.into_iter().flatten().collect(), DivisionByZero { denominator })
    }

    /// Returns the derivative of the function.
    pub fn derivative(&self) -> Self {
        let derivative = Self { node: self.node.differentiate() };
        trace!(size = self.size(), derivative_size = derivative.size(), "differentiated");
        derivative
    }

    /// Returns the `n`-th derivative of the function. The 0th derivative is an independent copy
    /// of the function itself.
    pub fn nth_derivative(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |f, _| f.derivative())
    }

    /// Returns the derivative of the given order, for callers that hold a signed order.
    ///
    /// Returns an [`InvalidOrder`] error if `order` is negative (or does not fit in a [`usize`]),
    /// spanning the whole rendered function.
    pub fn try_nth_derivative(&self, order: i64) -> Result<Self, Error> {
        match usize::try_from(order) {
            Ok(n) => Ok(self.nth_derivative(n)),
            Err(_) => {
                let len = self.to_string().chars().count();
                Err(Error::new(vec![0..len], InvalidOrder { order }))
            },
        }
    }

    /// Returns `self ∘ inner`, i.e. `x ↦ self(inner(x))`. Same as `self << inner`.
    pub fn compose_after(&self, inner: &Self) -> Self {
        Self::from_node(Node::composition(self.node.duplicate(), inner.node.duplicate()))
    }

    /// Returns `outer ∘ self`, i.e. `x ↦ outer(self(x))`. Same as `self >> outer`.
    pub fn compose_before(&self, outer: &Self) -> Self {
        outer.compose_after(self)
    }
}

impl<T: Scalar> From<T> for SmoothFn<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: Display> Display for SmoothFn<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.node, f)
    }
}

/// Implements a binary operator for every combination of owned and borrowed [`SmoothFn`]s. The
/// closure-like argument builds the resulting tree from the two operand trees.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $build:expr) => {
        impl<T: Scalar> $trait<SmoothFn<T>> for SmoothFn<T> {
            type Output = SmoothFn<T>;

            fn $method(self, rhs: SmoothFn<T>) -> SmoothFn<T> {
                let ($lhs, $rhs) = (self.node, rhs.node);
                SmoothFn::from_node($build)
            }
        }

        impl<T: Scalar> $trait<&SmoothFn<T>> for SmoothFn<T> {
            type Output = SmoothFn<T>;

            fn $method(self, rhs: &SmoothFn<T>) -> SmoothFn<T> {
                let ($lhs, $rhs) = (self.node, rhs.node.duplicate());
                SmoothFn::from_node($build)
            }
        }

        impl<T: Scalar> $trait<SmoothFn<T>> for &SmoothFn<T> {
            type Output = SmoothFn<T>;

            fn $method(self, rhs: SmoothFn<T>) -> SmoothFn<T> {
                let ($lhs, $rhs) = (self.node.duplicate(), rhs.node);
                SmoothFn::from_node($build)
            }
        }

        impl<T: Scalar> $trait<&SmoothFn<T>> for &SmoothFn<T> {
            type Output = SmoothFn<T>;

            fn $method(self, rhs: &SmoothFn<T>) -> SmoothFn<T> {
                let ($lhs, $rhs) = (self.node.duplicate(), rhs.node.duplicate());
                SmoothFn::from_node($build)
            }
        }
    };
}

impl_binary_op!(Add, add, |lhs, rhs| Node::sum(lhs, rhs));
impl_binary_op!(Sub, sub, |lhs, rhs| Node::difference(lhs, rhs));
impl_binary_op!(Mul, mul, |lhs, rhs| Node::product(lhs, rhs));
impl_binary_op!(Div, div, |lhs, rhs| Node::quotient(lhs, rhs));

// `f << g` is `f` after `g`
impl_binary_op!(Shl, shl, |lhs, rhs| Node::composition(lhs, rhs));

// `f >> g` is `g` after `f`
impl_binary_op!(Shr, shr, |lhs, rhs| Node::composition(rhs, lhs));

/// `-f` is built as `0 - f`.
impl<T: Scalar> Neg for SmoothFn<T> {
    type Output = SmoothFn<T>;

    fn neg(self) -> SmoothFn<T> {
        SmoothFn::from_node(Node::difference(Node::Constant(T::zero()), self.node))
    }
}

impl<T: Scalar> Neg for &SmoothFn<T> {
    type Output = SmoothFn<T>;

    fn neg(self) -> SmoothFn<T> {
        -self.clone()
    }
}
