//! The numeric types smooth functions can be evaluated over.

use rug::{Complex, Float, Rational};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};
use crate::primitive::{complex, float};

/// A value type that smooth functions accept and return.
///
/// Besides the field operations, a scalar names its additive and multiplicative identities, which
/// seed the derivatives of constants and of the identity function, and can tell whether it is
/// zero, which is how a division fault is detected before dividing.
///
/// [`Display`] is required so that diagnostics can render the constants of a function.
pub trait Scalar:
    Clone
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if the value is zero, i.e. dividing by it is undefined.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_scalar_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                /// Both `0.0` and `-0.0` are zero.
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_scalar_primitive!(f32, f64);

/// [`Float`]s are created with [`PRECISION`](crate::primitive::PRECISION) bits.
impl Scalar for Float {
    fn zero() -> Self {
        float(0)
    }

    fn one() -> Self {
        float(1)
    }

    fn is_zero(&self) -> bool {
        Float::is_zero(self)
    }
}

impl Scalar for Rational {
    fn zero() -> Self {
        Rational::new()
    }

    fn one() -> Self {
        Rational::from(1)
    }

    fn is_zero(&self) -> bool {
        self.cmp0() == Ordering::Equal
    }
}

/// [`Complex`] numbers are created with [`PRECISION`](crate::primitive::PRECISION) bits in both
/// parts.
impl Scalar for Complex {
    fn zero() -> Self {
        complex(0)
    }

    fn one() -> Self {
        complex(1)
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use super::*;

    #[test]
    fn signed_zero() {
        assert!(Scalar::is_zero(&-0.0f64));
        assert!(Scalar::is_zero(&0.0f32));
        assert!(!Scalar::is_zero(&f64::MIN_POSITIVE));
    }

    #[test]
    fn rug_identities() {
        assert!(Scalar::is_zero(&<Float as Scalar>::zero()));
        assert_eq!(<Float as Scalar>::one(), float(1));
        assert!(Scalar::is_zero(&<Rational as Scalar>::zero()));
        assert!(!Scalar::is_zero(&rational(1, 3)));
        assert!(Scalar::is_zero(&<Complex as Scalar>::zero()));
        assert!(!Scalar::is_zero(&complex((0, 1))));
    }
}
