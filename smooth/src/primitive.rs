//! Functions to construct [`Float`]s, [`Rational`]s, and [`Complex`] numbers from various types.

use rug::{Assign, Complex, Float, Integer, Rational};

/// The number of bits of precision to use for [`Float`] and [`Complex`] values.
pub const PRECISION: u32 = 1 << 9;

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Rational`] `num / den`, canonicalized.
///
/// Panics if `den` is zero.
pub fn rational<N, D>(num: N, den: D) -> Rational
where
    Integer: From<N> + From<D>,
{
    Rational::from((Integer::from(num), Integer::from(den)))
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_is_canonical() {
        assert_eq!(rational(2, 4), rational(1, 2));
        assert_eq!(rational(3, -6), rational(-1, 2));
    }

    #[test]
    fn float_precision() {
        assert_eq!(float(0.5).prec(), PRECISION);
        assert_eq!(complex((1, 2)).prec(), (PRECISION, PRECISION));
    }
}
