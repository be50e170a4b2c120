//! Numeric type abstractions.
//!
//! This module defines the [`Number`] trait which abstracts over the primitive
//! integer and floating-point types so the NA wrappers, aggregates and
//! primitives can be written once.

use core::fmt::{Debug, Display};
use num_traits::{Bounded, Num, NumCast};

/// Trait for primitive numeric element types.
///
/// Integer implementations use native modular (wrapping) arithmetic for the
/// `wrapping_*` methods; floating-point implementations follow IEEE-754.
///
/// # Example
///
/// ```rust
/// use navec_core::Number;
///
/// fn total<T: Number>(values: &[T]) -> T {
///     values.iter().fold(T::ZERO, |acc, &x| acc.wrapping_add_value(x))
/// }
///
/// assert_eq!(total(&[120i8, 10]), -126);
/// assert_eq!(total(&[1.5f64, 2.0]), 3.5);
/// ```
pub trait Number:
    Num + NumCast + Bounded + Copy + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Addition that wraps on integer overflow.
    #[must_use]
    fn wrapping_add_value(self, rhs: Self) -> Self;

    /// Subtraction that wraps on integer overflow.
    #[must_use]
    fn wrapping_sub_value(self, rhs: Self) -> Self;

    /// Multiplication that wraps on integer overflow.
    #[must_use]
    fn wrapping_mul_value(self, rhs: Self) -> Self;

    /// Addition returning `None` on integer overflow.
    ///
    /// Floating-point addition never fails.
    #[must_use]
    fn checked_add_value(self, rhs: Self) -> Option<Self>;

    /// Division returning `None` for a zero divisor or integer overflow.
    #[must_use]
    fn checked_div_value(self, rhs: Self) -> Option<Self>;

    /// Check if the value is NaN. Always `false` for integers.
    #[must_use]
    fn is_nan_value(self) -> bool;

    /// The next representable value above `self`.
    ///
    /// Saturates at the maximum for integers and at infinity for floats.
    #[must_use]
    fn next_above(self) -> Self;

    /// Convert to `f64`, possibly losing precision.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`, returning `None` if it does not fit.
    #[must_use]
    fn from_usize_checked(value: usize) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Check if the value equals zero.
    #[must_use]
    fn is_zero_value(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_number_int {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const IS_FLOAT: bool = false;

            #[inline]
            fn wrapping_add_value(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn wrapping_sub_value(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn wrapping_mul_value(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn checked_add_value(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            #[inline]
            fn checked_div_value(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }

            #[inline]
            fn is_nan_value(self) -> bool {
                false
            }

            #[inline]
            fn next_above(self) -> Self {
                self.saturating_add(1)
            }

            #[inline]
            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_number_float {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const IS_FLOAT: bool = true;

            #[inline]
            fn wrapping_add_value(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub_value(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul_value(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn checked_add_value(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn checked_div_value(self, rhs: Self) -> Option<Self> {
                if rhs == 0.0 {
                    None
                } else {
                    Some(self / rhs)
                }
            }

            #[inline]
            fn is_nan_value(self) -> bool {
                self.is_nan()
            }

            fn next_above(self) -> Self {
                if self.is_nan() || self == <$t>::INFINITY {
                    return self;
                }
                if self == 0.0 {
                    return <$t>::from_bits(1);
                }
                let bits = self.to_bits();
                if self > 0.0 {
                    <$t>::from_bits(bits + 1)
                } else {
                    <$t>::from_bits(bits - 1)
                }
            }

            #[inline]
            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<i32 as Number>::ZERO, 0);
        assert_eq!(<u8 as Number>::ONE, 1);
        assert_eq!(<f64 as Number>::ZERO, 0.0);
        assert!(<f32 as Number>::IS_FLOAT);
        assert!(!<i64 as Number>::IS_FLOAT);
    }

    #[test]
    fn test_wrapping_integer_arithmetic() {
        assert_eq!(i16::MAX.wrapping_add_value(1), i16::MIN);
        assert_eq!(0u8.wrapping_sub_value(1), u8::MAX);
        assert_eq!(100i8.wrapping_mul_value(2), -56);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(i16::MAX.checked_add_value(1), None);
        assert_eq!(1i16.checked_add_value(1), Some(2));
        assert_eq!(5i32.checked_div_value(0), None);
        assert_eq!(i32::MIN.checked_div_value(-1), None);
        assert_eq!(5.0f64.checked_div_value(0.0), None);
        assert_eq!(f64::MAX.checked_add_value(f64::MAX), Some(f64::INFINITY));
    }

    #[test]
    fn test_is_nan_value() {
        assert!(f64::NAN.is_nan_value());
        assert!(!1.0f32.is_nan_value());
        assert!(!i32::MAX.is_nan_value());
    }

    #[test]
    fn test_next_above() {
        assert_eq!(i8::MIN.next_above(), -127);
        assert_eq!(u8::MAX.next_above(), u8::MAX);
        assert!(f64::MIN.next_above() > f64::MIN);
        assert!(f64::MIN.next_above() < -1.0e300);
        assert!(1.0f64.next_above() > 1.0);
        assert!(0.0f32.next_above() > 0.0);
        assert_eq!(f64::INFINITY.next_above(), f64::INFINITY);
    }

    #[test]
    fn test_from_usize_checked() {
        assert_eq!(i8::from_usize_checked(127), Some(127));
        assert_eq!(i8::from_usize_checked(128), None);
        assert_eq!(f64::from_usize_checked(10), Some(10.0));
    }
}
