//! Elementwise arithmetic.
//!
//! Every binary operation comes in four forms:
//!
//! - `op_into(lhs, rhs, out)` writes into a caller-provided destination
//! - `op(lhs, rhs)` allocates the result
//! - `op_scalar(values, scalar)` applies a scalar right-hand side
//! - `op_in_place(target, rhs)` overwrites the left operand
//!
//! Lengths are validated before anything is written. Integer addition,
//! subtraction and multiplication wrap on overflow.

use navec_core::error::{NumericsError, Result};
use navec_core::num::Number;
use tracing::debug;

fn check_operands(lhs: usize, rhs: usize, out: usize) -> Result<()> {
    NumericsError::check_length("rhs", lhs, rhs)?;
    NumericsError::check_length("out", lhs, out)
}

fn zip_into<T: Copy>(lhs: &[T], rhs: &[T], out: &mut [T], op: impl Fn(T, T) -> T) -> Result<()> {
    check_operands(lhs.len(), rhs.len(), out.len())?;
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = op(a, b);
    }
    Ok(())
}

fn zip_in_place<T: Copy>(target: &mut [T], rhs: &[T], op: impl Fn(T, T) -> T) -> Result<()> {
    NumericsError::check_length("rhs", target.len(), rhs.len())?;
    for (t, &b) in target.iter_mut().zip(rhs) {
        *t = op(*t, b);
    }
    Ok(())
}

macro_rules! wrapping_ops {
    ($($op:ident, $into:ident, $scalar:ident, $in_place:ident, $scalar_in_place:ident => $method:ident, $verb:literal;)*) => {$(
        #[doc = concat!($verb, " two slices elementwise into `out`.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $into<T: Number>(lhs: &[T], rhs: &[T], out: &mut [T]) -> Result<()> {
            zip_into(lhs, rhs, out, T::$method)
        }

        #[doc = concat!($verb, " two slices elementwise.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $op<T: Number>(lhs: &[T], rhs: &[T]) -> Result<Vec<T>> {
            let mut out = vec![T::ZERO; lhs.len()];
            $into(lhs, rhs, &mut out)?;
            Ok(out)
        }

        #[doc = concat!($verb, " a scalar with every element.")]
        #[must_use]
        pub fn $scalar<T: Number>(values: &[T], scalar: T) -> Vec<T> {
            values.iter().map(|&x| x.$method(scalar)).collect()
        }

        #[doc = concat!($verb, " `rhs` into `target` elementwise.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $in_place<T: Number>(target: &mut [T], rhs: &[T]) -> Result<()> {
            zip_in_place(target, rhs, T::$method)
        }

        #[doc = concat!($verb, " a scalar into every element of `target`.")]
        pub fn $scalar_in_place<T: Number>(target: &mut [T], scalar: T) {
            for x in target.iter_mut() {
                *x = x.$method(scalar);
            }
        }
    )*};
}

wrapping_ops! {
    add, add_into, add_scalar, add_in_place, add_scalar_in_place => wrapping_add_value, "Add";
    subtract, subtract_into, subtract_scalar, subtract_in_place, subtract_scalar_in_place => wrapping_sub_value, "Subtract";
    multiply, multiply_into, multiply_scalar, multiply_in_place, multiply_scalar_in_place => wrapping_mul_value, "Multiply";
}

/// Scan divisors for the first position that cannot be divided.
fn check_divisors<T: Number>(lhs: &[T], rhs: &[T]) -> Result<()> {
    for (index, (&a, &b)) in lhs.iter().zip(rhs).enumerate() {
        if a.checked_div_value(b).is_none() {
            if b.is_zero_value() {
                debug!(index, "zero divisor");
                return Err(NumericsError::DivideByZero { name: "rhs", index });
            }
            return Err(NumericsError::Overflow { name: "lhs" });
        }
    }
    Ok(())
}

fn check_scalar_divisor<T: Number>(scalar: T) -> Result<()> {
    if scalar.is_zero_value() {
        return Err(NumericsError::DivideByZero {
            name: "scalar",
            index: 0,
        });
    }
    Ok(())
}

/// Divide two slices elementwise into `out`.
///
/// Floating-point divisors of zero are rejected just like integer ones.
///
/// # Errors
///
/// - [`NumericsError::LengthMismatch`] if the lengths differ
/// - [`NumericsError::DivideByZero`] naming the first zero divisor
/// - [`NumericsError::Overflow`] for `MIN / -1` on signed integers
///
/// `out` is untouched when an error is returned.
pub fn divide_into<T: Number>(lhs: &[T], rhs: &[T], out: &mut [T]) -> Result<()> {
    check_operands(lhs.len(), rhs.len(), out.len())?;
    check_divisors(lhs, rhs)?;
    zip_into(lhs, rhs, out, |a, b| a / b)
}

/// Divide two slices elementwise.
///
/// # Errors
///
/// See [`divide_into`].
pub fn divide<T: Number>(lhs: &[T], rhs: &[T]) -> Result<Vec<T>> {
    let mut out = vec![T::ZERO; lhs.len()];
    divide_into(lhs, rhs, &mut out)?;
    Ok(out)
}

/// Divide every element by a scalar.
///
/// # Errors
///
/// - [`NumericsError::DivideByZero`] if `scalar` is zero
/// - [`NumericsError::Overflow`] for `MIN / -1` on signed integers
pub fn divide_scalar<T: Number>(values: &[T], scalar: T) -> Result<Vec<T>> {
    check_scalar_divisor(scalar)?;
    values
        .iter()
        .map(|&x| x.checked_div_value(scalar).ok_or(NumericsError::Overflow { name: "values" }))
        .collect()
}

/// Divide `target` by `rhs` elementwise.
///
/// # Errors
///
/// See [`divide_into`]. `target` is untouched when an error is returned.
pub fn divide_in_place<T: Number>(target: &mut [T], rhs: &[T]) -> Result<()> {
    NumericsError::check_length("rhs", target.len(), rhs.len())?;
    check_divisors(target, rhs)?;
    zip_in_place(target, rhs, |a, b| a / b)
}

/// Divide every element of `target` by a scalar.
///
/// # Errors
///
/// See [`divide_scalar`]. `target` is untouched when an error is returned.
pub fn divide_scalar_in_place<T: Number>(target: &mut [T], scalar: T) -> Result<()> {
    check_scalar_divisor(scalar)?;
    if target.iter().any(|&x| x.checked_div_value(scalar).is_none()) {
        return Err(NumericsError::Overflow { name: "target" });
    }
    for x in target.iter_mut() {
        *x = *x / scalar;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_forms() {
        let a = [1, 2, 3];
        let b = [10, 20, 30];
        assert_eq!(add(&a, &b).unwrap(), vec![11, 22, 33]);
        assert_eq!(add_scalar(&a, 1), vec![2, 3, 4]);

        let mut out = [0; 3];
        add_into(&a, &b, &mut out).unwrap();
        assert_eq!(out, [11, 22, 33]);

        let mut target = a;
        add_in_place(&mut target, &b).unwrap();
        assert_eq!(target, [11, 22, 33]);
        add_scalar_in_place(&mut target, -1);
        assert_eq!(target, [10, 21, 32]);
    }

    #[test]
    fn test_integer_ops_wrap() {
        assert_eq!(add(&[i8::MAX], &[1]).unwrap(), vec![i8::MIN]);
        assert_eq!(subtract(&[0u8], &[1]).unwrap(), vec![u8::MAX]);
        assert_eq!(multiply_scalar(&[100i8], 2), vec![-56]);
    }

    #[test]
    fn test_length_mismatch_leaves_out_untouched() {
        let mut out = [7.0; 2];
        let err = subtract_into(&[1.0, 2.0], &[1.0], &mut out).unwrap_err();
        assert_eq!(
            err,
            NumericsError::LengthMismatch {
                name: "rhs",
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(out, [7.0, 7.0]);

        let err = multiply_into(&[1.0, 2.0], &[1.0, 2.0], &mut [0.0; 3]).unwrap_err();
        assert!(matches!(err, NumericsError::LengthMismatch { name: "out", .. }));
    }

    #[test]
    fn test_divide() {
        let q = divide(&[1.0, 9.0], &[4.0, 3.0]).unwrap();
        assert_relative_eq!(q[0], 0.25);
        assert_relative_eq!(q[1], 3.0);
        assert_eq!(divide(&[7, -7], &[2, 2]).unwrap(), vec![3, -3]);
    }

    #[test]
    fn test_divide_by_zero_reports_first_index() {
        let mut out = [0; 4];
        let err = divide_into(&[1, 2, 3, 4], &[1, 0, 1, 0], &mut out).unwrap_err();
        assert_eq!(err, NumericsError::DivideByZero { name: "rhs", index: 1 });
        assert_eq!(out, [0; 4]);

        assert!(matches!(
            divide(&[1.0], &[0.0]),
            Err(NumericsError::DivideByZero { index: 0, .. })
        ));
        assert_eq!(
            divide_scalar(&[1, 2], 0),
            Err(NumericsError::DivideByZero {
                name: "scalar",
                index: 0
            })
        );
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(
            divide(&[i32::MIN], &[-1]),
            Err(NumericsError::Overflow { name: "lhs" })
        );
        let mut target = [i64::MIN, 4];
        assert!(divide_scalar_in_place(&mut target, -1).is_err());
        assert_eq!(target, [i64::MIN, 4]);
    }

    #[test]
    fn test_divide_in_place() {
        let mut target = [8.0f32, 6.0];
        divide_in_place(&mut target, &[2.0, 3.0]).unwrap();
        assert_eq!(target, [4.0, 2.0]);
        divide_scalar_in_place(&mut target, 2.0).unwrap();
        assert_eq!(target, [2.0, 1.0]);
    }
}
