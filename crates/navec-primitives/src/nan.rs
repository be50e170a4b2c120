//! Floating-point reductions that skip NaN.

use navec_core::error::{NumericsError, Result};
use navec_core::num::Number;
use num_traits::Float;

use crate::reduce;

fn present<T: Float>(values: &[T]) -> impl Iterator<Item = T> + '_ {
    values.iter().copied().filter(|x| !x.is_nan())
}

/// Number of non-NaN elements.
#[must_use]
pub fn nan_count<T: Float>(values: &[T]) -> usize {
    present(values).count()
}

/// Sum of the non-NaN elements. All-NaN input sums to zero.
#[must_use]
pub fn nan_sum<T: Number + Float>(values: &[T]) -> T {
    present(values).fold(T::ZERO, |acc, x| acc + x)
}

/// Mean of the non-NaN elements.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if no element is a number.
pub fn nan_mean<T: Number + Float>(values: &[T]) -> Result<T> {
    let (total, n) = present(values).fold((T::ZERO, 0usize), |(acc, n), x| (acc + x, n + 1));
    if n == 0 {
        return Err(NumericsError::EmptyInput { name: "values" });
    }
    Ok(total / count(n)?)
}

/// Smallest non-NaN element.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if no element is a number.
pub fn nan_min<T: Number + Float>(values: &[T]) -> Result<T> {
    present(values)
        .reduce(|a, b| if b < a { b } else { a })
        .ok_or(NumericsError::EmptyInput { name: "values" })
}

/// Largest non-NaN element.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if no element is a number.
pub fn nan_max<T: Number + Float>(values: &[T]) -> Result<T> {
    present(values)
        .reduce(|a, b| if b > a { b } else { a })
        .ok_or(NumericsError::EmptyInput { name: "values" })
}

/// Population variance of the non-NaN elements.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if no element is a number.
pub fn nan_variance<T: Number + Float>(values: &[T]) -> Result<T> {
    let kept: Vec<T> = present(values).collect();
    reduce::variance(&kept)
}

fn count<T: Number>(n: usize) -> Result<T> {
    T::from_usize_checked(n).ok_or(NumericsError::Overflow { name: "values" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DATA: [f64; 6] = [1.0, f64::NAN, 2.0, 3.0, f64::NAN, 4.0];

    #[test]
    fn test_nan_sum_and_count() {
        assert_eq!(nan_count(&DATA), 4);
        assert_relative_eq!(nan_sum(&DATA), 10.0);
        assert_eq!(nan_sum(&[f32::NAN]), 0.0);
    }

    #[test]
    fn test_nan_mean() {
        assert_relative_eq!(nan_mean(&DATA).unwrap(), 2.5);
        assert_eq!(
            nan_mean(&[f64::NAN, f64::NAN]),
            Err(NumericsError::EmptyInput { name: "values" })
        );
    }

    #[test]
    fn test_nan_extrema() {
        assert_eq!(nan_min(&DATA), Ok(1.0));
        assert_eq!(nan_max(&DATA), Ok(4.0));
        assert_eq!(nan_min(&[f64::NAN, -2.0]), Ok(-2.0));
        assert!(nan_max::<f64>(&[]).is_err());
    }

    #[test]
    fn test_nan_variance() {
        assert_relative_eq!(nan_variance(&DATA).unwrap(), 1.25);
        assert!(nan_variance(&[f64::NAN]).is_err());
    }
}
