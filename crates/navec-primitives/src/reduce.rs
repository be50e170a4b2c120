//! Reductions: sums, means, variances and extrema.

use navec_core::error::{NumericsError, Result};
use navec_core::num::Number;
use num_traits::{Float, NumCast};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summation strategy for floating-point data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Summation {
    /// Left-to-right accumulation.
    #[default]
    Naive,
    /// Kahan–Babushka–Neumaier compensated summation.
    ///
    /// Tracks the low-order bits lost by each addition and adds them back at
    /// the end, so the error does not grow with the length of the input.
    KahanBabushkaNeumaier,
}

fn non_empty<T>(values: &[T]) -> Result<()> {
    if values.is_empty() {
        Err(NumericsError::EmptyInput { name: "values" })
    } else {
        Ok(())
    }
}

fn count_as<T: Number>(n: usize) -> Result<T> {
    T::from_usize_checked(n).ok_or(NumericsError::Overflow { name: "values" })
}

/// Sum of all elements. Integer sums wrap on overflow.
///
/// ```rust
/// let values: Vec<i32> = (1..=10).collect();
/// assert_eq!(navec_primitives::sum(&values), 55);
/// ```
#[must_use]
pub fn sum<T: Number>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |acc, &x| acc.wrapping_add_value(x))
}

/// Sum of all elements, failing on integer overflow.
///
/// # Errors
///
/// Returns [`NumericsError::Overflow`] if an intermediate sum overflows.
pub fn sum_checked<T: Number>(values: &[T]) -> Result<T> {
    values.iter().try_fold(T::ZERO, |acc, &x| {
        acc.checked_add_value(x)
            .ok_or(NumericsError::Overflow { name: "values" })
    })
}

/// Sum of all elements accumulated in a wider type `R`.
///
/// # Errors
///
/// Returns [`NumericsError::Overflow`] if an element does not fit in `R` or
/// the sum overflows `R`.
pub fn sum_as<T: Number, R: Number>(values: &[T]) -> Result<R> {
    values.iter().try_fold(R::ZERO, |acc, &x| {
        <R as NumCast>::from(x)
            .and_then(|x| acc.checked_add_value(x))
            .ok_or(NumericsError::Overflow { name: "values" })
    })
}

/// Sum of floating-point elements with the given strategy.
#[must_use]
pub fn sum_with<T: Number + Float>(values: &[T], strategy: Summation) -> T {
    trace!(len = values.len(), ?strategy, "sum");
    match strategy {
        Summation::Naive => sum(values),
        Summation::KahanBabushkaNeumaier => kbn_sum(values),
    }
}

/// Compensation is only tracked while the running sum is finite; once it
/// overflows or meets an infinity the plain IEEE-754 sum is returned.
fn kbn_sum<T: Float>(values: &[T]) -> T {
    let mut sum = T::zero();
    let mut compensation = T::zero();
    for &x in values {
        let t = sum + x;
        if t.is_finite() {
            if sum.abs() >= x.abs() {
                compensation = compensation + ((sum - t) + x);
            } else {
                compensation = compensation + ((x - t) + sum);
            }
        }
        sum = t;
    }
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}

/// Arithmetic mean computed in the element type.
///
/// Integer means truncate toward zero: the mean of `1..=10` as `i32` is `5`.
///
/// # Errors
///
/// - [`NumericsError::EmptyInput`] if `values` is empty
/// - [`NumericsError::Overflow`] if the length does not fit in `T`
pub fn mean<T: Number>(values: &[T]) -> Result<T> {
    non_empty(values)?;
    Ok(sum(values) / count_as::<T>(values.len())?)
}

/// Arithmetic mean computed in a floating-point type `R`.
///
/// ```rust
/// let values: Vec<i32> = (1..=10).collect();
/// assert_eq!(navec_primitives::mean_as::<i32, f64>(&values).unwrap(), 5.5);
/// ```
///
/// # Errors
///
/// - [`NumericsError::EmptyInput`] if `values` is empty
/// - [`NumericsError::Overflow`] if an element is not representable in `R`
pub fn mean_as<T: Number, R: Number + Float>(values: &[T]) -> Result<R> {
    non_empty(values)?;
    let total: R = sum_as(values)?;
    Ok(total / count_as::<R>(values.len())?)
}

/// Population variance (divides by `n`).
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if `values` is empty.
pub fn variance<T: Number + Float>(values: &[T]) -> Result<T> {
    variance_with_ddof(values, 0)
}

/// Sample variance (divides by `n - 1`).
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if `values` has fewer than two
/// elements.
pub fn sample_variance<T: Number + Float>(values: &[T]) -> Result<T> {
    variance_with_ddof(values, 1)
}

/// Variance with `ddof` delta degrees of freedom (divides by `n - ddof`).
///
/// Uses two passes: the mean first, then the squared deviations.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if `values.len() <= ddof`.
pub fn variance_with_ddof<T: Number + Float>(values: &[T], ddof: usize) -> Result<T> {
    non_empty(values)?;
    let n = values.len();
    if n <= ddof {
        return Err(NumericsError::EmptyInput { name: "values" });
    }
    let mean = mean(values)?;
    let squares = values.iter().fold(T::zero(), |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    Ok(squares / count_as::<T>(n - ddof)?)
}

/// Smallest element. A NaN element makes the result NaN.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if `values` is empty.
pub fn min<T: Number>(values: &[T]) -> Result<T> {
    extremum(values, |x, best| x < best)
}

/// Largest element. A NaN element makes the result NaN.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if `values` is empty.
pub fn max<T: Number>(values: &[T]) -> Result<T> {
    extremum(values, |x, best| x > best)
}

fn extremum<T: Number>(values: &[T], better: impl Fn(T, T) -> bool) -> Result<T> {
    let (&first, rest) = values
        .split_first()
        .ok_or(NumericsError::EmptyInput { name: "values" })?;
    let mut best = first;
    for &x in rest {
        if best.is_nan_value() {
            break;
        }
        if x.is_nan_value() || better(x, best) {
            best = x;
        }
    }
    Ok(best)
}
