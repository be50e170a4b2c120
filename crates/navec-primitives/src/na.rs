//! Reductions and bulk arithmetic over NA wrappers.
//!
//! Reductions skip missing elements. Bulk arithmetic reinterprets the wrapper
//! slices as raw primitives, runs the plain kernel over the whole buffer and
//! then makes one pass writing the sentinel wherever either input was NA.
//! A raw result that happens to equal the sentinel also reads as NA.

use navec_core::error::{NumericsError, Result};
use navec_core::na::{as_raw_slice, as_raw_slice_mut, NaValue, TransparentWrapper};
use navec_core::num::Number;
use tracing::trace;

use crate::arithmetic;

fn present<N: NaValue>(values: &[N]) -> impl Iterator<Item = N::Value> + '_ {
    values.iter().filter_map(|x| x.to_option())
}

/// Number of missing elements.
#[must_use]
pub fn na_count<N: NaValue>(values: &[N]) -> usize {
    values.iter().filter(|x| x.is_na()).count()
}

/// Sum of the present elements. Integer sums wrap on overflow.
#[must_use]
pub fn na_sum<N: NaValue>(values: &[N]) -> N::Value {
    present(values).fold(<N::Value as Number>::ZERO, |acc, x| acc.wrapping_add_value(x))
}

/// Mean of the present elements, computed in the primitive type.
///
/// # Errors
///
/// - [`NumericsError::EmptyInput`] if every element is NA
/// - [`NumericsError::Overflow`] if the count does not fit in the primitive
pub fn na_mean<N: NaValue>(values: &[N]) -> Result<N::Value> {
    let (total, n) = present(values).fold((<N::Value as Number>::ZERO, 0usize), |(acc, n), x| {
        (acc.wrapping_add_value(x), n + 1)
    });
    if n == 0 {
        return Err(NumericsError::EmptyInput { name: "values" });
    }
    let n = <N::Value as Number>::from_usize_checked(n)
        .ok_or(NumericsError::Overflow { name: "values" })?;
    Ok(total / n)
}

/// Smallest present element.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if every element is NA.
pub fn na_min<N: NaValue>(values: &[N]) -> Result<N::Value> {
    present(values)
        .reduce(|a, b| if b < a { b } else { a })
        .ok_or(NumericsError::EmptyInput { name: "values" })
}

/// Largest present element.
///
/// # Errors
///
/// Returns [`NumericsError::EmptyInput`] if every element is NA.
pub fn na_max<N: NaValue>(values: &[N]) -> Result<N::Value> {
    present(values)
        .reduce(|a, b| if b > a { b } else { a })
        .ok_or(NumericsError::EmptyInput { name: "values" })
}

fn na_binary_into<N>(
    lhs: &[N],
    rhs: &[N],
    out: &mut [N],
    kernel: impl FnOnce(&[N::Value], &[N::Value], &mut [N::Value]) -> Result<()>,
) -> Result<()>
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    NumericsError::check_length("rhs", lhs.len(), rhs.len())?;
    NumericsError::check_length("out", lhs.len(), out.len())?;
    kernel(as_raw_slice(lhs), as_raw_slice(rhs), as_raw_slice_mut(out))?;

    let mut missing = 0usize;
    for ((o, a), b) in out.iter_mut().zip(lhs).zip(rhs) {
        if a.is_na() || b.is_na() {
            *o = N::na();
            missing += 1;
        }
    }
    trace!(len = lhs.len(), missing, "na post-pass");
    Ok(())
}

macro_rules! na_ops {
    ($($name:ident => $kernel:path, $verb:literal;)*) => {$(
        #[doc = concat!($verb, " two NA slices elementwise into `out`.")]
        ///
        /// Positions where either input is NA are NA in the output.
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $name<N>(lhs: &[N], rhs: &[N], out: &mut [N]) -> Result<()>
        where
            N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
        {
            na_binary_into(lhs, rhs, out, $kernel)
        }
    )*};
}

na_ops! {
    na_add_into => arithmetic::add_into, "Add";
    na_subtract_into => arithmetic::subtract_into, "Subtract";
    na_multiply_into => arithmetic::multiply_into, "Multiply";
}

/// Divide two NA slices elementwise into `out`.
///
/// Division by zero, integer overflow and NA inputs all yield NA.
///
/// # Errors
///
/// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
pub fn na_divide_into<N>(lhs: &[N], rhs: &[N], out: &mut [N]) -> Result<()>
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    na_binary_into(lhs, rhs, out, |raw_lhs, raw_rhs, raw_out| {
        for ((o, &a), &b) in raw_out.iter_mut().zip(raw_lhs).zip(raw_rhs) {
            *o = a.checked_div_value(b).unwrap_or_else(N::sentinel);
        }
        Ok(())
    })
}
