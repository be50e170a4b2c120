//! Elementwise comparisons producing boolean masks.
//!
//! Comparisons use `PartialOrd`/`PartialEq`, so any comparison involving a
//! NaN, or an NA wrapper, is `false`.

use navec_core::error::{NumericsError, Result};

macro_rules! comparisons {
    ($($op:ident, $into:ident, $scalar:ident, $scalar_into:ident, $all:ident, $any:ident
        => $bound:path, |$a:ident, $b:ident| $body:expr, $what:literal;)*) => {$(
        #[doc = concat!("Write `lhs[i] ", $what, " rhs[i]` into `out`.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $into<T: $bound>(lhs: &[T], rhs: &[T], out: &mut [bool]) -> Result<()> {
            NumericsError::check_length("rhs", lhs.len(), rhs.len())?;
            NumericsError::check_length("out", lhs.len(), out.len())?;
            for ((o, $a), $b) in out.iter_mut().zip(lhs).zip(rhs) {
                *o = $body;
            }
            Ok(())
        }

        #[doc = concat!("Mask of `lhs[i] ", $what, " rhs[i]`.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $op<T: $bound>(lhs: &[T], rhs: &[T]) -> Result<Vec<bool>> {
            let mut out = vec![false; lhs.len()];
            $into(lhs, rhs, &mut out)?;
            Ok(out)
        }

        #[doc = concat!("Mask of `values[i] ", $what, " scalar`.")]
        #[must_use]
        pub fn $scalar<T: $bound>(values: &[T], scalar: &T) -> Vec<bool> {
            values.iter().map(|$a| { let $b = scalar; $body }).collect()
        }

        #[doc = concat!("Write `values[i] ", $what, " scalar` into `out`.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $scalar_into<T: $bound>(values: &[T], scalar: &T, out: &mut [bool]) -> Result<()> {
            NumericsError::check_length("out", values.len(), out.len())?;
            for (o, $a) in out.iter_mut().zip(values) {
                let $b = scalar;
                *o = $body;
            }
            Ok(())
        }

        #[doc = concat!("Check `lhs[i] ", $what, " rhs[i]` for every position.")]
        ///
        /// Empty inputs compare `true`.
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $all<T: $bound>(lhs: &[T], rhs: &[T]) -> Result<bool> {
            NumericsError::check_length("rhs", lhs.len(), rhs.len())?;
            Ok(lhs.iter().zip(rhs).all(|($a, $b)| $body))
        }

        #[doc = concat!("Check `lhs[i] ", $what, " rhs[i]` for at least one position.")]
        ///
        /// # Errors
        ///
        /// Returns [`NumericsError::LengthMismatch`] if the lengths differ.
        pub fn $any<T: $bound>(lhs: &[T], rhs: &[T]) -> Result<bool> {
            NumericsError::check_length("rhs", lhs.len(), rhs.len())?;
            Ok(lhs.iter().zip(rhs).any(|($a, $b)| $body))
        }
    )*};
}

comparisons! {
    less_than, less_than_into, less_than_scalar, less_than_scalar_into, less_than_all, less_than_any
        => PartialOrd, |a, b| a < b, "<";
    greater_than, greater_than_into, greater_than_scalar, greater_than_scalar_into, greater_than_all, greater_than_any
        => PartialOrd, |a, b| a > b, ">";
    equals, equals_into, equals_scalar, equals_scalar_into, equals_all, equals_any
        => PartialEq, |a, b| a == b, "==";
}
