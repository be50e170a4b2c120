//! Shapes, strides and flat offsets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};

/// Order in which a multidimensional index maps onto a flat buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Layout {
    /// The last index varies fastest (C order).
    #[default]
    RowMajor,
    /// The first index varies fastest (Fortran order).
    ColumnMajor,
}

/// Per-dimension stride multipliers for a shape.
///
/// ```rust
/// use navec_core::shape::{strides_for, Layout};
///
/// assert_eq!(strides_for(&[2, 3, 4], Layout::RowMajor), vec![12, 4, 1]);
/// assert_eq!(strides_for(&[2, 3, 4], Layout::ColumnMajor), vec![1, 2, 6]);
/// ```
#[must_use]
pub fn strides_for(shape: &[usize], layout: Layout) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1usize;
    match layout {
        Layout::RowMajor => {
            for (s, &extent) in strides.iter_mut().zip(shape).rev() {
                *s = stride;
                stride = stride.wrapping_mul(extent);
            }
        }
        Layout::ColumnMajor => {
            for (s, &extent) in strides.iter_mut().zip(shape) {
                *s = stride;
                stride = stride.wrapping_mul(extent);
            }
        }
    }
    strides
}

/// Total number of elements described by `shape`.
///
/// The empty shape describes a single scalar element.
///
/// # Errors
///
/// Returns [`NumericsError::Overflow`] if the product overflows `usize`.
pub fn element_count(shape: &[usize]) -> Result<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or(NumericsError::Overflow { name: "shape" })
}

/// Flat offset of `index`, or `None` if it is out of bounds.
#[must_use]
pub fn offset_of(shape: &[usize], strides: &[usize], index: &[usize]) -> Option<usize> {
    if index.len() != shape.len() {
        return None;
    }
    let mut offset = 0;
    for ((&i, &extent), &stride) in index.iter().zip(shape).zip(strides) {
        if i >= extent {
            return None;
        }
        offset += i * stride;
    }
    Some(offset)
}

/// Validate that a buffer of `len` elements exactly fills `shape`.
///
/// # Errors
///
/// Returns [`NumericsError::ShapeMismatch`] on a mismatch, or
/// [`NumericsError::Overflow`] if the shape's element count overflows.
pub fn check_shape(name: &'static str, shape: &[usize], len: usize) -> Result<()> {
    let expected = element_count(shape)?;
    if expected == len {
        Ok(())
    } else {
        Err(NumericsError::ShapeMismatch {
            name,
            shape: shape.to_vec(),
            expected,
            actual: len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_strides() {
        assert_eq!(strides_for(&[4], Layout::RowMajor), vec![1]);
        assert_eq!(strides_for(&[3, 5], Layout::RowMajor), vec![5, 1]);
        assert!(strides_for(&[], Layout::RowMajor).is_empty());
    }

    #[test]
    fn test_column_major_strides() {
        assert_eq!(strides_for(&[3, 5], Layout::ColumnMajor), vec![1, 3]);
    }

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[2, 3, 4]).unwrap(), 24);
        assert_eq!(element_count(&[]).unwrap(), 1);
        assert_eq!(element_count(&[5, 0]).unwrap(), 0);
        assert_eq!(
            element_count(&[usize::MAX, 2]),
            Err(NumericsError::Overflow { name: "shape" })
        );
    }

    #[test]
    fn test_offset_of() {
        let shape = [2, 3];
        let strides = strides_for(&shape, Layout::RowMajor);
        assert_eq!(offset_of(&shape, &strides, &[0, 0]), Some(0));
        assert_eq!(offset_of(&shape, &strides, &[1, 2]), Some(5));
        assert_eq!(offset_of(&shape, &strides, &[2, 0]), None);
        assert_eq!(offset_of(&shape, &strides, &[1]), None);

        let strides = strides_for(&shape, Layout::ColumnMajor);
        assert_eq!(offset_of(&shape, &strides, &[1, 2]), Some(5));
        assert_eq!(offset_of(&shape, &strides, &[1, 0]), Some(1));
    }

    #[test]
    fn test_check_shape() {
        assert!(check_shape("data", &[2, 2], 4).is_ok());
        let err = check_shape("data", &[2, 2], 5).unwrap_err();
        assert_eq!(
            err,
            NumericsError::ShapeMismatch {
                name: "data",
                shape: vec![2, 2],
                expected: 4,
                actual: 5
            }
        );
    }
}
