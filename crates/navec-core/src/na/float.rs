use core::hash::{Hash, Hasher};

use num_traits::{Bounded, Float};

use super::{NaValue, NA_LABEL};
use crate::error::{NumericsError, Result};
use crate::num::Number;

/// A floating-point number that may be missing, with NaN reserved as NA.
///
/// Every NaN bit pattern reads as NA, so any operation producing NaN
/// (for example `0.0 / 0.0` in bulk kernels) yields a missing value.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct NaFloat<T>(T);

impl<T: Number + Float> NaValue for NaFloat<T> {
    type Value = T;

    #[inline]
    fn sentinel() -> T {
        T::nan()
    }

    #[inline]
    fn is_sentinel(raw: T) -> bool {
        raw.is_nan()
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        Self(raw)
    }

    #[inline]
    fn raw(self) -> T {
        self.0
    }

    fn min_value() -> Self {
        Self(<T as Bounded>::min_value())
    }

    fn max_value() -> Self {
        Self(<T as Bounded>::max_value())
    }
}

impl<T: Number + Float> Hash for NaFloat<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_na() {
            state.write_u64(0);
        } else if self.0 == T::ZERO {
            // 0.0 and -0.0 compare equal
            0.0f64.to_bits().hash(state);
        } else {
            self.0.to_f64_lossy().to_bits().hash(state);
        }
    }
}

impl_na_wrapper!(NaFloat, Number + Float);
impl_na_conversions!(NaFloat; f32, f64);
