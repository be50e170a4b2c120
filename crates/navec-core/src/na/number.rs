use core::hash::{Hash, Hasher};

use num_traits::Bounded;

use super::{NaValue, NA_LABEL};
use crate::error::{NumericsError, Result};
use crate::num::Number;

/// A number that may be missing, with `T::MIN` reserved as NA.
///
/// Works for any [`Number`]. For floats the sentinel is the most negative
/// finite value, so NaN remains an ordinary (non-missing) payload.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct NaNumber<T>(T);

impl<T: Number> NaValue for NaNumber<T> {
    type Value = T;

    #[inline]
    fn sentinel() -> T {
        <T as Bounded>::min_value()
    }

    #[inline]
    fn is_sentinel(raw: T) -> bool {
        raw == <T as Bounded>::min_value()
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
        Self(<T as Bounded>::min_value().next_above())
    }

    fn max_value() -> Self {
        Self(<T as Bounded>::max_value())
    }
}

impl<T: Number + Hash> Hash for NaNumber<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_na() {
            state.write_u64(0);
        } else {
            self.0.hash(state);
        }
    }
}

impl_na_wrapper!(NaNumber, Number);
impl_na_conversions!(NaNumber; i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);
