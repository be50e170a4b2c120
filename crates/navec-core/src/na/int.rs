use core::hash::{Hash, Hasher};

use num_traits::{Bounded, PrimInt};

use super::{NaValue, NA_LABEL};
use crate::error::{NumericsError, Result};
use crate::num::Number;

/// An integer that may be missing, with `T::MAX` reserved as NA.
///
/// Arithmetic wraps on overflow. A result that lands on `T::MAX` reads as NA.
///
/// ```rust
/// use navec_core::na::{NaInt, NaValue};
///
/// assert_eq!(NaInt::<i8>::max_value().value().unwrap(), 126);
/// assert!(NaInt::new(i8::MAX).is_err());
/// assert!(NaInt::<i8>::na() != NaInt::<i8>::na());
/// assert!(NaInt::<i8>::na().equals(NaInt::na()));
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct NaInt<T>(T);

impl<T: Number + PrimInt> NaValue for NaInt<T> {
    type Value = T;

    #[inline]
    fn sentinel() -> T {
        <T as Bounded>::max_value()
    }

    #[inline]
    fn is_sentinel(raw: T) -> bool {
        raw == <T as Bounded>::max_value()
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
        Self(<T as Bounded>::max_value() - T::ONE)
    }
}

impl<T: Number + PrimInt + Hash> Hash for NaInt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_na() {
            state.write_u64(0);
        } else {
            self.0.hash(state);
        }
    }
}

impl_na_wrapper!(NaInt, Number + PrimInt);
impl_na_conversions!(NaInt; i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn na(v: i32) -> NaInt<i32> {
        NaInt::new(v).unwrap()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(NaInt::<i32>::sentinel(), i32::MAX);
        assert_eq!(NaInt::<i32>::max_value().raw(), i32::MAX - 1);
        assert_eq!(NaInt::<i32>::min_value().raw(), i32::MIN);
        assert_eq!(NaInt::<u16>::max_value().raw(), u16::MAX - 1);
        assert_eq!(NaInt::<u16>::min_value().raw(), 0);
    }

    #[test]
    fn test_construction_rejects_sentinel() {
        let err = NaInt::new(i32::MAX).unwrap_err();
        assert!(matches!(err, NumericsError::SentinelCollision { name: "value", .. }));
        assert!(NaInt::<i64>::try_from(i64::MAX).is_err());
        assert_eq!(NaInt::<u8>::try_from(5u8).unwrap().value().unwrap(), 5);
    }

    #[test]
    fn test_from_option() {
        assert!(NaInt::<i32>::from_option(None).unwrap().is_na());
        assert_eq!(NaInt::from_option(Some(3)).unwrap(), na(3));
        assert!(NaInt::from_option(Some(i32::MAX)).is_err());
        assert_eq!(Option::<i32>::from(NaInt::<i32>::na()), None);
        assert_eq!(Option::<i32>::from(na(9)), Some(9));
    }

    #[test]
    fn test_unwrap_conversion() {
        assert_eq!(i32::try_from(na(12)).unwrap(), 12);
        assert_eq!(
            i32::try_from(NaInt::<i32>::na()),
            Err(NumericsError::NaValue { name: "value" })
        );
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(na(2) + na(3), na(5));
        assert_eq!(na(2) - na(3), na(-1));
        assert_eq!(na(4) * na(3), na(12));
        assert_eq!(na(7) / na(2), na(3));
        assert_eq!(na(7) + 1, na(8));
        assert_eq!(na(7) * 2, na(14));
    }

    #[test]
    fn test_arithmetic_propagates_na() {
        let missing = NaInt::<i32>::na();
        assert!((na(1) + missing).is_na());
        assert!((missing - na(1)).is_na());
        assert!((missing * missing).is_na());
        assert!((missing / 3).is_na());
    }

    #[test]
    fn test_division_by_zero_is_na() {
        assert!((na(7) / na(0)).is_na());
        assert!((na(7) / 0).is_na());
        assert!((NaInt::<i32>::min_value() / na(-1)).is_na());
    }

    #[test]
    fn test_wrapping_into_sentinel_reads_as_na() {
        let max = NaInt::<i32>::max_value();
        assert!((max + na(1)).is_na());
        assert_eq!(max + na(2), na(i32::MIN));
    }

    #[test]
    fn test_equality_family() {
        let missing = NaInt::<i32>::na();
        assert_ne!(missing, missing);
        assert!(missing.equals(missing));
        assert!(!missing.equals(na(1)));
        assert!(na(1).equals(na(1)));
        assert!(!missing.equal_and_not_na(missing));
        assert!(missing.equal_or_either_na(na(4)));
        assert!(!na(3).equal_or_either_na(na(4)));
        assert_eq!(missing.ternary_equals(na(1)), None);
        assert_eq!(na(1).ternary_equals(na(1)), Some(true));
        assert_eq!(na(1).ternary_equals(na(2)), Some(false));
    }

    #[test]
    fn test_ordering() {
        use core::cmp::Ordering;

        let missing = NaInt::<i32>::na();
        assert!(na(1) < na(2));
        assert!(!(missing < na(2)));
        assert!(!(missing > na(2)));
        assert!(!(missing <= na(2)));
        assert!(!(missing >= missing));
        assert_eq!(missing.partial_cmp(&na(0)), None);
        assert_eq!(missing.compare_to(na(100)), Ordering::Equal);
        assert_eq!(na(1).compare_to(na(2)), Ordering::Less);
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash_of(&NaInt::<i32>::na()), hash_of(&NaInt::<i32>::na()));
        assert_eq!(hash_of(&na(5)), hash_of(&na(5)));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(NaInt::<i32>::na().to_string(), NA_LABEL);
        assert_eq!(na(-42).to_string(), "-42");
        assert_eq!(format!("{:?}", NaInt::<i32>::na()), "NaInt(NA)");
        assert_eq!(format!("{:?}", na(3)), "NaInt(3)");

        assert!("NA".parse::<NaInt<i32>>().unwrap().is_na());
        assert_eq!(" 17 ".parse::<NaInt<i32>>().unwrap(), na(17));
        assert!("2147483647".parse::<NaInt<i32>>().is_err());
        assert!(matches!(
            "abc".parse::<NaInt<i32>>(),
            Err(NumericsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(NaInt::<u32>::default(), NaInt::new(0).unwrap());
    }

    #[test]
    fn test_layout() {
        assert_eq!(core::mem::size_of::<NaInt<i32>>(), 4);
        assert_eq!(core::mem::size_of::<NaInt<i64>>(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_null_for_na() {
        let values = vec![na(1), NaInt::na(), na(3)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, "[1,null,3]");
        let back: Vec<NaInt<i32>> = serde_json::from_str(&json).unwrap();
        assert!(back[1].is_na());
        assert_eq!(back[2], na(3));
        assert!(serde_json::from_str::<NaInt<i32>>("2147483647").is_err());
    }
}
