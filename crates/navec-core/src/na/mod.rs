//! Missing-value aware numeric wrappers.
//!
//! Each wrapper reserves one bit pattern of its primitive as NA, so an
//! `NaInt<i32>` occupies exactly four bytes and a `&[NaInt<i32>]` can be
//! reinterpreted as `&[i32]` for bulk arithmetic (see [`as_raw_slice`]).
//!
//! | Type | Sentinel | Smallest value | Largest value |
//! |---|---|---|---|
//! | [`NaInt`] | `T::MAX` | `T::MIN` | `T::MAX - 1` |
//! | [`NaNumber`] | `T::MIN` | next above `T::MIN` | `T::MAX` |
//! | [`NaFloat`] | any NaN | `T::MIN` | `T::MAX` |
//!
//! Arithmetic propagates NA: if either operand is NA, the result is NA.
//! Division by zero also yields NA.
//!
//! # Example
//!
//! ```rust
//! use navec_core::na::{NaInt, NaValue};
//!
//! let a = NaInt::new(40i32).unwrap();
//! let b = NaInt::new(2i32).unwrap();
//! assert_eq!((a + b).value().unwrap(), 42);
//!
//! let missing = NaInt::<i32>::na();
//! assert!((a + missing).is_na());
//! assert!((a / NaInt::new(0).unwrap()).is_na());
//! assert_eq!(missing.to_string(), "NA");
//! ```

pub use bytemuck::TransparentWrapper;

use crate::error::{NumericsError, Result};
use crate::num::Number;

/// Text used to render and parse a missing value.
pub const NA_LABEL: &str = "NA";

/// Common interface of the sentinel-encoded missing-value wrappers.
pub trait NaValue: Copy {
    /// Underlying primitive type.
    type Value: Number;

    /// The bit pattern reserved for NA.
    fn sentinel() -> Self::Value;

    /// Check whether a raw primitive value reads as NA.
    fn is_sentinel(raw: Self::Value) -> bool;

    /// Wrap a raw primitive without validation.
    ///
    /// A sentinel value reads as NA.
    fn from_raw(raw: Self::Value) -> Self;

    /// The raw primitive, including the sentinel for NA.
    fn raw(self) -> Self::Value;

    /// Smallest representable non-missing value.
    fn min_value() -> Self;

    /// Largest representable non-missing value.
    fn max_value() -> Self;

    /// The missing value.
    #[must_use]
    fn na() -> Self {
        Self::from_raw(Self::sentinel())
    }

    /// Check whether this value is missing.
    #[must_use]
    fn is_na(self) -> bool {
        Self::is_sentinel(self.raw())
    }

    /// Unwrap the value.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::NaValue`] if the value is missing.
    fn value(self) -> Result<Self::Value> {
        if self.is_na() {
            Err(NumericsError::NaValue { name: "value" })
        } else {
            Ok(self.raw())
        }
    }

    /// Convert to an `Option`, mapping NA to `None`.
    #[must_use]
    fn to_option(self) -> Option<Self::Value> {
        if self.is_na() {
            None
        } else {
            Some(self.raw())
        }
    }
}

/// Reinterpret a slice of wrappers as a slice of raw primitives.
///
/// Missing elements show up as the sentinel.
#[must_use]
pub fn as_raw_slice<N>(values: &[N]) -> &[N::Value]
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    N::peel_slice(values)
}

/// Reinterpret a mutable slice of wrappers as raw primitives.
#[must_use]
pub fn as_raw_slice_mut<N>(values: &mut [N]) -> &mut [N::Value]
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    N::peel_slice_mut(values)
}

/// Reinterpret a slice of raw primitives as wrappers.
///
/// Elements holding the sentinel read as NA.
#[must_use]
pub fn from_raw_slice<N>(raw: &[N::Value]) -> &[N]
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    N::wrap_slice(raw)
}

/// Reinterpret a mutable slice of raw primitives as wrappers.
#[must_use]
pub fn from_raw_slice_mut<N>(raw: &mut [N::Value]) -> &mut [N]
where
    N: NaValue + TransparentWrapper<<N as NaValue>::Value>,
{
    N::wrap_slice_mut(raw)
}

/// Shared surface of the three wrappers: constructors, equality family,
/// ordering, formatting, parsing, arithmetic, layout and serde.
macro_rules! impl_na_wrapper {
    ($name:ident, $($bound:tt)+) => {
        impl<T: $($bound)+> $name<T> {
            /// Wrap a value.
            ///
            /// # Errors
            ///
            /// Returns [`NumericsError::SentinelCollision`] if `value` is the
            /// bit pattern reserved for NA.
            pub fn new(value: T) -> Result<Self> {
                if <Self as NaValue>::is_sentinel(value) {
                    Err(NumericsError::SentinelCollision {
                        name: "value",
                        value: value.to_string(),
                    })
                } else {
                    Ok(Self(value))
                }
            }

            /// Wrap an optional value, mapping `None` to NA.
            ///
            /// # Errors
            ///
            /// Returns [`NumericsError::SentinelCollision`] if the value is the
            /// sentinel.
            pub fn from_option(value: Option<T>) -> Result<Self> {
                value.map_or_else(|| Ok(<Self as NaValue>::na()), Self::new)
            }

            /// Equality where two NA values are equal to each other.
            #[must_use]
            pub fn equals(self, other: Self) -> bool {
                match (self.is_na(), other.is_na()) {
                    (true, true) => true,
                    (false, false) => self.0 == other.0,
                    _ => false,
                }
            }

            /// Equality that is `false` whenever either side is NA.
            #[must_use]
            pub fn equal_and_not_na(self, other: Self) -> bool {
                !self.is_na() && !other.is_na() && self.0 == other.0
            }

            /// Equality that is `true` whenever either side is NA.
            #[must_use]
            pub fn equal_or_either_na(self, other: Self) -> bool {
                self.is_na() || other.is_na() || self.0 == other.0
            }

            /// Three-valued equality: `None` when either side is NA.
            #[must_use]
            pub fn ternary_equals(self, other: Self) -> Option<bool> {
                if self.is_na() || other.is_na() {
                    None
                } else {
                    Some(self.0 == other.0)
                }
            }

            /// Total comparison in which NA compares equal to every value.
            #[must_use]
            pub fn compare_to(self, other: Self) -> core::cmp::Ordering {
                if self.is_na() || other.is_na() {
                    return core::cmp::Ordering::Equal;
                }
                self.0
                    .partial_cmp(&other.0)
                    .unwrap_or(core::cmp::Ordering::Equal)
            }

            fn binary(self, rhs: Self, op: impl FnOnce(T, T) -> Option<T>) -> Self {
                if self.is_na() || rhs.is_na() {
                    return <Self as NaValue>::na();
                }
                op(self.0, rhs.0).map_or_else(<Self as NaValue>::na, <Self as NaValue>::from_raw)
            }

            fn scalar(self, rhs: T, op: impl FnOnce(T, T) -> Option<T>) -> Self {
                if self.is_na() {
                    return <Self as NaValue>::na();
                }
                op(self.0, rhs).map_or_else(<Self as NaValue>::na, <Self as NaValue>::from_raw)
            }
        }

        /// Zero, or the smallest present value when zero is the sentinel
        /// (unsigned `NaNumber`).
        impl<T: $($bound)+> Default for $name<T> {
            fn default() -> Self {
                if <Self as NaValue>::is_sentinel(T::ZERO) {
                    <Self as NaValue>::min_value()
                } else {
                    Self(T::ZERO)
                }
            }
        }

        impl<T: $($bound)+> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.equal_and_not_na(*other)
            }
        }

        impl<T: $($bound)+> PartialOrd for $name<T> {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                if self.is_na() || other.is_na() {
                    None
                } else {
                    self.0.partial_cmp(&other.0)
                }
            }
        }

        impl<T: $($bound)+> core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                if self.is_na() {
                    write!(f, "{}({})", stringify!($name), NA_LABEL)
                } else {
                    write!(f, "{}({:?})", stringify!($name), self.0)
                }
            }
        }

        impl<T: $($bound)+> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                if self.is_na() {
                    f.write_str(NA_LABEL)
                } else {
                    core::fmt::Display::fmt(&self.0, f)
                }
            }
        }

        impl<T: $($bound)+> core::str::FromStr for $name<T> {
            type Err = NumericsError;

            fn from_str(s: &str) -> Result<Self> {
                let s = s.trim();
                if s == NA_LABEL {
                    return Ok(<Self as NaValue>::na());
                }
                let value = T::from_str_radix(s, 10)
                    .map_err(|_| NumericsError::invalid_data(format_args!("cannot parse '{s}'")))?;
                Self::new(value)
            }
        }

        impl<T: $($bound)+> From<$name<T>> for Option<T> {
            fn from(value: $name<T>) -> Self {
                value.to_option()
            }
        }

        impl<T: $($bound)+> core::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.binary(rhs, |a, b| Some(a.wrapping_add_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.binary(rhs, |a, b| Some(a.wrapping_sub_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.binary(rhs, |a, b| Some(a.wrapping_mul_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Div for $name<T> {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                self.binary(rhs, T::checked_div_value)
            }
        }

        impl<T: $($bound)+> core::ops::Add<T> for $name<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self {
                self.scalar(rhs, |a, b| Some(a.wrapping_add_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Sub<T> for $name<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self {
                self.scalar(rhs, |a, b| Some(a.wrapping_sub_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                self.scalar(rhs, |a, b| Some(a.wrapping_mul_value(b)))
            }
        }

        impl<T: $($bound)+> core::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                self.scalar(rhs, T::checked_div_value)
            }
        }

        // SAFETY: the wrapper is `#[repr(transparent)]` over its single `T`
        // field, and every bit pattern of `T` is a valid wrapper value.
        #[allow(unsafe_code)]
        unsafe impl<T: $($bound)+> bytemuck::TransparentWrapper<T> for $name<T> {}

        #[cfg(feature = "serde")]
        impl<T: $($bound)+ + serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.to_option(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, T: $($bound)+ + serde::Deserialize<'de>> serde::Deserialize<'de> for $name<T> {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                let value = <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer)?;
                Self::from_option(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Concrete conversions between a wrapper and each primitive it supports.
macro_rules! impl_na_conversions {
    ($name:ident; $($t:ty),* $(,)?) => {$(
        impl TryFrom<$t> for $name<$t> {
            type Error = NumericsError;

            fn try_from(value: $t) -> Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<$name<$t>> for $t {
            type Error = NumericsError;

            fn try_from(value: $name<$t>) -> Result<Self> {
                value.value()
            }
        }
    )*};
}

mod float;
mod int;
mod number;

pub use float::NaFloat;
pub use int::NaInt;
pub use number::NaNumber;
