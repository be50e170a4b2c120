//! Runtime element-type tags and type-erased vectors.
//!
//! [`VectorHandle`] holds a [`Vector`] of any supported element type, tagged
//! by [`VectorDataType`]. Typed access goes through [`Element`], implemented
//! for every supported element type.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};
use crate::na::{NaFloat, NaInt};
use crate::timestamp::Timestamp;
use crate::vector::Vector;

/// An element type that can be stored in a [`VectorHandle`].
pub trait Element: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Runtime tag of this type.
    const DATA_TYPE: VectorDataType;

    /// Erase the element type.
    fn wrap(vector: Vector<Self>) -> VectorHandle;

    /// Borrow the typed vector if the handle holds this type.
    fn downcast(handle: &VectorHandle) -> Option<&Vector<Self>>;

    /// Mutably borrow the typed vector if the handle holds this type.
    fn downcast_mut(handle: &mut VectorHandle) -> Option<&mut Vector<Self>>;

    /// Take the typed vector, or give the handle back on a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns the original handle if it holds a different type.
    fn from_handle(handle: VectorHandle) -> core::result::Result<Vector<Self>, VectorHandle>;
}

macro_rules! vector_types {
    ($($variant:ident => $t:ty, $label:literal, $numeric:literal;)*) => {
        /// Runtime tag identifying the element type of a vector.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum VectorDataType {
            $(
                #[doc = concat!("`", stringify!($t), "` elements.")]
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )*
        }

        impl VectorDataType {
            /// Every supported tag, in declaration order.
            pub const ALL: &'static [VectorDataType] = &[$(Self::$variant),*];

            /// Serialized label of the tag.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            /// Returns `true` for types that support arithmetic.
            #[must_use]
            pub const fn is_numeric(self) -> bool {
                match self {
                    $(Self::$variant => $numeric,)*
                }
            }
        }

        /// A vector of any supported element type.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(tag = "dtype"))]
        pub enum VectorHandle {
            $(
                #[doc = concat!("A vector of `", stringify!($t), "` values.")]
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant(Vector<$t>),
            )*
        }

        impl VectorHandle {
            /// Element type tag.
            #[must_use]
            pub fn data_type(&self) -> VectorDataType {
                match self {
                    $(Self::$variant(_) => VectorDataType::$variant,)*
                }
            }

            /// Number of elements.
            #[must_use]
            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(v) => v.len(),)*
                }
            }

            /// Render each element as its label or its text.
            #[must_use]
            pub fn labelled_data(&self) -> Vec<String> {
                match self {
                    $(Self::$variant(v) => v.labelled_data().map(|s| s.into_owned()).collect(),)*
                }
            }
        }

        $(
            impl Element for $t {
                const DATA_TYPE: VectorDataType = VectorDataType::$variant;

                fn wrap(vector: Vector<Self>) -> VectorHandle {
                    VectorHandle::$variant(vector)
                }

                fn downcast(handle: &VectorHandle) -> Option<&Vector<Self>> {
                    match handle {
                        VectorHandle::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn downcast_mut(handle: &mut VectorHandle) -> Option<&mut Vector<Self>> {
                    match handle {
                        VectorHandle::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_handle(handle: VectorHandle) -> core::result::Result<Vector<Self>, VectorHandle> {
                    match handle {
                        VectorHandle::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

vector_types! {
    Float64 => f64, "float64", true;
    Float32 => f32, "float32", true;
    Int64 => i64, "int64", true;
    UInt64 => u64, "uint64", true;
    Int32 => i32, "int32", true;
    UInt32 => u32, "uint32", true;
    Int16 => i16, "int16", true;
    UInt16 => u16, "uint16", true;
    Int8 => i8, "int8", true;
    UInt8 => u8, "uint8", true;
    Int128 => i128, "int128", true;
    UInt128 => u128, "uint128", true;
    DateTime64 => Timestamp, "datetime64", false;
    Bool => bool, "bool", false;
    Char => char, "char", false;
    String => String, "string", false;
    NaInt64 => NaInt<i64>, "na_int64", true;
    NaInt32 => NaInt<i32>, "na_int32", true;
    NaFloat64 => NaFloat<f64>, "na_float64", true;
    NaFloat32 => NaFloat<f32>, "na_float32", true;
}

impl VectorHandle {
    /// Returns `true` if the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the typed vector.
    #[must_use]
    pub fn downcast<T: Element>(&self) -> Option<&Vector<T>> {
        T::downcast(self)
    }

    /// Mutably borrow the typed vector.
    pub fn downcast_mut<T: Element>(&mut self) -> Option<&mut Vector<T>> {
        T::downcast_mut(self)
    }

    /// Take the typed vector.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if the handle holds another
    /// element type.
    pub fn into_vector<T: Element>(self) -> Result<Vector<T>> {
        T::from_handle(self).map_err(|other| type_mismatch::<T>(other.data_type()))
    }
}

impl<T: Element> From<Vector<T>> for VectorHandle {
    fn from(vector: Vector<T>) -> Self {
        T::wrap(vector)
    }
}

impl<T: Element> Vector<T> {
    /// Element type tag.
    #[must_use]
    pub fn data_type(&self) -> VectorDataType {
        T::DATA_TYPE
    }
}

impl fmt::Display for VectorDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VectorDataType {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| NumericsError::invalid_data(format_args!("unknown data type '{s}'")))
    }
}

pub(crate) fn type_mismatch<T: Element>(actual: VectorDataType) -> NumericsError {
    NumericsError::invalid_data(format_args!(
        "expected {} data, found {actual}",
        T::DATA_TYPE
    ))
}
