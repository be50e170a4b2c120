//! Prelude module for convenient imports.
//!
//! ```rust
//! use navec_core::prelude::*;
//!
//! let v: Vector<NaInt<i32>> = Vector::create_with_length(3);
//! assert!(v.iter().all(|x| !x.is_na()));
//! ```

// Core types
pub use crate::category::{CategorySet, ReadOnlyCategorySet};
pub use crate::dataframe::DataFrame;
pub use crate::handle::{VectorDataType, VectorHandle};
pub use crate::label::{ValueLabel, ValueLabelCollection};
pub use crate::na::{NaFloat, NaInt, NaNumber};
pub use crate::series::Series;
pub use crate::shape::Layout;
pub use crate::timestamp::Timestamp;
pub use crate::vector::{ReadOnlyVector, Vector};
pub use crate::view::{ReadOnlyStridedMemory, StridedMemory, StridedSpan, StridedSpanMut};

// Error types
pub use crate::error::{NumericsError, Result};

// Traits
pub use crate::category::Categories;
pub use crate::handle::Element;
pub use crate::na::NaValue;
pub use crate::num::Number;
pub use crate::view::{Storage, StorageMut};
