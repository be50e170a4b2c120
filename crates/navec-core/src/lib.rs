//! # navec-core
//!
//! Core value and container types for missing-value aware numerics.
//!
//! - [`NaInt`], [`NaFloat`], [`NaNumber`] - primitives with one bit pattern
//!   reserved as NA, layout-compatible with the primitive
//! - [`StridedView`] - multidimensional views over flat buffers, owned or
//!   borrowed, mutable or read-only
//! - [`Vector`], [`ReadOnlyVector`], [`Series`] - one-dimensional data with
//!   categories and value labels
//! - [`VectorHandle`] and [`DataFrame`] - type-erased columns in a table
//! - [`Timestamp`] - millisecond UTC instants
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use navec_core::prelude::*;
//!
//! let scores: Vector<NaInt<i32>> = ["3", "NA", "5"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let present: Vec<i32> = scores.iter().filter_map(|x| x.to_option()).collect();
//! assert_eq!(present, vec![3, 5]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod category;
pub mod dataframe;
pub mod error;
pub mod handle;
pub mod label;
pub mod na;
pub mod num;
pub mod prelude;
pub mod series;
pub mod shape;
pub mod timestamp;
pub mod vector;
pub mod view;

// Re-export core types at crate root
pub use category::{Categories, CategorySet, ReadOnlyCategorySet};
pub use dataframe::DataFrame;
pub use error::{NumericsError, Result};
pub use handle::{Element, VectorDataType, VectorHandle};
pub use label::{ValueLabel, ValueLabelCollection};
pub use na::{NaFloat, NaInt, NaNumber, NaValue};
pub use num::Number;
pub use series::Series;
pub use shape::Layout;
pub use timestamp::Timestamp;
pub use vector::{ReadOnlyVector, Vector, VectorParts};
pub use view::{ReadOnlyStridedMemory, StridedMemory, StridedSpan, StridedSpanMut, StridedView};
