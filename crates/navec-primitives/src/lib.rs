//! # navec-primitives
//!
//! Vectorized arithmetic and statistics over numeric slices.
//!
//! - **Arithmetic**: `add`, `subtract`, `multiply`, `divide` in allocating,
//!   `_into`, `_scalar` and `_in_place` forms
//! - **Comparisons**: `less_than`, `greater_than`, `equals` producing masks
//! - **Reductions**: `sum`, `mean`, `variance`, `min`, `max` and the
//!   compensated [`Summation`] strategy
//! - **Missing values**: `nan_*` reductions over floats and `na_*`
//!   reductions and bulk arithmetic over NA wrappers
//!
//! Everything operates on slices, so `Vec`, arrays, [`navec_core::Vector`],
//! [`navec_core::Series`] and strided views all work through `as_ref()` or
//! through the [`VectorPrimitives`] extension trait.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization of [`Summation`]
//!
//! # Example
//!
//! ```
//! use navec_core::na::{NaInt, NaValue};
//! use navec_primitives::prelude::*;
//!
//! let a: Vec<NaInt<i32>> = vec![NaInt::new(6).unwrap(), NaInt::na()];
//! let b: Vec<NaInt<i32>> = vec![NaInt::new(0).unwrap(), NaInt::new(2).unwrap()];
//! let mut out = vec![NaInt::na(); 2];
//!
//! na_divide_into(&a, &b, &mut out).unwrap();
//! assert!(out.iter().all(|x| x.is_na()));
//!
//! assert!(divide(&[6, 4], &[0, 2]).is_err());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod arithmetic;
pub mod compare;
pub mod ext;
pub mod na;
pub mod nan;
pub mod reduce;

pub mod prelude;

pub use arithmetic::*;
pub use compare::*;
pub use ext::VectorPrimitives;
pub use na::*;
pub use nan::*;
pub use reduce::*;
