//! Prelude for navec-primitives.
//!
//! This module re-exports all commonly used functions and traits.

// Arithmetic
pub use crate::arithmetic::{
    add, add_in_place, add_into, add_scalar, add_scalar_in_place,
    divide, divide_in_place, divide_into, divide_scalar, divide_scalar_in_place,
    multiply, multiply_in_place, multiply_into, multiply_scalar, multiply_scalar_in_place,
    subtract, subtract_in_place, subtract_into, subtract_scalar, subtract_scalar_in_place,
};

// Comparisons
pub use crate::compare::{
    equals, equals_all, equals_any, equals_into, equals_scalar, equals_scalar_into,
    greater_than, greater_than_all, greater_than_any, greater_than_into, greater_than_scalar,
    greater_than_scalar_into,
    less_than, less_than_all, less_than_any, less_than_into, less_than_scalar,
    less_than_scalar_into,
};

// Reductions
pub use crate::reduce::{
    max, mean, mean_as, min, sample_variance, sum, sum_as, sum_checked, sum_with, variance,
    variance_with_ddof, Summation,
};

// Missing values
pub use crate::na::{
    na_add_into, na_count, na_divide_into, na_max, na_mean, na_min, na_multiply_into, na_subtract_into,
    na_sum,
};
pub use crate::nan::{nan_count, nan_max, nan_mean, nan_min, nan_sum, nan_variance};

// Traits
pub use crate::ext::VectorPrimitives;
