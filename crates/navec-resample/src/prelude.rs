//! Prelude for navec-resample.

pub use crate::config::{AggregationMethod, Frequency, ResamplerConfig, MAX_UTC_OFFSET_MINUTES};
pub use crate::resampler::{Resampled, Resampler, PERIOD_SERIES_NAME, VALUE_SERIES_NAME};
