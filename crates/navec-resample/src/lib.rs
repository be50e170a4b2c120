//! # navec-resample
//!
//! Calendar resampling of timestamped values.
//!
//! A [`Resampler`] truncates each timestamp to the start of its daily,
//! weekly, monthly or yearly bucket and aggregates the values of each run of
//! equal buckets with an [`AggregationMethod`]. The result is a pair of
//! series named `period` and `value`, or a [`navec_core::DataFrame`] holding
//! both.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization of [`ResamplerConfig`]
//!
//! # Example
//!
//! ```
//! use navec_core::Timestamp;
//! use navec_resample::prelude::*;
//!
//! let config = ResamplerConfig::new(Frequency::Monthly, AggregationMethod::Max)
//!     .with_utc_offset_minutes(60);
//! let resampler = Resampler::new(config).unwrap();
//!
//! let ts = [
//!     Timestamp::from_ymd(2024, 1, 10).unwrap(),
//!     Timestamp::from_ymd(2024, 1, 20).unwrap(),
//!     Timestamp::from_ymd(2024, 2, 5).unwrap(),
//! ];
//! let frame = resampler.resample_frame(&ts, &[3, 8, 1]).unwrap();
//! assert_eq!(frame.column::<i32>("value").unwrap().as_slice(), &[8, 1]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod resampler;

pub mod prelude;

pub use config::{AggregationMethod, Frequency, ResamplerConfig, MAX_UTC_OFFSET_MINUTES};
pub use resampler::{Resampled, Resampler, PERIOD_SERIES_NAME, VALUE_SERIES_NAME};
