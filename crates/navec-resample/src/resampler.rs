//! Single-pass time-bucket resampling.

use navec_core::dataframe::DataFrame;
use navec_core::error::{NumericsError, Result};
use navec_core::handle::Element;
use navec_core::num::Number;
use navec_core::series::Series;
use navec_core::timestamp::Timestamp;
use navec_primitives::reduce;
use tracing::{debug, warn};

use crate::config::{AggregationMethod, Frequency, ResamplerConfig};

/// Name of the output series holding bucket starts.
pub const PERIOD_SERIES_NAME: &str = "period";

/// Name of the output series holding aggregated values.
pub const VALUE_SERIES_NAME: &str = "value";

/// Output of a resampling pass: two parallel series of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled<T> {
    /// Bucket start instants, named `period`.
    pub period: Series<Timestamp>,
    /// Aggregated values, named `value`.
    pub value: Series<T>,
}

impl<T> Resampled<T> {
    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.period.len()
    }

    /// Returns `true` if there are no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.period.is_empty()
    }

    /// Iterate over `(period, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, &T)> {
        self.period.iter().copied().zip(self.value.iter())
    }
}

impl<T: Element> Resampled<T> {
    /// Collect both series into a two-column frame.
    ///
    /// # Errors
    ///
    /// Never fails for output produced by [`Resampler`]; the `Result` comes
    /// from [`DataFrame::add_series`].
    pub fn into_frame(self) -> Result<DataFrame> {
        let mut frame = DataFrame::with_capacity(2);
        frame.add_series(self.period)?;
        frame.add_series(self.value)?;
        Ok(frame)
    }
}

/// Groups timestamped values into calendar buckets and aggregates each one.
///
/// The input is scanned once. Each element's bucket start is compared with
/// the previous element's; a change closes the current bucket. Input is
/// expected in chronological order. Out-of-order input still produces a
/// result, but every contiguous run becomes its own bucket, so a bucket
/// start can appear more than once.
///
/// # Example
///
/// ```rust
/// use navec_core::Timestamp;
/// use navec_resample::{AggregationMethod, Resampler};
///
/// let day1 = Timestamp::from_ymd(2024, 1, 1).unwrap();
/// let noon = Timestamp::from_ymd_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let day2 = Timestamp::from_ymd(2024, 1, 2).unwrap();
///
/// let resampler = Resampler::daily(AggregationMethod::Mean);
/// let out = resampler.resample(&[day1, noon, day2], &[1.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(out.period.as_slice(), &[day1, day2]);
/// assert_eq!(out.value.as_slice(), &[1.5, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resampler {
    config: ResamplerConfig,
}

impl Resampler {
    /// Create a resampler.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if the configuration is invalid.
    pub fn new(config: ResamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Daily UTC buckets.
    #[must_use]
    pub fn daily(method: AggregationMethod) -> Self {
        Self::utc(Frequency::Daily, method)
    }

    /// Weekly UTC buckets starting on Sunday.
    #[must_use]
    pub fn weekly(method: AggregationMethod) -> Self {
        Self::utc(Frequency::Weekly, method)
    }

    /// Monthly UTC buckets.
    #[must_use]
    pub fn monthly(method: AggregationMethod) -> Self {
        Self::utc(Frequency::Monthly, method)
    }

    /// Yearly UTC buckets.
    #[must_use]
    pub fn yearly(method: AggregationMethod) -> Self {
        Self::utc(Frequency::Yearly, method)
    }

    fn utc(frequency: Frequency, method: AggregationMethod) -> Self {
        Self {
            config: ResamplerConfig::new(frequency, method),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ResamplerConfig {
        &self.config
    }

    /// Resample parallel timestamp and value slices.
    ///
    /// # Errors
    ///
    /// - [`NumericsError::LengthMismatch`] if the slices differ in length
    /// - [`NumericsError::Overflow`] if a bucket start is not representable,
    ///   or a mean's count does not fit in `T`
    pub fn resample<T: Number>(&self, timestamps: &[Timestamp], values: &[T]) -> Result<Resampled<T>> {
        NumericsError::check_length("values", timestamps.len(), values.len())?;

        let ResamplerConfig {
            frequency,
            method,
            utc_offset_minutes,
        } = self.config;

        let mut periods = Vec::new();
        let mut aggregated = Vec::new();
        let mut backwards = 0usize;

        let mut start = 0;
        let mut current: Option<Timestamp> = None;
        for (i, &ts) in timestamps.iter().enumerate() {
            let key = frequency.period_start(ts, utc_offset_minutes)?;
            match current {
                Some(open) if open == key => continue,
                Some(open) => {
                    if key < open {
                        backwards += 1;
                    }
                    periods.push(open);
                    aggregated.push(aggregate(method, &values[start..i])?);
                }
                None => {}
            }
            current = Some(key);
            start = i;
        }
        if let Some(open) = current {
            periods.push(open);
            aggregated.push(aggregate(method, &values[start..])?);
        }

        if backwards > 0 {
            warn!(
                backwards,
                ?frequency,
                "timestamps are not in chronological order; buckets may repeat"
            );
        }
        debug!(
            input = timestamps.len(),
            buckets = periods.len(),
            ?frequency,
            ?method,
            "resampled"
        );

        Ok(Resampled {
            period: Series::new(PERIOD_SERIES_NAME, periods),
            value: Series::new(VALUE_SERIES_NAME, aggregated),
        })
    }

    /// Resample and return the result as a frame with `period` and `value`
    /// columns.
    ///
    /// # Errors
    ///
    /// See [`Resampler::resample`].
    pub fn resample_frame<T: Number + Element>(
        &self,
        timestamps: &[Timestamp],
        values: &[T],
    ) -> Result<DataFrame> {
        self.resample(timestamps, values)?.into_frame()
    }

    /// Resample two columns of an existing frame.
    ///
    /// # Errors
    ///
    /// - [`NumericsError::KeyNotFound`] if a column is missing
    /// - [`NumericsError::InvalidData`] if a column has the wrong type
    /// - anything [`Resampler::resample`] returns
    pub fn resample_columns<T: Number + Element>(
        &self,
        frame: &DataFrame,
        time_column: &str,
        value_column: &str,
    ) -> Result<DataFrame> {
        let timestamps = frame.column::<Timestamp>(time_column)?;
        let values = frame.column::<T>(value_column)?;
        self.resample_frame(timestamps.as_slice(), values.as_slice())
    }
}

/// Combine the values of one non-empty bucket.
fn aggregate<T: Number>(method: AggregationMethod, bucket: &[T]) -> Result<T> {
    match method {
        AggregationMethod::Mean => reduce::mean(bucket),
        AggregationMethod::Sum => Ok(reduce::sum(bucket)),
        AggregationMethod::Min => reduce::min(bucket),
        AggregationMethod::Max => reduce::max(bucket),
        AggregationMethod::First => bucket
            .first()
            .copied()
            .ok_or(NumericsError::EmptyInput { name: "bucket" }),
        AggregationMethod::Last => bucket
            .last()
            .copied()
            .ok_or(NumericsError::EmptyInput { name: "bucket" }),
    }
}
