//! Resampling configuration.

use navec_core::error::{NumericsError, Result};
use navec_core::timestamp::{
    civil_from_days, days_from_civil, weekday_from_days, Timestamp, MILLIS_PER_DAY,
    MILLIS_PER_MINUTE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted distance from UTC, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Width of a resampling bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Frequency {
    /// Calendar days starting at midnight.
    #[default]
    Daily,
    /// Weeks starting on Sunday at midnight.
    Weekly,
    /// Calendar months starting on the first.
    Monthly,
    /// Calendar years starting on January 1st.
    Yearly,
}

impl Frequency {
    /// Start of the bucket containing `ts`, in a zone `utc_offset_minutes`
    /// east of UTC.
    ///
    /// The bucket boundary is local midnight; the returned instant is that
    /// local midnight expressed in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::Overflow`] if the shifted instant is outside
    /// the representable range.
    pub fn period_start(self, ts: Timestamp, utc_offset_minutes: i32) -> Result<Timestamp> {
        let overflow = NumericsError::Overflow { name: "timestamp" };
        let offset = i64::from(utc_offset_minutes) * MILLIS_PER_MINUTE;
        let local = ts.millis().checked_add(offset).ok_or(overflow.clone())?;
        let days = local.div_euclid(MILLIS_PER_DAY);

        let start_days = match self {
            Self::Daily => days,
            Self::Weekly => days - i64::from(weekday_from_days(days)),
            Self::Monthly => {
                let (year, month, _) = civil_from_days(days);
                days_from_civil(year, month, 1)
            }
            Self::Yearly => {
                let (year, _, _) = civil_from_days(days);
                days_from_civil(year, 1, 1)
            }
        };

        start_days
            .checked_mul(MILLIS_PER_DAY)
            .and_then(|ms| ms.checked_sub(offset))
            .map(Timestamp::from_millis)
            .ok_or(overflow)
    }
}

/// How the values inside one bucket are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AggregationMethod {
    /// Arithmetic mean, computed in the value type.
    #[default]
    Mean,
    /// Sum; integer sums wrap on overflow.
    Sum,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// First value in input order.
    First,
    /// Last value in input order.
    Last,
}

/// Configuration for [`Resampler`](crate::Resampler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResamplerConfig {
    /// Bucket width.
    pub frequency: Frequency,
    /// Aggregation applied to each bucket.
    pub method: AggregationMethod,
    /// Zone in which bucket boundaries fall, in minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl ResamplerConfig {
    /// Create a UTC configuration.
    #[must_use]
    pub fn new(frequency: Frequency, method: AggregationMethod) -> Self {
        Self {
            frequency,
            method,
            utc_offset_minutes: 0,
        }
    }

    /// Set the zone offset.
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if the offset exceeds
    /// [`MAX_UTC_OFFSET_MINUTES`] in either direction.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(NumericsError::invalid_data(format_args!(
                "utc offset of {} minutes is outside ±{MAX_UTC_OFFSET_MINUTES}",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Timestamp::from_ymd_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ResamplerConfig::default();
        assert_eq!(config.frequency, Frequency::Daily);
        assert_eq!(config.method, AggregationMethod::Mean);
        assert_eq!(config.utc_offset_minutes, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_daily_truncation() {
        let start = Frequency::Daily.period_start(at(2024, 3, 15, 17), 0).unwrap();
        assert_eq!(start, day(2024, 3, 15));
    }

    #[test]
    fn test_weekly_starts_on_sunday() {
        // 2024-03-15 is a Friday; the week began on Sunday the 10th.
        let start = Frequency::Weekly.period_start(at(2024, 3, 15, 9), 0).unwrap();
        assert_eq!(start, day(2024, 3, 10));
        assert_eq!(start.weekday(), 0);

        let sunday = Frequency::Weekly.period_start(day(2024, 3, 10), 0).unwrap();
        assert_eq!(sunday, day(2024, 3, 10));
    }

    #[test]
    fn test_monthly_and_yearly_truncation() {
        let ts = at(2024, 2, 29, 23);
        assert_eq!(Frequency::Monthly.period_start(ts, 0).unwrap(), day(2024, 2, 1));
        assert_eq!(Frequency::Yearly.period_start(ts, 0).unwrap(), day(2024, 1, 1));
    }

    #[test]
    fn test_pre_epoch_truncation() {
        let ts = at(1969, 12, 31, 6);
        assert_eq!(Frequency::Daily.period_start(ts, 0).unwrap(), day(1969, 12, 31));
        assert_eq!(Frequency::Monthly.period_start(ts, 0).unwrap(), day(1969, 12, 1));
    }

    #[test]
    fn test_offset_moves_boundary() {
        // 23:00 UTC is already the next day at UTC+2.
        let ts = at(2024, 3, 15, 23);
        let start = Frequency::Daily.period_start(ts, 120).unwrap();
        assert_eq!(start, at(2024, 3, 15, 22));

        // 01:00 UTC is still the previous day at UTC-5.
        let ts = at(2024, 3, 15, 1);
        let start = Frequency::Daily.period_start(ts, -300).unwrap();
        assert_eq!(start, at(2024, 3, 14, 5));
    }

    #[test]
    fn test_offset_validation() {
        let config = ResamplerConfig::new(Frequency::Monthly, AggregationMethod::Sum)
            .with_utc_offset_minutes(-MAX_UTC_OFFSET_MINUTES);
        assert!(config.validate().is_ok());
        assert!(config.with_utc_offset_minutes(15 * 60).validate().is_err());
    }

    #[test]
    fn test_overflow() {
        let ts = Timestamp::from_millis(i64::MAX);
        assert_eq!(
            Frequency::Daily.period_start(ts, 60),
            Err(NumericsError::Overflow { name: "timestamp" })
        );
    }
}
