//! Millisecond-precision UTC timestamps.
//!
//! [`Timestamp`] stores milliseconds since the Unix epoch. Calendar
//! conversion uses the proleptic Gregorian calendar; the day arithmetic is
//! the closed-form era/day-of-era mapping, valid for every `i64` day count
//! that fits the millisecond range.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};

/// Milliseconds per second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds per hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A point in time, as milliseconds since 1970-01-01T00:00:00Z.
///
/// # Example
///
/// ```rust
/// use navec_core::Timestamp;
///
/// let t = Timestamp::from_ymd_hms(2024, 3, 1, 12, 30, 0).unwrap();
/// assert_eq!(t.to_string(), "2024-03-01T12:30:00.000Z");
/// assert_eq!(t.date(), (2024, 3, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Create a timestamp from milliseconds since the epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Midnight UTC of the given day number (days since the epoch).
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::Overflow`] if the result does not fit.
    pub fn from_days(days: i64) -> Result<Self> {
        days.checked_mul(MILLIS_PER_DAY)
            .map(Self)
            .ok_or(NumericsError::Overflow { name: "days" })
    }

    /// Midnight UTC of a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] for an invalid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// A UTC calendar date and time of day.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if any component is out of
    /// range, or [`NumericsError::Overflow`] if the instant does not fit.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(NumericsError::invalid_data(format_args!("month {month} out of range")));
        }
        if day == 0 || day > days_in_month(year.into(), month) {
            return Err(NumericsError::invalid_data(format_args!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(NumericsError::invalid_data(format_args!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }

        let time = i64::from(hour) * MILLIS_PER_HOUR
            + i64::from(minute) * MILLIS_PER_MINUTE
            + i64::from(second) * MILLIS_PER_SECOND;
        Self::from_days(days_from_civil(year.into(), month, day))?
            .checked_add_millis(time)
    }

    /// Add a signed number of milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::Overflow`] if the result does not fit.
    pub fn checked_add_millis(self, millis: i64) -> Result<Self> {
        self.0
            .checked_add(millis)
            .map(Self)
            .ok_or(NumericsError::Overflow { name: "millis" })
    }

    /// Whole days since the epoch, rounding towards negative infinity.
    #[must_use]
    pub const fn days_since_epoch(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_DAY)
    }

    /// Milliseconds elapsed since midnight UTC.
    #[must_use]
    pub const fn millis_of_day(self) -> i64 {
        self.0.rem_euclid(MILLIS_PER_DAY)
    }

    /// Calendar date as `(year, month, day)`.
    #[must_use]
    pub fn date(self) -> (i64, u32, u32) {
        civil_from_days(self.days_since_epoch())
    }

    /// Day of the week, with Sunday as `0` and Saturday as `6`.
    #[must_use]
    pub const fn weekday(self) -> u32 {
        weekday_from_days(self.days_since_epoch())
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date();
        let ms = self.millis_of_day();
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
            ms / MILLIS_PER_HOUR,
            ms % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            ms % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
            ms % MILLIS_PER_SECOND,
        )
    }
}

/// Whether `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since the epoch of a proleptic Gregorian date.
#[must_use]
pub const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date of a day number.
#[must_use]
pub const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Day of the week of a day number, with Sunday as `0`.
#[must_use]
pub const fn weekday_from_days(days: i64) -> u32 {
    // 1970-01-01 was a Thursday.
    (days + 4).rem_euclid(7) as u32
}
