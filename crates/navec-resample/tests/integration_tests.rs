//! Integration tests for navec-resample.
//!
//! These tests run the resampler over longer synthetic series and check the
//! bucket structure against the calendar.

use approx::assert_relative_eq;
use navec_core::timestamp::{Timestamp, MILLIS_PER_HOUR};
use navec_core::NumericsError;

use navec_resample::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Hourly timestamps covering the whole of 2024 (a leap year).
fn hourly_2024() -> Vec<Timestamp> {
    let start = Timestamp::from_ymd(2024, 1, 1).unwrap().millis();
    (0..366 * 24)
        .map(|h| Timestamp::from_millis(start + h * MILLIS_PER_HOUR))
        .collect()
}

fn ones(len: usize) -> Vec<f64> {
    vec![1.0; len]
}

// ============================================================================
// Bucket Structure
// ============================================================================

#[test]
fn test_bucket_counts_per_frequency() {
    let ts = hourly_2024();
    let values = ones(ts.len());

    let daily = Resampler::daily(AggregationMethod::Sum).resample(&ts, &values).unwrap();
    assert_eq!(daily.len(), 366);
    assert!(daily.value.iter().all(|&v| v == 24.0));

    let monthly = Resampler::monthly(AggregationMethod::Sum).resample(&ts, &values).unwrap();
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly.value[1], 29.0 * 24.0);

    let yearly = Resampler::yearly(AggregationMethod::Sum).resample(&ts, &values).unwrap();
    assert_eq!(yearly.len(), 1);
    assert_eq!(yearly.value[0], values.len() as f64);

    // 2024-01-01 is a Monday, so the first week starts on 2023-12-31.
    let weekly = Resampler::weekly(AggregationMethod::Sum).resample(&ts, &values).unwrap();
    assert_eq!(weekly.period[0], Timestamp::from_ymd(2023, 12, 31).unwrap());
    assert_eq!(weekly.value[0], 6.0 * 24.0);
    assert!(weekly.period.iter().all(|p| p.weekday() == 0));
}

#[test]
fn test_sum_is_conserved() {
    let ts = hourly_2024();
    let values: Vec<f64> = (0..ts.len()).map(|i| (i % 17) as f64).collect();
    let total: f64 = values.iter().sum();

    for frequency in [Frequency::Daily, Frequency::Weekly, Frequency::Monthly, Frequency::Yearly] {
        let resampler = Resampler::new(ResamplerConfig::new(frequency, AggregationMethod::Sum)).unwrap();
        let out = resampler.resample(&ts, &values).unwrap();
        let bucket_total: f64 = out.value.iter().sum();
        assert_relative_eq!(bucket_total, total);
    }
}

#[test]
fn test_periods_are_strictly_increasing_for_sorted_input() {
    let ts = hourly_2024();
    let values = ones(ts.len());
    let out = Resampler::monthly(AggregationMethod::First).resample(&ts, &values).unwrap();
    assert!(out.period.as_slice().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(out.period.len(), out.value.len());
}

#[test]
fn test_offset_shifts_daily_buckets() {
    let ts = hourly_2024();
    let values: Vec<i64> = (0..ts.len() as i64).collect();
    let config = ResamplerConfig::new(Frequency::Daily, AggregationMethod::First).with_utc_offset_minutes(-180);
    let out = Resampler::new(config).unwrap().resample(&ts, &values).unwrap();

    // The first three UTC hours still belong to 2023-12-31 at UTC-3.
    assert_eq!(out.len(), 367);
    assert_eq!(out.period[0], Timestamp::from_ymd_hms(2023, 12, 31, 3, 0, 0).unwrap());
    assert_eq!(out.value[0], 0);
    assert_eq!(out.value[1], 3);
}

// ============================================================================
// Frame Output
// ============================================================================

#[test]
fn test_frame_round_trip_through_columns() {
    let ts = hourly_2024();
    let values: Vec<f32> = (0..ts.len()).map(|i| (i % 24) as f32).collect();

    let daily = Resampler::daily(AggregationMethod::Max).resample_frame(&ts, &values).unwrap();
    assert_eq!(daily.column_names(), vec!["period", "value"]);
    assert!(daily.column::<f32>("value").unwrap().iter().all(|&v| v == 23.0));

    let monthly = Resampler::monthly(AggregationMethod::Max)
        .resample_columns::<f32>(&daily, "period", "value")
        .unwrap();
    assert_eq!(monthly.len(), 12);
}

#[test]
fn test_errors() {
    let ts = hourly_2024();
    assert!(matches!(
        Resampler::daily(AggregationMethod::Mean).resample(&ts, &[1.0]),
        Err(NumericsError::LengthMismatch { .. })
    ));

    let config = ResamplerConfig::default().with_utc_offset_minutes(-20 * 60);
    assert!(matches!(Resampler::new(config), Err(NumericsError::InvalidData(_))));
}
