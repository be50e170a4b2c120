//! End-to-end tests: load a stored frame, clean it with the primitives and
//! resample it into calendar buckets.

mod common;

use common::{assert_slice_eq, hourly, load_frame, random_na_floats, random_na_ints, random_values};
use navec_core::prelude::*;
use navec_primitives::prelude::*;
use navec_resample::prelude::*;

/// Timestamps and present readings from the fixture, NA rows dropped.
fn present_readings(frame: &DataFrame) -> (Vec<Timestamp>, Vec<f64>) {
    let time = frame.column::<Timestamp>("time").unwrap();
    let reading = frame.column::<NaFloat<f64>>("reading").unwrap();
    time.iter()
        .zip(reading.iter())
        .filter_map(|(&t, r)| r.to_option().map(|v| (t, v)))
        .unzip()
}

// ============================================================================
// Fixture Pipeline
// ============================================================================

#[test]
fn test_daily_mean_of_fixture() {
    let frame = load_frame("readings.json").unwrap();
    let reading = frame.column::<NaFloat<f64>>("reading").unwrap();
    assert_eq!(na_count(reading.as_slice()), 1);

    let (time, values) = present_readings(&frame);
    assert_eq!(values.len(), 5);

    let daily = Resampler::daily(AggregationMethod::Mean)
        .resample(&time, &values)
        .unwrap();
    let days: Vec<Timestamp> = (1..=3).map(|d| Timestamp::from_ymd(2024, 1, d).unwrap()).collect();
    assert_eq!(daily.period.as_slice(), days.as_slice());
    assert_slice_eq(daily.value.as_slice(), &[2.0, 6.0, 2.5], 1e-12, "daily mean");
}

#[test]
fn test_resample_fixture_columns() {
    let frame = load_frame("readings.json").unwrap();

    let daily = Resampler::daily(AggregationMethod::Sum)
        .resample_columns::<i32>(&frame, "time", "level")
        .unwrap();
    assert_eq!(daily.column_names(), vec![PERIOD_SERIES_NAME, VALUE_SERIES_NAME]);
    assert_eq!(daily.column::<i32>(VALUE_SERIES_NAME).unwrap().as_slice(), &[5, 4, 3]);

    // The NA-aware column is not a plain numeric type.
    assert!(matches!(
        Resampler::daily(AggregationMethod::Sum).resample_columns::<f64>(&frame, "time", "reading"),
        Err(NumericsError::InvalidData(_))
    ));
    assert!(matches!(
        Resampler::daily(AggregationMethod::Sum).resample_columns::<i32>(&frame, "clock", "level"),
        Err(NumericsError::KeyNotFound(_))
    ));
}

#[test]
fn test_fixture_reductions_agree() {
    let frame = load_frame("readings.json").unwrap();
    let reading = frame.column::<NaFloat<f64>>("reading").unwrap();
    let (_, values) = present_readings(&frame);

    assert_eq!(na_sum(reading.as_slice()), values.sum());
    assert_eq!(na_mean(reading.as_slice()).unwrap(), values.mean().unwrap());
    assert_eq!(na_min(reading.as_slice()).unwrap(), 1.0);
    assert_eq!(na_max(reading.as_slice()).unwrap(), 8.0);
}

// ============================================================================
// Synthetic Pipeline
// ============================================================================

#[test]
fn test_na_pipeline_then_resample() {
    let len = 24 * 14;
    let lhs = random_na_floats(len, 0.2, 1);
    let rhs = random_na_floats(len, 0.2, 2);
    let mut out = vec![NaFloat::na(); len];
    na_add_into(&lhs, &rhs, &mut out).unwrap();

    for ((a, b), c) in lhs.iter().zip(&rhs).zip(&out) {
        assert_eq!(c.is_na(), a.is_na() || b.is_na());
    }

    let ts = hourly(2024, 3, 4, len);
    let (time, values): (Vec<Timestamp>, Vec<f64>) = ts
        .iter()
        .zip(&out)
        .filter_map(|(&t, v)| v.to_option().map(|v| (t, v)))
        .unzip();

    let weekly = Resampler::weekly(AggregationMethod::Sum)
        .resample(&time, &values)
        .unwrap();
    // 2024-03-04 is a Monday: three partial or full weeks.
    assert_eq!(weekly.len(), 3);
    let total: f64 = weekly.value.iter().sum();
    common::assert_float_eq(total, na_sum(&out), 1e-9, "weekly total");
}

#[test]
fn test_na_int_kernels_match_scalar_ops() {
    let len = 500;
    let lhs = random_na_ints(len, 0.25, 11);
    let rhs = random_na_ints(len, 0.25, 12);

    let mut diff = vec![NaInt::na(); len];
    na_subtract_into(&lhs, &rhs, &mut diff).unwrap();
    let mut quotient = vec![NaInt::na(); len];
    na_divide_into(&lhs, &rhs, &mut quotient).unwrap();

    for i in 0..len {
        assert_eq!(diff[i].to_option(), (lhs[i] - rhs[i]).to_option(), "diff[{i}]");
        assert_eq!(quotient[i].to_option(), (lhs[i] / rhs[i]).to_option(), "quotient[{i}]");
    }

    let present = len - na_count(&diff);
    let expected: i64 = diff.iter().filter_map(|x| x.to_option()).sum();
    assert!(present > 0);
    assert_eq!(na_sum(&diff), expected);
}

#[test]
fn test_kbn_mean_per_day() {
    let ts = hourly(2024, 6, 1, 24 * 30);
    let values = random_values(ts.len(), -1.0e6, 1.0e6, 7);

    let daily = Resampler::daily(AggregationMethod::Mean).resample(&ts, &values).unwrap();
    for (day, (&period, &mean)) in daily.period.iter().zip(daily.value.iter()).enumerate() {
        assert_eq!(period, Timestamp::from_ymd(2024, 6, day as u32 + 1).unwrap());
        let chunk = &values[day * 24..(day + 1) * 24];
        let expected = sum_with(chunk, Summation::KahanBabushkaNeumaier) / 24.0;
        common::assert_float_eq(mean, expected, 1e-9, "daily mean");
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_empty_and_single_inputs() {
    let empty = Resampler::monthly(AggregationMethod::Max)
        .resample::<f64>(&[], &[])
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.into_frame().unwrap().column_count(), 2);

    let ts = Timestamp::from_ymd_hms(2024, 2, 29, 23, 59, 59).unwrap();
    let single = Resampler::yearly(AggregationMethod::Last)
        .resample(&[ts], &[42u64])
        .unwrap();
    assert_eq!(single.iter().collect::<Vec<_>>(), vec![(Timestamp::from_ymd(2024, 1, 1).unwrap(), &42)]);
}

#[test]
fn test_unsorted_input_repeats_buckets() {
    let a = Timestamp::from_ymd(2024, 1, 1).unwrap();
    let b = Timestamp::from_ymd(2024, 1, 2).unwrap();
    let out = Resampler::daily(AggregationMethod::Sum)
        .resample(&[a, b, a], &[1, 2, 3])
        .unwrap();
    assert_eq!(out.period.as_slice(), &[a, b, a]);
    assert_eq!(out.value.as_slice(), &[1, 2, 3]);
}
