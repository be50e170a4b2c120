//! Common test utilities for navec.
//!
//! This module provides float comparison, fixture loading and synthetic data
//! generation shared by the workspace-level integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use navec_core::na::{NaFloat, NaInt};
use navec_core::timestamp::{Timestamp, MILLIS_PER_HOUR};
use navec_core::DataFrame;
use rand::prelude::*;

/// Tiered float comparison.
///
/// - NaN only matches NaN
/// - near zero (|expected| < 1e-10) the difference is compared absolutely
/// - otherwise the relative difference is compared
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");

    let diff = (actual - expected).abs();
    if expected.abs() < 1e-10 {
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
    } else {
        let rel_diff = diff / expected.abs();
        assert!(
            rel_diff < epsilon,
            "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
        );
    }
}

/// Assert two float slices are equal with tolerance.
pub fn assert_slice_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a data frame stored as JSON under `tests/fixtures`.
pub fn load_frame(name: &str) -> Result<DataFrame, Box<dyn std::error::Error>> {
    let file = File::open(fixture_path(name))?;
    let frame = serde_json::from_reader(BufReader::new(file))?;
    Ok(frame)
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Hourly timestamps starting at midnight UTC of the given date.
pub fn hourly(year: i32, month: u32, day: u32, hours: usize) -> Vec<Timestamp> {
    let start = Timestamp::from_ymd(year, month, day)
        .expect("valid start date")
        .millis();
    (0..hours as i64)
        .map(|h| Timestamp::from_millis(start + h * MILLIS_PER_HOUR))
        .collect()
}

/// Uniform random values in `[lo, hi)` with a deterministic seed.
pub fn random_values(len: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Random integers where roughly `na_ratio` of the elements are NA.
pub fn random_na_ints(len: usize, na_ratio: f64, seed: u64) -> Vec<NaInt<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.gen_bool(na_ratio) {
                NaInt::from_option(None)
            } else {
                NaInt::from_option(Some(rng.gen_range(-1_000..1_000)))
            }
            .expect("generated values avoid the sentinel")
        })
        .collect()
}

/// Random floats where roughly `na_ratio` of the elements are NA.
pub fn random_na_floats(len: usize, na_ratio: f64, seed: u64) -> Vec<NaFloat<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let value = (!rng.gen_bool(na_ratio)).then(|| rng.gen_range(-1.0..1.0));
            NaFloat::from_option(value).expect("generated values avoid the sentinel")
        })
        .collect()
}
