//! Benchmark binary for the navec primitives.
//!
//! Usage:
//!     navec_bench <length> <iterations> [seed]
//!
//! Times the summation strategies, the NA bulk kernels and the resampler
//! over reproducible random data and prints a JSON report to stdout.

use std::env;
use std::error::Error;
use std::process;
use std::time::Instant;

use rand::prelude::*;
use serde::Serialize;

use navec_core::na::{NaInt, NaValue};
use navec_core::timestamp::{Timestamp, MILLIS_PER_MINUTE};
use navec_primitives::prelude::*;
use navec_resample::prelude::*;

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    elements: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_elements_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct AccuracyResult {
    strategy: Summation,
    sum: f64,
    abs_error: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    config: ResamplerConfig,
    accuracy: Vec<AccuracyResult>,
    benchmarks: Vec<BenchmarkResult>,
}

fn benchmark<F>(name: &str, iterations: usize, elements: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f();
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (elements as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name: name.to_string(),
        elements,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_elements_per_sec: throughput,
    }
}

/// Summation error on `len` copies of 0.1, whose exact sum is known.
fn accuracy(len: usize) -> Vec<AccuracyResult> {
    let values = vec![0.1f64; len];
    let exact = len as f64 / 10.0;
    [Summation::Naive, Summation::KahanBabushkaNeumaier]
        .into_iter()
        .map(|strategy| {
            let sum = sum_with(&values, strategy);
            AccuracyResult {
                strategy,
                sum,
                abs_error: (sum - exact).abs(),
            }
        })
        .collect()
}

fn parse_args() -> Result<(usize, usize, u64), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <length> <iterations> [seed]", args[0]);
        process::exit(1);
    }
    let length = args[1].parse::<usize>()?;
    let iterations = args[2].parse::<usize>()?;
    let seed = args.get(3).map(|s| s.parse::<u64>()).transpose()?.unwrap_or(42);
    Ok((length, iterations, seed))
}

fn main() -> Result<(), Box<dyn Error>> {
    let (length, iterations, seed) = parse_args()?;
    let mut rng = StdRng::seed_from_u64(seed);

    eprintln!("Generating {length} elements (seed {seed})...");
    let values: Vec<f64> = (0..length).map(|_| rng.gen_range(-1.0e3..1.0e3)).collect();
    let lhs: Vec<NaInt<i32>> = (0..length)
        .map(|_| {
            if rng.gen_bool(0.1) {
                NaInt::na()
            } else {
                NaInt::from_raw(rng.gen_range(-1_000..1_000))
            }
        })
        .collect();
    let rhs: Vec<NaInt<i32>> = lhs.iter().rev().copied().collect();
    let timestamps: Vec<Timestamp> = (0..length as i64)
        .map(|i| Timestamp::from_millis(i * MILLIS_PER_MINUTE))
        .collect();

    let config = ResamplerConfig::new(Frequency::Daily, AggregationMethod::Mean);
    let resampler = Resampler::new(config)?;

    let mut results = Vec::new();

    eprintln!("  sum (naive)...");
    results.push(benchmark("sum_naive", iterations, length, || {
        let _ = std::hint::black_box(sum_with(&values, Summation::Naive));
    }));

    eprintln!("  sum (kbn)...");
    results.push(benchmark("sum_kbn", iterations, length, || {
        let _ = std::hint::black_box(sum_with(&values, Summation::KahanBabushkaNeumaier));
    }));

    eprintln!("  variance...");
    results.push(benchmark("variance", iterations, length, || {
        let _ = std::hint::black_box(variance(&values));
    }));

    eprintln!("  na_add_into...");
    let mut out = vec![NaInt::<i32>::na(); length];
    results.push(benchmark("na_add_into", iterations, length, || {
        let _ = na_add_into(&lhs, &rhs, &mut out);
        std::hint::black_box(&out);
    }));

    eprintln!("  na_mean...");
    results.push(benchmark("na_mean", iterations, length, || {
        let _ = std::hint::black_box(na_mean(&lhs));
    }));

    eprintln!("  resample (daily mean)...");
    results.push(benchmark("resample_daily_mean", iterations, length, || {
        let _ = std::hint::black_box(resampler.resample(&timestamps, &values));
    }));

    let report = Report {
        seed,
        config,
        accuracy: accuracy(length.max(1)),
        benchmarks: results,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
