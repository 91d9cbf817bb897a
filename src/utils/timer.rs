//! Unified timing system for micro-benchmarks.
//!
//! - CPU cycles (`cpu_cycles`, default) or wall-clock nanoseconds (`use_time`)
//! - Optional CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias
//! - Raw measurements reduced to summary statistics per variant

use std::hint::black_box;

use clap::ValueEnum;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::cpu_affinity::CpuPinGuard;

/// One raw measurement, in [`unit_name`] units
pub type Measurement = u64;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Stamp = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Stamp = std::time::Instant;

/// Read the current clock (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Stamp {
    super::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> Measurement {
    super::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> Measurement {
    start.elapsed().as_nanos() as u64
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    super::cycles::unit_name()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Time an expression, yielding `(measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::timer::now();
        let value = $body;
        let elapsed = $crate::utils::timer::elapsed(start);
        (elapsed, value)
    }};
}

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin and unpin around every sample
    #[default]
    PerExecution,
    /// Never pin
    Off,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup runs per variant before measurement (default: 10)
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Trim 1% of samples from each end before computing statistics
    pub filter_outliers: bool,
    /// Seed for the execution schedule; random when `None`
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            filter_outliers: false,
            schedule_seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Label used to group variants in reports
    pub group: &'static str,
    /// Runs one sample: returns (measurement, optional result value).
    /// Timing happens inside the closure to keep dispatch overhead out.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Summary statistics for one variant
#[derive(Clone, Debug, PartialEq)]
pub struct VariantResult {
    pub name: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub avg: f64,
    pub median: Measurement,
    pub min: Measurement,
    pub max: Measurement,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Samples kept after outlier filtering
    pub samples: usize,
    /// Result of the last sample, for cross-variant sanity checks
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation
    pub fn cv(&self) -> f64 {
        if self.avg > 0.0 {
            self.std_dev / self.avg
        } else {
            0.0
        }
    }
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up every variant
/// 2. Shuffles a (variant, sample) schedule
/// 3. Runs each sample under the configured pinning strategy
/// 4. Reduces the raw measurements to a [`VariantResult`] per variant,
///    in the order the variants were given
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let seed = config.schedule_seed.unwrap_or_else(rand::random);
    tasks.shuffle(&mut StdRng::seed_from_u64(seed));
    debug!(
        "measuring {} variants x {} samples (schedule seed {seed})",
        variants.len(),
        samples
    );

    let mut measurements: Vec<Vec<Measurement>> =
        (0..variants.len()).map(|_| Vec::with_capacity(samples)).collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            summarize(&variant, times, config.filter_outliers, result_sample)
        })
        .collect()
}

fn summarize(
    variant: &Variant,
    mut times: Vec<Measurement>,
    filter_outliers: bool,
    result_sample: Option<f64>,
) -> VariantResult {
    times.sort_unstable();
    let kept = if filter_outliers {
        trim_outliers(&times)
    } else {
        &times[..]
    };

    let mut result = VariantResult {
        name: variant.name,
        description: variant.description,
        group: variant.group,
        avg: 0.0,
        median: 0,
        min: 0,
        max: 0,
        std_dev: 0.0,
        samples: kept.len(),
        result_sample,
    };
    if kept.is_empty() {
        return result;
    }

    let avg = kept.iter().map(|&t| t as f64).sum::<f64>() / kept.len() as f64;
    let variance = kept
        .iter()
        .map(|&t| {
            let diff = t as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / (kept.len() - 1).max(1) as f64;

    result.avg = avg;
    result.median = kept[kept.len() / 2];
    result.min = kept[0];
    result.max = kept[kept.len() - 1];
    result.std_dev = variance.sqrt();
    result
}

/// Drop 1% (at least one sample) from each end of a sorted slice
fn trim_outliers(sorted: &[Measurement]) -> &[Measurement] {
    let trim = sorted.len().div_ceil(100);
    if sorted.len() <= 2 * trim {
        return sorted;
    }
    &sorted[trim..sorted.len() - trim]
}
