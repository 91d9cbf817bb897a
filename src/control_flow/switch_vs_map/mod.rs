//! # Switch vs Map Lookup Comparison
//!
//! Resolves an architecture name (`amd64`, `arm64`, `arm`) to a small integer
//! code, once with a chain of string comparisons and once with a hash map.
//!
//! ## Key Concepts
//!
//! - **Match / else-if**: at most three length checks and byte compares
//! - **Map built per call**: allocation, hashing and insertion dominate the lookup
//! - **Static map**: one hash plus bucket lookup, no setup after the first call
//!
//! With only three keys, the comparison chain is expected to beat any map;
//! the map built per call is the worst case by a wide margin.

pub mod bench;
pub mod code;
pub mod test;

pub use bench::{bench_map_impl, bench_switch_impl, Workload};

use crate::error::Result;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;
use std::sync::Arc;

pub struct SwitchVsMapRunner {
    workload: Workload,
}

impl SwitchVsMapRunner {
    pub fn new(workload: Workload) -> Self {
        Self { workload }
    }
}

impl AlgorithmRunner for SwitchVsMapRunner {
    fn name(&self) -> &'static str {
        match self.workload {
            Workload::Host => "switch_vs_map",
            Workload::Mixed => "switch_vs_map_mixed",
        }
    }

    fn category(&self) -> &'static str {
        "control_flow"
    }

    fn description(&self) -> &'static str {
        match self.workload {
            Workload::Host => "Architecture name lookup: match vs hash map (host arch)",
            Workload::Mixed => "Architecture name lookup: match vs hash map (mixed names)",
        }
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        let inputs = Arc::new(bench::generate_workload(self.workload, size, seed));

        code::get_variants()
            .into_iter()
            .map(|v| {
                let inputs = Arc::clone(&inputs);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    group: v.mapping.as_str(),
                    run: Box::new(move || {
                        let (elapsed, checksum) =
                            crate::measure!(bench::run_lookups(func, &inputs));
                        (elapsed, Some(checksum as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::{measure_variants, PinStrategy, TimingConfig};

    #[test]
    fn test_closures_report_family_checksums() {
        let runner = SwitchVsMapRunner::new(Workload::Mixed);
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::Off,
            schedule_seed: Some(3),
            ..TimingConfig::default()
        };

        let results = measure_variants(runner.get_variant_closures(512, 99), &config);
        assert_eq!(results.len(), runner.available_variants().len());

        let reference = |name: &str| {
            results
                .iter()
                .find(|r| r.name == name)
                .and_then(|r| r.result_sample)
                .unwrap()
        };
        let switch_sum = reference("original");
        let map_sum = reference("map-fresh");

        for r in &results {
            let expected = if r.group == "switch" { switch_sum } else { map_sum };
            assert_eq!(r.result_sample, Some(expected), "{}", r.name);
        }
    }

    #[test]
    fn test_names_follow_workload() {
        assert_eq!(SwitchVsMapRunner::new(Workload::Host).name(), "switch_vs_map");
        assert_eq!(
            SwitchVsMapRunner::new(Workload::Mixed).name(),
            "switch_vs_map_mixed"
        );
    }
}
