//! Benchmark entry points and input workloads for switch vs map

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::code::{map_implementation, switch_implementation, ResolveFn};
use crate::platform::current_arch;

/// Names drawn by the mixed workload: the three recognized tokens plus
/// names every resolver must send to the default.
pub const MIXED_POOL: [&str; 7] = ["amd64", "arm64", "arm", "riscv64", "386", "wasm", ""];

/// Input shape for a benchmark run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workload {
    /// Every lookup resolves the host architecture
    Host,
    /// Lookups drawn uniformly from [`MIXED_POOL`]
    Mixed,
}

/// Generate `size` lookup inputs
pub fn generate_workload(workload: Workload, size: usize, seed: u64) -> Vec<&'static str> {
    match workload {
        Workload::Host => vec![current_arch(); size],
        Workload::Mixed => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..size)
                .map(|_| *MIXED_POOL.choose(&mut rng).unwrap_or(&""))
                .collect()
        }
    }
}

/// Resolve every input, returning the sum of codes.
#[inline(always)]
pub fn run_lookups(func: ResolveFn, inputs: &[&str]) -> i64 {
    let mut checksum = 0i64;
    for &goarch in inputs {
        checksum += i64::from(black_box(func(black_box(goarch))));
    }
    checksum
}

/// Resolve the host architecture `n` times with the match resolver.
pub fn bench_switch_impl(n: u64) -> i32 {
    let goarch = current_arch();
    let mut last = 0;
    for _ in 0..n {
        last = black_box(switch_implementation(black_box(goarch)));
    }
    last
}

/// Resolve the host architecture `n` times with the per-call map resolver.
pub fn bench_map_impl(n: u64) -> i32 {
    let goarch = current_arch();
    let mut last = 0;
    for _ in 0..n {
        last = black_box(map_implementation(black_box(goarch)));
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_workload() {
        let inputs = generate_workload(Workload::Host, 16, 0);
        assert_eq!(inputs.len(), 16);
        assert!(inputs.iter().all(|&a| a == current_arch()));
    }

    #[test]
    fn test_mixed_workload_is_seeded() {
        let a = generate_workload(Workload::Mixed, 256, 42);
        let b = generate_workload(Workload::Mixed, 256, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|name| MIXED_POOL.contains(name)));
        // 256 uniform draws from 7 names hit more than one of them
        assert!(a.iter().any(|&name| name != a[0]));
    }

    #[test]
    fn test_run_lookups_checksum() {
        let inputs = ["amd64", "arm64", "arm", "riscv64"];
        assert_eq!(run_lookups(switch_implementation, &inputs), 3);
        assert_eq!(run_lookups(map_implementation, &inputs), 3);
        assert_eq!(run_lookups(switch_implementation, &["arm", "arm"]), 4);
        assert_eq!(run_lookups(map_implementation, &["arm", "arm"]), 2);
        assert_eq!(run_lookups(switch_implementation, &[]), 0);
    }

    #[test]
    fn test_entry_points() {
        let host = current_arch();
        assert_eq!(bench_switch_impl(100), switch_implementation(host));
        assert_eq!(bench_map_impl(100), map_implementation(host));
        assert_eq!(bench_switch_impl(0), 0);
        assert_eq!(bench_map_impl(0), 0);
    }
}
