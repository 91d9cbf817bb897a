//! Utility modules for benchmarking and execution.

pub mod cpu_affinity;
pub mod cycles;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use runner::{export_csv, run_algorithm, AlgorithmReport, SizeResults};
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");
