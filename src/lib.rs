//! # Micro-Optimize-Lookup
//!
//! Micro-benchmarks of small string lookups: resolving an architecture name
//! with a chain of comparisons versus an associative container.

pub mod cli;
pub mod control_flow;
pub mod error;
pub mod platform;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::control_flow::switch_vs_map::code::{map_implementation, switch_implementation};
    pub use crate::control_flow::switch_vs_map::{bench_map_impl, bench_switch_impl, Workload};
    pub use crate::platform::current_arch;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
