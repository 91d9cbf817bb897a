//! Control-flow micro-benchmarks.

pub mod switch_vs_map;
