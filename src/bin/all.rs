//! CLI for running the lookup benchmarks.
//!
//! Usage:
//!   micro-lookup                      # Run all algorithms
//!   micro-lookup --list               # List available algorithms
//!   micro-lookup switch_vs_map_mixed  # Run specific algorithm
//!   micro-lookup --help               # Show help

use clap::Parser;
use micro_optimize_lookup::cli::{self, Cli};

fn main() {
    env_logger::init();

    if let Err(e) = cli::run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
