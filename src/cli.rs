//! Command-line interface for the benchmark runner.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::registry::{build_registry, AlgorithmRunner};
use crate::utils::runner::{export_csv, run_algorithm};
use crate::utils::timer::{PinStrategy, TimingConfig};
use crate::utils::tui;

#[derive(Parser, Debug)]
#[command(
    name = "micro-lookup",
    version,
    about = "Micro-benchmarks of architecture name lookups: match vs hash map"
)]
pub struct Cli {
    /// Name of a specific algorithm to run (omit for all)
    pub algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    pub list: bool,

    /// Comma-separated numbers of lookups per sample
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096,16384")]
    pub sizes: Vec<usize>,

    /// Number of measured samples per variant
    #[arg(short, long, default_value_t = 30)]
    pub runs: usize,

    /// Warmup runs per variant before measuring
    #[arg(long, default_value_t = 10)]
    pub warmup: usize,

    /// Seed for input generation and scheduling (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = PinStrategy::PerExecution)]
    pub pin: PinStrategy,

    /// Trim 1% extremes from measurements
    #[arg(short, long)]
    pub filter: bool,

    /// Export raw results to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl Cli {
    pub fn timing_config(&self, seed: u64) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs,
            warmup_iterations: self.warmup,
            pin_strategy: self.pin,
            filter_outliers: self.filter,
            schedule_seed: Some(seed),
        }
    }
}

/// Run the CLI; errors propagate to `main`, which exits with status 1
pub fn run(cli: Cli) -> Result<()> {
    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => {
            let algo = registry.find(name).ok_or_else(|| Error::UnknownAlgorithm {
                name: name.clone(),
                available: registry.list_names().join(", "),
            })?;
            vec![algo]
        }
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = cli.timing_config(seed);
    info!("seed {seed}, {} runs per variant", config.runs_per_variant);

    tui::print_header();

    let mut reports = Vec::with_capacity(algorithms.len());
    for algo in algorithms {
        let report = run_algorithm(algo, &cli.sizes, &config, seed)?;
        tui::print_report(algo, &report);
        reports.push(report);
    }

    if let Some(path) = &cli.csv {
        match export_csv(path, &reports) {
            Ok(()) => println!("  Raw data exported to: {}", path.display()),
            Err(e) => warn!("failed to export CSV to {}: {}", path.display(), e),
        }
    }

    println!("Seed: {seed} (pass --seed to reproduce)");
    println!("Note: Speedup is relative to the first variant ('original').");
    Ok(())
}
