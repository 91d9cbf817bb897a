//! Runs an algorithm across input sizes and exports raw results.

use std::io::Write;
use std::path::Path;

use log::info;

use super::timer::{measure_variants, unit_name, TimingConfig, VariantResult};
use crate::error::Result;
use crate::registry::AlgorithmRunner;

/// Results of every variant for one input size
#[derive(Clone, Debug)]
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<VariantResult>,
}

/// Everything measured for one algorithm
#[derive(Clone, Debug)]
pub struct AlgorithmReport {
    pub algorithm: &'static str,
    pub sizes: Vec<SizeResults>,
}

/// Verify an algorithm, then measure its variants at every size.
///
/// `seed` drives input generation so a run can be reproduced.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> Result<AlgorithmReport> {
    algo.verify()?;

    let sizes = sizes
        .iter()
        .map(|&size| {
            info!("{}: size {}", algo.name(), size);
            let variants = algo.get_variant_closures(size, seed);
            SizeResults {
                size,
                results: measure_variants(variants, config),
            }
        })
        .collect();

    Ok(AlgorithmReport {
        algorithm: algo.name(),
        sizes,
    })
}

/// Write reports as CSV, one row per (algorithm, size, variant)
pub fn write_csv<W: Write>(mut out: W, reports: &[AlgorithmReport]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,group,compiler,input_size,avg,median,min,max,unit,result"
    )?;

    for report in reports {
        for size in &report.sizes {
            for r in &size.results {
                let compiler = if r.name.starts_with("c-") {
                    crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{},{},{},{},{},{:.2},{},{},{},{},{}",
                    report.algorithm,
                    r.name,
                    r.group,
                    compiler,
                    size.size,
                    r.avg,
                    r.median,
                    r.min,
                    r.max,
                    unit_name(),
                    r.result_sample.map(|v| v.to_string()).unwrap_or_default()
                )?;
            }
        }
    }

    out.flush()
}

/// Export reports to a CSV file
pub fn export_csv(path: &Path, reports: &[AlgorithmReport]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), reports)?;
    Ok(())
}
