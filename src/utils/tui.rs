//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::runner::AlgorithmReport;
use crate::utils::timer::{unit_name, VariantResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original first, then Rust switch variants, maps, C.
fn variant_sort_key(result: &VariantResult) -> (u8, &'static str) {
    let name = result.name;
    if name == "original" {
        (0, name)
    } else if name.starts_with("c-") {
        (3, name)
    } else if result.group == "switch" {
        (1, name)
    } else {
        (2, name)
    }
}

pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[VariantResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    // 14+12+12+9+8+14 columns, 6 separators, 2 indent
    let fixed_width = 77;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 69 + 6;

    println!(
        "  Size: {} lookups ({} samples, {})",
        size,
        baseline.samples,
        unit_name()
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>14} {:>12} {:>12} {:>9} {:>8} {:>14}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Result",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg > 0.0 {
            baseline.avg / result.avg
        } else {
            0.0
        };

        let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
            (true, Some(c)) => format!("{} ({})", result.name, c),
            _ => result.name.to_string(),
        };

        let result_str = match result.result_sample {
            Some(v) => format!("{} [{}]", v, result.group),
            None => "-".to_string(),
        };

        println!(
            "  {:<v_width$} {:>14.1} {:>12} {:>12} {:>8.2}x {:>7.2}% {:>14}",
            truncate(&display_name, variant_col_width),
            result.avg,
            result.min,
            result.max,
            speedup,
            result.cv() * 100.0,
            result_str,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every table of a report, variants sorted
pub fn print_report(algo: &dyn AlgorithmRunner, report: &AlgorithmReport) {
    print_algo_info_box(algo);
    for size in &report.sizes {
        let mut results = size.results.clone();
        sort_variants(&mut results);
        print_results_table(&results, size.size);
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Micro-Optimize-Lookup Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &'static str, group: &'static str) -> VariantResult {
        VariantResult {
            name,
            description: "",
            group,
            avg: 1.0,
            median: 1,
            min: 1,
            max: 1,
            std_dev: 0.0,
            samples: 1,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_variants() {
        let mut results = vec![
            result("c-strcmp", "switch"),
            result("map-static", "map"),
            result("rust-elseif", "switch"),
            result("fxmap-static", "map"),
            result("original", "switch"),
        ];
        sort_variants(&mut results);
        let names: Vec<_> = results.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["original", "rust-elseif", "fxmap-static", "map-static", "c-strcmp"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("switch_vs_map_mixed", 10), "switch_...");
    }
}
