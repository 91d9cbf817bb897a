//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every benchmarked algorithm implements [`AlgorithmRunner`]; the CLI only
//! talks to the registry, never to a concrete algorithm.

use crate::error::Result;
use crate::utils::timer::Variant;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "switch_vs_map")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g., "control_flow")
    fn category(&self) -> &'static str;

    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures for each variant, ready to be measured.
    /// Each closure runs and times ONE sample over `size` inputs generated from `seed`.
    /// The timer handles warmup, scheduling and repetition.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Verify correctness of all variants against their reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    use crate::control_flow::switch_vs_map::{SwitchVsMapRunner, Workload};

    let mut registry = AlgorithmRegistry::new();

    registry.register(SwitchVsMapRunner::new(Workload::Host));
    registry.register(SwitchVsMapRunner::new(Workload::Mixed));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec!["switch_vs_map", "switch_vs_map_mixed"]
        );
        assert!(registry.find("switch_vs_map_mixed").is_some());
        assert!(registry.find("binary_search").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = AlgorithmRegistry::default();
        assert!(registry.all().is_empty());
        assert!(registry.find("switch_vs_map").is_none());
    }
}
