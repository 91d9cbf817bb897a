//! Implementation variants for the switch vs map comparison

pub mod c_impl;
pub mod map;
pub mod original;

pub use map::map_implementation;
pub use original::switch_implementation;

/// Function signature: maps an architecture name to a dispatch code
pub type ResolveFn = fn(&str) -> i32;

/// Which code assignment a variant follows.
///
/// The match-based and map-based resolvers disagree on `arm` / `arm64`, so
/// each variant is checked against the reference of its own family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapping {
    /// amd64=0, arm64=1, arm=2
    Switch,
    /// amd64=0, arm=1, arm64=2
    Map,
}

impl Mapping {
    /// Name of the variant every other variant of this family is checked against
    pub const fn reference(self) -> &'static str {
        match self {
            Mapping::Switch => "original",
            Mapping::Map => "map-fresh",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mapping::Switch => "switch",
            Mapping::Map => "map",
        }
    }
}

/// Variant descriptor
pub struct Variant {
    pub name: &'static str,
    pub description: &'static str,
    pub mapping: Mapping,
    pub function: ResolveFn,
}

/// Returns all available variants
pub fn get_variants() -> Vec<Variant> {
    #[allow(unused_mut)]
    let mut variants = vec![
        Variant {
            name: "original",
            description: "Rust match on &str (sequential comparisons)",
            mapping: Mapping::Switch,
            function: original::switch_implementation,
        },
        Variant {
            name: "rust-elseif",
            description: "Rust if / else if equality chain",
            mapping: Mapping::Switch,
            function: original::elseif_implementation,
        },
        Variant {
            name: "map-fresh",
            description: "std HashMap built on every call",
            mapping: Mapping::Map,
            function: map::map_implementation,
        },
        Variant {
            name: "map-static",
            description: "std HashMap built once (LazyLock)",
            mapping: Mapping::Map,
            function: map::map_static,
        },
        Variant {
            name: "fxmap-static",
            description: "FxHashMap built once (LazyLock)",
            mapping: Mapping::Map,
            function: map::fxmap_static,
        },
    ];

    // Only present when build.rs found a C compiler
    #[cfg(c_implementation_active)]
    variants.push(Variant {
        name: "c-strcmp",
        description: "C if-else if chain of memcmp",
        mapping: Mapping::Switch,
        function: c_impl::switch_implementation_c,
    });

    variants
}
