//! Tests for switch vs map implementations

use super::code::{get_variants, Variant};
use crate::error::{Error, Result};
use crate::platform::current_arch;

/// Recognized tokens, near misses and unrelated names
const SAMPLE_INPUTS: [&str; 12] = [
    "amd64", "arm64", "arm", "riscv64", "386", "wasm", "", "AMD64", "arm6", "arm64 ", "armv7",
    "amd64p32",
];

/// Verify every registered variant
pub fn verify_all() -> Result<()> {
    verify_variants(&get_variants())
}

/// Verify each variant against the reference resolver of its mapping family.
///
/// The reference must be part of `variants`; the first differing input is
/// reported.
pub fn verify_variants(variants: &[Variant]) -> Result<()> {
    for variant in variants {
        let reference_name = variant.mapping.reference();
        let reference = variants
            .iter()
            .find(|v| v.name == reference_name)
            .ok_or(Error::MissingReference(reference_name))?;

        for input in SAMPLE_INPUTS.iter().copied().chain(std::iter::once(current_arch())) {
            let expected = (reference.function)(input);
            let actual = (variant.function)(input);

            if actual != expected {
                return Err(Error::Mismatch {
                    variant: variant.name,
                    input: input.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_flow::switch_vs_map::code::{
        map, map_implementation, switch_implementation, Mapping,
    };
    use proptest::prelude::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_mistagged_variant_is_rejected() {
        let variants = [
            Variant {
                name: "original",
                description: "match",
                mapping: Mapping::Switch,
                function: switch_implementation,
            },
            Variant {
                name: "mistagged",
                description: "map resolver tagged as switch",
                mapping: Mapping::Switch,
                function: map_implementation,
            },
        ];

        let err = verify_variants(&variants).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Mismatch { variant: "mistagged", ref input, expected: 1, actual: 2 }
                    if input == "arm64"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_missing_reference_is_reported() {
        let variants = [Variant {
            name: "map-static",
            description: "static map",
            mapping: Mapping::Map,
            function: map::map_static,
        }];

        assert!(matches!(
            verify_variants(&variants),
            Err(Error::MissingReference("map-fresh"))
        ));
    }

    #[test]
    fn test_switch_codes() {
        assert_eq!(switch_implementation("amd64"), 0);
        assert_eq!(switch_implementation("arm64"), 1);
        assert_eq!(switch_implementation("arm"), 2);
    }

    #[test]
    fn test_map_codes() {
        assert_eq!(map_implementation("amd64"), 0);
        assert_eq!(map_implementation("arm"), 1);
        assert_eq!(map_implementation("arm64"), 2);
    }

    #[test]
    fn test_resolvers_disagree_on_arm() {
        let cases = [
            ("amd64", 0, 0),
            ("arm64", 1, 2),
            ("arm", 2, 1),
            ("riscv64", 0, 0),
        ];
        for (input, switch, map) in cases {
            assert_eq!(switch_implementation(input), switch, "switch: {input}");
            assert_eq!(map_implementation(input), map, "map: {input}");
        }
    }

    #[test]
    fn test_family_codes() {
        for variant in get_variants() {
            let (arm64, arm) = match variant.mapping {
                Mapping::Switch => (1, 2),
                Mapping::Map => (2, 1),
            };
            assert_eq!((variant.function)("amd64"), 0, "{}: amd64", variant.name);
            assert_eq!((variant.function)("arm64"), arm64, "{}: arm64", variant.name);
            assert_eq!((variant.function)("arm"), arm, "{}: arm", variant.name);
            assert_eq!((variant.function)("riscv64"), 0, "{}: unknown", variant.name);
        }
    }

    #[test]
    fn test_near_misses_default_to_zero() {
        for variant in get_variants() {
            for input in ["", "AMD64", "Arm", "arm6", "arm64 ", " arm", "arm\0"] {
                assert_eq!((variant.function)(input), 0, "{}: {input:?}", variant.name);
            }
        }
    }

    #[test]
    fn test_calls_do_not_interfere() {
        // Hammer one resolver, then check the other still answers the same
        let before = map_implementation("arm");
        for _ in 0..1000 {
            switch_implementation("arm");
        }
        assert_eq!(map_implementation("arm"), before);
        assert_eq!(switch_implementation("arm"), 2);
    }

    #[test]
    fn test_concurrent_resolution() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        get_variants()
                            .iter()
                            .map(|v| (v.function)("arm64"))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            let expected: Vec<_> = get_variants().iter().map(|v| (v.function)("arm64")).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    proptest! {
        #[test]
        fn prop_unrecognized_names_resolve_to_zero(name in "\\PC*") {
            prop_assume!(!["amd64", "arm64", "arm"].contains(&name.as_str()));
            for variant in get_variants() {
                prop_assert_eq!((variant.function)(&name), 0, "{}", variant.name);
            }
        }

        #[test]
        fn prop_resolution_is_idempotent(name in "(amd64|arm64|arm|[a-z0-9]{0,8})") {
            for variant in get_variants() {
                let first = (variant.function)(&name);
                prop_assert_eq!((variant.function)(&name), first, "{}", variant.name);
            }
        }
    }
}
