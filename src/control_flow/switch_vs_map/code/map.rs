//! Associative-container implementations.
//!
//! Note the code assignment: `arm` and `arm64` are swapped relative to the
//! match-based resolvers. Both assignments are kept as they are.

use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::sync::LazyLock;

const ENTRIES: [(&str, i32); 3] = [("amd64", 0), ("arm", 1), ("arm64", 2)];

static STD_TABLE: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| HashMap::from(ENTRIES));

static FX_TABLE: LazyLock<FxHashMap<&'static str, i32>> =
    LazyLock::new(|| ENTRIES.into_iter().collect());

/// Build the table and look the name up, on every call.
///
/// Absent keys resolve to 0.
#[inline(never)]
pub fn map_implementation(goarch: &str) -> i32 {
    let table: HashMap<&str, i32> = HashMap::from(ENTRIES);
    table.get(goarch).copied().unwrap_or_default()
}

/// Lookup in a SipHash table built once.
#[inline(never)]
pub fn map_static(goarch: &str) -> i32 {
    STD_TABLE.get(goarch).copied().unwrap_or_default()
}

/// Lookup in an FxHash table built once.
#[inline(never)]
pub fn fxmap_static(goarch: &str) -> i32 {
    FX_TABLE.get(goarch).copied().unwrap_or_default()
}
