//! Original Rust implementation using a match expression.
//!
//! String patterns cannot become a jump table, so the compiler lowers this to
//! length checks followed by byte comparisons, tested in declaration order.

/// Resolve an architecture name to its dispatch code.
///
/// - `amd64`: 0
/// - `arm64`: 1
/// - `arm`: 2
/// - _: 0
#[inline(never)]
pub fn switch_implementation(goarch: &str) -> i32 {
    match goarch {
        "amd64" => 0,
        "arm64" => 1,
        "arm" => 2,
        _ => 0,
    }
}

/// Same mapping written as an explicit equality chain.
#[inline(never)]
pub fn elseif_implementation(goarch: &str) -> i32 {
    if goarch == "amd64" {
        0
    } else if goarch == "arm64" {
        1
    } else if goarch == "arm" {
        2
    } else {
        0
    }
}
