//! Host architecture identifier in `GOARCH` naming.
//!
//! The lookup benchmarks resolve the name of the running architecture, so the
//! host needs to be expressed with the same tokens the resolvers recognize
//! (`amd64`, `arm64`, `arm`, ...), not Rust's `x86_64` / `aarch64`.

/// Architecture of the running binary, e.g. `"amd64"` on x86_64.
pub fn current_arch() -> &'static str {
    goarch_of(std::env::consts::ARCH)
}

/// Map a Rust `target_arch` name to its `GOARCH` equivalent.
///
/// Names without a known equivalent are returned unchanged.
pub fn goarch_of(rust_arch: &str) -> &str {
    let little_endian = cfg!(target_endian = "little");
    match rust_arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "arm" => "arm",
        "x86" => "386",
        "riscv64" => "riscv64",
        "powerpc64" if little_endian => "ppc64le",
        "powerpc64" => "ppc64",
        "s390x" => "s390x",
        "loongarch64" => "loong64",
        "mips" if little_endian => "mipsle",
        "mips" => "mips",
        "mips64" if little_endian => "mips64le",
        "mips64" => "mips64",
        "wasm32" => "wasm",
        other => other,
    }
}
