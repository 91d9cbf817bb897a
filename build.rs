//! Build script to compile the C lookup variants.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let compiler = match cc::Build::new().try_get_compiler() {
        Ok(compiler) => compiler,
        Err(e) => {
            println!("cargo:warning=No C compiler found ({e}). C variants disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C variants disabled.");
        return;
    };

    let mut build = cc::Build::new();

    // Auto-detect all C files in src/ directory
    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            println!("cargo:warning=Bad glob pattern ({e}). C variants disabled.");
            return;
        }
    };
    if c_files.is_empty() {
        return;
    }

    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    if rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native") {
        build.flag_if_supported("-march=native");
    }

    build.opt_level(3);

    if let Err(e) = build.try_compile("switch_vs_map_c") {
        println!("cargo:warning=C compilation failed ({e}). C variants disabled.");
        return;
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
