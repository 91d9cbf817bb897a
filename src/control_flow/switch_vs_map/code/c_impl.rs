//! FFI bindings for the C implementation of switch_vs_map.
//!
//! `switch_implementation_c` exists only when build.rs compiled the C source.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn switch_implementation_c(goarch: *const u8, len: usize) -> i32;
    }
}

/// C `memcmp` chain, same mapping as the match expression
#[cfg(c_implementation_active)]
pub fn switch_implementation_c(goarch: &str) -> i32 {
    // SAFETY: the C side reads exactly `len` bytes from a live &str.
    unsafe { ffi::switch_implementation_c(goarch.as_ptr(), goarch.len()) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;
