//! CPU cycle counter for precise micro-benchmarking.
//!
//! x86 / x86_64 read the TSC, aarch64 reads the virtual timer. Other
//! architectures fall back to monotonic nanoseconds so the `cpu_cycles`
//! feature still builds there.

/// Read the current CPU cycle counter / timer.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // SAFETY: LFENCE and RDTSC are baseline on every x86_64 CPU.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "x86")]
    {
        use core::arch::x86::{_mm_lfence, _rdtsc};
        // SAFETY: requires SSE2 for LFENCE, present on every target rustc supports here.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // CNTVCT_EL0 is a fixed-frequency counter readable from EL0.
        let val: u64;
        // SAFETY: reading CNTVCT_EL0 has no side effects.
        unsafe {
            core::arch::asm!("isb", "mrs {}, cntvct_el0", out(reg) val, options(nostack));
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        fallback_nanos()
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
fn fallback_nanos() -> u64 {
    use std::sync::LazyLock;
    use std::time::Instant;

    static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
    EPOCH.elapsed().as_nanos() as u64
}

/// Unit reported by [`read_cycles`]
pub const fn unit_name() -> &'static str {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        "ns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_read_cycles_monotonic() {
        let c1 = read_cycles();
        let mut sum = 0u64;
        for i in 0..10_000u64 {
            sum = black_box(sum.wrapping_add(i));
        }
        let c2 = read_cycles();
        assert!(sum > 0);
        // TSC can skew slightly across cores; allow small backward steps
        assert!(c2 >= c1 || c1 - c2 < 1000, "cycles should be roughly monotonic");
    }

    #[test]
    fn test_unit_name() {
        assert!(!unit_name().is_empty());
    }
}
