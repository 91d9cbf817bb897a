//! Thread pinning so a timing sample is not migrated between cores.
//!
//! Real affinity control exists on Linux only (libc `sched_setaffinity`).
//! Elsewhere pinning reports failure and the guard is a no-op.

use std::sync::atomic::{AtomicBool, Ordering};

static PIN_FAILURE_REPORTED: AtomicBool = AtomicBool::new(false);

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reads kernel state.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin(core_id: usize) -> bool {
        // CPU_SET does not bounds-check the index
        if core_id >= libc::CPU_SETSIZE as usize {
            return false;
        }

        // SAFETY: cpu_set_t is plain data; both calls get a valid, sized pointer.
        unsafe {
            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut original) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(original));
            true
        }
    }

    pub fn unpin() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` is the mask previously returned by sched_getaffinity.
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core_id: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        true
    }
}

/// Pin the current thread to the core it is running on (core 0 if unknown).
///
/// Returns the pinned core, or `None` when pinning is unsupported or denied.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    platform::pin(core).then_some(core)
}

/// Pin the current thread to `core_id`; false if out of range or denied.
pub fn pin_to_core(core_id: usize) -> bool {
    platform::pin(core_id)
}

/// True only for the first pinning failure of the process.
fn first_pin_failure() -> bool {
    !PIN_FAILURE_REPORTED.swap(true, Ordering::Relaxed)
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard: pins on creation, restores the original affinity on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let pinned_core = pin_to_current_core();
        if pinned_core.is_none() {
            if first_pin_failure() {
                log::warn!("CPU pinning unavailable, measuring unpinned");
            } else {
                log::debug!("CPU pinning unavailable, measuring unpinned");
            }
        }
        Self { pinned_core }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() && !unpin() {
            log::warn!("failed to restore CPU affinity");
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
