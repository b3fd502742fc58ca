//! Aligned allocation stubs.
//!
//! These call the system `malloc` directly under one of the
//! [`AlignPolicy`] rules instead of honoring the requested alignment.

use crate::runtime::alloc::{self, AlignPolicy};
use macros::stub_symbol;
use std::ptr;
use tracing::debug;

/// Policy used by [`stub_posix_memalign`].
#[cfg(not(feature = "round-up-memalign"))]
pub const POSIX_MEMALIGN_POLICY: AlignPolicy = AlignPolicy::Exact;

/// Policy used by [`stub_posix_memalign`].
#[cfg(feature = "round-up-memalign")]
pub const POSIX_MEMALIGN_POLICY: AlignPolicy = AlignPolicy::RoundUp;

/// Allocate aligned memory.
///
/// Returns `ENOMEM` and stores null in `*memptr` when the allocation fails.
/// A null `memptr` is rejected with `EINVAL` before anything is allocated.
#[stub_symbol]
pub fn posix_memalign(
    memptr: *mut *mut libc::c_void,
    alignment: libc::size_t,
    size: libc::size_t,
) -> libc::c_int {
    if memptr.is_null() {
        return libc::EINVAL;
    }
    match alloc::allocate(POSIX_MEMALIGN_POLICY, alignment, size) {
        Ok(block) => {
            unsafe { *memptr = block.as_ptr() as *mut libc::c_void };
            0
        }
        Err(err) => {
            debug!("posix_memalign: {}", err);
            unsafe { *memptr = ptr::null_mut() };
            err.errno()
        }
    }
}

/// Allocate zero-filled memory whose size is rounded up to the alignment.
#[stub_symbol]
pub fn aligned_alloc(alignment: libc::size_t, size: libc::size_t) -> *mut libc::c_void {
    match alloc::allocate(AlignPolicy::RoundUp, alignment, size) {
        Ok(block) => block.as_ptr() as *mut libc::c_void,
        Err(err) => {
            debug!("aligned_alloc: {}", err);
            ptr::null_mut()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_memalign_stores_block() {
        let mut p: *mut libc::c_void = ptr::null_mut();
        assert_eq!(stub_posix_memalign(&mut p, 16, 100), 0);
        assert!(!p.is_null());
        unsafe { libc::free(p) };
    }

    #[test]
    fn posix_memalign_reports_enomem() {
        let mut p: *mut libc::c_void = 1 as *mut libc::c_void;
        assert_eq!(stub_posix_memalign(&mut p, 16, usize::MAX), libc::ENOMEM);
        assert!(p.is_null());
    }

    #[test]
    fn posix_memalign_rejects_null_memptr() {
        assert_eq!(stub_posix_memalign(ptr::null_mut(), 16, 8), libc::EINVAL);
    }

    #[test]
    fn aligned_alloc_zero_fills_rounded_block() {
        let p = stub_aligned_alloc(64, 65) as *mut u8;
        assert!(!p.is_null());
        let bytes = unsafe { std::slice::from_raw_parts(p, 128) };
        assert!(bytes.iter().all(|&b| b == 0));
        unsafe { libc::free(p as *mut libc::c_void) };
    }

    #[cfg(not(feature = "round-up-memalign"))]
    #[test]
    fn posix_memalign_uses_exact_policy() {
        assert_eq!(POSIX_MEMALIGN_POLICY, AlignPolicy::Exact);
        assert_eq!(POSIX_MEMALIGN_POLICY.block_size(64, 65), Ok(65));
    }

    #[cfg(feature = "round-up-memalign")]
    #[test]
    fn posix_memalign_uses_round_up_policy() {
        assert_eq!(POSIX_MEMALIGN_POLICY, AlignPolicy::RoundUp);
        let mut p: *mut libc::c_void = ptr::null_mut();
        assert_eq!(stub_posix_memalign(&mut p, 64, 65), 0);
        assert!(!p.is_null());
        let bytes = unsafe { std::slice::from_raw_parts(p as *const u8, 128) };
        assert!(bytes.iter().all(|&b| b == 0));
        unsafe { libc::free(p) };
    }

    #[test]
    fn aligned_alloc_overflow_is_null() {
        assert!(stub_aligned_alloc(4096, usize::MAX - 1).is_null());
    }
}
