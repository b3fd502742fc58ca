//! Aligned allocation policies.
//!
//! Both policies allocate with the system `malloc`. Neither guarantees the
//! returned address is aligned; `RoundUp` only guarantees that the block size
//! is a multiple of the alignment and that the block is zero-filled.

use crate::{Error, Result};
use std::ptr::NonNull;
use tracing::trace;

/// How an aligned allocation request is turned into a `malloc` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignPolicy {
    /// Allocate exactly the requested size. Alignment is ignored and the
    /// block is left uninitialized.
    Exact,

    /// Round the size up to the nearest multiple of the alignment, then
    /// zero-fill the whole block.
    RoundUp,
}

impl AlignPolicy {
    /// Number of bytes requested from `malloc` for `size` bytes at
    /// `alignment`.
    pub fn block_size(self, alignment: usize, size: usize) -> Result<usize> {
        match self {
            AlignPolicy::Exact => Ok(size),
            AlignPolicy::RoundUp => {
                round_up(size, alignment).ok_or(Error::OutOfMemory { size, alignment })
            }
        }
    }

    /// Whether blocks allocated under this policy are zero-filled.
    pub fn zero_fills(self) -> bool {
        matches!(self, AlignPolicy::RoundUp)
    }
}

/// Round `size` up to the nearest multiple of `alignment`.
///
/// An alignment of zero leaves the size unchanged. Returns `None` if the
/// rounded size does not fit in `usize`.
pub fn round_up(size: usize, alignment: usize) -> Option<usize> {
    if alignment == 0 {
        return Some(size);
    }
    let padded = size.checked_add(alignment - 1)?;
    Some(padded / alignment * alignment)
}

/// A heap block handed out by [`allocate`].
///
/// The block belongs to the C caller and is released with `free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    ptr: NonNull<u8>,
    size: usize,
}

impl Block {
    /// Start of the block.
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Number of bytes requested from `malloc`.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Allocate `size` bytes at `alignment` under `policy`.
///
/// Fails with [`Error::OutOfMemory`] only when `malloc` returns null or the
/// rounded size cannot be represented.
pub fn allocate(policy: AlignPolicy, alignment: usize, size: usize) -> Result<Block> {
    let block_size = policy.block_size(alignment, size)?;
    let ptr = unsafe { libc::malloc(block_size) } as *mut u8;
    let Some(ptr) = NonNull::new(ptr) else {
        trace!(?policy, alignment, size, block_size, "malloc failed");
        return Err(Error::OutOfMemory { size, alignment });
    };
    if policy.zero_fills() {
        unsafe { ptr.as_ptr().write_bytes(0, block_size) };
    }
    trace!(?policy, alignment, size, block_size, "allocated {:p}", ptr);
    Ok(Block {
        ptr,
        size: block_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(block: Block) {
        unsafe { libc::free(block.as_ptr() as *mut libc::c_void) };
    }

    #[test]
    fn round_up_to_multiple() {
        assert_eq!(round_up(0, 8), Some(0));
        assert_eq!(round_up(1, 8), Some(8));
        assert_eq!(round_up(8, 8), Some(8));
        assert_eq!(round_up(9, 8), Some(16));
        assert_eq!(round_up(100, 64), Some(128));
        assert_eq!(round_up(10, 3), Some(12));
    }

    #[test]
    fn zero_alignment_keeps_size() {
        assert_eq!(round_up(13, 0), Some(13));
        assert_eq!(AlignPolicy::RoundUp.block_size(0, 13), Ok(13));
    }

    #[test]
    fn overflow_is_out_of_memory() {
        assert_eq!(round_up(usize::MAX, 16), None);
        assert_eq!(
            AlignPolicy::RoundUp.block_size(16, usize::MAX),
            Err(Error::OutOfMemory {
                size: usize::MAX,
                alignment: 16
            })
        );
        // The exact policy never rounds, so it never overflows.
        assert_eq!(AlignPolicy::Exact.block_size(16, usize::MAX), Ok(usize::MAX));
    }

    #[test]
    fn exact_ignores_alignment() {
        let block = allocate(AlignPolicy::Exact, 4096, 10).unwrap();
        assert_eq!(block.size(), 10);
        release(block);
    }

    #[test]
    fn round_up_zero_fills_whole_block() {
        let block = allocate(AlignPolicy::RoundUp, 32, 33).unwrap();
        assert_eq!(block.size(), 64);
        let bytes = unsafe { std::slice::from_raw_parts(block.as_ptr(), block.size()) };
        assert!(bytes.iter().all(|&b| b == 0));
        release(block);
    }

    #[test]
    fn failed_malloc_is_out_of_memory() {
        assert_eq!(
            allocate(AlignPolicy::Exact, 8, usize::MAX),
            Err(Error::OutOfMemory {
                size: usize::MAX,
                alignment: 8
            })
        );
    }
}
