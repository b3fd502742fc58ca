//! Deterministic libc function implementations.
//!
//! This module provides stub implementations of standard C library functions
//! for use in analysis and verification harnesses. All functions return
//! predictable values rather than system-dependent results.
//!
//! # Modules
//!
//! * [`signal`] - Signal installation
//! * [`time`] - Time and calendar functions
//! * [`malloc`] - Aligned allocation

pub mod malloc;
pub mod signal;
pub mod time;
