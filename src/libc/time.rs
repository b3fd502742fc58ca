//! Deterministic time functions.
//!
//! Time stubs report the fixed instant from [`clock`]. Calendar conversion
//! always fails: no time zone database exists under Stasis.

#![allow(non_camel_case_types)]

use crate::runtime::clock;
use macros::stub_symbol;
use std::ptr;
use tracing::trace;

/// Time in seconds.
pub type time_t = libc::time_t;

/// Suseconds (microseconds) type.
pub type suseconds_t = libc::suseconds_t;

/// Time value with seconds and microseconds.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct timeval {
    pub tv_sec: time_t,
    pub tv_usec: suseconds_t,
}

/// Time specification with seconds and nanoseconds.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct timespec {
    pub tv_sec: time_t,
    pub tv_nsec: std::os::raw::c_long,
}

/// Timezone (unused but required for gettimeofday signature).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct timezone {
    pub tz_minuteswest: std::os::raw::c_int,
    pub tz_dsttime: std::os::raw::c_int,
}

/// Get time in seconds.
#[stub_symbol]
pub fn time(tloc: *mut time_t) -> time_t {
    let secs = clock::now().secs as time_t;
    if !tloc.is_null() {
        unsafe { *tloc = secs };
    }
    secs
}

/// Convert to broken-down local time. Always fails.
#[stub_symbol]
pub fn localtime(_timer: *const time_t) -> *mut libc::tm {
    trace!("localtime: no calendar available");
    ptr::null_mut()
}

/// Convert to broken-down UTC time. Always fails.
#[stub_symbol]
pub fn gmtime(_timer: *const time_t) -> *mut libc::tm {
    trace!("gmtime: no calendar available");
    ptr::null_mut()
}

/// Reentrant `localtime`. Always fails and leaves `result` untouched.
#[stub_symbol]
pub fn localtime_r(_timer: *const time_t, _result: *mut libc::tm) -> *mut libc::tm {
    trace!("localtime_r: no calendar available");
    ptr::null_mut()
}

/// Reentrant `gmtime`. Always fails and leaves `result` untouched.
#[stub_symbol]
pub fn gmtime_r(_timer: *const time_t, _result: *mut libc::tm) -> *mut libc::tm {
    trace!("gmtime_r: no calendar available");
    ptr::null_mut()
}

/// Get time of day.
#[stub_symbol]
pub fn gettimeofday(tv: *mut timeval, tz: *mut timezone) -> std::os::raw::c_int {
    if !tv.is_null() {
        let now = clock::now();
        unsafe {
            (*tv).tv_sec = now.secs as time_t;
            (*tv).tv_usec = now.micros as suseconds_t;
        }
    }
    if !tz.is_null() {
        unsafe {
            (*tz).tz_minuteswest = 0;
            (*tz).tz_dsttime = 0;
        }
    }
    0 // Success
}

/// Get clock time. Every clock reports the same instant.
#[stub_symbol]
pub fn clock_gettime(clock_id: libc::clockid_t, tp: *mut timespec) -> std::os::raw::c_int {
    if tp.is_null() {
        trace!(clock_id, "clock_gettime: null timespec");
        return -1;
    }
    let now = clock::now();
    unsafe {
        (*tp).tv_sec = now.secs as time_t;
        (*tp).tv_nsec = now.nanos() as std::os::raw::c_long;
    }
    0 // Success
}
