//! Signal installation stub.
//!
//! Signals are never delivered under Stasis. Every installation request is
//! answered with the same no-op handler, so callers that save and restore
//! handlers always see a consistent value.

use macros::stub_symbol;
use tracing::trace;

/// The only signal handler Stasis ever reports. Does nothing.
#[unsafe(no_mangle)]
pub extern "C" fn stub_signal_handler(_sig: libc::c_int) {}

/// Address of [`stub_signal_handler`] as a `sighandler_t`.
pub fn noop_handler() -> libc::sighandler_t {
    stub_signal_handler as extern "C" fn(libc::c_int) as libc::sighandler_t
}

/// Install a signal handler.
///
/// The requested handler is ignored; the no-op handler is installed in its
/// place and also reported as the previous handler.
#[stub_symbol]
pub fn signal(sig: libc::c_int, handler: libc::sighandler_t) -> libc::sighandler_t {
    trace!(sig, handler, "signal: keeping no-op handler");
    noop_handler()
}
