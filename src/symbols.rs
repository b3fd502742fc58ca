//! Registry of the libc symbols Stasis replaces.
//!
//! Every `#[stub_symbol]` function adds itself here at link time. The registry
//! is how a harness, or the `stasis` binary, finds out which C names are
//! stubbed and where each stub lives, whether or not the stubs are exported
//! under their bare C names.

use crate::{Error, Result};
use linkme::distributed_slice;

/// Address of a stub, stored in a `static` registry entry.
#[derive(Clone, Copy)]
pub struct FnPtr(pub *const ());

// SAFETY: only ever holds addresses of stub functions, which are never written.
unsafe impl Sync for FnPtr {}

/// `(C name, stub)` pairs, one per `#[stub_symbol]` function.
///
/// Names are the bare libc names (`"time"`, not `"stub_time"`), matching what
/// the `interpose` feature exports.
#[distributed_slice]
pub static STUB_SYMBOLS: [(&str, FnPtr)] = [..];

/// Address of the stub standing in for `symbol_name`, if any.
pub fn lookup(symbol_name: &str) -> Option<u64> {
    STUB_SYMBOLS
        .iter()
        .find(|(name, _)| *name == symbol_name)
        .map(|(_, ptr)| ptr.0 as u64)
}

/// Like [`lookup`], but an unknown symbol is an error.
pub fn resolve(symbol_name: &str) -> Result<u64> {
    lookup(symbol_name).ok_or_else(|| Error::UnknownSymbol(symbol_name.to_string()))
}

/// Names of all registered stubs, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STUB_SYMBOLS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}
