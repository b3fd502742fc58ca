//! Stasis - deterministic libc stubs for analysis harnesses.
//!
//! Stasis replaces a handful of C library runtime functions with stubs that
//! return fixed or trivially computed values. Linking the stubs into a program
//! under static analysis or formal verification makes signal installation,
//! wall-clock time, calendar conversion and aligned allocation behave the same
//! way on every run and on every platform.
//!
//! # Modules
//!
//! - [`libc`] - C-ABI stub functions
//! - [`runtime`] - The fixed clock and the aligned-allocation policies
//! - [`symbols`] - Registry mapping C symbol names to stubs
//!
//! # Error Handling
//!
//! Rust-facing operations use the consolidated [`Error`] type. The C-ABI stubs
//! translate it into the return conventions of the functions they replace.

pub mod libc;
pub mod runtime;
pub mod symbols;

/// Consolidated error type for all Stasis operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("out of memory: cannot allocate {size} bytes with alignment {alignment}")]
    OutOfMemory { size: usize, alignment: usize },

    #[error("no stub registered for symbol `{0}`")]
    UnknownSymbol(String),
}

impl Error {
    /// The `errno` value a C caller sees for this error.
    pub fn errno(&self) -> ::libc::c_int {
        match self {
            Error::OutOfMemory { .. } => ::libc::ENOMEM,
            Error::UnknownSymbol(_) => ::libc::ENOENT,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

pub use runtime::alloc::{AlignPolicy, Block};
pub use runtime::clock::Timestamp;
