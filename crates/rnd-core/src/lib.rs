//! # rnd-core
//!
//! Core types and error definitions for rndkit.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: the primitive type aliases and the error type together with
//! the `ensure!` / `fail!` precondition macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, ErrorKind, Result};
