//! # rndkit
//!
//! Random vectors inside per-element bounds that sum exactly to a target.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on `rnd-core` / `rnd-math` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use rndkit::math::{zmbd, MersenneTwisterUniformRng};
//!
//! let mut rng = MersenneTwisterUniformRng::new(42);
//! let x = zmbd(&[-4.0, -1.0, -1.0, -4.0], &[1.0, 5.0, 1.0, 1.0], &mut rng).unwrap();
//! assert_eq!(x.len(), 4);
//! assert!(x.iter().sum::<f64>().abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use rnd_core as core;

/// Samplers, permutations, order statistics and vector utilities.
pub use rnd_math as math;
