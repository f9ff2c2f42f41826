//! PCG32: a small, fast, reproducible pseudo-random number generator.
//!
//! [`Pcg32`] is the XSH-RR variant of the PCG family (64-bit LCG state, 32-bit
//! output) with seedable streams, two unbiased bounded samplers and O(log n)
//! jumps in either direction. It is not cryptographically secure and performs no
//! internal synchronisation; use one generator per stream.
//!
//! ```
//! use pcg_core::Pcg32;
//!
//! let mut rng = Pcg32::with_seed(42, 54);
//! assert_eq!(rng.random(), 0xa15c_02b7);
//!
//! let roll = rng.bounded(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! rng.retreat(2);
//! assert_eq!(rng.random(), 0xa15c_02b7);
//! ```

pub mod error;
pub mod lcg;
pub mod pcg32;
#[cfg(feature = "rand")]
mod rand_impl;
pub mod state;

pub use error::PcgError as Error;
pub use pcg32::Pcg32;
pub use state::Pcg32State;
