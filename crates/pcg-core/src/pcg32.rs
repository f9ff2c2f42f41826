//! The PCG32 generator.
//!
//! This module provides `Pcg32`, the XSH-RR member of the PCG family: a 64-bit LCG
//! whose state is permuted down to a 32-bit output. It is **not** cryptographically secure.

use crate::lcg::{self, MULTIPLIER};

/// Default LCG state of an unseeded generator.
pub const DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
/// Default (odd) stream increment of an unseeded generator.
pub const DEFAULT_INCREMENT: u64 = 0xda3e_39cb_94b9_5bdb;

/// A PCG32 generator: 64 bits of LCG state, 32 bits per output.
///
/// `increment` selects one of 2⁶³ streams and is always odd, so every stream has
/// the full period of 2⁶⁴. Any `state` is valid, including 0.
///
/// Mutating operations that do not produce a value (`seed`, `advance`, `retreat`)
/// return `&mut Self` so they can be chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Creates a generator on the fixed default stream.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
            increment: DEFAULT_INCREMENT,
        }
    }

    /// Creates a generator seeded with `state` on stream `sequence`.
    ///
    /// Equivalent to `*Pcg32::new().seed(state, sequence)`.
    pub const fn with_seed(state: u64, sequence: u64) -> Self {
        let increment = (sequence << 1) | 1;
        Self {
            state: lcg::step(state.wrapping_add(increment), increment),
            increment,
        }
    }

    /// Built from raw parts; the caller guarantees `increment` is odd.
    pub(crate) const fn from_raw_parts(state: u64, increment: u64) -> Self {
        Self { state, increment }
    }

    /// Reseeds the generator in place.
    ///
    /// The top bit of `sequence` is discarded: the increment becomes
    /// `(sequence << 1) | 1`. The seed is mixed in with one LCG step so the first
    /// output is not a trivial function of `state`.
    pub fn seed(&mut self, state: u64, sequence: u64) -> &mut Self {
        *self = Self::with_seed(state, sequence);
        tracing::trace!(
            state = self.state,
            increment = self.increment,
            "pcg32 stream seeded"
        );
        self
    }

    /// Raw LCG state.
    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Stream increment (always odd).
    #[inline]
    pub const fn increment(&self) -> u64 {
        self.increment
    }

    /// Advances the generator and returns the next pseudo-random `u32`.
    #[inline]
    pub fn random(&mut self) -> u32 {
        let old_state = self.state;
        self.state = lcg::step(old_state, self.increment);

        // XSH: fold the high bits down, keep bits 27..59.
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        // RR: the top five bits pick the rotation.
        let rot = (old_state >> 59) as u32;
        (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31))
    }

    /// Returns a value uniformly distributed in `[0, bound)` by rejection sampling.
    ///
    /// Draws below `2³² mod bound` are discarded so the final modulo is unbiased.
    /// `bound == 0` returns 0 without consuming a draw.
    pub fn bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.random();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Returns a value uniformly distributed in `[0, bound)` using Lemire's
    /// multiply-shift method.
    ///
    /// The common case costs one multiplication; the division needed for the
    /// rejection threshold only happens when the low half of the product falls
    /// below `bound`. Every retry consumes a fresh draw. `bound == 0` returns 0
    /// without consuming a draw.
    pub fn fast_bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let mut prod = u64::from(self.random()) * u64::from(bound);
        let mut low = prod as u32;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                prod = u64::from(self.random()) * u64::from(bound);
                low = prod as u32;
            }
        }
        (prod >> 32) as u32
    }

    /// Jumps forward `delta` steps, as if `random()` had been called `delta` times.
    ///
    /// O(log delta). The stream increment is left untouched.
    pub fn advance(&mut self, delta: u64) -> &mut Self {
        self.jump(delta);
        tracing::trace!(delta, state = self.state, "pcg32 advanced");
        self
    }

    /// Jumps backward `delta` steps.
    ///
    /// Moving back `delta` steps is the same as moving forward `2⁶⁴ - delta` steps.
    pub fn retreat(&mut self, delta: u64) -> &mut Self {
        self.jump(delta.wrapping_neg());
        tracing::trace!(delta, state = self.state, "pcg32 retreated");
        self
    }

    #[inline]
    fn jump(&mut self, delta: u64) {
        self.state = lcg::jump(self.state, delta, MULTIPLIER, self.increment);
    }

    /// Returns the next pseudo-random `u64` built from two draws, low word first.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.random());
        let hi = u64::from(self.random());
        (hi << 32) | lo
    }

    /// Returns `true` or `false` with equal probability.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.random() >> 31 != 0
    }

    /// Fills `buf` with pseudo-random bytes, four little-endian bytes per draw.
    ///
    /// A tail shorter than four bytes consumes one whole draw.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.random().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.random().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new()
    }
}
