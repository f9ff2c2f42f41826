//! `rand` integration, so `Pcg32` can drive `rand`'s distributions.

use rand::{RngCore, SeedableRng};

use crate::Pcg32;

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.random()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Pcg32::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        Pcg32::fill_bytes(self, dst)
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian `state` followed by little-endian `sequence`.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let (state, sequence) = seed.split_at(8);
        let mut state_bytes = [0u8; 8];
        let mut sequence_bytes = [0u8; 8];
        state_bytes.copy_from_slice(state);
        sequence_bytes.copy_from_slice(sequence);
        Pcg32::with_seed(
            u64::from_le_bytes(state_bytes),
            u64::from_le_bytes(sequence_bytes),
        )
    }
}
