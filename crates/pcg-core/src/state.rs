//! Persistable snapshots of a [`Pcg32`] stream position.
//!
//! A snapshot is just the two LCG words. Restoring one checks that the increment
//! is odd; an even increment would silently shorten the period, so it is rejected.

#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

use crate::{Pcg32, error::PcgError};

/// Stream position of a [`Pcg32`], as captured by [`Pcg32::snapshot`].
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pcg32State {
    /// Raw LCG state.
    pub state: u64,
    /// Stream increment; must be odd to be restored.
    pub increment: u64,
}

impl Pcg32State {
    pub(crate) fn from_generator(rng: &Pcg32) -> Self {
        Self {
            state: rng.state(),
            increment: rng.increment(),
        }
    }

    pub(crate) fn into_generator(self) -> Result<Pcg32, PcgError> {
        if self.increment & 1 == 0 {
            tracing::debug!(increment = self.increment, "rejecting pcg32 snapshot");
            return Err(PcgError::EvenIncrement(self.increment));
        }
        Ok(Pcg32::from_raw_parts(self.state, self.increment))
    }
}

#[cfg(feature = "savestate-postcard")]
impl Pcg32State {
    /// Encodes the snapshot with postcard.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PcgError> {
        postcard::to_allocvec(self).map_err(PcgError::Encode)
    }

    /// Decodes a snapshot previously produced by [`Pcg32State::to_bytes`].
    ///
    /// The increment is not validated here; that happens on restore.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PcgError> {
        postcard::from_bytes(bytes).map_err(PcgError::Decode)
    }
}

impl Pcg32 {
    /// Captures the current stream position.
    pub fn snapshot(&self) -> Pcg32State {
        Pcg32State::from_generator(self)
    }

    /// Rebuilds a generator from a snapshot.
    pub fn restore(snapshot: Pcg32State) -> Result<Self, PcgError> {
        snapshot.into_generator()
    }

    #[cfg(feature = "savestate-postcard")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, PcgError> {
        self.snapshot().to_bytes()
    }

    #[cfg(feature = "savestate-postcard")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PcgError> {
        let snapshot = Pcg32State::from_bytes(bytes)?;
        Self::restore(snapshot)
    }
}

impl From<Pcg32> for Pcg32State {
    fn from(rng: Pcg32) -> Self {
        Self::from_generator(&rng)
    }
}

impl TryFrom<Pcg32State> for Pcg32 {
    type Error = PcgError;

    fn try_from(snapshot: Pcg32State) -> Result<Self, Self::Error> {
        snapshot.into_generator()
    }
}
