use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcgError {
    #[error("stream increment must be odd (got {0:#018x})")]
    EvenIncrement(u64),

    #[cfg(feature = "savestate-postcard")]
    #[error("failed to encode generator state: {0}")]
    Encode(#[source] postcard::Error),

    #[cfg(feature = "savestate-postcard")]
    #[error("failed to decode generator state: {0}")]
    Decode(#[source] postcard::Error),
}
