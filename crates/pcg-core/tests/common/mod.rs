#![allow(dead_code)]

use ctor::ctor;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// χ² critical value for 99 degrees of freedom at p = 0.001.
pub const CHI_SQUARED_99_P001: f64 = 148.23;

#[ctor]
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Draws `samples` values in `[0, buckets)` and returns Pearson's χ² statistic
/// against the uniform distribution.
pub fn chi_squared<F>(buckets: u32, samples: usize, mut draw: F) -> f64
where
    F: FnMut(u32) -> u32,
{
    let mut counts = vec![0u64; buckets as usize];
    for _ in 0..samples {
        let v = draw(buckets);
        assert!(v < buckets, "sample {v} out of range for {buckets} buckets");
        counts[v as usize] += 1;
    }

    let expected = samples as f64 / f64::from(buckets);
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
