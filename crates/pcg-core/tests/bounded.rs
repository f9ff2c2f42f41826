mod common;

use common::{CHI_SQUARED_99_P001, chi_squared};
use pcg_core::Pcg32;
use proptest::prelude::*;

const DRAWS_PER_BOUND: usize = 10_000;

// Small bounds, powers of two, and bounds just above 2^31 where rejection is most frequent.
const EDGE_BOUNDS: &[u32] = &[
    1,
    2,
    3,
    6,
    7,
    100,
    255,
    256,
    1 << 16,
    (1 << 31) - 1,
    1 << 31,
    (1 << 31) + 1,
    0xC000_0001,
    u32::MAX - 1,
    u32::MAX,
];

#[test]
fn bounded_stays_in_range() {
    let mut rng = Pcg32::with_seed(0xfeed_face, 1);
    for &bound in EDGE_BOUNDS {
        for _ in 0..DRAWS_PER_BOUND {
            assert!(rng.bounded(bound) < bound, "bound {bound}");
        }
    }
}

#[test]
fn fast_bounded_stays_in_range() {
    let mut rng = Pcg32::with_seed(0xfeed_face, 2);
    for &bound in EDGE_BOUNDS {
        for _ in 0..DRAWS_PER_BOUND {
            assert!(rng.fast_bounded(bound) < bound, "bound {bound}");
        }
    }
}

#[test]
fn zero_bound_is_degenerate() {
    let mut rng = Pcg32::new();
    for _ in 0..100 {
        assert_eq!(rng.bounded(0), 0);
        assert_eq!(rng.fast_bounded(0), 0);
    }
    assert_eq!(rng, Pcg32::new());
}

#[test]
fn bounded_is_roughly_uniform() {
    let mut rng = Pcg32::with_seed(42, 54);
    let stat = chi_squared(100, 100_000, |b| rng.bounded(b));
    assert!(stat < CHI_SQUARED_99_P001, "χ² = {stat}");
}

#[test]
fn fast_bounded_is_roughly_uniform() {
    let mut rng = Pcg32::with_seed(42, 54);
    let stat = chi_squared(100, 100_000, |b| rng.fast_bounded(b));
    assert!(stat < CHI_SQUARED_99_P001, "χ² = {stat}");
}

#[test]
fn die_faces_are_balanced() {
    let mut rng = Pcg32::with_seed(0xdead_beef, 7);
    let mut counts = [0u32; 6];
    for _ in 0..60_000 {
        counts[rng.bounded(6) as usize] += 1;
    }
    for (face, &count) in counts.iter().enumerate() {
        assert!((9_500..=10_500).contains(&count), "face {face}: {count}");
    }
}

proptest! {
    #[test]
    fn any_positive_bound_is_respected(seed in any::<u64>(), stream in any::<u64>(), bound in 1u32..) {
        let mut rng = Pcg32::with_seed(seed, stream);
        for _ in 0..64 {
            prop_assert!(rng.bounded(bound) < bound);
            prop_assert!(rng.fast_bounded(bound) < bound);
        }
    }
}
