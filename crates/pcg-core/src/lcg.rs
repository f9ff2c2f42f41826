//! The 64-bit linear congruential recurrence underneath [`Pcg32`](crate::Pcg32).
//!
//! Every state transition is the affine map `s' = MULTIPLIER * s + increment`
//! evaluated modulo 2⁶⁴. Wrapping arithmetic is part of the definition here,
//! not an accident of overflow.

/// LCG multiplier shared by every PCG32 stream.
pub const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

/// Applies one LCG step to `state`.
#[inline]
pub const fn step(state: u64, increment: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(increment)
}

/// Jumps `state` forward by `delta` applications of `s' = cur_mult * s + cur_plus`.
///
/// Runs in O(log delta) by squaring the affine map once per bit of `delta`
/// and folding it into an accumulator whenever that bit is set. Because the
/// group of states is cyclic with order 2⁶⁴, a `delta` of `d.wrapping_neg()`
/// walks `d` steps backwards.
pub const fn jump(state: u64, mut delta: u64, mut cur_mult: u64, mut cur_plus: u64) -> u64 {
    let mut acc_mult: u64 = 1;
    let mut acc_plus: u64 = 0;
    while delta > 0 {
        if delta & 1 != 0 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}
