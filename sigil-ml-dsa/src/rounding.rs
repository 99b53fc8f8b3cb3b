//! Rounding and hint functions for ML-DSA
//!
//! Power2Round, Decompose, HighBits, LowBits, MakeHint, UseHint, all
//! coefficient-wise on standard-form inputs in [0, q). Hint computation
//! and application avoid data-dependent branches.

use crate::reduce::{freeze, Q, Q_HALF};
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Dropped-bits parameter (always 13 in ML-DSA)
pub const D: u32 = 13;

/// Power2Round: split r into (r1, r0) with r = r1 * 2^d + r0.
///
/// Input: r in [0, q-1]. Output: r0 centered in (-2^(d-1), 2^(d-1)].
#[inline]
pub fn power2round(r: i32) -> (i32, i32) {
    let r1 = (r + (1 << (D - 1)) - 1) >> D;
    let r0 = r - (r1 << D);
    (r1, r0)
}

/// Decompose: split r into (r1, r0) with r = r1 * 2*gamma2 + r0 and r0
/// centered in (-gamma2, gamma2], with the top slice wrapped around:
/// when r1 would equal m = (q-1)/(2*gamma2), it becomes 0 and r0 is
/// decremented (the q-1 boundary maps to r1 = 0, r0 = -1).
///
/// Input: r in [0, q-1]. The division by 2*gamma2 is done with
/// multiply-shift constants; the wraparound uses a mask, not a branch.
#[inline]
pub fn decompose(r: i32, gamma2: i32) -> (i32, i32) {
    let alpha = 2 * gamma2;

    // Ceiling division prefold: 127 = 2^7 - 1 with alpha a multiple of 2^7
    let mut r1 = (r + 127) >> 7;
    if gamma2 == 261_888 {
        // alpha = 523776 = 4096 * 2^7, m = 16: x/4096 ~ (x*1025) >> 22
        r1 = (r1 * 1025 + (1 << 21)) >> 22;
        r1 &= 15;
    } else {
        // alpha = 190464 = 1488 * 2^7, m = 44: x/1488 ~ (x*11275) >> 24
        r1 = (r1 * 11275 + (1 << 23)) >> 24;
        // Fold r1 = 44 to 0: mask is all-ones iff r1 > 43
        r1 ^= ((43 - r1) >> 31) & r1;
    }

    let mut r0 = r - r1 * alpha;

    // Center r0 into (-alpha/2, alpha/2]; the q-1 wraparound case lands
    // here as well, yielding r0 - 1 relative to the unwrapped split
    r0 -= ((Q_HALF - r0) >> 31) & Q;

    (r1, r0)
}

/// HighBits: the r1 component of [`decompose`].
#[inline]
pub fn highbits(r: i32, gamma2: i32) -> i32 {
    decompose(r, gamma2).0
}

/// LowBits: the r0 component of [`decompose`].
#[inline]
pub fn lowbits(r: i32, gamma2: i32) -> i32 {
    decompose(r, gamma2).1
}

/// MakeHint: 1 iff HighBits(r) != HighBits(r + z0), else 0.
///
/// Constant-time: the comparison goes through a subtle `Choice`.
#[inline]
pub fn make_hint(z0: i32, r: i32, gamma2: i32) -> i32 {
    let h0 = highbits(r, gamma2);
    let h1 = highbits(freeze(r + z0), gamma2);

    let equal = (h0 as u32).ct_eq(&(h1 as u32));
    u32::conditional_select(&1u32, &0u32, equal) as i32
}

/// UseHint: recover the high bits of r using the hint bit.
///
/// hint = 0 returns HighBits(r); hint = 1 steps the high bits by +/-1
/// mod m = (q-1)/(2*gamma2) according to the sign of the low bits.
/// Selection is mask-based, with no branch on the hint or on r.
#[inline]
pub fn use_hint(hint: i32, r: i32, gamma2: i32) -> i32 {
    let (r1, r0) = decompose(r, gamma2);
    let m = if gamma2 == 261_888 { 16 } else { 44 };

    // +1 if r0 > 0, -1 otherwise
    let positive = ((-r0) >> 31) & 1;
    let mut stepped = r1 + 2 * positive - 1;

    // Wrap into [0, m): -1 lifts to m-1, m folds to 0
    stepped += m & (stepped >> 31);
    stepped -= m & (((m - 1) - stepped) >> 31);

    let mask = -(hint & 1);
    r1 ^ ((r1 ^ stepped) & mask)
}
