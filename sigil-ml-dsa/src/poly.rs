//! Polynomial arithmetic for ML-DSA
//!
//! Polynomials are elements of the ring R_q = Z_q[X] / (X^256 + 1) with
//! q = 8380417. Stored coefficients rest in standard form [0, q); centered,
//! Montgomery, and unreduced values appear only as transients inside the
//! operations that document them.

use crate::ntt::{inv_ntt, ntt};
use crate::reduce::{abs_centered, caddq, freeze, montgomery_mul};
use subtle::Choice;
use zeroize::Zeroize;

/// Ring dimension N = 256
pub const N: usize = 256;

/// A polynomial in R_q with 256 coefficients.
#[derive(Clone, Zeroize)]
pub struct Poly {
    /// Coefficients in Z_q
    pub coeffs: [i32; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    /// Create a zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Freeze all coefficients to canonical [0, q-1] form.
    pub fn freeze(&mut self) {
        for c in &mut self.coeffs {
            *c = freeze(*c);
        }
    }

    /// Conditionally add q to each coefficient: maps (-q, q) to [0, q).
    pub fn caddq(&mut self) {
        for c in &mut self.coeffs {
            *c = caddq(*c);
        }
    }

    /// Forward NTT transform (in place).
    pub fn ntt(&mut self) {
        ntt(&mut self.coeffs);
    }

    /// Inverse NTT transform (in place).
    pub fn inv_ntt(&mut self) {
        inv_ntt(&mut self.coeffs);
    }

    /// Add two polynomials: r = a + b. Coefficients are not reduced.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N {
            r.coeffs[i] = self.coeffs[i] + other.coeffs[i];
        }
        r
    }

    /// Add another polynomial in place: self += other. Not reduced.
    pub fn add_assign(&mut self, other: &Self) {
        for i in 0..N {
            self.coeffs[i] += other.coeffs[i];
        }
    }

    /// Subtract two polynomials: r = a - b. Coefficients are not reduced.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N {
            r.coeffs[i] = self.coeffs[i] - other.coeffs[i];
        }
        r
    }

    /// Pointwise multiplication in the NTT domain: r = a * b.
    /// Each output coefficient carries a Montgomery R^(-1) factor.
    #[must_use]
    pub fn pointwise_mul(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N {
            r.coeffs[i] = montgomery_mul(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    /// Shift coefficients left by d bits: self = self * 2^d.
    pub fn shift_left(&mut self, d: u32) {
        for c in &mut self.coeffs {
            *c <<= d;
        }
    }

    /// Constant-time norm check: `Choice` of 1 iff every coefficient's
    /// centered absolute value is <= bound.
    ///
    /// Accumulates `(bound - |c|) >> 31` across all 256 coefficients; no
    /// early exit, no data-dependent branches.
    pub fn check_norm_ct(&self, bound: i32) -> Choice {
        let mut exceeded = 0i32;
        for &c in &self.coeffs {
            exceeded |= (bound - abs_centered(c)) >> 31;
        }
        // exceeded is 0 (all within bound) or -1
        Choice::from((exceeded + 1) as u8)
    }

    /// Norm check as a bool; same constant-time accumulation.
    pub fn check_norm(&self, bound: i32) -> bool {
        bool::from(self.check_norm_ct(bound))
    }

    /// Infinity norm: max centered absolute value. Constant-time: examines
    /// every coefficient with a branchless max.
    pub fn norm_inf(&self) -> i32 {
        let mut max = 0i32;
        for &c in &self.coeffs {
            let t = abs_centered(c);
            max ^= (max ^ t) & ((max - t) >> 31);
        }
        max
    }
}
