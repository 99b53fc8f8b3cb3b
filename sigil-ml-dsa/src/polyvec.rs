//! Polynomial vector operations for ML-DSA
//!
//! Fixed-length vectors over [`Poly`] with dimension `K` (rows of A, t, w)
//! or `L` (columns of A, s1, y, z), plus the K x L matrix A itself.

use crate::ntt::pointwise_acc;
use crate::poly::Poly;
use subtle::Choice;
use zeroize::Zeroize;

/// Polynomial vector with K elements.
#[derive(Clone, Zeroize)]
pub struct PolyVecK<const K: usize> {
    /// The component polynomials.
    pub polys: [Poly; K],
}

impl<const K: usize> Default for PolyVecK<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const K: usize> PolyVecK<K> {
    /// Create a zero vector.
    pub fn zero() -> Self {
        Self {
            polys: core::array::from_fn(|_| Poly::zero()),
        }
    }

    /// Forward NTT on all polynomials.
    pub fn ntt(&mut self) {
        for p in &mut self.polys {
            p.ntt();
        }
    }

    /// Inverse NTT on all polynomials.
    pub fn inv_ntt(&mut self) {
        for p in &mut self.polys {
            p.inv_ntt();
        }
    }

    /// Add two vectors. Coefficients are not reduced.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..K {
            r.polys[i] = self.polys[i].add(&other.polys[i]);
        }
        r
    }

    /// Add in place. Coefficients are not reduced.
    pub fn add_assign(&mut self, other: &Self) {
        for i in 0..K {
            self.polys[i].add_assign(&other.polys[i]);
        }
    }

    /// Subtract two vectors. Coefficients are not reduced.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..K {
            r.polys[i] = self.polys[i].sub(&other.polys[i]);
        }
        r
    }

    /// Freeze all coefficients to [0, q-1].
    pub fn freeze(&mut self) {
        for p in &mut self.polys {
            p.freeze();
        }
    }

    /// Conditionally add q to all coefficients.
    pub fn caddq(&mut self) {
        for p in &mut self.polys {
            p.caddq();
        }
    }

    /// Norm check over the whole vector, constant-time: accumulates a
    /// `Choice` across every polynomial (no early return) and converts to
    /// `bool` once at the end.
    pub fn check_norm(&self, bound: i32) -> bool {
        let mut pass = Choice::from(1u8);
        for p in &self.polys {
            pass &= p.check_norm_ct(bound);
        }
        bool::from(pass)
    }
}

/// Polynomial vector with L elements.
#[derive(Clone, Zeroize)]
pub struct PolyVecL<const L: usize> {
    /// The component polynomials.
    pub polys: [Poly; L],
}

impl<const L: usize> Default for PolyVecL<L> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const L: usize> PolyVecL<L> {
    /// Create a zero vector.
    pub fn zero() -> Self {
        Self {
            polys: core::array::from_fn(|_| Poly::zero()),
        }
    }

    /// Forward NTT on all polynomials.
    pub fn ntt(&mut self) {
        for p in &mut self.polys {
            p.ntt();
        }
    }

    /// Inverse NTT on all polynomials.
    pub fn inv_ntt(&mut self) {
        for p in &mut self.polys {
            p.inv_ntt();
        }
    }

    /// Add two vectors. Coefficients are not reduced.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..L {
            r.polys[i] = self.polys[i].add(&other.polys[i]);
        }
        r
    }

    /// Freeze all coefficients to [0, q-1].
    pub fn freeze(&mut self) {
        for p in &mut self.polys {
            p.freeze();
        }
    }

    /// Norm check over the whole vector, constant-time as in
    /// [`PolyVecK::check_norm`].
    pub fn check_norm(&self, bound: i32) -> bool {
        let mut pass = Choice::from(1u8);
        for p in &self.polys {
            pass &= p.check_norm_ct(bound);
        }
        bool::from(pass)
    }
}

/// Matrix A (K x L) in the NTT domain.
pub struct Matrix<const K: usize, const L: usize> {
    /// Rows of the matrix; each row is an L-vector.
    pub rows: [PolyVecL<L>; K],
}

impl<const K: usize, const L: usize> Matrix<K, L> {
    /// Create a zero matrix.
    pub fn zero() -> Self {
        Self {
            rows: core::array::from_fn(|_| PolyVecL::zero()),
        }
    }

    /// Matrix-vector multiplication t = A * s, entirely in the NTT domain.
    ///
    /// Accumulated coefficients are bounded by L*q; callers freeze before
    /// leaving the NTT domain.
    pub fn mul_vec(&self, s: &PolyVecL<L>) -> PolyVecK<K> {
        let mut t = PolyVecK::zero();

        for i in 0..K {
            for j in 0..L {
                pointwise_acc(
                    &mut t.polys[i].coeffs,
                    &self.rows[i].polys[j].coeffs,
                    &s.polys[j].coeffs,
                );
            }
        }

        t
    }
}
