//! Core ML-DSA algorithms
//!
//! KeyGen, Sign, and Verify per FIPS 204 Algorithms 1-3, generic over the
//! parameter-set constants. The signing loop is Fiat-Shamir with aborts:
//! rejection restarts are part of the algorithm, bounded at 1000 attempts,
//! and every secret-carrying intermediate is zeroized between attempts and
//! on every exit path.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::encoding::{
    encode_w1, pk_decode, pk_encode, sig_decode, sig_encode, sk_decode, sk_encode,
};
use crate::poly::N;
use crate::polyvec::{Matrix, PolyVecK, PolyVecL};
use crate::reduce::{freeze, Q};
use crate::rounding::{highbits, lowbits, make_hint, power2round, use_hint, D};
use crate::sample::{sample_bounded, sample_in_ball, sample_mask, sample_ntt};
use crate::xof::{shake256_into, Shake128Xof};
use sigil_core::{Error, Result};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Hard bound on Fiat-Shamir restarts. Expected attempt counts are in the
/// single digits; reaching this bound means a fault or an implementation
/// bug, never an input problem.
const MAX_ATTEMPTS: u32 = 1000;

/// Bits per mask/z coefficient for a given gamma1.
#[inline]
const fn gamma1_bits(gamma1: i32) -> u32 {
    if gamma1 == (1 << 17) {
        18
    } else {
        20
    }
}

// ---------------------------------------------------------------------------
// Seed expansion
// ---------------------------------------------------------------------------

/// Expand matrix A from rho, sampled directly in the NTT domain.
///
/// For each entry (r, s) the XOF absorbs `rho || s || r` (column byte
/// first), per FIPS 204 ExpandA.
pub fn expand_a<const K: usize, const L: usize>(rho: &[u8; 32]) -> Matrix<K, L> {
    let mut a = Matrix::<K, L>::zero();

    for r in 0..K {
        for s in 0..L {
            let mut xof = Shake128Xof::new();
            xof.absorb(rho);
            xof.absorb(&[s as u8, r as u8]);
            a.rows[r].polys[s] = sample_ntt(&mut xof);
        }
    }

    a
}

/// Expand the secret vectors s1 (nonces 0..L) and s2 (nonces L..L+K)
/// from rho', per FIPS 204 ExpandS.
pub fn expand_s<const K: usize, const L: usize, const ETA: usize>(
    rho_prime: &[u8; 64],
) -> (PolyVecL<L>, PolyVecK<K>) {
    let mut s1 = PolyVecL::<L>::zero();
    let mut s2 = PolyVecK::<K>::zero();

    for i in 0..L {
        s1.polys[i] = sample_bounded::<ETA>(rho_prime, i as u16);
    }
    for i in 0..K {
        s2.polys[i] = sample_bounded::<ETA>(rho_prime, (L + i) as u16);
    }

    (s1, s2)
}

/// Compute t = InvNTT(A * NTT(s1)) + s2, frozen to [0, q).
fn compute_t<const K: usize, const L: usize>(
    a: &Matrix<K, L>,
    s1: &PolyVecL<L>,
    s2: &PolyVecK<K>,
) -> PolyVecK<K> {
    let mut s1_hat = s1.clone();
    s1_hat.ntt();

    let mut t = a.mul_vec(&s1_hat);
    t.freeze();
    t.inv_ntt();
    t.caddq();
    t.add_assign(s2);
    t.freeze();

    s1_hat.zeroize();
    t
}

// ---------------------------------------------------------------------------
// ML-DSA.KeyGen (Algorithm 1)
// ---------------------------------------------------------------------------

/// ML-DSA key generation from a 32-byte seed.
///
/// Returns `(pk, sk)` as encoded byte vectors.
pub fn keygen_internal<const K: usize, const L: usize, const ETA: usize>(
    xi: &[u8; 32],
) -> (Vec<u8>, Vec<u8>) {
    // (rho, rho', K) = H(xi || k || l, 128); the k and l bytes
    // domain-separate parameter sets sharing a seed
    let mut expanded = [0u8; 128];
    shake256_into(&[xi, &[K as u8], &[L as u8]], &mut expanded);

    let mut rho = [0u8; 32];
    let mut rho_prime = [0u8; 64];
    let mut key_k = [0u8; 32];
    rho.copy_from_slice(&expanded[0..32]);
    rho_prime.copy_from_slice(&expanded[32..96]);
    key_k.copy_from_slice(&expanded[96..128]);

    let a = expand_a::<K, L>(&rho);
    let (mut s1, mut s2) = expand_s::<K, L, ETA>(&rho_prime);

    let mut t = compute_t(&a, &s1, &s2);

    // (t1, t0) = Power2Round(t); t0 is stored in standard form
    let mut t1 = PolyVecK::<K>::zero();
    let mut t0 = PolyVecK::<K>::zero();
    for i in 0..K {
        for j in 0..N {
            let (hi, lo) = power2round(t.polys[i].coeffs[j]);
            t1.polys[i].coeffs[j] = hi;
            t0.polys[i].coeffs[j] = if lo < 0 { lo + Q } else { lo };
        }
    }

    let pk = pk_encode::<K>(&rho, &t1);

    let mut tr = [0u8; 64];
    shake256_into(&[&pk], &mut tr);

    let sk = sk_encode::<K, L, ETA>(&rho, &key_k, &tr, &s1, &s2, &t0);

    expanded.zeroize();
    rho_prime.zeroize();
    key_k.zeroize();
    s1.zeroize();
    s2.zeroize();
    t0.zeroize();
    t.zeroize();

    (pk, sk)
}

/// Re-derive the encoded public key from an encoded secret key.
///
/// Recomputes t = A*s1 + s2 from the decoded secret and re-encodes
/// `rho || t1`. Fails on a malformed secret key.
pub fn derive_verification_key<const K: usize, const L: usize, const ETA: usize>(
    sk: &[u8],
) -> Result<Vec<u8>> {
    let (rho, mut key_k, _tr, mut s1, mut s2, mut t0) = sk_decode::<K, L, ETA>(sk)?;

    let a = expand_a::<K, L>(&rho);
    let mut t = compute_t(&a, &s1, &s2);

    let mut t1 = PolyVecK::<K>::zero();
    for i in 0..K {
        for j in 0..N {
            t1.polys[i].coeffs[j] = power2round(t.polys[i].coeffs[j]).0;
        }
    }

    key_k.zeroize();
    s1.zeroize();
    s2.zeroize();
    t0.zeroize();
    t.zeroize();

    Ok(pk_encode::<K>(&rho, &t1))
}

// ---------------------------------------------------------------------------
// ML-DSA.Sign (Algorithm 2)
// ---------------------------------------------------------------------------

/// Write the sparse hint encoding for h = MakeHint(-ct0, w - cs2 + ct0)
/// into `h` (OMEGA index slots plus K cumulative counts).
///
/// `w_cs2` is the frozen w - cs2. Returns `None` when more than OMEGA
/// hints would be needed (the caller restarts with a fresh mask).
fn compute_hints<const K: usize, const OMEGA: usize>(
    w_cs2: &PolyVecK<K>,
    ct0: &PolyVecK<K>,
    gamma2: i32,
    h: &mut [u8],
) -> Option<()> {
    debug_assert_eq!(h.len(), OMEGA + K);
    h.fill(0);
    let mut hint_count = 0;

    for i in 0..K {
        for j in 0..N {
            let c = ct0.polys[i].coeffs[j];
            // r = w - cs2 + ct0, the value the verifier reconstructs;
            // the hint compensates for the -ct0 it cannot see
            let r = freeze(w_cs2.polys[i].coeffs[j] + c);
            let hint = make_hint(Q - c, r, gamma2);
            if hint != 0 {
                if hint_count >= OMEGA {
                    return None;
                }
                h[hint_count] = j as u8;
                hint_count += 1;
            }
        }
        h[OMEGA + i] = hint_count as u8;
    }

    Some(())
}

/// ML-DSA signing with caller-supplied 32-byte randomness.
///
/// `rnd` is all-zero for the deterministic variant and fresh randomness
/// for hedged signing. The message is an opaque, already-prepared buffer.
///
/// # Errors
///
/// `InvalidEncoding`/`InvalidLength` for a malformed secret key (a caller
/// bug), `InternalFault` if the rejection loop exhausts its bound.
#[allow(clippy::too_many_arguments)]
pub fn sign_internal<
    const K: usize,
    const L: usize,
    const ETA: usize,
    const BETA: i32,
    const GAMMA1: i32,
    const GAMMA2: i32,
    const TAU: usize,
    const OMEGA: usize,
    const C_TILDE_BYTES: usize,
>(
    sk: &[u8],
    message: &[u8],
    rnd: &[u8; 32],
) -> Result<Vec<u8>> {
    let (rho, mut key_k, tr, mut s1, mut s2, mut t0) = sk_decode::<K, L, ETA>(sk)?;

    let a = expand_a::<K, L>(&rho);

    // mu = H(tr || M); rho' = H(K || rnd || mu)
    let mut mu = [0u8; 64];
    shake256_into(&[&tr, message], &mut mu);
    let mut rho_prime = [0u8; 64];
    shake256_into(&[&key_k, rnd, &mu], &mut rho_prime);

    let mut s1_hat = s1.clone();
    s1_hat.ntt();
    let mut s2_hat = s2.clone();
    s2_hat.ntt();
    let mut t0_hat = t0.clone();
    t0_hat.ntt();

    let mut h_store = [0u8; 96]; // covers OMEGA + K of every parameter set
    let h = &mut h_store[..OMEGA + K];
    let mut signature = None;

    let mut kappa: u32 = 0;
    while kappa < MAX_ATTEMPTS && signature.is_none() {
        // y = ExpandMask(rho', kappa * l)
        let mut y = PolyVecL::<L>::zero();
        let base_nonce = kappa * (L as u32);
        for i in 0..L {
            y.polys[i] = sample_mask(
                &rho_prime,
                (base_nonce + i as u32) as u16,
                gamma1_bits(GAMMA1),
            );
        }

        // w = InvNTT(A * NTT(y)), frozen to [0, q)
        let mut y_hat = y.clone();
        y_hat.ntt();
        let mut w = a.mul_vec(&y_hat);
        w.freeze();
        w.inv_ntt();
        w.caddq();

        // w1 = HighBits(w); c_tilde = H(mu || w1Encode(w1))
        let mut w1 = PolyVecK::<K>::zero();
        for i in 0..K {
            for j in 0..N {
                w1.polys[i].coeffs[j] = highbits(w.polys[i].coeffs[j], GAMMA2);
            }
        }
        let w1_encoded = encode_w1::<K>(&w1, GAMMA2);
        let mut c_tilde = [0u8; 64];
        shake256_into(&[&mu, &w1_encoded], &mut c_tilde[..C_TILDE_BYTES]);

        // c = SampleInBall(c_tilde)
        let mut c = sample_in_ball(&c_tilde[..C_TILDE_BYTES], TAU);
        let mut c_hat = c.clone();
        c_hat.ntt();

        // z = y + InvNTT(c_hat * s1_hat), frozen
        let mut z = PolyVecL::<L>::zero();
        for i in 0..L {
            let mut cs1 = c_hat.pointwise_mul(&s1_hat.polys[i]);
            cs1.inv_ntt();
            cs1.caddq();
            z.polys[i] = y.polys[i].add(&cs1);
            z.polys[i].freeze();
            cs1.zeroize();
        }

        // r0 = LowBits(w - cs2)
        let mut cs2 = PolyVecK::<K>::zero();
        for i in 0..K {
            cs2.polys[i] = c_hat.pointwise_mul(&s2_hat.polys[i]);
            cs2.polys[i].inv_ntt();
            cs2.polys[i].caddq();
        }
        let mut w_cs2 = w.sub(&cs2);
        w_cs2.freeze();
        let mut r0 = PolyVecK::<K>::zero();
        for i in 0..K {
            for j in 0..N {
                r0.polys[i].coeffs[j] = lowbits(w_cs2.polys[i].coeffs[j], GAMMA2);
            }
        }

        // Rejection conditions; the restart target is identical for all
        let mut ct0 = PolyVecK::<K>::zero();
        'attempt: {
            if !z.check_norm(GAMMA1 - BETA - 1) {
                break 'attempt;
            }
            if !r0.check_norm(GAMMA2 - BETA - 1) {
                break 'attempt;
            }

            // ct0 = InvNTT(c_hat * t0_hat)
            for i in 0..K {
                ct0.polys[i] = c_hat.pointwise_mul(&t0_hat.polys[i]);
                ct0.polys[i].inv_ntt();
                ct0.polys[i].caddq();
            }

            // h = MakeHint(-ct0, w - cs2 + ct0), at most OMEGA ones
            if compute_hints::<K, OMEGA>(&w_cs2, &ct0, GAMMA2, h).is_none() {
                break 'attempt;
            }
            if !ct0.check_norm(GAMMA2 - 1) {
                break 'attempt;
            }

            signature = Some(sig_encode::<K, L, OMEGA>(
                &c_tilde[..C_TILDE_BYTES],
                &z,
                h,
                GAMMA1,
            ));
        }

        // Every secret-carrying intermediate dies here, accepted or not
        y.zeroize();
        y_hat.zeroize();
        z.zeroize();
        w.zeroize();
        w_cs2.zeroize();
        cs2.zeroize();
        r0.zeroize();
        ct0.zeroize();
        c.zeroize();
        c_hat.zeroize();

        kappa += 1;
    }

    key_k.zeroize();
    rho_prime.zeroize();
    s1.zeroize();
    s2.zeroize();
    t0.zeroize();
    s1_hat.zeroize();
    s2_hat.zeroize();
    t0_hat.zeroize();

    signature.ok_or(Error::InternalFault)
}

// ---------------------------------------------------------------------------
// ML-DSA.Verify (Algorithm 3)
// ---------------------------------------------------------------------------

/// Apply the validated hint encoding to the frozen w' vector,
/// recovering w1' = UseHint(h, w').
fn apply_hints<const K: usize, const OMEGA: usize>(
    w_prime: &PolyVecK<K>,
    h: &[u8],
    gamma2: i32,
) -> PolyVecK<K> {
    let mut w1 = PolyVecK::<K>::zero();
    let mut hint_idx = 0;
    for i in 0..K {
        let end = h[OMEGA + i] as usize;
        for j in 0..N {
            // Positions are strictly ascending within the polynomial, so
            // each j matches at most once
            let hint = if hint_idx < end && h[hint_idx] as usize == j {
                hint_idx += 1;
                1
            } else {
                0
            };
            w1.polys[i].coeffs[j] = use_hint(hint, w_prime.polys[i].coeffs[j], gamma2);
        }
        debug_assert_eq!(hint_idx, end, "hint cursor drift at polynomial {i}");
    }
    w1
}

/// ML-DSA verification. Any malformed input yields `false`.
pub fn verify_internal<
    const K: usize,
    const L: usize,
    const BETA: i32,
    const GAMMA1: i32,
    const GAMMA2: i32,
    const TAU: usize,
    const OMEGA: usize,
    const C_TILDE_BYTES: usize,
>(
    pk: &[u8],
    message: &[u8],
    sig: &[u8],
) -> bool {
    let Ok((rho, t1)) = pk_decode::<K>(pk) else {
        return false;
    };
    let Some((c_tilde, z, h)) = sig_decode::<K, L, OMEGA>(sig, GAMMA1, C_TILDE_BYTES) else {
        return false;
    };

    if !z.check_norm(GAMMA1 - BETA - 1) {
        return false;
    }

    let a = expand_a::<K, L>(&rho);

    // tr = H(pk); mu = H(tr || M)
    let mut tr = [0u8; 64];
    shake256_into(&[pk], &mut tr);
    let mut mu = [0u8; 64];
    shake256_into(&[&tr, message], &mut mu);

    let mut c_hat = sample_in_ball(c_tilde, TAU);
    c_hat.ntt();

    let mut z_hat = z.clone();
    z_hat.ntt();

    // w' = InvNTT(A * NTT(z) - c_hat * NTT(t1 * 2^d))
    let mut t1_scaled = t1;
    for p in &mut t1_scaled.polys {
        p.shift_left(D);
    }
    t1_scaled.ntt();

    let mut w_prime = a.mul_vec(&z_hat);
    for i in 0..K {
        let ct1 = c_hat.pointwise_mul(&t1_scaled.polys[i]);
        w_prime.polys[i] = w_prime.polys[i].sub(&ct1);
    }
    w_prime.freeze();
    w_prime.inv_ntt();
    w_prime.caddq();

    // w1' = UseHint(h, w'); c_tilde' = H(mu || w1Encode(w1'))
    let w1_prime = apply_hints::<K, OMEGA>(&w_prime, h, GAMMA2);
    let w1_encoded = encode_w1::<K>(&w1_prime, GAMMA2);

    let mut c_tilde_prime = [0u8; 64];
    shake256_into(&[&mu, &w1_encoded], &mut c_tilde_prime[..C_TILDE_BYTES]);

    // Constant-time digest comparison, no early exit
    bool::from(c_tilde.ct_eq(&c_tilde_prime[..C_TILDE_BYTES]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::abs_centered;

    #[test]
    fn test_expand_a_deterministic() {
        let rho = [0u8; 32];
        let a1 = expand_a::<4, 4>(&rho);
        let a2 = expand_a::<4, 4>(&rho);

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(a1.rows[i].polys[j].coeffs, a2.rows[i].polys[j].coeffs);
            }
        }
    }

    #[test]
    fn test_expand_a_entries_differ() {
        let rho = [3u8; 32];
        let a = expand_a::<2, 2>(&rho);
        assert_ne!(a.rows[0].polys[0].coeffs, a.rows[0].polys[1].coeffs);
        assert_ne!(a.rows[0].polys[0].coeffs, a.rows[1].polys[0].coeffs);
    }

    #[test]
    fn test_expand_s_ranges() {
        let rho_prime = [5u8; 64];
        let (s1, s2) = expand_s::<4, 4, 2>(&rho_prime);
        for p in s1.polys.iter().chain(s2.polys.iter()) {
            assert!(p.coeffs.iter().all(|&c| abs_centered(c) <= 2));
        }
    }

    #[test]
    fn test_keygen_sizes_and_determinism() {
        let xi = [42u8; 32];
        let (pk, sk) = keygen_internal::<4, 4, 2>(&xi);
        assert_eq!(pk.len(), 1312);
        assert_eq!(sk.len(), 2560);

        let (pk2, sk2) = keygen_internal::<4, 4, 2>(&xi);
        assert_eq!(pk, pk2);
        assert_eq!(sk, sk2);
    }

    #[test]
    fn test_keygen_domain_separation_between_sets() {
        // The same seed must not produce related rho across parameter sets
        let xi = [42u8; 32];
        let (pk44, _) = keygen_internal::<4, 4, 2>(&xi);
        let (pk87, _) = keygen_internal::<8, 7, 2>(&xi);
        assert_ne!(pk44[..32], pk87[..32]);
    }

    /// The fundamental keygen identity: t = t1 * 2^d + t0 must recompose,
    /// and A*s1 must equal t - s2.
    #[test]
    fn test_keygen_identity() {
        let xi = [7u8; 32];
        let mut expanded = [0u8; 128];
        shake256_into(&[&xi, &[4u8], &[4u8]], &mut expanded);
        let mut rho = [0u8; 32];
        let mut rho_prime = [0u8; 64];
        rho.copy_from_slice(&expanded[0..32]);
        rho_prime.copy_from_slice(&expanded[32..96]);

        let a = expand_a::<4, 4>(&rho);
        let (s1, s2) = expand_s::<4, 4, 2>(&rho_prime);
        let t = compute_t(&a, &s1, &s2);

        for i in 0..4 {
            for j in 0..N {
                let (hi, lo) = power2round(t.polys[i].coeffs[j]);
                assert_eq!(hi * (1 << D) + lo, t.polys[i].coeffs[j]);
            }
        }

        // A*s1 = t - s2 (mod q)
        let mut s1_hat = s1.clone();
        s1_hat.ntt();
        let mut as1 = a.mul_vec(&s1_hat);
        as1.freeze();
        as1.inv_ntt();
        as1.caddq();

        for i in 0..4 {
            for j in 0..N {
                let expected = freeze(t.polys[i].coeffs[j] - s2.polys[i].coeffs[j]);
                assert_eq!(freeze(as1.polys[i].coeffs[j]), expected, "at [{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_sign_verify_roundtrip_44() {
        let xi = [1u8; 32];
        let (pk, sk) = keygen_internal::<4, 4, 2>(&xi);

        let msg = b"attempt bound and zeroization";
        let rnd = [0u8; 32];
        let sig = sign_internal::<4, 4, 2, 78, { 1 << 17 }, 95_232, 39, 80, 32>(&sk, msg, &rnd)
            .expect("signing must succeed");
        assert_eq!(sig.len(), 2420);

        assert!(verify_internal::<4, 4, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &pk, msg, &sig
        ));
        assert!(!verify_internal::<4, 4, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &pk, b"another message", &sig
        ));
    }

    #[test]
    fn test_sign_is_deterministic_in_rnd() {
        let xi = [9u8; 32];
        let (_, sk) = keygen_internal::<4, 4, 2>(&xi);
        let msg = b"determinism";

        let sig1 = sign_internal::<4, 4, 2, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &sk, msg, &[0u8; 32],
        )
        .unwrap();
        let sig2 = sign_internal::<4, 4, 2, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &sk, msg, &[0u8; 32],
        )
        .unwrap();
        assert_eq!(sig1, sig2);

        let sig3 = sign_internal::<4, 4, 2, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &sk, msg, &[0xFFu8; 32],
        )
        .unwrap();
        assert_ne!(sig1, sig3);
    }

    #[test]
    fn test_sign_rejects_malformed_sk() {
        let sig = sign_internal::<4, 4, 2, 78, { 1 << 17 }, 95_232, 39, 80, 32>(
            &[0u8; 100],
            b"m",
            &[0u8; 32],
        );
        assert!(matches!(sig, Err(Error::InvalidLength { .. })));
    }

    #[test]
    fn test_verify_key_derivation_matches_keygen() {
        let xi = [13u8; 32];
        let (pk, sk) = keygen_internal::<4, 4, 2>(&xi);
        let derived = derive_verification_key::<4, 4, 2>(&sk).unwrap();
        assert_eq!(pk, derived);
    }
}
