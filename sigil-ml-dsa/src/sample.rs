//! Sampling functions for ML-DSA
//!
//! The ExpandA, ExpandS, and ExpandMask inner samplers plus SampleInBall.
//! All are deterministic in their seed/nonce inputs and draw from a SHAKE
//! stream in rate-sized blocks, so rejection never grows a buffer.

use crate::packing::{unpack_z_17, unpack_z_19};
use crate::poly::{Poly, N};
use crate::reduce::Q;
use crate::xof::{Shake128Xof, Shake256Xof, SHAKE128_RATE, SHAKE256_RATE};

/// Sample a uniform polynomial in the NTT domain from a SHAKE128 stream.
///
/// Inner loop of ExpandA (FIPS 204 RejNTTPoly): 3-byte little-endian
/// candidates with the top bit of the third byte cleared, accepted iff
/// below q. The caller has already absorbed `rho || j || i`. The sampled
/// coefficients are NTT-domain by construction; no transform is applied.
pub fn sample_ntt(xof: &mut Shake128Xof) -> Poly {
    let mut poly = Poly::zero();
    let mut block = [0u8; SHAKE128_RATE];
    let mut ctr = 0;

    while ctr < N {
        xof.squeeze_into(&mut block);
        // 168 = 56 * 3: candidates never straddle a block boundary
        for bytes in block.chunks_exact(3) {
            let t = (bytes[0] as i32) | ((bytes[1] as i32) << 8) | (((bytes[2] & 0x7F) as i32) << 16);
            if t < Q && ctr < N {
                poly.coeffs[ctr] = t;
                ctr += 1;
            }
        }
    }

    poly
}

/// Map a nibble to a coefficient in [-eta, eta], or reject.
///
/// eta = 2: nibbles 0..14 accepted, folded mod 5 to {2,1,0,-1,-2}.
/// eta = 4: nibbles 0..8 accepted, mapped to {4,...,-4}.
#[inline]
fn coeff_from_half_byte<const ETA: usize>(b: i32) -> Option<i32> {
    if ETA == 2 {
        if b >= 15 {
            return None;
        }
        let m = if b < 5 {
            b
        } else if b < 10 {
            b - 5
        } else {
            b - 10
        };
        Some(2 - m)
    } else {
        if b >= 9 {
            return None;
        }
        Some(4 - b)
    }
}

/// Fold a small signed coefficient into standard form [0, q).
#[inline]
fn to_mod_q(c: i32) -> i32 {
    if c < 0 {
        c + Q
    } else {
        c
    }
}

/// Sample a polynomial with coefficients in [-eta, eta] from SHAKE256.
///
/// Inner loop of ExpandS (FIPS 204 RejBoundedPoly): absorbs
/// `seed || lsb(nonce) || msb(nonce)` and consumes nibbles low-then-high
/// from each squeezed byte, refilling in 136-byte rate blocks until all
/// 256 coefficients are accepted. Output is in standard form.
pub fn sample_bounded<const ETA: usize>(seed: &[u8; 64], nonce: u16) -> Poly {
    let mut poly = Poly::zero();

    let mut xof = Shake256Xof::new();
    xof.absorb(seed);
    xof.absorb(&nonce.to_le_bytes());

    let mut block = [0u8; SHAKE256_RATE];
    let mut ctr = 0;

    while ctr < N {
        xof.squeeze_into(&mut block);
        for &b in block.iter() {
            let low = (b & 0x0F) as i32;
            let high = (b >> 4) as i32;

            if ctr < N {
                if let Some(c) = coeff_from_half_byte::<ETA>(low) {
                    poly.coeffs[ctr] = to_mod_q(c);
                    ctr += 1;
                }
            }
            if ctr < N {
                if let Some(c) = coeff_from_half_byte::<ETA>(high) {
                    poly.coeffs[ctr] = to_mod_q(c);
                    ctr += 1;
                }
            }
        }
    }

    poly
}

/// Sample a masking polynomial with coefficients in [-(gamma1-1), gamma1].
///
/// Inner loop of ExpandMask: absorbs `seed || lsb(nonce) || msb(nonce)`,
/// squeezes exactly 32 * gamma1_bits bytes, and bit-unpacks them (4
/// coefficients per 9 bytes at 18 bits, 2 per 5 bytes at 20 bits). Output
/// is in standard form.
pub fn sample_mask(seed: &[u8; 64], nonce: u16, gamma1_bits: u32) -> Poly {
    let mut poly = Poly::zero();

    let mut xof = Shake256Xof::new();
    xof.absorb(seed);
    xof.absorb(&nonce.to_le_bytes());

    if gamma1_bits == 18 {
        let mut buf = [0u8; 576];
        xof.squeeze_into(&mut buf);
        unpack_z_17(&buf, &mut poly);
    } else {
        let mut buf = [0u8; 640];
        xof.squeeze_into(&mut buf);
        unpack_z_19(&buf, &mut poly);
    }

    poly
}

/// Sample the challenge polynomial with exactly tau coefficients in
/// {+1, -1} (stored as 1 and q-1) and the rest zero.
///
/// Absorbs `c_tilde` into SHAKE256. The first 8 squeezed bytes form a
/// little-endian 64-bit sign register (valid for all standardized
/// tau <= 64); subsequent bytes drive the rejection-sampled
/// Fisher-Yates-style placement of FIPS 204 SampleInBall.
pub fn sample_in_ball(c_tilde: &[u8], tau: usize) -> Poly {
    debug_assert!(tau <= 64, "sign register holds at most 64 bits");
    let mut poly = Poly::zero();

    let mut xof = Shake256Xof::new();
    xof.absorb(c_tilde);

    let mut signs_bytes = [0u8; 8];
    xof.squeeze_into(&mut signs_bytes);
    let mut signs = u64::from_le_bytes(signs_bytes);

    let mut block = [0u8; SHAKE256_RATE];
    let mut pos = block.len();

    for i in (N - tau)..N {
        // Draw bytes until one lands in [0, i]
        let j = loop {
            if pos == block.len() {
                xof.squeeze_into(&mut block);
                pos = 0;
            }
            let j = block[pos] as usize;
            pos += 1;
            if j <= i {
                break j;
            }
        };

        poly.coeffs[i] = poly.coeffs[j];
        poly.coeffs[j] = if signs & 1 != 0 { Q - 1 } else { 1 };
        signs >>= 1;
    }

    poly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::abs_centered;

    #[test]
    fn test_sample_ntt_range_and_determinism() {
        let rho = [7u8; 32];
        let mut xof = Shake128Xof::new();
        xof.absorb(&rho);
        xof.absorb(&[1, 0]);
        let a = sample_ntt(&mut xof);

        let mut xof2 = Shake128Xof::new();
        xof2.absorb(&rho);
        xof2.absorb(&[1, 0]);
        let b = sample_ntt(&mut xof2);

        assert_eq!(a.coeffs, b.coeffs);
        assert!(a.coeffs.iter().all(|&c| (0..Q).contains(&c)));
    }

    #[test]
    fn test_sample_bounded_eta2() {
        let seed = [0u8; 64];
        let poly = sample_bounded::<2>(&seed, 0);

        for &c in &poly.coeffs {
            assert!(abs_centered(c) <= 2, "coefficient {c} out of range");
        }
    }

    #[test]
    fn test_sample_bounded_eta4() {
        let seed = [0u8; 64];
        let poly = sample_bounded::<4>(&seed, 3);

        for &c in &poly.coeffs {
            assert!(abs_centered(c) <= 4, "coefficient {c} out of range");
        }
    }

    #[test]
    fn test_sample_bounded_nonce_separates() {
        let seed = [42u8; 64];
        let a = sample_bounded::<2>(&seed, 0);
        let b = sample_bounded::<2>(&seed, 1);
        assert_ne!(a.coeffs, b.coeffs);
    }

    #[test]
    fn test_sample_mask_ranges() {
        let seed = [9u8; 64];
        for (bits, gamma1) in [(18u32, 1i32 << 17), (20u32, 1i32 << 19)] {
            let poly = sample_mask(&seed, 5, bits);
            for &c in &poly.coeffs {
                // Standard form encoding of [-(gamma1-1), gamma1]
                let ok = c <= gamma1 || c >= Q - (gamma1 - 1);
                assert!(ok, "coefficient {c} out of range for {bits}-bit mask");
            }
        }
    }

    #[test]
    fn test_sample_in_ball_weight_and_values() {
        let seed = [0u8; 32];
        for tau in [39usize, 49, 60] {
            let poly = sample_in_ball(&seed, tau);

            let mut count = 0;
            for &c in &poly.coeffs {
                if c != 0 {
                    assert!(c == 1 || c == Q - 1, "non-zero coefficient must be +/-1");
                    count += 1;
                }
            }
            assert_eq!(count, tau, "hamming weight must be exactly tau");
        }
    }

    #[test]
    fn test_sample_in_ball_deterministic() {
        let seed = [0xA5u8; 48];
        let a = sample_in_ball(&seed, 49);
        let b = sample_in_ball(&seed, 49);
        assert_eq!(a.coeffs, b.coeffs);
    }
}
