//! Key and signature encodings for ML-DSA
//!
//! The canonical FIPS 204 byte formats:
//!
//! - `pk = rho(32) || pack(t1, 10)`
//! - `sk = rho(32) || K(32) || tr(64) || pack(s1) || pack(s2) || pack(t0)`
//! - `sig = c_tilde || pack(z) || hint_encode(h)`
//!
//! Decoders are strict: a non-canonical encoding never round-trips.
//! The signature decoder returns `Option` (verify maps a failure to
//! `false`); the secret-key decoder returns descriptive errors because a
//! malformed sk is a caller bug.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::packing::{
    pack_eta2, pack_eta4, pack_t0, pack_t1, pack_w1, pack_z_17, pack_z_19, unpack_eta2,
    unpack_eta4, unpack_t0, unpack_t1, unpack_z_17, unpack_z_19,
};
use crate::poly::{Poly, N};
use crate::polyvec::{PolyVecK, PolyVecL};
use crate::reduce::{abs_centered, Q};
use crate::rounding::D;
use sigil_core::{Error, Result};
use zeroize::Zeroize;

/// Bytes of a packed t1 polynomial (10 bits per coefficient).
pub const T1_BYTES: usize = N * 10 / 8;

/// Bytes of a packed t0 polynomial (13 bits per coefficient).
pub const T0_BYTES: usize = N * D as usize / 8;

/// Packed size of an s1/s2 polynomial for a given eta.
pub const fn eta_bytes(eta: usize) -> usize {
    if eta == 2 {
        96
    } else {
        128
    }
}

/// Packed size of a z polynomial for a given gamma1.
pub const fn z_bytes(gamma1: i32) -> usize {
    if gamma1 == (1 << 17) {
        576
    } else {
        640
    }
}

/// Packed size of a w1 polynomial for a given gamma2.
pub const fn w1_bytes(gamma2: i32) -> usize {
    if gamma2 == 261_888 {
        128
    } else {
        192
    }
}

// ---------------------------------------------------------------------------
// Public key
// ---------------------------------------------------------------------------

/// Encode a public key: `rho || pack(t1, 10)`.
pub fn pk_encode<const K: usize>(rho: &[u8; 32], t1: &PolyVecK<K>) -> Vec<u8> {
    let mut pk = Vec::with_capacity(32 + K * T1_BYTES);
    pk.extend_from_slice(rho);

    let mut buf = [0u8; T1_BYTES];
    for i in 0..K {
        pack_t1(&t1.polys[i], &mut buf);
        pk.extend_from_slice(&buf);
    }
    pk
}

/// Decode and validate a public key.
pub fn pk_decode<const K: usize>(pk: &[u8]) -> Result<([u8; 32], PolyVecK<K>)> {
    let expected = 32 + K * T1_BYTES;
    if pk.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: pk.len(),
        });
    }

    let mut rho = [0u8; 32];
    rho.copy_from_slice(&pk[0..32]);

    let mut t1 = PolyVecK::<K>::zero();
    for i in 0..K {
        let offset = 32 + i * T1_BYTES;
        unpack_t1(&pk[offset..offset + T1_BYTES], &mut t1.polys[i]);
        // 10-bit unpacking cannot produce a value outside [0, 2^10)
        debug_assert!(t1.polys[i].coeffs.iter().all(|&c| (0..1024).contains(&c)));
    }

    Ok((rho, t1))
}

// ---------------------------------------------------------------------------
// Secret key
// ---------------------------------------------------------------------------

/// Decoded secret key fields: (rho, K, tr, s1, s2, t0).
pub type SkParts<const K: usize, const L: usize> = (
    [u8; 32],
    [u8; 32],
    [u8; 64],
    PolyVecL<L>,
    PolyVecK<K>,
    PolyVecK<K>,
);

/// Encode a secret key: `rho || K || tr || pack(s1) || pack(s2) || pack(t0)`.
pub fn sk_encode<const K: usize, const L: usize, const ETA: usize>(
    rho: &[u8; 32],
    key_k: &[u8; 32],
    tr: &[u8; 64],
    s1: &PolyVecL<L>,
    s2: &PolyVecK<K>,
    t0: &PolyVecK<K>,
) -> Vec<u8> {
    let eb = eta_bytes(ETA);
    let mut sk = Vec::with_capacity(32 + 32 + 64 + (K + L) * eb + K * T0_BYTES);

    sk.extend_from_slice(rho);
    sk.extend_from_slice(key_k);
    sk.extend_from_slice(tr);

    let mut eta_buf = [0u8; 128];
    for i in 0..L {
        if ETA == 2 {
            pack_eta2(&s1.polys[i], &mut eta_buf[..eb]);
        } else {
            pack_eta4(&s1.polys[i], &mut eta_buf[..eb]);
        }
        sk.extend_from_slice(&eta_buf[..eb]);
    }
    for i in 0..K {
        if ETA == 2 {
            pack_eta2(&s2.polys[i], &mut eta_buf[..eb]);
        } else {
            pack_eta4(&s2.polys[i], &mut eta_buf[..eb]);
        }
        sk.extend_from_slice(&eta_buf[..eb]);
    }
    eta_buf.zeroize();

    let mut t0_buf = [0u8; T0_BYTES];
    for i in 0..K {
        pack_t0(&t0.polys[i], &mut t0_buf);
        sk.extend_from_slice(&t0_buf);
    }
    t0_buf.zeroize();

    sk
}

fn eta_in_range(p: &Poly, eta: usize) -> bool {
    p.coeffs.iter().all(|&c| abs_centered(c) <= eta as i32)
}

/// Decode and validate a secret key.
pub fn sk_decode<const K: usize, const L: usize, const ETA: usize>(
    sk: &[u8],
) -> Result<SkParts<K, L>> {
    let eb = eta_bytes(ETA);
    let expected = 32 + 32 + 64 + (K + L) * eb + K * T0_BYTES;
    if sk.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: sk.len(),
        });
    }

    let mut rho = [0u8; 32];
    let mut key_k = [0u8; 32];
    let mut tr = [0u8; 64];
    rho.copy_from_slice(&sk[0..32]);
    key_k.copy_from_slice(&sk[32..64]);
    tr.copy_from_slice(&sk[64..128]);

    let s1_start = 128;
    let s2_start = s1_start + L * eb;
    let t0_start = s2_start + K * eb;

    let mut s1 = PolyVecL::<L>::zero();
    for i in 0..L {
        let offset = s1_start + i * eb;
        if ETA == 2 {
            unpack_eta2(&sk[offset..offset + eb], &mut s1.polys[i]);
        } else {
            unpack_eta4(&sk[offset..offset + eb], &mut s1.polys[i]);
        }
        if !eta_in_range(&s1.polys[i], ETA) {
            return Err(Error::InvalidEncoding("s1 coefficient out of range"));
        }
    }

    let mut s2 = PolyVecK::<K>::zero();
    for i in 0..K {
        let offset = s2_start + i * eb;
        if ETA == 2 {
            unpack_eta2(&sk[offset..offset + eb], &mut s2.polys[i]);
        } else {
            unpack_eta4(&sk[offset..offset + eb], &mut s2.polys[i]);
        }
        if !eta_in_range(&s2.polys[i], ETA) {
            return Err(Error::InvalidEncoding("s2 coefficient out of range"));
        }
    }

    let mut t0 = PolyVecK::<K>::zero();
    for i in 0..K {
        let offset = t0_start + i * T0_BYTES;
        unpack_t0(&sk[offset..offset + T0_BYTES], &mut t0.polys[i]);
        // 13-bit unpacking lands in (-2^12, 2^12] by construction
        debug_assert!(t0.polys[i]
            .coeffs
            .iter()
            .all(|&c| abs_centered(c) <= 1 << (D - 1)));
    }

    Ok((rho, key_k, tr, s1, s2, t0))
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// Encode a signature: `c_tilde || pack(z) || h`.
///
/// `h` must already be in the sparse hint encoding (OMEGA index slots plus
/// K cumulative counts). Temporary buffers that held z are zeroized.
pub fn sig_encode<const K: usize, const L: usize, const OMEGA: usize>(
    c_tilde: &[u8],
    z: &PolyVecL<L>,
    h: &[u8],
    gamma1: i32,
) -> Vec<u8> {
    debug_assert_eq!(h.len(), OMEGA + K, "hint length mismatch");
    let zb = z_bytes(gamma1);
    let mut sig = Vec::with_capacity(c_tilde.len() + L * zb + OMEGA + K);

    sig.extend_from_slice(c_tilde);

    let mut z_buf = [0u8; 640];
    for i in 0..L {
        if gamma1 == (1 << 17) {
            pack_z_17(&z.polys[i], &mut z_buf[..zb]);
        } else {
            pack_z_19(&z.polys[i], &mut z_buf[..zb]);
        }
        sig.extend_from_slice(&z_buf[..zb]);
    }
    z_buf.zeroize();

    sig.extend_from_slice(h);
    sig
}

/// Validate the sparse hint encoding.
///
/// Cumulative counts must be monotone and bounded by OMEGA, indices must be
/// strictly ascending within each polynomial, and every unused index slot
/// must be zero. Returns the total hint count if valid.
pub fn validate_hints<const K: usize, const OMEGA: usize>(h: &[u8]) -> Option<usize> {
    if h.len() != OMEGA + K {
        return None;
    }

    let mut hint_count = 0;
    for i in 0..K {
        let start = if i == 0 { 0 } else { h[OMEGA + i - 1] as usize };
        let end = h[OMEGA + i] as usize;

        if end > OMEGA || end < start {
            return None;
        }

        let mut prev_pos: Option<u8> = None;
        for idx in start..end {
            let pos = h[idx];
            if let Some(p) = prev_pos {
                if pos <= p {
                    return None;
                }
            }
            prev_pos = Some(pos);
        }

        hint_count = end;
    }

    // Unused slots must be zero: non-canonical padding would otherwise be
    // ignored, opening signature malleability
    for i in hint_count..OMEGA {
        if h[i] != 0 {
            return None;
        }
    }

    Some(hint_count)
}

fn z_is_canonical<const L: usize>(z: &PolyVecL<L>, gamma1: i32) -> bool {
    z.polys.iter().all(|p| {
        p.coeffs
            .iter()
            .all(|&c| c <= gamma1 || c >= Q - (gamma1 - 1))
    })
}

/// Decode and strictly validate a signature.
///
/// Returns `(c_tilde, z, h)` with `c_tilde` and `h` borrowed from the
/// input, or `None` on any non-canonical encoding.
pub fn sig_decode<'a, const K: usize, const L: usize, const OMEGA: usize>(
    sig: &'a [u8],
    gamma1: i32,
    c_tilde_bytes: usize,
) -> Option<(&'a [u8], PolyVecL<L>, &'a [u8])> {
    let zb = z_bytes(gamma1);
    let expected = c_tilde_bytes + L * zb + OMEGA + K;
    if sig.len() != expected {
        return None;
    }

    let c_tilde = &sig[0..c_tilde_bytes];

    let mut z = PolyVecL::<L>::zero();
    for i in 0..L {
        let offset = c_tilde_bytes + i * zb;
        if gamma1 == (1 << 17) {
            unpack_z_17(&sig[offset..offset + zb], &mut z.polys[i]);
        } else {
            unpack_z_19(&sig[offset..offset + zb], &mut z.polys[i]);
        }
    }
    if !z_is_canonical(&z, gamma1) {
        return None;
    }

    let h = &sig[c_tilde_bytes + L * zb..];
    validate_hints::<K, OMEGA>(h)?;

    Some((c_tilde, z, h))
}

/// Encode a w1 vector for the challenge hash, `w1_bits` per coefficient.
pub fn encode_w1<const K: usize>(w1: &PolyVecK<K>, gamma2: i32) -> Vec<u8> {
    let wb = w1_bytes(gamma2);
    let mut out = vec![0u8; K * wb];
    for i in 0..K {
        pack_w1(&w1.polys[i], gamma2, &mut out[i * wb..(i + 1) * wb]);
    }
    out
}
