//! Bit packing for ML-DSA polynomials
//!
//! Fixed-width little-endian bit packing at the widths the encodings use:
//! 3/4 (s1, s2), 6/4 (w1), 10 (t1), 13 (t0), 18/20 (z and the mask).
//! Centered variants encode `B - c` for a signed bound B; since stored
//! coefficients rest in standard form [0, q), packers center on the way
//! out and unpackers fold negatives back by adding q.

use crate::poly::{Poly, N};
use crate::reduce::{caddq, center};
use crate::rounding::D;

/// Pack t1: coefficients in [0, 2^10), 10 bits each, 320 bytes.
pub fn pack_t1(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 320);

    for i in 0..N / 4 {
        let t0 = poly.coeffs[4 * i] as u32;
        let t1 = poly.coeffs[4 * i + 1] as u32;
        let t2 = poly.coeffs[4 * i + 2] as u32;
        let t3 = poly.coeffs[4 * i + 3] as u32;

        out[5 * i] = t0 as u8;
        out[5 * i + 1] = ((t0 >> 8) | (t1 << 2)) as u8;
        out[5 * i + 2] = ((t1 >> 6) | (t2 << 4)) as u8;
        out[5 * i + 3] = ((t2 >> 4) | (t3 << 6)) as u8;
        out[5 * i + 4] = (t3 >> 2) as u8;
    }
}

/// Unpack t1: 320 bytes to coefficients in [0, 2^10).
pub fn unpack_t1(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 320);

    for i in 0..N / 4 {
        poly.coeffs[4 * i] = ((input[5 * i] as i32) | ((input[5 * i + 1] as i32) << 8)) & 0x3FF;
        poly.coeffs[4 * i + 1] =
            (((input[5 * i + 1] as i32) >> 2) | ((input[5 * i + 2] as i32) << 6)) & 0x3FF;
        poly.coeffs[4 * i + 2] =
            (((input[5 * i + 2] as i32) >> 4) | ((input[5 * i + 3] as i32) << 4)) & 0x3FF;
        poly.coeffs[4 * i + 3] =
            (((input[5 * i + 3] as i32) >> 6) | ((input[5 * i + 4] as i32) << 2)) & 0x3FF;
    }
}

/// Pack t0: centered range (-2^12, 2^12], 13 bits each, 416 bytes.
pub fn pack_t0(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 416);
    const B: i32 = 1 << (D - 1);

    for i in 0..N / 8 {
        let mut t = [0i32; 8];
        for j in 0..8 {
            t[j] = B - center(poly.coeffs[8 * i + j]);
        }

        out[13 * i] = t[0] as u8;
        out[13 * i + 1] = ((t[0] >> 8) | (t[1] << 5)) as u8;
        out[13 * i + 2] = (t[1] >> 3) as u8;
        out[13 * i + 3] = ((t[1] >> 11) | (t[2] << 2)) as u8;
        out[13 * i + 4] = ((t[2] >> 6) | (t[3] << 7)) as u8;
        out[13 * i + 5] = (t[3] >> 1) as u8;
        out[13 * i + 6] = ((t[3] >> 9) | (t[4] << 4)) as u8;
        out[13 * i + 7] = (t[4] >> 4) as u8;
        out[13 * i + 8] = ((t[4] >> 12) | (t[5] << 1)) as u8;
        out[13 * i + 9] = ((t[5] >> 7) | (t[6] << 6)) as u8;
        out[13 * i + 10] = (t[6] >> 2) as u8;
        out[13 * i + 11] = ((t[6] >> 10) | (t[7] << 3)) as u8;
        out[13 * i + 12] = (t[7] >> 5) as u8;
    }
}

/// Unpack t0: 416 bytes to standard-form coefficients.
pub fn unpack_t0(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 416);
    const B: i32 = 1 << (D - 1);

    for i in 0..N / 8 {
        let mut t = [0i32; 8];

        t[0] = (input[13 * i] as i32) | ((input[13 * i + 1] as i32) << 8);
        t[1] = ((input[13 * i + 1] as i32) >> 5)
            | ((input[13 * i + 2] as i32) << 3)
            | ((input[13 * i + 3] as i32) << 11);
        t[2] = ((input[13 * i + 3] as i32) >> 2) | ((input[13 * i + 4] as i32) << 6);
        t[3] = ((input[13 * i + 4] as i32) >> 7)
            | ((input[13 * i + 5] as i32) << 1)
            | ((input[13 * i + 6] as i32) << 9);
        t[4] = ((input[13 * i + 6] as i32) >> 4)
            | ((input[13 * i + 7] as i32) << 4)
            | ((input[13 * i + 8] as i32) << 12);
        t[5] = ((input[13 * i + 8] as i32) >> 1) | ((input[13 * i + 9] as i32) << 7);
        t[6] = ((input[13 * i + 9] as i32) >> 6)
            | ((input[13 * i + 10] as i32) << 2)
            | ((input[13 * i + 11] as i32) << 10);
        t[7] = ((input[13 * i + 11] as i32) >> 3) | ((input[13 * i + 12] as i32) << 5);

        for j in 0..8 {
            poly.coeffs[8 * i + j] = caddq(B - (t[j] & 0x1FFF));
        }
    }
}

/// Pack s1/s2 with eta = 2: centered range [-2, 2], 3 bits each, 96 bytes.
pub fn pack_eta2(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 96);

    for i in 0..N / 8 {
        let mut t = [0u8; 8];
        for j in 0..8 {
            t[j] = (2 - center(poly.coeffs[8 * i + j])) as u8;
        }

        out[3 * i] = t[0] | (t[1] << 3) | (t[2] << 6);
        out[3 * i + 1] = (t[2] >> 2) | (t[3] << 1) | (t[4] << 4) | (t[5] << 7);
        out[3 * i + 2] = (t[5] >> 1) | (t[6] << 2) | (t[7] << 5);
    }
}

/// Unpack s1/s2 with eta = 2: 96 bytes to standard-form coefficients.
///
/// 3-bit fields decode to 2 - t with t in [0, 7]; out-of-range results
/// (below -2) are representable and left to the caller's validation.
pub fn unpack_eta2(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 96);

    for i in 0..N / 8 {
        let mut t = [0i32; 8];
        t[0] = (input[3 * i] & 0x07) as i32;
        t[1] = ((input[3 * i] >> 3) & 0x07) as i32;
        t[2] = (((input[3 * i] >> 6) | (input[3 * i + 1] << 2)) & 0x07) as i32;
        t[3] = ((input[3 * i + 1] >> 1) & 0x07) as i32;
        t[4] = ((input[3 * i + 1] >> 4) & 0x07) as i32;
        t[5] = (((input[3 * i + 1] >> 7) | (input[3 * i + 2] << 1)) & 0x07) as i32;
        t[6] = ((input[3 * i + 2] >> 2) & 0x07) as i32;
        t[7] = ((input[3 * i + 2] >> 5) & 0x07) as i32;

        for j in 0..8 {
            poly.coeffs[8 * i + j] = caddq(2 - t[j]);
        }
    }
}

/// Pack s1/s2 with eta = 4: centered range [-4, 4], 4 bits each, 128 bytes.
pub fn pack_eta4(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 128);

    for i in 0..N / 2 {
        let t0 = (4 - center(poly.coeffs[2 * i])) as u8;
        let t1 = (4 - center(poly.coeffs[2 * i + 1])) as u8;
        out[i] = t0 | (t1 << 4);
    }
}

/// Unpack s1/s2 with eta = 4: 128 bytes to standard-form coefficients.
pub fn unpack_eta4(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 128);

    for i in 0..N / 2 {
        poly.coeffs[2 * i] = caddq(4 - (input[i] & 0x0F) as i32);
        poly.coeffs[2 * i + 1] = caddq(4 - (input[i] >> 4) as i32);
    }
}

/// Pack z with gamma1 = 2^17: centered range [-(2^17 - 1), 2^17],
/// 18 bits each, 576 bytes.
pub fn pack_z_17(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 576);
    const B: i32 = 1 << 17;

    for i in 0..N / 4 {
        let mut t = [0i32; 4];
        for j in 0..4 {
            t[j] = B - center(poly.coeffs[4 * i + j]);
        }

        out[9 * i] = t[0] as u8;
        out[9 * i + 1] = (t[0] >> 8) as u8;
        out[9 * i + 2] = ((t[0] >> 16) | (t[1] << 2)) as u8;
        out[9 * i + 3] = (t[1] >> 6) as u8;
        out[9 * i + 4] = ((t[1] >> 14) | (t[2] << 4)) as u8;
        out[9 * i + 5] = (t[2] >> 4) as u8;
        out[9 * i + 6] = ((t[2] >> 12) | (t[3] << 6)) as u8;
        out[9 * i + 7] = (t[3] >> 2) as u8;
        out[9 * i + 8] = (t[3] >> 10) as u8;
    }
}

/// Unpack z with gamma1 = 2^17: 576 bytes to standard-form coefficients
/// (4 coefficients from every 9 bytes).
pub fn unpack_z_17(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 576);
    const B: i32 = 1 << 17;

    for i in 0..N / 4 {
        let mut t = [0i32; 4];
        t[0] = (input[9 * i] as i32)
            | ((input[9 * i + 1] as i32) << 8)
            | ((input[9 * i + 2] as i32) << 16);
        t[1] = ((input[9 * i + 2] as i32) >> 2)
            | ((input[9 * i + 3] as i32) << 6)
            | ((input[9 * i + 4] as i32) << 14);
        t[2] = ((input[9 * i + 4] as i32) >> 4)
            | ((input[9 * i + 5] as i32) << 4)
            | ((input[9 * i + 6] as i32) << 12);
        t[3] = ((input[9 * i + 6] as i32) >> 6)
            | ((input[9 * i + 7] as i32) << 2)
            | ((input[9 * i + 8] as i32) << 10);

        for j in 0..4 {
            poly.coeffs[4 * i + j] = caddq(B - (t[j] & 0x3FFFF));
        }
    }
}

/// Pack z with gamma1 = 2^19: centered range [-(2^19 - 1), 2^19],
/// 20 bits each, 640 bytes.
pub fn pack_z_19(poly: &Poly, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 640);
    const B: i32 = 1 << 19;

    for i in 0..N / 2 {
        let t0 = B - center(poly.coeffs[2 * i]);
        let t1 = B - center(poly.coeffs[2 * i + 1]);

        out[5 * i] = t0 as u8;
        out[5 * i + 1] = (t0 >> 8) as u8;
        out[5 * i + 2] = ((t0 >> 16) | (t1 << 4)) as u8;
        out[5 * i + 3] = (t1 >> 4) as u8;
        out[5 * i + 4] = (t1 >> 12) as u8;
    }
}

/// Unpack z with gamma1 = 2^19: 640 bytes to standard-form coefficients
/// (2 coefficients from every 5 bytes).
pub fn unpack_z_19(input: &[u8], poly: &mut Poly) {
    debug_assert_eq!(input.len(), 640);
    const B: i32 = 1 << 19;

    for i in 0..N / 2 {
        let t0 = (input[5 * i] as i32)
            | ((input[5 * i + 1] as i32) << 8)
            | (((input[5 * i + 2] & 0x0F) as i32) << 16);
        let t1 = ((input[5 * i + 2] as i32) >> 4)
            | ((input[5 * i + 3] as i32) << 4)
            | ((input[5 * i + 4] as i32) << 12);

        poly.coeffs[2 * i] = caddq(B - t0);
        poly.coeffs[2 * i + 1] = caddq(B - (t1 & 0xFFFFF));
    }
}

/// Pack w1: 4 bits per coefficient for gamma2 = (q-1)/32 (values [0, 15]),
/// 6 bits per coefficient for gamma2 = (q-1)/88 (values [0, 43]).
pub fn pack_w1(poly: &Poly, gamma2: i32, out: &mut [u8]) {
    if gamma2 == 261_888 {
        debug_assert_eq!(out.len(), 128);
        for i in 0..N / 2 {
            out[i] = (poly.coeffs[2 * i] | (poly.coeffs[2 * i + 1] << 4)) as u8;
        }
    } else {
        debug_assert_eq!(out.len(), 192);
        for i in 0..N / 4 {
            out[3 * i] = (poly.coeffs[4 * i] | (poly.coeffs[4 * i + 1] << 6)) as u8;
            out[3 * i + 1] =
                ((poly.coeffs[4 * i + 1] >> 2) | (poly.coeffs[4 * i + 2] << 4)) as u8;
            out[3 * i + 2] =
                ((poly.coeffs[4 * i + 2] >> 4) | (poly.coeffs[4 * i + 3] << 2)) as u8;
        }
    }
}
