//! ML-DSA parameter sets
//!
//! Frozen constants for ML-DSA-44, ML-DSA-65, and ML-DSA-87 per FIPS 204,
//! plus the packed-size values derived from them.

use crate::reduce::Q;

/// Common parameters shared across all ML-DSA variants.
pub mod common {
    use super::*;

    /// Ring dimension
    pub const N: usize = 256;

    /// Modulus q = 8380417
    pub const Q_VAL: i32 = Q;

    /// Dropped-bits parameter for Power2Round
    pub const D: usize = 13;

    /// Seed size in bytes
    pub const SEED_BYTES: usize = 32;

    /// Hedging randomness size in bytes
    pub const RND_BYTES: usize = 32;

    /// CRH output size in bytes (tr, mu, rho')
    pub const CRH_BYTES: usize = 64;

    /// Encoded polynomial size for t1 (10 bits per coefficient)
    pub const POLY_T1_PACKED_BYTES: usize = N * 10 / 8;

    /// Encoded polynomial size for t0 (13 bits per coefficient)
    pub const POLY_T0_PACKED_BYTES: usize = N * D / 8;
}

/// ML-DSA-44 parameters (NIST Level 2)
#[cfg(feature = "ml-dsa-44")]
pub mod ml_dsa_44 {
    pub use super::common::*;

    /// Number of rows in matrix A
    pub const K: usize = 4;
    /// Number of columns in matrix A
    pub const L: usize = 4;
    /// Secret coefficient bound
    pub const ETA: usize = 2;
    /// Number of +/-1 coefficients in the challenge
    pub const TAU: usize = 39;
    /// Rejection bound offset (TAU * ETA)
    pub const BETA: i32 = 78;
    /// Masking range for y
    pub const GAMMA1: i32 = 1 << 17;
    /// Low-order rounding range
    pub const GAMMA2: i32 = (Q_VAL - 1) / 88; // 95232
    /// Maximum number of hint ones
    pub const OMEGA: usize = 80;

    /// Challenge digest size (lambda / 4 with lambda = 128)
    pub const C_TILDE_BYTES: usize = 32;

    /// Public key size in bytes
    pub const PK_BYTES: usize = 1312;
    /// Secret key size in bytes
    pub const SK_BYTES: usize = 2560;
    /// Signature size in bytes
    pub const SIG_BYTES: usize = 2420;

    /// Encoded polynomial size for s1/s2 (3 bits per coefficient, eta = 2)
    pub const POLY_ETA_PACKED_BYTES: usize = 96;
    /// Encoded polynomial size for z (18 bits per coefficient, gamma1 = 2^17)
    pub const POLY_Z_PACKED_BYTES: usize = 576;
    /// Encoded polynomial size for w1 (6 bits per coefficient)
    pub const POLY_W1_PACKED_BYTES: usize = 192;
}

/// ML-DSA-65 parameters (NIST Level 3)
#[cfg(feature = "ml-dsa-65")]
pub mod ml_dsa_65 {
    pub use super::common::*;

    /// Number of rows in matrix A
    pub const K: usize = 6;
    /// Number of columns in matrix A
    pub const L: usize = 5;
    /// Secret coefficient bound
    pub const ETA: usize = 4;
    /// Number of +/-1 coefficients in the challenge
    pub const TAU: usize = 49;
    /// Rejection bound offset (TAU * ETA)
    pub const BETA: i32 = 196;
    /// Masking range for y
    pub const GAMMA1: i32 = 1 << 19;
    /// Low-order rounding range
    pub const GAMMA2: i32 = (Q_VAL - 1) / 32; // 261888
    /// Maximum number of hint ones
    pub const OMEGA: usize = 55;

    /// Challenge digest size (lambda / 4 with lambda = 192)
    pub const C_TILDE_BYTES: usize = 48;

    /// Public key size in bytes
    pub const PK_BYTES: usize = 1952;
    /// Secret key size in bytes
    pub const SK_BYTES: usize = 4032;
    /// Signature size in bytes
    pub const SIG_BYTES: usize = 3309;

    /// Encoded polynomial size for s1/s2 (4 bits per coefficient, eta = 4)
    pub const POLY_ETA_PACKED_BYTES: usize = 128;
    /// Encoded polynomial size for z (20 bits per coefficient, gamma1 = 2^19)
    pub const POLY_Z_PACKED_BYTES: usize = 640;
    /// Encoded polynomial size for w1 (4 bits per coefficient)
    pub const POLY_W1_PACKED_BYTES: usize = 128;
}

/// ML-DSA-87 parameters (NIST Level 5)
#[cfg(feature = "ml-dsa-87")]
pub mod ml_dsa_87 {
    pub use super::common::*;

    /// Number of rows in matrix A
    pub const K: usize = 8;
    /// Number of columns in matrix A
    pub const L: usize = 7;
    /// Secret coefficient bound
    pub const ETA: usize = 2;
    /// Number of +/-1 coefficients in the challenge
    pub const TAU: usize = 60;
    /// Rejection bound offset (TAU * ETA)
    pub const BETA: i32 = 120;
    /// Masking range for y
    pub const GAMMA1: i32 = 1 << 19;
    /// Low-order rounding range
    pub const GAMMA2: i32 = (Q_VAL - 1) / 32; // 261888
    /// Maximum number of hint ones
    pub const OMEGA: usize = 75;

    /// Challenge digest size (lambda / 4 with lambda = 256)
    pub const C_TILDE_BYTES: usize = 64;

    /// Public key size in bytes
    pub const PK_BYTES: usize = 2592;
    /// Secret key size in bytes
    pub const SK_BYTES: usize = 4896;
    /// Signature size in bytes
    pub const SIG_BYTES: usize = 4627;

    /// Encoded polynomial size for s1/s2 (3 bits per coefficient, eta = 2)
    pub const POLY_ETA_PACKED_BYTES: usize = 96;
    /// Encoded polynomial size for z (20 bits per coefficient, gamma1 = 2^19)
    pub const POLY_Z_PACKED_BYTES: usize = 640;
    /// Encoded polynomial size for w1 (4 bits per coefficient)
    pub const POLY_W1_PACKED_BYTES: usize = 128;
}
