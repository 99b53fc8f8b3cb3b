//! ML-DSA (FIPS 204) Implementation
//!
//! This crate provides a pure Rust implementation of the ML-DSA digital
//! signature algorithm as specified in FIPS 204.
//!
//! # Supported Parameter Sets
//!
//! | Variant | Security Level | Public Key | Secret Key | Signature |
//! |---------|----------------|------------|------------|-----------|
//! | ML-DSA-44 | Level 2 | 1,312 bytes | 2,560 bytes | 2,420 bytes |
//! | ML-DSA-65 | Level 3 | 1,952 bytes | 4,032 bytes | 3,309 bytes |
//! | ML-DSA-87 | Level 5 | 2,592 bytes | 4,896 bytes | 4,627 bytes |
//!
//! # Example
//!
//! ```ignore
//! use sigil_ml_dsa::MlDsa65;
//! use sigil_core::Signer;
//!
//! let mut rng = rand::rng();
//! let (sk, pk) = MlDsa65::keygen(&mut rng)?;
//!
//! let message = b"Hello, post-quantum world!";
//! let signature = MlDsa65::sign(&sk, message)?;
//!
//! assert!(MlDsa65::verify(&pk, message, &signature).is_ok());
//! ```
//!
//! # Message preparation
//!
//! The engine consumes the message as an opaque byte buffer. Callers that
//! need the FIPS 204 context-string framing (`0x00 || ctx_len || ctx || M`)
//! or pre-hashed HashML-DSA framing prepare the buffer before signing and
//! verifying; no framing is added here.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions
)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[allow(dead_code)]
mod encoding;
#[allow(dead_code)]
mod ntt;
#[allow(dead_code)]
mod packing;
#[allow(dead_code)]
mod poly;
#[allow(dead_code)]
mod polyvec;
#[allow(dead_code)]
mod reduce;
#[allow(dead_code)]
mod rounding;
#[allow(dead_code)]
mod sample;
mod types;
#[allow(dead_code)]
mod xof;

/// Parameter-set constants.
pub mod params;

/// The core KeyGen/Sign/Verify algorithms, generic over the parameter-set
/// constants. The deterministic byte-level entry points here are what the
/// known-answer and ACVP tests drive.
pub mod sign;

#[cfg(feature = "ml-dsa-44")]
mod ml_dsa_44;
#[cfg(feature = "ml-dsa-65")]
mod ml_dsa_65;
#[cfg(feature = "ml-dsa-87")]
mod ml_dsa_87;

#[cfg(feature = "ml-dsa-44")]
pub use ml_dsa_44::MlDsa44;
#[cfg(feature = "ml-dsa-65")]
pub use ml_dsa_65::MlDsa65;
#[cfg(feature = "ml-dsa-87")]
pub use ml_dsa_87::MlDsa87;

/// ML-DSA-44 (NIST Security Level 2) key and signature types.
#[cfg(feature = "ml-dsa-44")]
pub mod dsa44 {
    pub use crate::ml_dsa_44::*;
}

/// ML-DSA-65 (NIST Security Level 3) key and signature types.
#[cfg(feature = "ml-dsa-65")]
pub mod dsa65 {
    pub use crate::ml_dsa_65::*;
}

/// ML-DSA-87 (NIST Security Level 5) key and signature types.
#[cfg(feature = "ml-dsa-87")]
pub mod dsa87 {
    pub use crate::ml_dsa_87::*;
}

pub use sigil_core::{Error, Result, Signer};
