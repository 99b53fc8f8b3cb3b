//! ML-DSA-65 (NIST Level 3) implementation

use crate::params::ml_dsa_65::*;
use crate::sign::{keygen_internal, sign_internal, verify_internal};
use crate::types::define_dsa_types;
use rand_core::CryptoRng;
use sigil_core::{Error, Result, Signer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ML-DSA-65 algorithm marker.
pub struct MlDsa65;

define_dsa_types! {
    sk_size: SK_BYTES,
    pk_size: PK_BYTES,
    sig_size: SIG_BYTES,
    K: K,
    L: L,
    ETA: ETA
}

impl MlDsa65 {
    /// Deterministic key generation from a 32-byte seed.
    pub fn keygen_from_seed(xi: &[u8; 32]) -> (SigningKey, VerificationKey) {
        let (pk_bytes, sk_bytes) = keygen_internal::<K, L, ETA>(xi);
        let sk = SigningKey::from_bytes(&sk_bytes).expect("keygen produced sized key");
        let pk = VerificationKey::from_bytes(&pk_bytes).expect("keygen produced sized key");
        (sk, pk)
    }

    /// Sign with caller-supplied 32-byte randomness: all-zero for the
    /// deterministic variant, fresh randomness for hedged signing.
    pub fn sign_with_rnd(
        sk: &SigningKey,
        message: &[u8],
        rnd: &[u8; 32],
    ) -> Result<Signature> {
        let sig_bytes = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            sk.as_bytes(),
            message,
            rnd,
        )?;
        Signature::from_bytes(&sig_bytes)
    }

    /// Hedged signing: draws the 32-byte rnd value from the caller's RNG.
    pub fn sign_hedged(
        sk: &SigningKey,
        message: &[u8],
        rng: &mut impl CryptoRng,
    ) -> Result<Signature> {
        let mut rnd = [0u8; 32];
        rng.fill_bytes(&mut rnd);
        let sig = Self::sign_with_rnd(sk, message, &rnd);
        rnd.zeroize();
        sig
    }
}

impl Signer for MlDsa65 {
    type SigningKey = SigningKey;
    type VerificationKey = VerificationKey;
    type Signature = Signature;

    const SIGNING_KEY_SIZE: usize = SK_BYTES;
    const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
    const SIGNATURE_SIZE: usize = SIG_BYTES;

    fn keygen(rng: &mut impl CryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)> {
        let mut xi = [0u8; 32];
        rng.fill_bytes(&mut xi);
        let keys = Self::keygen_from_seed(&xi);
        xi.zeroize();
        Ok(keys)
    }

    fn sign(sk: &Self::SigningKey, message: &[u8]) -> Result<Self::Signature> {
        // Deterministic variant: rnd = 0^32
        Self::sign_with_rnd(sk, message, &[0u8; 32])
    }

    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<()> {
        let valid = verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            pk.as_bytes(),
            message,
            signature.as_bytes(),
        );

        if valid {
            Ok(())
        } else {
            Err(Error::VerificationFailed)
        }
    }
}
