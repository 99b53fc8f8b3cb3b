//! Known-answer tests with fixed seeds.
//!
//! The expected values pin the byte-exact behavior of seed expansion and
//! key encoding: the first 32 bytes of an encoded public key are rho,
//! which is fully determined by H(xi || k || l).

use sigil_ml_dsa::sign::keygen_internal;

fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("invalid hex in test vector")
}

fn seed32(s: &str) -> [u8; 32] {
    hex_decode(s).try_into().expect("seed must be 32 bytes")
}

#[cfg(feature = "ml-dsa-44")]
mod ml_dsa_44_kats {
    use super::*;
    use sigil_ml_dsa::dsa44::{SigningKey, VerificationKey};
    use sigil_ml_dsa::{MlDsa44, Signer};

    const SEED_1: &str = "D71361C000F9A7BC99DFB425BCB6BB27C32C36AB444FF3708B2D93B4E66D5B5B";
    const RHO_1: &str = "B845FA2881407A59183071629B08223128116014FB58FF6BB4C8C9FE19CF5B0B";

    const SEED_2: &str = "AB611F971C44D1B755D289E0FCFEE70F0EB5D9FDFB1BC31CA894A75794235AF8";
    const RHO_2: &str = "D712599A161ECD99EF5B7A04313D5507D612565F03AA9695ED7C2DF1CFA18056";

    #[test]
    fn test_keygen_rho_vector_1() {
        let (pk, sk) = keygen_internal::<4, 4, 2>(&seed32(SEED_1));
        assert_eq!(pk.len(), 1312);
        assert_eq!(sk.len(), 2560);
        assert_eq!(pk[..32], hex_decode(RHO_1)[..]);
    }

    #[test]
    fn test_keygen_rho_vector_2() {
        let (pk, _) = keygen_internal::<4, 4, 2>(&seed32(SEED_2));
        assert_eq!(pk[..32], hex_decode(RHO_2)[..]);
    }

    #[test]
    fn test_sign_verify_with_fixed_seed() {
        let (pk_bytes, sk_bytes) = keygen_internal::<4, 4, 2>(&seed32(SEED_1));
        let sk = SigningKey::from_bytes(&sk_bytes).unwrap();
        let pk = VerificationKey::from_bytes(&pk_bytes).unwrap();

        let sig = MlDsa44::sign_with_rnd(&sk, b"test message", &[0u8; 32]).unwrap();
        assert_eq!(sig.as_bytes().len(), 2420);

        assert!(MlDsa44::verify(&pk, b"test message", &sig).is_ok());
        assert!(MlDsa44::verify(&pk, b"test massage", &sig).is_err());
    }

    #[test]
    fn test_single_bit_flips_break_verification() {
        let (pk_bytes, sk_bytes) = keygen_internal::<4, 4, 2>(&seed32(SEED_1));
        let sk = SigningKey::from_bytes(&sk_bytes).unwrap();
        let pk = VerificationKey::from_bytes(&pk_bytes).unwrap();

        let sig = MlDsa44::sign_with_rnd(&sk, b"bit flip target", &[0u8; 32]).unwrap();

        // Flip one bit in the signature
        let mut tampered_sig = sig.as_bytes().to_vec();
        tampered_sig[100] ^= 0x01;
        let tampered_sig = sigil_ml_dsa::dsa44::Signature::from_bytes(&tampered_sig).unwrap();
        assert!(MlDsa44::verify(&pk, b"bit flip target", &tampered_sig).is_err());

        // Flip one bit in the public key
        let mut tampered_pk = pk_bytes.clone();
        tampered_pk[40] ^= 0x01;
        let tampered_pk = VerificationKey::from_bytes(&tampered_pk).unwrap();
        assert!(MlDsa44::verify(&tampered_pk, b"bit flip target", &sig).is_err());
    }

    #[test]
    fn test_empty_and_large_messages() {
        let (pk_bytes, sk_bytes) = keygen_internal::<4, 4, 2>(&seed32(SEED_2));
        let sk = SigningKey::from_bytes(&sk_bytes).unwrap();
        let pk = VerificationKey::from_bytes(&pk_bytes).unwrap();

        let sig = MlDsa44::sign(&sk, b"").unwrap();
        assert!(MlDsa44::verify(&pk, b"", &sig).is_ok());

        let big = vec![0xA7u8; 1 << 20];
        let sig = MlDsa44::sign(&sk, &big).unwrap();
        assert!(MlDsa44::verify(&pk, &big, &sig).is_ok());
    }
}

#[cfg(feature = "ml-dsa-65")]
mod ml_dsa_65_kats {
    use super::*;

    #[test]
    fn test_sizes() {
        let (pk, sk) = keygen_internal::<6, 5, 4>(&seed32(
            "0000000000000000000000000000000000000000000000000000000000000000",
        ));
        assert_eq!(pk.len(), 1952);
        assert_eq!(sk.len(), 4032);
    }
}

#[cfg(feature = "ml-dsa-87")]
mod ml_dsa_87_kats {
    use super::*;

    #[test]
    fn test_sizes() {
        let (pk, sk) = keygen_internal::<8, 7, 2>(&seed32(
            "0000000000000000000000000000000000000000000000000000000000000000",
        ));
        assert_eq!(pk.len(), 2592);
        assert_eq!(sk.len(), 4896);
    }
}
