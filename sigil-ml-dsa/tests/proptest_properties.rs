//! Property-based tests for ML-DSA using proptest.
//!
//! Covers the quantified invariants: sign/verify round trip over arbitrary
//! seeds and messages, determinism in (seed, message, rnd), size exactness,
//! and rejection of tampered messages, signatures, and mismatched keys.

use proptest::prelude::*;

/// Arbitrary 32-byte seeds
fn arb_seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

/// Arbitrary messages (0-256 bytes)
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

macro_rules! dsa_property_suite {
    ($mod_name:ident, $algo:ident, $types_mod:ident) => {
        mod $mod_name {
            use super::*;
            use sigil_ml_dsa::$types_mod::Signature;
            use sigil_ml_dsa::{$algo, Signer};

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(8))]

                /// Sign then verify succeeds for any seed/message/rnd.
                #[test]
                fn roundtrip(seed in arb_seed(), message in arb_message(), rnd in arb_seed()) {
                    let (sk, pk) = $algo::keygen_from_seed(&seed);
                    let sig = $algo::sign_with_rnd(&sk, &message, &rnd).unwrap();
                    prop_assert!($algo::verify(&pk, &message, &sig).is_ok());
                }

                /// Keygen and signing are deterministic in their inputs.
                #[test]
                fn determinism(seed in arb_seed(), message in arb_message()) {
                    let (sk1, pk1) = $algo::keygen_from_seed(&seed);
                    let (sk2, pk2) = $algo::keygen_from_seed(&seed);
                    prop_assert_eq!(&sk1.as_bytes()[..], &sk2.as_bytes()[..]);
                    prop_assert_eq!(&pk1.as_bytes()[..], &pk2.as_bytes()[..]);

                    let sig1 = $algo::sign(&sk1, &message).unwrap();
                    let sig2 = $algo::sign(&sk2, &message).unwrap();
                    prop_assert_eq!(&sig1.as_bytes()[..], &sig2.as_bytes()[..]);
                }

                /// Generated keys and signatures have the advertised sizes.
                #[test]
                fn size_exactness(seed in arb_seed(), message in arb_message()) {
                    let (sk, pk) = $algo::keygen_from_seed(&seed);
                    prop_assert_eq!(sk.as_bytes().len(), $algo::SIGNING_KEY_SIZE);
                    prop_assert_eq!(pk.as_bytes().len(), $algo::VERIFICATION_KEY_SIZE);

                    let sig = $algo::sign(&sk, &message).unwrap();
                    prop_assert_eq!(sig.as_bytes().len(), $algo::SIGNATURE_SIZE);
                }

                /// A tampered message fails verification.
                #[test]
                fn tampered_message_fails(
                    seed in arb_seed(),
                    message in arb_message(),
                    flip_pos in 0usize..256,
                ) {
                    prop_assume!(!message.is_empty());

                    let (sk, pk) = $algo::keygen_from_seed(&seed);
                    let sig = $algo::sign(&sk, &message).unwrap();

                    let mut tampered = message.clone();
                    let pos = flip_pos % tampered.len();
                    tampered[pos] ^= 0xFF;

                    prop_assert!($algo::verify(&pk, &tampered, &sig).is_err());
                }

                /// A single flipped signature bit fails verification.
                #[test]
                fn tampered_signature_fails(
                    seed in arb_seed(),
                    message in arb_message(),
                    flip_pos in 0usize..($algo::SIGNATURE_SIZE * 8),
                ) {
                    let (sk, pk) = $algo::keygen_from_seed(&seed);
                    let sig = $algo::sign(&sk, &message).unwrap();

                    let mut bytes = sig.as_bytes().to_vec();
                    bytes[flip_pos / 8] ^= 1 << (flip_pos % 8);

                    // A flipped bit may break canonicality or the
                    // transcript; either way verification must reject
                    let tampered = Signature::from_bytes(&bytes).unwrap();
                    prop_assert!($algo::verify(&pk, &message, &tampered).is_err());
                }

                /// Verification with a different key pair's pk fails.
                #[test]
                fn wrong_key_fails(seed1 in arb_seed(), seed2 in arb_seed(), message in arb_message()) {
                    prop_assume!(seed1 != seed2);

                    let (sk1, _pk1) = $algo::keygen_from_seed(&seed1);
                    let (_sk2, pk2) = $algo::keygen_from_seed(&seed2);

                    let sig = $algo::sign(&sk1, &message).unwrap();
                    prop_assert!($algo::verify(&pk2, &message, &sig).is_err());
                }
            }
        }
    };
}

#[cfg(feature = "ml-dsa-44")]
dsa_property_suite!(ml_dsa_44_props, MlDsa44, dsa44);

#[cfg(feature = "ml-dsa-65")]
dsa_property_suite!(ml_dsa_65_props, MlDsa65, dsa65);

#[cfg(feature = "ml-dsa-87")]
dsa_property_suite!(ml_dsa_87_props, MlDsa87, dsa87);
