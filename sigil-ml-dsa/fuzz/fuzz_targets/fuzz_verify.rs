//! Fuzz target for ML-DSA verification.
//!
//! Verification must accept honestly produced signatures, reject modified
//! messages, and never panic on corrupted or outright arbitrary signature
//! bytes. A corrupted signature byte may break canonicality or the
//! transcript; neither path is asserted on, only exercised.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_ml_dsa::sign::{keygen_internal, sign_internal, verify_internal};

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    seed: [u8; 32],
    rnd: [u8; 32],
    message: Vec<u8>,
    corruption: Option<Corruption>,
    variant: u8,
}

#[derive(Debug, Arbitrary)]
enum Corruption {
    /// Flip bits of one signature byte
    Signature { position: usize, xor_value: u8 },
    /// Flip bits of one message byte
    Message { position: usize, xor_value: u8 },
    /// Replace the signature with arbitrary bytes
    Arbitrary { bytes: Vec<u8> },
}

// Expands against the parameter constants glob-imported at the call site.
macro_rules! verify_case {
    ($input:expr) => {{
        let (pk, sk) = keygen_internal::<K, L, ETA>(&$input.seed);

        let mut sig = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &sk,
            &$input.message,
            &$input.rnd,
        )
        .expect("signing with a freshly generated key must succeed");
        let mut msg = $input.message.clone();

        match &$input.corruption {
            None => {
                let valid =
                    verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
                        &pk, &msg, &sig,
                    );
                assert!(valid, "honest signature must verify");
            }
            Some(Corruption::Signature { position, xor_value }) => {
                if *position < sig.len() && *xor_value != 0 {
                    sig[*position] ^= xor_value;
                    let _ =
                        verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
                            &pk, &msg, &sig,
                        );
                }
            }
            Some(Corruption::Message { position, xor_value }) => {
                if *position < msg.len() && *xor_value != 0 {
                    msg[*position] ^= xor_value;
                    let valid =
                        verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
                            &pk, &msg, &sig,
                        );
                    assert!(!valid, "modified message must fail verification");
                }
            }
            Some(Corruption::Arbitrary { bytes }) => {
                let _ = verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
                    &pk, &msg, bytes,
                );
            }
        }
    }};
}

fuzz_target!(|input: VerifyInput| {
    // Limit message size to keep iterations fast
    if input.message.len() > 10_000 {
        return;
    }

    match input.variant % 3 {
        0 => {
            use sigil_ml_dsa::params::ml_dsa_44::*;
            verify_case!(input)
        }
        1 => {
            use sigil_ml_dsa::params::ml_dsa_65::*;
            verify_case!(input)
        }
        _ => {
            use sigil_ml_dsa::params::ml_dsa_87::*;
            verify_case!(input)
        }
    }
});
