//! Fuzz target for the full ML-DSA flow: keygen, sign, verify.
//!
//! For any seed, message, and hedging randomness the complete flow must
//! succeed, the verifier must accept, and a second run of the whole flow
//! must be byte-identical.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_ml_dsa::sign::{keygen_internal, sign_internal, verify_internal};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    seed: [u8; 32],
    rnd: [u8; 32],
    message: Vec<u8>,
    variant: u8,
}

// Expands against the parameter constants glob-imported at the call site.
macro_rules! roundtrip_case {
    ($input:expr) => {{
        let (pk, sk) = keygen_internal::<K, L, ETA>(&$input.seed);

        let sig = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &sk,
            &$input.message,
            &$input.rnd,
        )
        .expect("signing with a freshly generated key must succeed");

        let valid = verify_internal::<K, L, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &pk,
            &$input.message,
            &sig,
        );
        assert!(valid, "honest signature must verify");

        // The whole flow is deterministic in (seed, message, rnd)
        let (pk2, sk2) = keygen_internal::<K, L, ETA>(&$input.seed);
        let sig2 = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &sk2,
            &$input.message,
            &$input.rnd,
        )
        .expect("signing with a freshly generated key must succeed");
        assert_eq!(pk, pk2, "keygen must be deterministic");
        assert_eq!(sk, sk2, "keygen must be deterministic");
        assert_eq!(sig, sig2, "signing must be deterministic with the same rnd");
    }};
}

fuzz_target!(|input: RoundtripInput| {
    // Limit message size to keep iterations fast
    if input.message.len() > 10_000 {
        return;
    }

    match input.variant % 3 {
        0 => {
            use sigil_ml_dsa::params::ml_dsa_44::*;
            roundtrip_case!(input)
        }
        1 => {
            use sigil_ml_dsa::params::ml_dsa_65::*;
            roundtrip_case!(input)
        }
        _ => {
            use sigil_ml_dsa::params::ml_dsa_87::*;
            roundtrip_case!(input)
        }
    }
});
