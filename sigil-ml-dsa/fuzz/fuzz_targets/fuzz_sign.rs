//! Fuzz target for ML-DSA signing.
//!
//! Signing with a freshly generated key must succeed for any message and
//! hedging randomness, produce a fixed-size signature, never panic, and
//! be deterministic in (sk, message, rnd).

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_ml_dsa::sign::{keygen_internal, sign_internal};

#[derive(Debug, Arbitrary)]
struct SignInput {
    seed: [u8; 32],
    rnd: [u8; 32],
    message: Vec<u8>,
    variant: u8,
}

// Expands against the parameter constants glob-imported at the call site.
macro_rules! sign_case {
    ($input:expr) => {{
        let (_pk, sk) = keygen_internal::<K, L, ETA>(&$input.seed);

        let sig = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &sk,
            &$input.message,
            &$input.rnd,
        )
        .expect("signing with a freshly generated key must succeed");
        assert_eq!(sig.len(), SIG_BYTES, "signature size mismatch");

        let sig2 = sign_internal::<K, L, ETA, BETA, GAMMA1, GAMMA2, TAU, OMEGA, C_TILDE_BYTES>(
            &sk,
            &$input.message,
            &$input.rnd,
        )
        .expect("signing with a freshly generated key must succeed");
        assert_eq!(sig, sig2, "signing must be deterministic in (sk, message, rnd)");
    }};
}

fuzz_target!(|input: SignInput| {
    // Limit message size to keep iterations fast
    if input.message.len() > 10_000 {
        return;
    }

    match input.variant % 3 {
        0 => {
            use sigil_ml_dsa::params::ml_dsa_44::*;
            sign_case!(input)
        }
        1 => {
            use sigil_ml_dsa::params::ml_dsa_65::*;
            sign_case!(input)
        }
        _ => {
            use sigil_ml_dsa::params::ml_dsa_87::*;
            sign_case!(input)
        }
    }
});
