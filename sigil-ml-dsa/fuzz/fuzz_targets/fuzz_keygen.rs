//! Fuzz target for ML-DSA key generation.
//!
//! Any 32-byte seed must produce keys of the advertised sizes, with no
//! panics, and key generation must be deterministic in the seed.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_ml_dsa::sign::keygen_internal;

#[derive(Debug, Arbitrary)]
struct KeyGenInput {
    seed: [u8; 32],
    variant: u8, // 0 = ML-DSA-44, 1 = ML-DSA-65, 2 = ML-DSA-87
}

// Expands against the parameter constants glob-imported at the call site.
macro_rules! keygen_case {
    ($input:expr) => {{
        let (pk, sk) = keygen_internal::<K, L, ETA>(&$input.seed);
        assert_eq!(pk.len(), PK_BYTES, "pk size mismatch");
        assert_eq!(sk.len(), SK_BYTES, "sk size mismatch");

        let (pk2, sk2) = keygen_internal::<K, L, ETA>(&$input.seed);
        assert_eq!(pk, pk2, "keygen must be deterministic in the seed");
        assert_eq!(sk, sk2, "keygen must be deterministic in the seed");
    }};
}

fuzz_target!(|input: KeyGenInput| {
    match input.variant % 3 {
        0 => {
            use sigil_ml_dsa::params::ml_dsa_44::*;
            keygen_case!(input)
        }
        1 => {
            use sigil_ml_dsa::params::ml_dsa_65::*;
            keygen_case!(input)
        }
        _ => {
            use sigil_ml_dsa::params::ml_dsa_87::*;
            keygen_case!(input)
        }
    }
});
