//! SHAKE128/SHAKE256 extendable-output functions
//!
//! Thin state machines over the `sha3` crate exposing the incremental
//! absorb/squeeze contract the samplers need. Absorbing is incremental
//! (repeated `absorb` calls are equivalent to absorbing the concatenation);
//! the first squeeze finalizes the sponge and later squeezes continue the
//! output stream. The rate constants are exported so rejection samplers can
//! squeeze in whole-block units instead of growing buffers.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128, Shake256,
};

/// SHAKE128 rate in bytes.
pub const SHAKE128_RATE: usize = 168;

/// SHAKE256 rate in bytes.
pub const SHAKE256_RATE: usize = 136;

enum State128 {
    Absorbing(Shake128),
    Squeezing(sha3::Shake128Reader),
}

/// SHAKE128 XOF with incremental absorb and squeeze.
pub struct Shake128Xof {
    state: State128,
}

impl Default for Shake128Xof {
    fn default() -> Self {
        Self::new()
    }
}

impl Shake128Xof {
    /// Create a new instance in the absorbing phase.
    pub fn new() -> Self {
        Self {
            state: State128::Absorbing(Shake128::default()),
        }
    }

    /// Absorb input bytes. Panics if called after squeezing has begun.
    pub fn absorb(&mut self, data: &[u8]) {
        match &mut self.state {
            State128::Absorbing(hasher) => hasher.update(data),
            State128::Squeezing(_) => panic!("Shake128Xof: absorb after squeeze"),
        }
    }

    /// Squeeze output bytes, finalizing absorption on the first call.
    /// Successive calls continue the output stream.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        if let State128::Absorbing(hasher) = &mut self.state {
            let hasher = core::mem::take(hasher);
            self.state = State128::Squeezing(hasher.finalize_xof());
        }
        match &mut self.state {
            State128::Squeezing(reader) => reader.read(out),
            State128::Absorbing(_) => unreachable!(),
        }
    }

    /// Return to a fresh absorbing state.
    pub fn reset(&mut self) {
        self.state = State128::Absorbing(Shake128::default());
    }
}

enum State256 {
    Absorbing(Shake256),
    Squeezing(sha3::Shake256Reader),
}

/// SHAKE256 XOF with incremental absorb and squeeze.
pub struct Shake256Xof {
    state: State256,
}

impl Default for Shake256Xof {
    fn default() -> Self {
        Self::new()
    }
}

impl Shake256Xof {
    /// Create a new instance in the absorbing phase.
    pub fn new() -> Self {
        Self {
            state: State256::Absorbing(Shake256::default()),
        }
    }

    /// Absorb input bytes. Panics if called after squeezing has begun.
    pub fn absorb(&mut self, data: &[u8]) {
        match &mut self.state {
            State256::Absorbing(hasher) => hasher.update(data),
            State256::Squeezing(_) => panic!("Shake256Xof: absorb after squeeze"),
        }
    }

    /// Squeeze output bytes, finalizing absorption on the first call.
    /// Successive calls continue the output stream.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        if let State256::Absorbing(hasher) = &mut self.state {
            let hasher = core::mem::take(hasher);
            self.state = State256::Squeezing(hasher.finalize_xof());
        }
        match &mut self.state {
            State256::Squeezing(reader) => reader.read(out),
            State256::Absorbing(_) => unreachable!(),
        }
    }

    /// Return to a fresh absorbing state.
    pub fn reset(&mut self) {
        self.state = State256::Absorbing(Shake256::default());
    }
}

/// One-shot SHAKE256 over the concatenation of `parts`, filling `out`.
///
/// This is the H function of FIPS 204: `tr`, `mu`, `rho'`, and the
/// challenge digest are all produced through it.
pub fn shake256_into(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    let mut reader = hasher.finalize_xof();
    reader.read(out);
}

/// One-shot SHAKE128 over the concatenation of `parts`, filling `out`.
pub fn shake128_into(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = Shake128::default();
    for part in parts {
        hasher.update(part);
    }
    let mut reader = hasher.finalize_xof();
    reader.read(out);
}
