//! Error types for Sigil cryptographic operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during signature operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed key or signature content. The message names the field
    /// that failed validation.
    InvalidEncoding(&'static str),

    /// Wrong byte length for a key, signature, seed, or randomness input.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Parameter misuse other than a length mismatch.
    InvalidParameter(&'static str),

    /// Signature verification failed.
    VerificationFailed,

    /// The signing loop exhausted its iteration bound. This indicates an
    /// implementation or hardware fault, not an input error. The message
    /// is intentionally generic: iteration counts are secret-dependent.
    InternalFault,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding(what) => {
                write!(f, "invalid encoding: {what}")
            }
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Error::InvalidParameter(what) => {
                write!(f, "invalid parameter: {what}")
            }
            Error::VerificationFailed => write!(f, "signature verification failed"),
            Error::InternalFault => write!(f, "internal signing fault"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_does_not_leak_details() {
        // The fault message must stay generic: no attempt counts, no bounds.
        let msg = Error::InternalFault.to_string();
        assert_eq!(msg, "internal signing fault");
    }

    #[test]
    fn test_display_length() {
        let e = Error::InvalidLength {
            expected: 2560,
            actual: 2559,
        };
        assert_eq!(e.to_string(), "invalid length: expected 2560, got 2559");
    }
}
