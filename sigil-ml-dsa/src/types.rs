//! Key type wrapper macros for ML-DSA.
//!
//! Generates the fixed-size `SigningKey`, `VerificationKey`, and
//! `Signature` wrappers for each parameter set. Keys and signatures are
//! immutable once constructed; the signing key zeroizes on drop.

/// Generate ML-DSA key types for a specific parameter set.
macro_rules! define_dsa_types {
    (
        sk_size: $sk_size:expr,
        pk_size: $pk_size:expr,
        sig_size: $sig_size:expr,
        K: $K:expr,
        L: $L:expr,
        ETA: $eta:expr
    ) => {
        /// Signing key (secret key).
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct SigningKey {
            bytes: [u8; $sk_size],
        }

        impl SigningKey {
            /// Create from bytes. Only the length is checked here; field
            /// validation happens when the key is used to sign.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != $sk_size {
                    return Err(Error::InvalidLength {
                        expected: $sk_size,
                        actual: bytes.len(),
                    });
                }
                let mut key = [0u8; $sk_size];
                key.copy_from_slice(bytes);
                Ok(Self { bytes: key })
            }

            /// Get the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $sk_size] {
                &self.bytes
            }

            /// Derive the matching verification key.
            ///
            /// Recomputes t = A*s1 + s2 from the decoded secret key and
            /// re-encodes `rho || t1`.
            ///
            /// # Errors
            ///
            /// Fails if the stored secret key bytes are malformed.
            pub fn verification_key(&self) -> Result<VerificationKey> {
                let pk = crate::sign::derive_verification_key::<$K, $L, $eta>(&self.bytes)?;
                VerificationKey::from_bytes(&pk)
            }
        }

        /// Verification key (public key).
        #[derive(Clone)]
        pub struct VerificationKey {
            bytes: [u8; $pk_size],
        }

        impl VerificationKey {
            /// Create from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != $pk_size {
                    return Err(Error::InvalidLength {
                        expected: $pk_size,
                        actual: bytes.len(),
                    });
                }
                let mut key = [0u8; $pk_size];
                key.copy_from_slice(bytes);
                Ok(Self { bytes: key })
            }

            /// Get the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $pk_size] {
                &self.bytes
            }
        }

        /// Signature.
        #[derive(Clone)]
        pub struct Signature {
            bytes: [u8; $sig_size],
        }

        impl Signature {
            /// Create from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != $sig_size {
                    return Err(Error::InvalidLength {
                        expected: $sig_size,
                        actual: bytes.len(),
                    });
                }
                let mut sig = [0u8; $sig_size];
                sig.copy_from_slice(bytes);
                Ok(Self { bytes: sig })
            }

            /// Get the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $sig_size] {
                &self.bytes
            }
        }
    };
}

pub(crate) use define_dsa_types;
