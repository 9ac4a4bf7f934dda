//! Public key material extracted from certificates.
//!
//! These types hold the numbers only. Signature verification, key usage
//! policy, and on-curve validation live elsewhere.

pub mod ec;
pub mod error;
pub mod rsa;

pub use ec::{ECPublicKey, NamedCurve};
pub use error::Error;
pub use rsa::RSAPublicKey;

/// A public key in one of the supported algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RSAPublicKey),
    Ec(ECPublicKey),
}

impl PublicKey {
    /// Key size in bits: the modulus bit length for RSA, the base field
    /// order for EC.
    pub fn key_size(&self) -> u64 {
        match self {
            PublicKey::Rsa(key) => key.key_size(),
            PublicKey::Ec(key) => key.key_size(),
        }
    }
}
