// tezos-crypto/src/lib.rs

//! Cryptographic primitives for the Tezos client
//!
//! This crate provides:
//! - Base58check encoding with Tezos network prefixes
//! - Multi-curve key material (Ed25519, SECP256k1, NIST P-256)
//! - BLAKE2b hashing helpers
//! - Operation signing and signature verification

pub mod base58;
pub mod curve;
pub mod hash;
pub mod keys;
pub mod prefix;
pub mod signature;

pub use curve::EllipticalCurve;
pub use keys::{Address, PublicKey, SecretKey};
pub use signature::Signature;

/// Result type for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur during cryptographic operations
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Invalid seed")]
    InvalidSeed,

    #[error("Invalid secret key")]
    InvalidSecretKey,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid base58 encoding")]
    InvalidEncoding,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Prefix mismatch")]
    PrefixMismatch,

    #[error("Invalid hex string")]
    InvalidHex,
}
