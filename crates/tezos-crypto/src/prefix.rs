// tezos-crypto/src/prefix.rs

//! Base58check byte prefixes from the Tezos wire registry.
//!
//! These constants are part of the network protocol. They must match the
//! registry used by the consensus layer byte for byte; a wrong prefix
//! produces well-formed strings that no node will accept.

/// Prefixes for public key hashes (implicit account addresses).
pub mod address {
    /// "tz1" - Ed25519 public key hash
    pub const TZ1: &[u8] = &[6, 161, 159];
    /// "tz2" - SECP256k1 public key hash
    pub const TZ2: &[u8] = &[6, 161, 161];
    /// "tz3" - P-256 public key hash
    pub const TZ3: &[u8] = &[6, 161, 164];
    /// "KT1" - originated contract address
    pub const KT1: &[u8] = &[2, 90, 121];
}

/// Prefixes for public keys.
pub mod public_key {
    /// "edpk"
    pub const ED25519: &[u8] = &[13, 15, 37, 217];
    /// "sppk"
    pub const SECP256K1: &[u8] = &[3, 254, 226, 86];
    /// "p2pk"
    pub const P256: &[u8] = &[3, 178, 139, 127];
}

/// Prefixes for secret keys.
pub mod secret_key {
    /// "edsk" - 32 byte Ed25519 seed form
    pub const ED25519_SEED: &[u8] = &[13, 15, 58, 7];
    /// "edsk" - 64 byte Ed25519 secret key (seed + public key)
    pub const ED25519: &[u8] = &[43, 246, 78, 7];
    /// "spsk"
    pub const SECP256K1: &[u8] = &[17, 162, 224, 201];
    /// "p2sk"
    pub const P256: &[u8] = &[16, 81, 238, 189];
}

/// Prefixes for signatures.
pub mod signature {
    /// "edsig"
    pub const ED25519: &[u8] = &[9, 245, 205, 134, 18];
    /// "spsig1"
    pub const SECP256K1: &[u8] = &[13, 115, 101, 19, 63];
    /// "p2sig"
    pub const P256: &[u8] = &[54, 240, 44, 52];
    /// "sig" - curve-agnostic signature
    pub const GENERIC: &[u8] = &[4, 130, 43];
}

/// Watermark bytes prepended to payloads before hashing for signature.
pub mod watermark {
    /// Generic operations (transactions, reveals, originations, ...)
    pub const OPERATION: &[u8] = &[3];
}
