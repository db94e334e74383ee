// tezos-crypto/src/keys.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{base58, hash, prefix, CryptoError, CryptoResult, EllipticalCurve, Signature};

/// A base58check encoded public key hash ("tz1...", "tz2...", "tz3...").
pub type Address = String;

/// Secret key material for one curve.
///
/// The raw bytes are zeroed when the key is dropped. Note that zeroing
/// cannot reach copies the operating system may have made in swapped or
/// paged memory.
pub struct SecretKey {
    curve: EllipticalCurve,
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Derive a secret key from seed bytes (at least 32 bytes).
    pub fn from_seed(seed: &[u8], curve: EllipticalCurve) -> CryptoResult<Self> {
        let bytes = curve.secret_key_from_seed(seed)?;
        Ok(Self { curve, bytes })
    }

    /// Decode a secret key from its base58check form, verifying the
    /// curve's prefix.
    pub fn from_base58(encoded: &str, curve: EllipticalCurve) -> CryptoResult<Self> {
        let bytes = base58::decode(encoded, curve.secret_key_prefix())?;
        if bytes.len() != curve.secret_key_size() {
            return Err(CryptoError::InvalidSecretKey);
        }
        Ok(Self { curve, bytes })
    }

    pub fn curve(&self) -> EllipticalCurve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base58check form ("edsk...", "spsk...", "p2sk...")
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes, self.curve.secret_key_prefix())
    }

    /// Sign a message.
    ///
    /// The message is watermarked as a generic operation, reduced to a
    /// 32 byte BLAKE2b digest and signed with the owning curve.
    pub fn sign(&self, message: &[u8]) -> CryptoResult<Signature> {
        let mut watermarked =
            Vec::with_capacity(prefix::watermark::OPERATION.len() + message.len());
        watermarked.extend_from_slice(prefix::watermark::OPERATION);
        watermarked.extend_from_slice(message);

        let digest = hash::message_digest(&watermarked);
        let bytes = self.curve.sign_digest(&self.bytes, &digest)?;
        Ok(Signature::new(self.curve, bytes))
    }

    /// Sign a hex encoded message, the form produced by the forging
    /// collaborator.
    pub fn sign_hex(&self, hex_message: &str) -> CryptoResult<Signature> {
        let message = hex::decode(hex_message).map_err(|_| CryptoError::InvalidHex)?;
        self.sign(&message)
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        // Zero out the key material on drop
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({:?}, [REDACTED])", self.curve)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.bytes == other.bytes
    }
}

impl Eq for SecretKey {}

/// Public key derived from a [`SecretKey`].
#[derive(Clone, Serialize, Deserialize)]
pub struct PublicKey {
    curve: EllipticalCurve,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Derive the public key for a secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> CryptoResult<Self> {
        let bytes = secret_key.curve().public_key_bytes(secret_key.as_bytes())?;
        Ok(Self { curve: secret_key.curve(), bytes })
    }

    /// Decode a public key from its base58check form, verifying the
    /// curve's prefix.
    pub fn from_base58(encoded: &str, curve: EllipticalCurve) -> CryptoResult<Self> {
        let bytes = base58::decode(encoded, curve.public_key_prefix())?;
        if bytes.len() != curve.public_key_size() {
            return Err(CryptoError::InvalidPublicKey);
        }
        Ok(Self { curve, bytes })
    }

    pub fn curve(&self) -> EllipticalCurve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base58check form ("edpk...", "sppk...", "p2pk...")
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes, self.curve.public_key_prefix())
    }

    /// The address for this key: a base58check encoded BLAKE2b hash of
    /// the public key bytes, with the curve's address prefix.
    pub fn public_key_hash(&self) -> Address {
        let digest = hash::public_key_hash(&self.bytes);
        base58::encode(&digest, self.curve.address_prefix())
    }

    /// Verify a signature produced by [`SecretKey::sign`] over `message`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> CryptoResult<bool> {
        if signature.curve() != self.curve {
            return Ok(false);
        }

        let mut watermarked =
            Vec::with_capacity(prefix::watermark::OPERATION.len() + message.len());
        watermarked.extend_from_slice(prefix::watermark::OPERATION);
        watermarked.extend_from_slice(message);

        let digest = hash::message_digest(&watermarked);
        self.curve.verify_digest(&self.bytes, &digest, signature.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublicKey({:?}, {}...)",
            self.curve,
            hex::encode(&self.bytes[..8.min(self.bytes.len())])
        )
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.bytes == other.bytes
    }
}

impl Eq for PublicKey {}
