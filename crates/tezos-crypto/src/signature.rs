// tezos-crypto/src/signature.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{base58, EllipticalCurve};

/// A detached signature produced by [`crate::SecretKey::sign`].
#[derive(Clone, Serialize, Deserialize)]
pub struct Signature {
    curve: EllipticalCurve,
    bytes: Vec<u8>,
}

impl Signature {
    /// Wrap raw signature bytes for a curve
    pub fn new(curve: EllipticalCurve, bytes: Vec<u8>) -> Self {
        Self { curve, bytes }
    }

    /// The curve that produced this signature
    pub fn curve(&self) -> EllipticalCurve {
        self.curve
    }

    /// Raw signature bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Owned signature bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Base58check form ("edsig...", "spsig1...", "p2sig...")
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes, self.curve.signature_prefix())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Signature({:?}, {}...)",
            self.curve,
            hex::encode(&self.bytes[..8.min(self.bytes.len())])
        )
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.bytes == other.bytes
    }
}

impl Eq for Signature {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PublicKey, SecretKey};

    #[test]
    fn test_signature_base58_prefix() {
        let cases = [
            (EllipticalCurve::Ed25519, "edsig"),
            (EllipticalCurve::Secp256k1, "spsig1"),
            (EllipticalCurve::P256, "p2sig"),
        ];
        for (curve, expected) in cases {
            let secret_key = SecretKey::from_seed(&[5u8; 64], curve).unwrap();
            let signature = secret_key.sign(b"bytes").unwrap();
            assert!(signature.to_base58().starts_with(expected));
        }
    }

    #[test]
    fn test_signature_equality() {
        let secret_key = SecretKey::from_seed(&[5u8; 64], EllipticalCurve::Ed25519).unwrap();
        let a = secret_key.sign(b"bytes").unwrap();
        let b = secret_key.sign(b"bytes").unwrap();
        // Ed25519 signing is deterministic
        assert_eq!(a, b);

        let public_key = PublicKey::from_secret_key(&secret_key).unwrap();
        assert!(public_key.verify(b"bytes", &a).unwrap());
    }
}
