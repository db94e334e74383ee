// tezos-crypto/src/curve.rs

//! The closed set of signing curves supported by the network.
//!
//! All curve-specific branching lives here. Callers hold an
//! [`EllipticalCurve`] tag and go through [`crate::SecretKey`] /
//! [`crate::PublicKey`], which dispatch into this module.

use serde::{Deserialize, Serialize};

use crate::{prefix, CryptoError, CryptoResult};

/// Supported signing curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EllipticalCurve {
    /// Ed25519 (tz1 addresses, the network default)
    #[default]
    Ed25519,
    /// SECP256k1 (tz2 addresses)
    Secp256k1,
    /// NIST P-256 (tz3 addresses)
    P256,
}

impl EllipticalCurve {
    /// Size of the raw secret key in bytes.
    ///
    /// Ed25519 secret keys carry the seed and the public key; the ECDSA
    /// curves hold a bare scalar.
    pub fn secret_key_size(&self) -> usize {
        match self {
            EllipticalCurve::Ed25519 => 64,
            EllipticalCurve::Secp256k1 | EllipticalCurve::P256 => 32,
        }
    }

    /// Size of the raw public key in bytes (compressed form for ECDSA).
    pub fn public_key_size(&self) -> usize {
        match self {
            EllipticalCurve::Ed25519 => 32,
            EllipticalCurve::Secp256k1 | EllipticalCurve::P256 => 33,
        }
    }

    /// Base58check prefix for secret keys on this curve
    pub fn secret_key_prefix(&self) -> &'static [u8] {
        match self {
            EllipticalCurve::Ed25519 => prefix::secret_key::ED25519,
            EllipticalCurve::Secp256k1 => prefix::secret_key::SECP256K1,
            EllipticalCurve::P256 => prefix::secret_key::P256,
        }
    }

    /// Base58check prefix for public keys on this curve
    pub fn public_key_prefix(&self) -> &'static [u8] {
        match self {
            EllipticalCurve::Ed25519 => prefix::public_key::ED25519,
            EllipticalCurve::Secp256k1 => prefix::public_key::SECP256K1,
            EllipticalCurve::P256 => prefix::public_key::P256,
        }
    }

    /// Base58check prefix for public key hashes (addresses) on this curve
    pub fn address_prefix(&self) -> &'static [u8] {
        match self {
            EllipticalCurve::Ed25519 => prefix::address::TZ1,
            EllipticalCurve::Secp256k1 => prefix::address::TZ2,
            EllipticalCurve::P256 => prefix::address::TZ3,
        }
    }

    /// Base58check prefix for signatures on this curve
    pub fn signature_prefix(&self) -> &'static [u8] {
        match self {
            EllipticalCurve::Ed25519 => prefix::signature::ED25519,
            EllipticalCurve::Secp256k1 => prefix::signature::SECP256K1,
            EllipticalCurve::P256 => prefix::signature::P256,
        }
    }

    /// Derive raw secret key material from a seed.
    ///
    /// Ed25519 consumes the first 32 bytes directly; the ECDSA curves use
    /// them as the private scalar, which the curve may reject.
    pub(crate) fn secret_key_from_seed(&self, seed: &[u8]) -> CryptoResult<Vec<u8>> {
        if seed.len() < 32 {
            return Err(CryptoError::InvalidSeed);
        }
        let seed32: [u8; 32] = seed[..32].try_into().map_err(|_| CryptoError::InvalidSeed)?;

        match self {
            EllipticalCurve::Ed25519 => {
                use ed25519_dalek::SigningKey;

                let signing_key = SigningKey::from_bytes(&seed32);
                let mut secret = Vec::with_capacity(64);
                secret.extend_from_slice(&seed32);
                secret.extend_from_slice(&signing_key.verifying_key().to_bytes());
                Ok(secret)
            }
            EllipticalCurve::Secp256k1 => {
                use secp256k1::SecretKey as Secp256k1Sk;

                let secret_key =
                    Secp256k1Sk::from_slice(&seed32).map_err(|_| CryptoError::InvalidSeed)?;
                Ok(secret_key.secret_bytes().to_vec())
            }
            EllipticalCurve::P256 => {
                use p256::ecdsa::SigningKey;

                let signing_key =
                    SigningKey::from_slice(&seed32).map_err(|_| CryptoError::InvalidSeed)?;
                Ok(signing_key.to_bytes().to_vec())
            }
        }
    }

    /// Derive the public key bytes for the given raw secret key.
    pub(crate) fn public_key_bytes(&self, secret: &[u8]) -> CryptoResult<Vec<u8>> {
        match self {
            EllipticalCurve::Ed25519 => {
                use ed25519_dalek::SigningKey;

                let signing_key = SigningKey::from_bytes(&ed25519_seed(secret)?);
                Ok(signing_key.verifying_key().to_bytes().to_vec())
            }
            EllipticalCurve::Secp256k1 => {
                use secp256k1::{PublicKey as Secp256k1Pk, Secp256k1, SecretKey as Secp256k1Sk};

                let secp = Secp256k1::signing_only();
                let secret_key =
                    Secp256k1Sk::from_slice(secret).map_err(|_| CryptoError::InvalidSecretKey)?;
                let public_key = Secp256k1Pk::from_secret_key(&secp, &secret_key);
                Ok(public_key.serialize().to_vec())
            }
            EllipticalCurve::P256 => {
                use p256::ecdsa::SigningKey;

                let signing_key =
                    SigningKey::from_slice(secret).map_err(|_| CryptoError::InvalidSecretKey)?;
                let encoded = signing_key.verifying_key().to_encoded_point(true);
                Ok(encoded.as_bytes().to_vec())
            }
        }
    }

    /// Sign a 32 byte message digest.
    pub(crate) fn sign_digest(&self, secret: &[u8], digest: &[u8; 32]) -> CryptoResult<Vec<u8>> {
        match self {
            EllipticalCurve::Ed25519 => {
                use ed25519_dalek::{Signer, SigningKey};

                let signing_key = SigningKey::from_bytes(&ed25519_seed(secret)?);
                Ok(signing_key.sign(digest).to_bytes().to_vec())
            }
            EllipticalCurve::Secp256k1 => {
                use secp256k1::{Message, Secp256k1, SecretKey as Secp256k1Sk};

                let secp = Secp256k1::signing_only();
                let secret_key =
                    Secp256k1Sk::from_slice(secret).map_err(|_| CryptoError::InvalidSecretKey)?;
                let message = Message::from_digest_slice(digest)
                    .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
                Ok(secp.sign_ecdsa(&message, &secret_key).serialize_compact().to_vec())
            }
            EllipticalCurve::P256 => {
                use p256::ecdsa::signature::hazmat::PrehashSigner;
                use p256::ecdsa::{Signature as P256Signature, SigningKey};

                let signing_key =
                    SigningKey::from_slice(secret).map_err(|_| CryptoError::InvalidSecretKey)?;
                let signature: P256Signature = signing_key
                    .sign_prehash(digest)
                    .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
                Ok(signature.to_vec())
            }
        }
    }

    /// Verify a signature over a 32 byte message digest.
    pub(crate) fn verify_digest(
        &self,
        public: &[u8],
        digest: &[u8; 32],
        signature: &[u8],
    ) -> CryptoResult<bool> {
        match self {
            EllipticalCurve::Ed25519 => {
                use ed25519_dalek::{Signature as Ed25519Sig, Verifier, VerifyingKey};

                let signature =
                    Ed25519Sig::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;
                let verifying_key = VerifyingKey::from_bytes(
                    public.try_into().map_err(|_| CryptoError::InvalidPublicKey)?,
                )
                .map_err(|_| CryptoError::InvalidPublicKey)?;
                Ok(verifying_key.verify(digest, &signature).is_ok())
            }
            EllipticalCurve::Secp256k1 => {
                use secp256k1::ecdsa::Signature as Secp256k1Sig;
                use secp256k1::{Message, PublicKey as Secp256k1Pk, Secp256k1};

                let secp = Secp256k1::verification_only();
                let signature = Secp256k1Sig::from_compact(signature)
                    .map_err(|_| CryptoError::InvalidSignature)?;
                let public_key =
                    Secp256k1Pk::from_slice(public).map_err(|_| CryptoError::InvalidPublicKey)?;
                let message = Message::from_digest_slice(digest)
                    .map_err(|_| CryptoError::InvalidSignature)?;
                Ok(secp.verify_ecdsa(&message, &signature, &public_key).is_ok())
            }
            EllipticalCurve::P256 => {
                use p256::ecdsa::signature::hazmat::PrehashVerifier;
                use p256::ecdsa::{Signature as P256Signature, VerifyingKey};

                let signature = P256Signature::from_slice(signature)
                    .map_err(|_| CryptoError::InvalidSignature)?;
                let verifying_key = VerifyingKey::from_sec1_bytes(public)
                    .map_err(|_| CryptoError::InvalidPublicKey)?;
                Ok(verifying_key.verify_prehash(digest, &signature).is_ok())
            }
        }
    }
}

/// Extract the 32 byte Ed25519 seed from the 64 byte secret key form.
fn ed25519_seed(secret: &[u8]) -> CryptoResult<[u8; 32]> {
    if secret.len() != 64 {
        return Err(CryptoError::InvalidSecretKey);
    }
    secret[..32].try_into().map_err(|_| CryptoError::InvalidSecretKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_sizes() {
        let seed = [9u8; 64];
        for curve in [
            EllipticalCurve::Ed25519,
            EllipticalCurve::Secp256k1,
            EllipticalCurve::P256,
        ] {
            let secret = curve.secret_key_from_seed(&seed).unwrap();
            assert_eq!(secret.len(), curve.secret_key_size());
        }
    }

    #[test]
    fn test_public_key_sizes() {
        let seed = [9u8; 64];
        for curve in [
            EllipticalCurve::Ed25519,
            EllipticalCurve::Secp256k1,
            EllipticalCurve::P256,
        ] {
            let secret = curve.secret_key_from_seed(&seed).unwrap();
            let public = curve.public_key_bytes(&secret).unwrap();
            assert_eq!(public.len(), curve.public_key_size());
        }
    }

    #[test]
    fn test_short_seed_rejected() {
        let result = EllipticalCurve::Ed25519.secret_key_from_seed(&[1u8; 16]);
        assert!(matches!(result, Err(CryptoError::InvalidSeed)));
    }

    #[test]
    fn test_zero_scalar_rejected_by_secp256k1() {
        // An all-zero scalar is outside the valid key range
        let result = EllipticalCurve::Secp256k1.secret_key_from_seed(&[0u8; 32]);
        assert!(matches!(result, Err(CryptoError::InvalidSeed)));
    }

    #[test]
    fn test_sign_verify_all_curves() {
        let seed = [3u8; 64];
        let digest = crate::hash::message_digest(b"payload");

        for curve in [
            EllipticalCurve::Ed25519,
            EllipticalCurve::Secp256k1,
            EllipticalCurve::P256,
        ] {
            let secret = curve.secret_key_from_seed(&seed).unwrap();
            let public = curve.public_key_bytes(&secret).unwrap();
            let signature = curve.sign_digest(&secret, &digest).unwrap();
            assert_eq!(signature.len(), 64);
            assert!(curve.verify_digest(&public, &digest, &signature).unwrap());

            let other_digest = crate::hash::message_digest(b"tampered");
            assert!(!curve.verify_digest(&public, &other_digest, &signature).unwrap());
        }
    }
}
