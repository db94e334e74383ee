// tezos-crypto/src/base58.rs

//! Base58check encoding and decoding.
//!
//! A checked string is base58(prefix + payload + checksum) where the
//! checksum is the first four bytes of SHA-256(SHA-256(prefix + payload)).

use sha2::{Digest, Sha256};

use crate::{CryptoError, CryptoResult};

/// Number of checksum bytes appended to the payload
const CHECKSUM_SIZE: usize = 4;

/// Encode a payload with the given network prefix.
pub fn encode(payload: &[u8], prefix: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_SIZE]);

    bs58::encode(data).into_string()
}

/// Decode a checked string, verifying the checksum and stripping the
/// expected prefix.
pub fn decode(encoded: &str, prefix: &[u8]) -> CryptoResult<Vec<u8>> {
    let raw = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| CryptoError::InvalidEncoding)?;

    if raw.len() < prefix.len() + CHECKSUM_SIZE {
        return Err(CryptoError::InvalidEncoding);
    }

    let (body, checksum) = raw.split_at(raw.len() - CHECKSUM_SIZE);
    if double_sha256(body)[..CHECKSUM_SIZE] != *checksum {
        return Err(CryptoError::ChecksumMismatch);
    }

    if !body.starts_with(prefix) {
        return Err(CryptoError::PrefixMismatch);
    }

    Ok(body[prefix.len()..].to_vec())
}

/// SHA-256 applied twice, as used for the checksum
fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}
