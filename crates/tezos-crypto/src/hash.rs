// tezos-crypto/src/hash.rs

//! BLAKE2b digests used throughout the protocol.

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};

/// Digest size for public key hashes
pub const PUBLIC_KEY_HASH_SIZE: usize = 20;

/// Digest size for message signing
pub const MESSAGE_DIGEST_SIZE: usize = 32;

type Blake2b160 = Blake2b<U20>;
type Blake2b256 = Blake2b<U32>;

/// 20 byte BLAKE2b digest, used to derive an address from a public key.
pub fn public_key_hash(data: &[u8]) -> [u8; PUBLIC_KEY_HASH_SIZE] {
    Blake2b160::digest(data).into()
}

/// 32 byte BLAKE2b digest, signed by all curves.
pub fn message_digest(data: &[u8]) -> [u8; MESSAGE_DIGEST_SIZE] {
    Blake2b256::digest(data).into()
}
