// tezos-wallet/src/lib.rs

//! Wallet identities for the Tezos client
//!
//! This crate provides:
//! - BIP39 mnemonic generation and seed derivation
//! - Wallet construction from mnemonics, secret keys and seeds
//! - Fundraiser-style wallet restoration
//! - An injectable environment integrity policy

pub mod integrity;
pub mod mnemonic;
pub mod wallet;

pub use integrity::{EnvironmentPolicy, TrustedEnvironment};
pub use wallet::{SignatureProvider, Wallet, WalletFactory};

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

/// Errors that can occur while constructing or using a wallet
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(#[from] tezos_crypto::CryptoError),

    #[error("Untrusted environment")]
    UntrustedEnvironment,
}
