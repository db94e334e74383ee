// tezos-wallet/src/mnemonic.rs

//! BIP39 mnemonic handling.

use bip39::{Language, Mnemonic};

use crate::{WalletError, WalletResult};

/// Number of words in a freshly generated mnemonic
const DEFAULT_WORD_COUNT: usize = 12;

/// Generate a new english mnemonic.
pub fn generate_mnemonic() -> WalletResult<String> {
    let mnemonic = Mnemonic::generate_in(Language::English, DEFAULT_WORD_COUNT)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Validate a space delimited english mnemonic.
pub fn validate_mnemonic(mnemonic: &str) -> WalletResult<()> {
    parse(mnemonic).map(|_| ())
}

/// Derive the 64 byte seed for a mnemonic and passphrase.
///
/// The passphrase is used as the PBKDF2 salt per BIP39; an empty string
/// is a valid passphrase.
pub fn seed_from_mnemonic(mnemonic: &str, passphrase: &str) -> WalletResult<[u8; 64]> {
    let mnemonic = parse(mnemonic)?;
    Ok(mnemonic.to_seed(passphrase))
}

fn parse(mnemonic: &str) -> WalletResult<Mnemonic> {
    Mnemonic::parse_in(Language::English, mnemonic)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))
}
