// tezos-wallet/src/wallet.rs

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use tezos_crypto::{prefix, Address, EllipticalCurve, PublicKey, SecretKey, Signature};

use crate::{integrity::TrustedEnvironment, mnemonic, EnvironmentPolicy, WalletResult};

/// Anything that can sign forged operation hex on behalf of an account.
pub trait SignatureProvider {
    fn sign(&self, hex_message: &str) -> WalletResult<Signature>;
}

/// An account identity: a key pair, the derived address, and the
/// mnemonic it was restored from, if any.
///
/// A wallet is immutable once constructed. The secret key buffer is
/// zeroed when the wallet is dropped; zeroing does not extend to swapped
/// or paged memory.
pub struct Wallet {
    public_key: PublicKey,
    secret_key: SecretKey,
    address: Address,
    mnemonic: Option<String>,
}

impl Wallet {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// The base58check public key hash ("tz1...", "tz2...", "tz3...")
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The mnemonic this wallet was generated from, if it was
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        self.public_key.to_base58() == other.public_key.to_base58()
            && self.secret_key == *other.secret_key()
    }
}

impl Eq for Wallet {}

impl SignatureProvider for Wallet {
    fn sign(&self, hex_message: &str) -> WalletResult<Signature> {
        Ok(self.secret_key.sign_hex(hex_message)?)
    }
}

/// Constructs wallets, running the injected environment policy once per
/// construction. No partially built wallet ever escapes a failed check.
pub struct WalletFactory {
    policy: Box<dyn EnvironmentPolicy>,
}

impl Default for WalletFactory {
    fn default() -> Self {
        Self::new(TrustedEnvironment)
    }
}

impl WalletFactory {
    pub fn new(policy: impl EnvironmentPolicy + 'static) -> Self {
        Self { policy: Box::new(policy) }
    }

    /// Create a wallet with a freshly generated mnemonic.
    pub fn create(&self, passphrase: &str, curve: EllipticalCurve) -> WalletResult<Wallet> {
        let mnemonic = mnemonic::generate_mnemonic()?;
        self.from_mnemonic(&mnemonic, passphrase, curve)
    }

    /// Restore a wallet from a mnemonic and optional passphrase.
    pub fn from_mnemonic(
        &self,
        mnemonic: &str,
        passphrase: &str,
        curve: EllipticalCurve,
    ) -> WalletResult<Wallet> {
        let seed = mnemonic::seed_from_mnemonic(mnemonic, passphrase)?;
        let secret_key = SecretKey::from_seed(&seed, curve)?;
        self.assemble(secret_key, Some(mnemonic.to_string()))
    }

    /// Restore a fundraiser wallet from an email, password and mnemonic.
    ///
    /// The passphrase is the NFKD normalization of email + password.
    /// Normalization is load-bearing: the same text in a different
    /// Unicode composition form must derive the same key.
    pub fn from_fundraiser(
        &self,
        email: &str,
        password: &str,
        mnemonic: &str,
    ) -> WalletResult<Wallet> {
        let passphrase: String = format!("{email}{password}").nfkd().collect();
        self.from_mnemonic(mnemonic, &passphrase, EllipticalCurve::Ed25519)
    }

    /// Restore a wallet from a base58check encoded secret key.
    pub fn from_secret_key(&self, encoded: &str, curve: EllipticalCurve) -> WalletResult<Wallet> {
        let secret_key = SecretKey::from_base58(encoded, curve)?;
        self.assemble(secret_key, None)
    }

    /// Restore an Ed25519 wallet from a base58check encoded seed.
    pub fn from_seed(&self, seed_b58: &str) -> WalletResult<Wallet> {
        let seed = tezos_crypto::base58::decode(seed_b58, prefix::secret_key::ED25519_SEED)?;
        if seed.len() != 32 {
            return Err(tezos_crypto::CryptoError::InvalidSeed.into());
        }

        let secret_key = SecretKey::from_seed(&seed, EllipticalCurve::Ed25519)?;
        self.from_secret_key(&secret_key.to_base58(), EllipticalCurve::Ed25519)
    }

    fn assemble(&self, secret_key: SecretKey, mnemonic: Option<String>) -> WalletResult<Wallet> {
        self.policy.check()?;

        let public_key = PublicKey::from_secret_key(&secret_key)?;
        let address = public_key.public_key_hash();
        Ok(Wallet { public_key, secret_key, address, mnemonic })
    }
}
