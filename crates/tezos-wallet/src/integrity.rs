// tezos-wallet/src/integrity.rs

//! Environment integrity policy.
//!
//! Hosts that refuse to hold keys on tampered devices inject a policy
//! here; the check runs once per wallet construction and a failure means
//! no wallet is created.

use crate::{WalletError, WalletResult};

/// A check run before any wallet construction completes.
pub trait EnvironmentPolicy: Send + Sync {
    /// Return an error to veto wallet construction.
    fn check(&self) -> WalletResult<()>;
}

/// Policy that trusts every environment. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrustedEnvironment;

impl EnvironmentPolicy for TrustedEnvironment {
    fn check(&self) -> WalletResult<()> {
        Ok(())
    }
}

/// Policy driven by a caller supplied predicate.
pub struct PolicyFn<F>(pub F);

impl<F> EnvironmentPolicy for PolicyFn<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn check(&self) -> WalletResult<()> {
        if (self.0)() {
            Ok(())
        } else {
            Err(WalletError::UntrustedEnvironment)
        }
    }
}
