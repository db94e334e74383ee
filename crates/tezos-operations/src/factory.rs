// tezos-operations/src/factory.rs

use tezos_crypto::{Address, PublicKey};

use crate::{
    FeePolicy, MichelsonParameter, Operation, OperationError, OperationKind, OperationResult, Tez,
};

/// Builds correctly sequenced operations with a fee policy applied.
///
/// Accounts that have never revealed their public key get a reveal
/// prepended to their first outgoing batch; see [`OperationFactory::operations`].
#[derive(Debug, Default)]
pub struct OperationFactory;

impl OperationFactory {
    pub fn new() -> Self {
        Self
    }

    /// A reveal for `source`, publishing `public_key`.
    ///
    /// Fails when `source` is not the hash of the key being revealed; a
    /// reveal is only valid for its own account.
    pub fn reveal_operation(
        &self,
        source: Address,
        public_key: &PublicKey,
        policy: FeePolicy,
    ) -> OperationResult<Operation> {
        if source != public_key.public_key_hash() {
            return Err(OperationError::SourceMismatch(source));
        }
        Ok(Operation::reveal(public_key, policy.fees_for(OperationKind::Reveal)))
    }

    /// A plain transfer.
    pub fn transaction_operation(
        &self,
        amount: Tez,
        source: Address,
        destination: Address,
        policy: FeePolicy,
    ) -> OperationResult<Operation> {
        Ok(Operation::transaction(
            amount,
            source,
            destination,
            None,
            policy.fees_for(OperationKind::Transaction),
        ))
    }

    /// A contract call carrying a Michelson parameter.
    pub fn contract_invocation_operation(
        &self,
        amount: Tez,
        source: Address,
        destination: Address,
        parameter: MichelsonParameter,
        policy: FeePolicy,
    ) -> OperationResult<Operation> {
        Ok(Operation::transaction(
            amount,
            source,
            destination,
            Some(parameter),
            policy.fees_for(OperationKind::Transaction),
        ))
    }

    /// An origination managed by `address`, with the documented default
    /// of a zero initial balance.
    pub fn originate_operation(
        &self,
        address: Address,
        balance: Option<Tez>,
        policy: FeePolicy,
    ) -> OperationResult<Operation> {
        Ok(Operation::origination(
            address,
            balance,
            policy.fees_for(OperationKind::Origination),
        ))
    }

    /// A delegation change; a missing delegate clears the delegation.
    pub fn delegate_operation(
        &self,
        source: Address,
        delegate: Option<Address>,
        policy: FeePolicy,
    ) -> OperationResult<Operation> {
        Ok(Operation::delegation(
            source,
            delegate,
            policy.fees_for(OperationKind::Delegation),
        ))
    }

    /// Assemble the operation list for one intent.
    ///
    /// When the source account has not revealed its public key, a reveal
    /// is prepended so the batch is valid as a whole. Any construction
    /// failure fails the whole batch; partial lists are never returned.
    pub fn operations(
        &self,
        public_key: &PublicKey,
        primary: Operation,
        is_revealed: bool,
        policy: FeePolicy,
    ) -> OperationResult<Vec<Operation>> {
        let mut batch = Vec::with_capacity(2);

        if !is_revealed {
            let reveal = self.reveal_operation(primary.source().to_string(), public_key, policy)?;
            batch.push(reveal);
        }

        batch.push(primary);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tezos_crypto::{EllipticalCurve, SecretKey};

    fn public_key() -> PublicKey {
        let secret_key = SecretKey::from_seed(&[11u8; 64], EllipticalCurve::Ed25519).unwrap();
        PublicKey::from_secret_key(&secret_key).unwrap()
    }

    #[test]
    fn test_reveal_map() {
        let factory = OperationFactory::new();
        let public_key = public_key();

        let operation = factory
            .reveal_operation(public_key.public_key_hash(), &public_key, FeePolicy::Default)
            .unwrap();
        let map = operation.canonical_map();

        assert_eq!(map["kind"], "reveal");
        assert_eq!(map["source"], public_key.public_key_hash().as_str());
        assert_eq!(map["public_key"], public_key.to_base58().as_str());
    }

    #[test]
    fn test_reveal_rejects_foreign_source() {
        let factory = OperationFactory::new();
        let result =
            factory.reveal_operation("tz1somebodyelse".into(), &public_key(), FeePolicy::Default);
        assert!(matches!(result, Err(OperationError::SourceMismatch(_))));
    }

    #[test]
    fn test_originate_defaults_balance() {
        let factory = OperationFactory::new();
        let operation = factory
            .originate_operation("tz1abc123".into(), None, FeePolicy::Default)
            .unwrap();
        let map = operation.canonical_map();

        assert_eq!(map["manager_pubkey"], "tz1abc123");
        assert_eq!(map["balance"], "0");
    }

    #[test]
    fn test_unrevealed_account_gets_reveal_prepended() {
        let factory = OperationFactory::new();
        let public_key = public_key();
        let source = public_key.public_key_hash();

        let primary = factory
            .transaction_operation(
                Tez::from_mutez(100),
                source.clone(),
                "tz1def456".into(),
                FeePolicy::Default,
            )
            .unwrap();

        let batch = factory
            .operations(&public_key, primary, false, FeePolicy::Default)
            .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].kind(), OperationKind::Reveal);
        assert_eq!(batch[1].kind(), OperationKind::Transaction);
        assert_eq!(batch[0].source(), source);
    }

    #[test]
    fn test_revealed_account_gets_no_reveal() {
        let factory = OperationFactory::new();
        let public_key = public_key();

        let primary = factory
            .transaction_operation(
                Tez::from_mutez(100),
                public_key.public_key_hash(),
                "tz1def456".into(),
                FeePolicy::Default,
            )
            .unwrap();

        let batch = factory
            .operations(&public_key, primary, true, FeePolicy::Default)
            .unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].kind(), OperationKind::Transaction);
    }

    #[test]
    fn test_batch_fails_wholly_on_construction_failure() {
        let factory = OperationFactory::new();
        let public_key = public_key();

        // Primary sourced from a foreign account: the implied reveal is
        // invalid, so no batch is produced at all.
        let primary = factory
            .transaction_operation(
                Tez::from_mutez(100),
                "tz1somebodyelse".into(),
                "tz1def456".into(),
                FeePolicy::Default,
            )
            .unwrap();

        let result = factory.operations(&public_key, primary, false, FeePolicy::Default);
        assert!(matches!(result, Err(OperationError::SourceMismatch(_))));
    }

    #[test]
    fn test_custom_fee_policy_applies() {
        let factory = OperationFactory::new();
        let custom = crate::OperationFees::new(Tez::from_mutez(9_999), 42, 7);

        let operation = factory
            .transaction_operation(
                Tez::zero(),
                "tz1abc123".into(),
                "tz1def456".into(),
                FeePolicy::Custom(custom),
            )
            .unwrap();
        let map = operation.canonical_map();

        assert_eq!(map["fee"], "9999");
        assert_eq!(map["gas_limit"], "42");
        assert_eq!(map["storage_limit"], "7");
    }
}
