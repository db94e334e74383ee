// tezos-operations/src/operation.rs

use serde_json::{Map, Value};

use tezos_crypto::{Address, PublicKey};

use crate::{MichelsonParameter, OperationFees, Tez};

/// The closed set of operation kinds this client forges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Reveal,
    Transaction,
    Origination,
    Delegation,
}

impl OperationKind {
    /// The kind tag the consensus layer expects.
    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::Reveal => "reveal",
            OperationKind::Transaction => "transaction",
            OperationKind::Origination => "origination",
            OperationKind::Delegation => "delegation",
        }
    }
}

/// Kind-specific payload of an [`Operation`].
#[derive(Debug, Clone, PartialEq)]
pub enum OperationDetail {
    Reveal {
        /// Base58check public key being published
        public_key: String,
    },
    Transaction {
        amount: Tez,
        destination: Address,
        parameter: Option<MichelsonParameter>,
    },
    Origination {
        manager_pubkey: Address,
        balance: Tez,
    },
    Delegation {
        /// The new delegate; absent clears the delegation
        delegate: Option<Address>,
    },
}

/// An operation ready to be forged: shared base fields plus a
/// kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    source: Address,
    fees: OperationFees,
    detail: OperationDetail,
}

impl Operation {
    /// An operation publishing an account's public key on-chain.
    ///
    /// The source is always the hash of the key being revealed.
    pub fn reveal(public_key: &PublicKey, fees: OperationFees) -> Self {
        Self {
            source: public_key.public_key_hash(),
            fees,
            detail: OperationDetail::Reveal { public_key: public_key.to_base58() },
        }
    }

    /// A transfer of `amount` from `source` to `destination`, with an
    /// optional contract call parameter.
    pub fn transaction(
        amount: Tez,
        source: Address,
        destination: Address,
        parameter: Option<MichelsonParameter>,
        fees: OperationFees,
    ) -> Self {
        Self {
            source,
            fees,
            detail: OperationDetail::Transaction { amount, destination, parameter },
        }
    }

    /// An account origination managed by `manager`. A missing balance
    /// defaults to zero.
    pub fn origination(manager: Address, balance: Option<Tez>, fees: OperationFees) -> Self {
        Self {
            source: manager.clone(),
            fees,
            detail: OperationDetail::Origination {
                manager_pubkey: manager,
                balance: balance.unwrap_or_else(Tez::zero),
            },
        }
    }

    /// A delegation change for `source`; a missing delegate clears any
    /// existing delegation.
    pub fn delegation(source: Address, delegate: Option<Address>, fees: OperationFees) -> Self {
        Self { source, fees, detail: OperationDetail::Delegation { delegate } }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fees(&self) -> &OperationFees {
        &self.fees
    }

    pub fn detail(&self) -> &OperationDetail {
        &self.detail
    }

    pub fn kind(&self) -> OperationKind {
        match self.detail {
            OperationDetail::Reveal { .. } => OperationKind::Reveal,
            OperationDetail::Transaction { .. } => OperationKind::Transaction,
            OperationDetail::Origination { .. } => OperationKind::Origination,
            OperationDetail::Delegation { .. } => OperationKind::Delegation,
        }
    }

    /// The canonical ordered map the forging collaborator serializes.
    ///
    /// Key order and the string rendering of every number are part of
    /// the wire contract; the remote node rejects anything else.
    pub fn canonical_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("source".into(), Value::String(self.source.clone()));
        map.insert("kind".into(), Value::String(self.kind().tag().into()));
        map.insert("fee".into(), Value::String(self.fees.fee.rpc_representation()));
        map.insert("gas_limit".into(), Value::String(self.fees.gas_limit.to_string()));
        map.insert(
            "storage_limit".into(),
            Value::String(self.fees.storage_limit.to_string()),
        );

        match &self.detail {
            OperationDetail::Reveal { public_key } => {
                map.insert("public_key".into(), Value::String(public_key.clone()));
            }
            OperationDetail::Transaction { amount, destination, parameter } => {
                map.insert("amount".into(), Value::String(amount.rpc_representation()));
                map.insert("destination".into(), Value::String(destination.clone()));
                if let Some(parameter) = parameter {
                    let mut parameters = Map::new();
                    parameters.insert("entrypoint".into(), Value::String("default".into()));
                    parameters.insert("value".into(), parameter.network_representation());
                    map.insert("parameters".into(), Value::Object(parameters));
                }
            }
            OperationDetail::Origination { manager_pubkey, balance } => {
                map.insert("manager_pubkey".into(), Value::String(manager_pubkey.clone()));
                map.insert("balance".into(), Value::String(balance.rpc_representation()));
            }
            OperationDetail::Delegation { delegate } => {
                if let Some(delegate) = delegate {
                    map.insert("delegate".into(), Value::String(delegate.clone()));
                }
            }
        }

        map
    }
}
