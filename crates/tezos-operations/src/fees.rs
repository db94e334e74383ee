// tezos-operations/src/fees.rs

use serde::{Deserialize, Serialize};

use crate::{OperationKind, Tez};

/// Fees attached to every forged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationFees {
    pub fee: Tez,
    pub gas_limit: u64,
    pub storage_limit: u64,
}

impl OperationFees {
    pub fn new(fee: Tez, gas_limit: u64, storage_limit: u64) -> Self {
        Self { fee, gas_limit, storage_limit }
    }

    /// The network suggested fees for an operation kind.
    pub fn default_for(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Reveal => Self::new(Tez::from_mutez(1_268), 10_000, 0),
            OperationKind::Transaction => Self::new(Tez::from_mutez(1_284), 10_307, 257),
            OperationKind::Origination => Self::new(Tez::from_mutez(1_285), 10_000, 257),
            OperationKind::Delegation => Self::new(Tez::from_mutez(1_257), 10_000, 0),
        }
    }
}

/// How a factory picks fees for the operations it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePolicy {
    /// Use the network suggested fees for the operation kind
    Default,
    /// Use an explicit fee override
    Custom(OperationFees),
}

impl FeePolicy {
    /// Resolve the policy into concrete fees for `kind`.
    pub fn fees_for(&self, kind: OperationKind) -> OperationFees {
        match self {
            FeePolicy::Default => OperationFees::default_for(kind),
            FeePolicy::Custom(fees) => *fees,
        }
    }
}
