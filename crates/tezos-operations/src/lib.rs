// tezos-operations/src/lib.rs

//! On-chain operation construction for the Tezos client
//!
//! This crate provides:
//! - The Tez amount type and its RPC string form
//! - Operation fees and fee policies
//! - Michelson parameters for contract calls
//! - The operation variants and their canonical map representation
//! - A factory that assembles correctly sequenced operation batches
//!
//! The canonical map produced by [`Operation::canonical_map`] is the
//! exact structure the forging collaborator serializes; field order and
//! the string rendering of numbers are part of the wire contract.

pub mod factory;
pub mod fees;
pub mod michelson;
pub mod operation;
pub mod tez;

pub use factory::OperationFactory;
pub use fees::{FeePolicy, OperationFees};
pub use michelson::MichelsonParameter;
pub use operation::{Operation, OperationDetail, OperationKind};
pub use tez::Tez;

/// Result type for operation construction
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors that can occur while constructing operations
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Source address does not match the public key hash: {0}")]
    SourceMismatch(String),
}
