// tezos-operations/src/michelson.rs

//! Michelson parameters for smart contract calls.

use serde_json::{json, Value};

/// A parameter passed to a contract entrypoint, in Micheline form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MichelsonParameter {
    String(String),
    Int(i64),
    Bytes(Vec<u8>),
    Unit,
    Bool(bool),
    Pair(Box<MichelsonParameter>, Box<MichelsonParameter>),
    Some(Box<MichelsonParameter>),
    None,
    Left(Box<MichelsonParameter>),
    Right(Box<MichelsonParameter>),
}

impl MichelsonParameter {
    /// The Micheline JSON the network expects.
    ///
    /// Numbers travel as strings; byte sequences travel hex encoded.
    pub fn network_representation(&self) -> Value {
        match self {
            MichelsonParameter::String(s) => json!({ "string": s }),
            MichelsonParameter::Int(i) => json!({ "int": i.to_string() }),
            MichelsonParameter::Bytes(bytes) => json!({ "bytes": hex::encode(bytes) }),
            MichelsonParameter::Unit => prim("Unit", vec![]),
            MichelsonParameter::Bool(true) => prim("True", vec![]),
            MichelsonParameter::Bool(false) => prim("False", vec![]),
            MichelsonParameter::Pair(left, right) => prim(
                "Pair",
                vec![left.network_representation(), right.network_representation()],
            ),
            MichelsonParameter::Some(value) => prim("Some", vec![value.network_representation()]),
            MichelsonParameter::None => prim("None", vec![]),
            MichelsonParameter::Left(value) => prim("Left", vec![value.network_representation()]),
            MichelsonParameter::Right(value) => prim("Right", vec![value.network_representation()]),
        }
    }
}

fn prim(name: &str, args: Vec<Value>) -> Value {
    if args.is_empty() {
        json!({ "prim": name })
    } else {
        json!({ "prim": name, "args": args })
    }
}
