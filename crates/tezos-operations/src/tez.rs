// tezos-operations/src/tez.rs

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::OperationError;

/// Smallest unit count per whole tez
pub const MUTEZ_PER_TEZ: u64 = 1_000_000;

/// An amount of XTZ, stored in mutez.
///
/// The remote protocol expects amounts as decimal mutez strings, never
/// as native numbers; [`Tez::rpc_representation`] produces that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tez(u64);

impl Tez {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn from_mutez(mutez: u64) -> Self {
        Self(mutez)
    }

    pub fn mutez(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The decimal mutez string sent over the wire
    pub fn rpc_representation(&self) -> String {
        self.0.to_string()
    }

    pub fn checked_add(&self, other: &Tez) -> Option<Tez> {
        self.0.checked_add(other.0).map(Tez)
    }

    pub fn checked_sub(&self, other: &Tez) -> Option<Tez> {
        self.0.checked_sub(other.0).map(Tez)
    }
}

impl Add for Tez {
    type Output = Tez;

    fn add(self, other: Tez) -> Tez {
        Tez(self.0 + other.0)
    }
}

impl Sub for Tez {
    type Output = Tez;

    fn sub(self, other: Tez) -> Tez {
        Tez(self.0 - other.0)
    }
}

impl FromStr for Tez {
    type Err = OperationError;

    /// Parse a human readable amount such as "1.5" or "0.000001".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s).map_err(|_| OperationError::InvalidAmount(s.to_string()))?;
        let scaled = amount * Decimal::from(MUTEZ_PER_TEZ);

        if scaled.is_sign_negative() || !scaled.fract().is_zero() {
            return Err(OperationError::InvalidAmount(s.to_string()));
        }

        scaled
            .to_u64()
            .map(Tez)
            .ok_or_else(|| OperationError::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Tez {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:06}",
            self.0 / MUTEZ_PER_TEZ,
            self.0 % MUTEZ_PER_TEZ
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_representation_is_mutez() {
        assert_eq!(Tez::from_mutez(1_500_000).rpc_representation(), "1500000");
        assert_eq!(Tez::zero().rpc_representation(), "0");
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("1".parse::<Tez>().unwrap(), Tez::from_mutez(1_000_000));
        assert_eq!("1.5".parse::<Tez>().unwrap(), Tez::from_mutez(1_500_000));
        assert_eq!("0.000001".parse::<Tez>().unwrap(), Tez::from_mutez(1));
    }

    #[test]
    fn test_parse_rejects_sub_mutez_precision() {
        assert!("0.0000001".parse::<Tez>().is_err());
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        assert!("-1".parse::<Tez>().is_err());
        assert!("one tez".parse::<Tez>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tez::from_mutez(1_500_000).to_string(), "1.500000");
        assert_eq!(Tez::from_mutez(42).to_string(), "0.000042");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Tez::from_mutez(100);
        let b = Tez::from_mutez(40);
        assert_eq!(a.checked_add(&b), Some(Tez::from_mutez(140)));
        assert_eq!(a.checked_sub(&b), Some(Tez::from_mutez(60)));
        assert_eq!(b.checked_sub(&a), None);
    }
}
