// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Typed constructor arguments for contract deployments.

use std::fmt;

use alloy::dyn_abi::{DynSolType, DynSolValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A positional constructor argument, stored as a Solidity type and its textual value.
///
/// Values are kept verbatim and only checked against their type when
/// [`to_sol_value`](Self::to_sol_value) is called.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ContractArgument {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

impl ContractArgument {
    pub fn new(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: value.into(),
        }
    }

    /// Parse the `TYPE:VALUE` shorthand used on the command line.
    pub fn parse(text: &str) -> Result<Self> {
        let Some((ty, value)) = text.split_once(':') else {
            return Err(Error::InvalidArgument(format!(
                "expected TYPE:VALUE, got {text:?}"
            )));
        };
        let ty = ty.trim();
        if ty.is_empty() {
            return Err(Error::InvalidArgument(format!("missing type in {text:?}")));
        }
        Ok(Self::new(ty, value))
    }

    pub fn sol_type(&self) -> Result<DynSolType> {
        DynSolType::parse(&self.ty)
            .map_err(|err| Error::InvalidArgument(format!("unknown type {:?}: {err}", self.ty)))
    }

    /// Coerce the stored value into an ABI value of the stored type.
    pub fn to_sol_value(&self) -> Result<DynSolValue> {
        self.sol_type()?.coerce_str(&self.value).map_err(|err| {
            Error::InvalidArgument(format!(
                "cannot read {:?} as {}: {err}",
                self.value, self.ty
            ))
        })
    }
}

impl fmt::Display for ContractArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ty, self.value)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    #[test]
    fn parse_shorthand() {
        let arg = ContractArgument::parse("uint256:10").unwrap();
        assert_eq!(arg, ContractArgument::new("uint256", "10"));

        // only the first colon separates type from value
        let arg = ContractArgument::parse("string:a:b").unwrap();
        assert_eq!(arg.value, "a:b");
        assert_eq!(arg.to_string(), "string:a:b");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            ContractArgument::parse("uint256"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ContractArgument::parse(":10"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn coerce_values() {
        let test_cases = vec![
            (
                ContractArgument::new("uint256", "10"),
                DynSolValue::Uint(U256::from(10), 256),
            ),
            (
                ContractArgument::new("bool", "true"),
                DynSolValue::Bool(true),
            ),
            (
                ContractArgument::new("string", "hello"),
                DynSolValue::String("hello".to_owned()),
            ),
        ];
        for (arg, expected) in test_cases {
            assert_eq!(arg.to_sol_value().unwrap(), expected);
        }
    }

    #[test]
    fn coerce_failures() {
        let bad_type = ContractArgument::new("uint257x", "1");
        assert!(matches!(bad_type.sol_type(), Err(Error::InvalidArgument(_))));

        let bad_value = ContractArgument::new("bool", "maybe");
        assert!(matches!(
            bad_value.to_sol_value(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
