//! Decoded reproducer calls.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::NO_DELAY;

/// One decoded call argument.
///
/// `ty` is always a valid Solidity type name (`uint256`, `bytes32`, `address`, ...)
/// and `value` is a literal for that type. String literals are already quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedParam {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

impl ParsedParam {
    pub fn new(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// A normalized contract call taken from one reproducer transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCall {
    pub function_name: String,
    pub parameters: Vec<ParsedParam>,
    pub dst: String,
    pub src: String,
    pub value: String,
    pub gas: u64,
    pub gas_price: String,
    /// Whether the transaction warps time before the call.
    pub has_delay: bool,
    /// Delay in seconds as a decimal string, `"0"` when there is none.
    pub delay_value: String,
}

impl ParsedCall {
    /// A call with no parameters, no delay and empty transaction metadata.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            parameters: Vec::new(),
            dst: String::new(),
            src: String::new(),
            value: String::new(),
            gas: 0,
            gas_price: String::new(),
            has_delay: false,
            delay_value: NO_DELAY.to_string(),
        }
    }
}

/// The ordered calls decoded from one reproducer file.
///
/// Call order is the on-chain execution order and is never rearranged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayGroup {
    /// Name of the generated test function. Assigned once the output is known.
    pub test_name: String,
    pub calls: Vec<ParsedCall>,
    /// Reproducer file the calls were decoded from.
    pub file_name: PathBuf,
}

impl ReplayGroup {
    pub fn new(file_name: impl Into<PathBuf>, calls: Vec<ParsedCall>) -> Self {
        Self {
            test_name: String::new(),
            calls,
            file_name: file_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_call_has_no_delay() {
        let call = ParsedCall::new("deposit");
        assert!(!call.has_delay);
        assert_eq!(call.delay_value, "0");
    }

    #[test]
    fn test_new_group_is_unnamed() {
        let group = ReplayGroup::new("a.txt", vec![ParsedCall::new("deposit")]);
        assert!(group.test_name.is_empty());
        assert_eq!(group.file_name, PathBuf::from("a.txt"));
        assert_eq!(group.calls.len(), 1);
    }

    #[test]
    fn test_param_serializes_type_field() {
        let json = serde_json::to_value(ParsedParam::new("bool", "true")).unwrap();
        assert_eq!(json["type"], "bool");
        assert_eq!(json["value"], "true");
    }
}
