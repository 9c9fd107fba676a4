//! Transaction decoding.

use serde::Deserialize;
use serde_json::Value;

use runes_types::{ParsedCall, NO_DELAY};

use crate::abi::decode_param;
use crate::error::DecodeError;

/// The all-zero 256-bit word Echidna writes for "no delay".
pub const ZERO_WORD: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Delays are read from at most this many trailing hex digits.
pub const MAX_DELAY_HEX_DIGITS: usize = 8;

/// One entry of a reproducer document, as written by Echidna.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    pub call: TaggedCall,
    /// `[time, blocks]` as hex words.
    #[serde(default)]
    pub delay: Vec<String>,
    #[serde(default)]
    pub dst: String,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub gas: u64,
    #[serde(default, rename = "gasprice", alias = "gasPrice")]
    pub gas_price: String,
    #[serde(default)]
    pub value: String,
}

/// The `call` field: a tag plus tag-specific contents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedCall {
    pub tag: String,
    #[serde(default)]
    pub contents: Value,
}

/// What a transaction's call tag asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallKind<'a> {
    /// A Solidity function call; contents are `[name, params]`.
    SolCall(&'a Value),
    /// A pure time/block delay.
    NoCall,
    /// Any other tag (creation, raw calldata, ...), ignored.
    Other(&'a str),
}

impl TaggedCall {
    pub fn kind(&self) -> CallKind<'_> {
        match self.tag.as_str() {
            "SolCall" => CallKind::SolCall(&self.contents),
            "NoCall" => CallKind::NoCall,
            other => CallKind::Other(other),
        }
    }
}

/// Decode one transaction.
///
/// Returns `Ok(None)` for transactions that do not call a function.
pub fn decode_call(tx: &RawTransaction) -> Result<Option<ParsedCall>, DecodeError> {
    let contents = match tx.call.kind() {
        CallKind::SolCall(contents) => contents,
        CallKind::NoCall | CallKind::Other(_) => return Ok(None),
    };

    let items = contents.as_array().map(Vec::as_slice).unwrap_or_default();
    let [function_name, params, ..] = items else {
        return Err(DecodeError::InvalidCallContents { found: items.len() });
    };
    let function_name = function_name
        .as_str()
        .ok_or(DecodeError::FunctionNameNotString)?;
    let params = params.as_array().ok_or(DecodeError::ParamsNotArray)?;

    let parameters = params
        .iter()
        .enumerate()
        .map(|(index, param)| decode_param(param).map_err(|e| e.at_parameter(index)))
        .collect::<Result<Vec<_>, _>>()?;

    let delay = decode_delay(&tx.delay);

    Ok(Some(ParsedCall {
        function_name: function_name.to_string(),
        parameters,
        dst: tx.dst.clone(),
        src: tx.src.clone(),
        value: tx.value.clone(),
        gas: tx.gas,
        gas_price: tx.gas_price.clone(),
        has_delay: delay.is_some(),
        delay_value: delay.map_or_else(|| NO_DELAY.to_string(), |d| d.to_string()),
    }))
}

/// Decode the time component of a `[time, blocks]` delay pair into seconds.
///
/// Returns `None` when there is no delay. Only the trailing
/// [`MAX_DELAY_HEX_DIGITS`] hex digits are read, so oversized words are
/// approximated rather than rejected.
pub fn decode_delay(delay: &[String]) -> Option<u64> {
    let [time, _blocks, ..] = delay else {
        return None;
    };
    if time == ZERO_WORD || time == "0x0" {
        return None;
    }

    let hex = time.strip_prefix("0x").unwrap_or(time);
    let hex = match hex.len().checked_sub(MAX_DELAY_HEX_DIGITS) {
        Some(start) if start > 0 => hex.get(start..)?,
        _ => hex,
    };

    u64::from_str_radix(hex, 16).ok().filter(|seconds| *seconds > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(value: Value) -> RawTransaction {
        serde_json::from_value(value).unwrap()
    }

    fn delay(time: &str) -> Vec<String> {
        vec![time.to_string(), "0x0".to_string()]
    }

    #[test]
    fn test_decode_sol_call() {
        let tx = tx(json!({
            "call": {"tag": "SolCall", "contents": ["deposit", [
                {"tag": "AbiUInt", "contents": [256, "1000"]},
                {"tag": "AbiBool", "contents": true}
            ]]},
            "delay": ["0x1E", "0x0"],
            "dst": "0x00000000000000000000000000000000DeaDBeef",
            "src": "0x0000000000000000000000000000000000010000",
            "gas": 12500000,
            "gasprice": "0x0",
            "value": "0x0"
        }));

        let call = decode_call(&tx).unwrap().unwrap();
        assert_eq!(call.function_name, "deposit");
        assert_eq!(call.parameters.len(), 2);
        assert_eq!(call.parameters[0].ty, "uint256");
        assert_eq!(call.src, "0x0000000000000000000000000000000000010000");
        assert_eq!(call.dst, "0x00000000000000000000000000000000DeaDBeef");
        assert_eq!(call.gas, 12500000);
        assert!(call.has_delay);
        assert_eq!(call.delay_value, "30");
    }

    #[test]
    fn test_gas_price_accepts_both_spellings() {
        let a = tx(json!({"call": {"tag": "NoCall"}, "gasprice": "0x1"}));
        let b = tx(json!({"call": {"tag": "NoCall"}, "gasPrice": "0x1"}));
        assert_eq!(a.gas_price, "0x1");
        assert_eq!(b.gas_price, "0x1");
    }

    #[test]
    fn test_non_sol_calls_are_skipped() {
        let no_call = tx(json!({"call": {"tag": "NoCall", "contents": []}, "delay": ["0x10", "0x1"]}));
        assert_eq!(decode_call(&no_call).unwrap(), None);

        let calldata = tx(json!({"call": {"tag": "SolCalldata", "contents": "0xabcdef"}}));
        assert_eq!(decode_call(&calldata).unwrap(), None);
    }

    #[test]
    fn test_short_call_contents_is_an_error() {
        let tx = tx(json!({"call": {"tag": "SolCall", "contents": ["deposit"]}}));
        assert_eq!(
            decode_call(&tx).unwrap_err(),
            DecodeError::InvalidCallContents { found: 1 }
        );

        let tx_missing = RawTransaction {
            call: TaggedCall {
                tag: "SolCall".to_string(),
                contents: Value::Null,
            },
            ..tx
        };
        assert!(decode_call(&tx_missing).is_err());
    }

    #[test]
    fn test_bad_function_name_and_params() {
        let tx1 = tx(json!({"call": {"tag": "SolCall", "contents": [7, []]}}));
        assert_eq!(
            decode_call(&tx1).unwrap_err(),
            DecodeError::FunctionNameNotString
        );

        let tx2 = tx(json!({"call": {"tag": "SolCall", "contents": ["f", {}]}}));
        assert_eq!(decode_call(&tx2).unwrap_err(), DecodeError::ParamsNotArray);
    }

    #[test]
    fn test_first_bad_parameter_is_reported() {
        let tx = tx(json!({"call": {"tag": "SolCall", "contents": ["f", [
            {"tag": "AbiBool", "contents": [true]},
            {"tag": "AbiFunction", "contents": ["0x"]}
        ]]}}));
        let err = decode_call(&tx).unwrap_err();
        assert!(matches!(err, DecodeError::Parameter { index: 1, .. }));
    }

    #[test]
    fn test_delay_decoding() {
        assert_eq!(decode_delay(&delay("0x1E")), Some(30));
        assert_eq!(decode_delay(&delay("1e")), Some(30));
        assert_eq!(decode_delay(&delay("0x0")), None);
        assert_eq!(decode_delay(&delay(ZERO_WORD)), None);
        assert_eq!(decode_delay(&delay("0x00")), None);
        assert_eq!(decode_delay(&delay("0xzz")), None);
        assert_eq!(decode_delay(&delay("0x")), None);
    }

    #[test]
    fn test_delay_needs_a_pair() {
        assert_eq!(decode_delay(&[]), None);
        assert_eq!(decode_delay(&["0x1E".to_string()]), None);
    }

    #[test]
    fn test_oversized_delay_keeps_trailing_digits() {
        // Only the last 8 hex digits (0x00015180 = 86400) are read.
        let word = "0x0000000000000000000000000000000000000000000000ff0000000000015180";
        assert_eq!(decode_delay(&delay(word)), Some(86400));
        assert_eq!(decode_delay(&delay("0x1ffffffff")), Some(0xffff_ffff));
        assert_eq!(decode_delay(&delay("0x100000000")), None);
    }

    #[test]
    fn test_call_without_delay_reports_zero() {
        let tx = tx(json!({"call": {"tag": "SolCall", "contents": ["pause", []]}, "delay": ["0x0", "0x0"]}));
        let call = decode_call(&tx).unwrap().unwrap();
        assert!(!call.has_delay);
        assert_eq!(call.delay_value, "0");
        assert!(call.parameters.is_empty());
    }
}
