//! ABI argument decoding.
//!
//! Echidna encodes every call argument as `{"tag": "<AbiType>", "contents": ...}`.
//! The tag selects the shape of `contents`:
//!
//! | Tag | Contents | Solidity type |
//! |-----|----------|---------------|
//! | `AbiUInt` | `[bits, value]` | `uint<bits>` |
//! | `AbiInt` | `[bits, value]` | `int<bits>` |
//! | `AbiAddress` | `[hex]` | `address` |
//! | `AbiBool` | `bool` or `[bool]` | `bool` |
//! | `AbiBytes` | `[size, hex]` | `bytes<size>`, or `bytes` when size is 0 |
//! | `AbiString` | `[text]` | `string` |
//!
//! Integer values keep their original decimal digits; they are never routed
//! through a 64-bit float.

use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

use runes_types::ParsedParam;

use crate::error::DecodeError;

/// Widest `uint`/`int` Solidity allows.
const MAX_INT_BITS: u64 = 256;
/// Widest fixed-size `bytesN`.
const MAX_FIXED_BYTES: u64 = 32;
/// Exponent forms expanding past this many digits are not treated as integers.
const MAX_EXPANDED_DIGITS: i64 = 1024;

/// The ABI argument tags understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiTag {
    UInt,
    Int,
    Address,
    Bool,
    Bytes,
    String,
}

impl AbiTag {
    pub const ALL: [AbiTag; 6] = [
        AbiTag::UInt,
        AbiTag::Int,
        AbiTag::Address,
        AbiTag::Bool,
        AbiTag::Bytes,
        AbiTag::String,
    ];

    /// Tag string as it appears in reproducer JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            AbiTag::UInt => "AbiUInt",
            AbiTag::Int => "AbiInt",
            AbiTag::Address => "AbiAddress",
            AbiTag::Bool => "AbiBool",
            AbiTag::Bytes => "AbiBytes",
            AbiTag::String => "AbiString",
        }
    }

    /// Short name used in error messages.
    fn label(&self) -> &'static str {
        match self {
            AbiTag::UInt => "uint",
            AbiTag::Int => "int",
            AbiTag::Address => "address",
            AbiTag::Bool => "bool",
            AbiTag::Bytes => "bytes",
            AbiTag::String => "string",
        }
    }
}

impl FromStr for AbiTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbiTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DecodeError::UnsupportedAbiType(s.to_string()))
    }
}

impl fmt::Display for AbiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode one tagged argument into a Solidity type and literal.
pub fn decode_param(param: &Value) -> Result<ParsedParam, DecodeError> {
    let object = param.as_object().ok_or(DecodeError::ParamNotObject)?;
    let tag: AbiTag = object
        .get("tag")
        .and_then(Value::as_str)
        .ok_or(DecodeError::TagNotString)?
        .parse()?;
    let contents = object.get("contents").unwrap_or(&Value::Null);

    match tag {
        AbiTag::UInt | AbiTag::Int => {
            let [bits, value] = elements(tag, contents)?;
            let bits = unsigned(bits)
                .filter(|bits| (8..=MAX_INT_BITS).contains(bits) && bits % 8 == 0)
                .ok_or(DecodeError::Element {
                    tag: tag.label(),
                    field: "bit size",
                    expected: "a multiple of 8 from 8 to 256",
                })?;
            let value = integer_literal(tag, value)?;
            Ok(ParsedParam::new(format!("{}{}", tag.label(), bits), value))
        }
        AbiTag::Address => {
            let [address] = elements(tag, contents)?;
            let address = text(tag, "value", address)?;
            let value = if address.starts_with("0x") {
                address.to_string()
            } else {
                format!("0x{address}")
            };
            Ok(ParsedParam::new("address", value))
        }
        AbiTag::Bool => {
            let flag = match contents {
                Value::Bool(flag) => *flag,
                _ => {
                    let [flag] = elements(tag, contents)?;
                    flag.as_bool().ok_or(DecodeError::Element {
                        tag: tag.label(),
                        field: "value",
                        expected: "a boolean",
                    })?
                }
            };
            Ok(ParsedParam::new("bool", flag.to_string()))
        }
        AbiTag::Bytes => {
            let [size, bytes] = elements(tag, contents)?;
            let size = unsigned(size)
                .filter(|size| *size <= MAX_FIXED_BYTES)
                .ok_or(DecodeError::Element {
                    tag: tag.label(),
                    field: "size",
                    expected: "a number from 0 to 32",
                })?;
            let bytes = text(tag, "value", bytes)?;
            let ty = if size > 0 {
                format!("bytes{size}")
            } else {
                "bytes".to_string()
            };
            Ok(ParsedParam::new(ty, bytes))
        }
        AbiTag::String => {
            let [raw] = elements(tag, contents)?;
            // Embedded quotes are not escaped.
            let raw = text(tag, "value", raw)?;
            Ok(ParsedParam::new("string", format!("\"{raw}\"")))
        }
    }
}

/// Borrow `contents` as exactly `N` array elements.
fn elements<const N: usize>(tag: AbiTag, contents: &Value) -> Result<&[Value; N], DecodeError> {
    let items = contents.as_array().ok_or(DecodeError::ContentsNotArray {
        tag: tag.as_str(),
    })?;
    <&[Value; N]>::try_from(items.as_slice()).map_err(|_| DecodeError::Arity {
        tag: tag.label(),
        expected: N,
        found: items.len(),
    })
}

fn text<'a>(tag: AbiTag, field: &'static str, value: &'a Value) -> Result<&'a str, DecodeError> {
    value.as_str().ok_or(DecodeError::Element {
        tag: tag.label(),
        field,
        expected: "a string",
    })
}

/// A non-negative whole number, accepting `256` as well as `256.0` or `2.56e2`.
fn unsigned(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64()
        .or_else(|| whole_number_text(&n.to_string())?.parse().ok())
}

fn integer_literal(tag: AbiTag, value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_literal(n)),
        _ => Err(DecodeError::Element {
            tag: tag.label(),
            field: "value",
            expected: "a number or string",
        }),
    }
}

/// Render a JSON number as an integer literal with no fractional digits.
///
/// Plain integer text is passed through verbatim so values wider than 64 bits
/// survive unchanged. Exponent and fraction forms of whole numbers (`1e23`,
/// `1.5E3`) are expanded digit by digit; only a real fraction is rounded.
pub fn number_literal(n: &Number) -> String {
    let raw = n.to_string();
    let digits = raw.strip_prefix('-').unwrap_or(&raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw;
    }
    if let Some(whole) = whole_number_text(&raw) {
        return whole;
    }
    match n.as_f64() {
        Some(f) => format!("{f:.0}"),
        None => raw,
    }
}

/// Exact integer text of a JSON number literal, or `None` if it has a
/// non-zero fractional part (or is not a number literal at all).
fn whole_number_text(raw: &str) -> Option<String> {
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let point = (int_part.len() as i64).checked_add(exponent)?;
    if point > MAX_EXPANDED_DIGITS {
        return None;
    }
    let whole = if point <= 0 {
        if digits.bytes().any(|b| b != b'0') {
            return None;
        }
        String::new()
    } else if point as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        if fraction.bytes().any(|b| b != b'0') {
            return None;
        }
        whole.to_string()
    };

    let whole = whole.trim_start_matches('0');
    Some(match (whole.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{whole}"),
        (false, false) => whole.to_string(),
    })
}
