//! Error types for reproducer decoding.
//!
//! Failures fall into three kinds:
//!
//! | Kind | Variant | Meaning |
//! |------|---------|---------|
//! | Parse | [`ReproducerError::Parse`] | Bytes are not JSON or not an array of transactions |
//! | Decode | [`ReproducerError::Decode`] | A transaction or argument does not match its tag |
//! | EmptyResult | [`ReproducerError::EmptyResult`] | A file decoded to zero usable calls |
//!
//! A decode failure anywhere in a document fails the whole document; no partial
//! call list is ever returned.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned when decoding a reproducer document or file.
#[derive(Debug, Error)]
pub enum ReproducerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse call {index}: {source}")]
    Decode {
        /// Position of the transaction in the document.
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("no valid calls found")]
    EmptyResult,
}

/// A transaction or argument that does not match the shape its tag requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid call contents: expected [function, params], got {found} element(s)")]
    InvalidCallContents { found: usize },

    #[error("function name is not a string")]
    FunctionNameNotString,

    #[error("parameters are not an array")]
    ParamsNotArray,

    #[error("failed to parse parameter {index}: {source}")]
    Parameter {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("parameter is not an object")]
    ParamNotObject,

    #[error("parameter tag is not a string")]
    TagNotString,

    #[error("unsupported ABI type: {0}")]
    UnsupportedAbiType(String),

    #[error("parameter contents is not an array for type {tag}")]
    ContentsNotArray { tag: &'static str },

    #[error("{tag} parameter needs {expected} element(s), got {found}")]
    Arity {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{tag} {field} is not {expected}")]
    Element {
        tag: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn at_parameter(self, index: usize) -> Self {
        DecodeError::Parameter {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages_are_attributable() {
        let err = ReproducerError::Decode {
            index: 3,
            source: DecodeError::UnsupportedAbiType("AbiTuple".to_string()).at_parameter(1),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse call 3: failed to parse parameter 1: unsupported ABI type: AbiTuple"
        );
        assert!(matches!(err, ReproducerError::Decode { .. }));
    }

    #[test]
    fn test_element_error_message() {
        let err = DecodeError::Element {
            tag: "uint",
            field: "bit size",
            expected: "a number",
        };
        assert_eq!(err.to_string(), "uint bit size is not a number");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ReproducerError::from(serde_err);
        assert!(matches!(err, ReproducerError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse JSON"));
    }
}
