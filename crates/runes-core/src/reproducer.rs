//! Reproducer document decoding.

use std::fs;
use std::path::Path;

use runes_types::ParsedCall;
use tracing::debug;

use crate::call::{decode_call, RawTransaction};
use crate::error::ReproducerError;

/// A reproducer document: the transactions Echidna replays, in order.
pub type Reproducer = Vec<RawTransaction>;

/// Decode a reproducer document into its function calls, in document order.
///
/// Transactions that do not call a function are dropped. The first transaction
/// that fails to decode fails the whole document.
pub fn decode_reproducer(raw: &[u8]) -> Result<Vec<ParsedCall>, ReproducerError> {
    let reproducer: Reproducer = serde_json::from_slice(raw)?;
    decode_transactions(&reproducer)
}

/// Decode already-parsed transactions.
pub fn decode_transactions(
    transactions: &[RawTransaction],
) -> Result<Vec<ParsedCall>, ReproducerError> {
    let mut calls = Vec::with_capacity(transactions.len());
    for (index, tx) in transactions.iter().enumerate() {
        match decode_call(tx).map_err(|source| ReproducerError::Decode { index, source })? {
            Some(call) => calls.push(call),
            None => debug!(index, tag = %tx.call.tag, "skipping non-call transaction"),
        }
    }
    Ok(calls)
}

/// Read and decode a reproducer file.
pub fn decode_reproducer_file(path: &Path) -> Result<Vec<ParsedCall>, ReproducerError> {
    let raw = fs::read(path).map_err(|source| ReproducerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_reproducer(&raw)
}
