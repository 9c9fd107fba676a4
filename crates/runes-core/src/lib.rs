//! Echidna reproducer decoding for runes.
//!
//! The pipeline runs in two steps:
//!
//! 1. [`decode_reproducer`] turns a reproducer document (a JSON array of
//!    transactions) into ordered [`ParsedCall`]s. Each argument is decoded by
//!    [`abi::decode_param`] and each transaction by [`call::decode_call`].
//! 2. [`sequence`] turns those calls into the [`Instruction`] stream that a test
//!    template renders.
//!
//! Call order is execution order; nothing in this crate reorders calls.

pub mod abi;
pub mod call;
pub mod error;
pub mod reproducer;
pub mod sequencer;

pub use abi::{decode_param, AbiTag};
pub use call::{decode_call, decode_delay, RawTransaction, TaggedCall};
pub use error::{DecodeError, ReproducerError};
pub use reproducer::{decode_reproducer, decode_reproducer_file, decode_transactions};
pub use sequencer::{actor_for_address, sequence, CallSequencer};

pub use runes_types::{Actor, Instruction, ParsedCall, ParsedParam, ReplayGroup};
