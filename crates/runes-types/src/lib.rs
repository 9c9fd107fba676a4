//! Shared types for the runes workspace.
//!
//! This crate holds the normalized call model produced by the reproducer decoder
//! and the instruction stream consumed by the test generator, so the decoding
//! pipeline and the rendering side agree on one representation.
//!
//! ## Call Types
//!
//! The [`call`] module contains the decoded transaction types:
//! - [`ParsedParam`](call::ParsedParam) - One ABI argument as a Solidity type and literal
//! - [`ParsedCall`](call::ParsedCall) - One normalized contract call
//! - [`ReplayGroup`](call::ReplayGroup) - All calls decoded from one reproducer file
//!
//! ## Instruction Types
//!
//! The [`instruction`] module contains the renderer-facing stream:
//! - [`Actor`](instruction::Actor) - Symbolic identity of a call sender
//! - [`Instruction`](instruction::Instruction) - Actor switch, delay or invocation

pub mod call;
pub mod instruction;

// Re-export commonly used types at crate root
pub use call::{ParsedCall, ParsedParam, ReplayGroup};
pub use instruction::{Actor, Instruction};

/// Delay value used when a call carries no time warp.
pub const NO_DELAY: &str = "0";
