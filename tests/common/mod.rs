#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: Reproducer documents and helpers that write them to disk
//! - `assertions`: Assertion helpers with descriptive failure messages

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_contains_all, assert_error_contains, assert_ok};
pub use fixtures::{
    reproducer_dir, write_reproducer, BROKEN_REPRODUCER, DEPOSIT_REPRODUCER, MULTI_ACTOR_REPRODUCER,
    WITHDRAW_REPRODUCER,
};
