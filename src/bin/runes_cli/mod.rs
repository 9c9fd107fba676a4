//! CLI subcommand implementations for runes

pub mod generate;
pub mod templates;
