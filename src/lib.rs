//! runes: Echidna reproducers to Foundry tests
//!
//! Turns the reproducer files Echidna writes for failing properties into a
//! Foundry test contract that replays each call sequence:
//!
//! - **Discovery**: pick the newest batch of reproducers ([`discovery`])
//! - **Decoding**: parse each file into ordered calls ([`replay`], backed by `runes_core`)
//! - **Generation**: sequence the calls and render a template ([`generator`], [`templates`])
//!
//! ```no_run
//! use std::path::Path;
//! use runes::{discovery, generator, replay, report::ProcessingReport, templates::TemplateRegistry};
//!
//! # fn main() -> anyhow::Result<()> {
//! let files = discovery::discover_replay_files(Path::new("echidna/reproducers"))?;
//! let paths: Vec<_> = files.into_iter().map(|f| f.path).collect();
//!
//! let mut report = ProcessingReport::new();
//! let mut groups = replay::process_files(&paths, &mut report)?;
//! replay::assign_test_names(&mut groups);
//!
//! let mut registry = TemplateRegistry::new();
//! registry.load()?;
//! generator::generate_foundry_test(
//!     &generator::GenerateConfig {
//!         contract_name: "ReplayTest".to_string(),
//!         output_file: "test/replay.t.sol".into(),
//!         replay_groups: groups,
//!         template: None,
//!     },
//!     &mut registry,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod generator;
pub mod output;
pub mod replay;
pub mod report;
pub mod templates;
pub mod utils;

pub use runes_core::{Actor, Instruction, ParsedCall, ParsedParam, ReplayGroup};
