//! Output path and contract name resolution.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::to_pascal_case;

/// File name prefix for auto-numbered outputs (`ReplayTest_<n>.t.sol`).
pub const DEFAULT_PREFIX: &str = "ReplayTest";
pub const DEFAULT_SUFFIX: &str = ".t.sol";
/// Highest counter tried before falling back to a timestamped name.
pub const MAX_FILE_COUNT: u32 = 9999;

/// Contract name used when none can be derived from the output file.
pub const DEFAULT_CONTRACT_NAME: &str = DEFAULT_PREFIX;

/// Output used when no path is given.
pub const SINGLE_OUTPUT: &str = "replay.t.sol";
pub const GROUPED_OUTPUT: &str = "grouped_replays.t.sol";

/// Resolve the requested output into a concrete test file path.
///
/// - An existing directory, or a path ending in `/` or `\` (created if needed),
///   gets the next free `ReplayTest_<n>.t.sol` inside it.
/// - An empty path picks [`GROUPED_OUTPUT`] or [`SINGLE_OUTPUT`].
/// - Anything else is used as given.
pub fn resolve_output_path(base: &str, is_multiple: bool) -> PathBuf {
    let base_path = Path::new(base);
    if !base.is_empty() && base_path.is_dir() {
        return next_free_path(base_path);
    }

    if base.ends_with('/') || base.ends_with('\\') {
        let dir = base.trim_end_matches(['/', '\\']);
        if fs::create_dir_all(dir).is_ok() {
            return next_free_path(Path::new(dir));
        }
    }

    if base.is_empty() {
        return PathBuf::from(if is_multiple {
            GROUPED_OUTPUT
        } else {
            SINGLE_OUTPUT
        });
    }

    base_path.to_path_buf()
}

/// Derive the contract name from an output file.
///
/// `ReplayTest_3.t.sol` becomes `ReplayTest3`; any other name yields `fallback`.
pub fn contract_name_for(output: &Path, fallback: &str) -> String {
    let stem = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match stem.rfind('.') {
        Some(dot) => &stem[..dot],
        None => stem.as_str(),
    };
    let stem = stem.strip_suffix(".t").unwrap_or(stem);

    if stem.contains(&format!("{DEFAULT_PREFIX}_")) {
        stem.replace('_', "")
    } else {
        fallback.to_string()
    }
}

/// Normalize a user supplied contract name.
///
/// Names containing `_`, `-` or spaces are converted to PascalCase
/// (`my_replays` -> `MyReplays`); anything else is kept as typed.
pub fn normalize_contract_name(name: &str) -> String {
    let name = name.trim();
    if name.contains(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        to_pascal_case(name)
    } else {
        name.to_string()
    }
}

/// Whether `name` can be used as a Solidity contract identifier.
pub fn is_valid_contract_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn next_free_path(dir: &Path) -> PathBuf {
    for counter in 1..=MAX_FILE_COUNT {
        let candidate = dir.join(format!("{DEFAULT_PREFIX}_{counter}{DEFAULT_SUFFIX}"));
        if !candidate.exists() {
            return candidate;
        }
    }

    let stamp = Local::now().format("%Y%m%d%H%M%S");
    dir.join(format!("{DEFAULT_PREFIX}_{stamp}{DEFAULT_SUFFIX}"))
}
