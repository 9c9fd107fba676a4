//! Reproducer file discovery.
//!
//! Echidna writes one reproducer per failing property into its corpus
//! `reproducers/` directory, and every campaign rewrites the whole set. When
//! pointed at a directory we therefore take the newest batch: `.txt` files
//! grouped by modification minute, newest group first, sorted by name.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extension of Echidna reproducer files.
pub const REPRODUCER_EXTENSION: &str = ".txt";

/// A reproducer file and its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

impl FileInfo {
    fn from_metadata(path: PathBuf, metadata: &fs::Metadata) -> Result<Self> {
        let modified = metadata
            .modified()
            .with_context(|| format!("read modification time of {}", path.display()))?;
        Ok(Self {
            path,
            modified: modified.into(),
        })
    }

    /// Modification time truncated to the minute, as minutes since the epoch.
    pub fn minute(&self) -> i64 {
        self.modified.timestamp().div_euclid(60)
    }
}

/// Resolve an input path to the reproducer files to process.
///
/// A file is returned as-is; a directory yields its newest group of `.txt` files.
pub fn discover_replay_files(input: &Path) -> Result<Vec<FileInfo>> {
    let metadata =
        fs::metadata(input).map_err(|_| anyhow!("path does not exist: {}", input.display()))?;

    if !metadata.is_dir() {
        return Ok(vec![FileInfo::from_metadata(input.to_path_buf(), &metadata)?]);
    }

    newest_reproducer_group(input)
}

fn newest_reproducer_group(dir: &Path) -> Result<Vec<FileInfo>> {
    let files = collect_reproducer_files(dir)?;
    if files.is_empty() {
        bail!("no {} files found in directory: {}", REPRODUCER_EXTENSION, dir.display());
    }

    let mut groups = group_by_minute(files);
    let group_count = groups.len();
    let Some((minute, mut newest)) = groups.pop_last() else {
        bail!("no {} files found in directory: {}", REPRODUCER_EXTENSION, dir.display());
    };
    newest.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    info!(
        groups = group_count,
        files = newest.len(),
        created_at = %format_minute(minute),
        "selected newest reproducer group"
    );

    Ok(newest)
}

fn collect_reproducer_files(dir: &Path) -> Result<Vec<FileInfo>> {
    let entries = fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", dir.display()))?;
        let name = entry.file_name();
        if !name
            .to_string_lossy()
            .to_lowercase()
            .ends_with(REPRODUCER_EXTENSION)
        {
            continue;
        }
        // Entries that vanish or cannot be stat'ed are skipped.
        let Ok(metadata) = fs::metadata(entry.path()) else {
            continue;
        };
        if metadata.is_dir() {
            continue;
        }
        files.push(FileInfo::from_metadata(entry.path(), &metadata)?);
    }
    Ok(files)
}

/// Group files by modification minute. The last entry is the newest group.
pub fn group_by_minute(files: Vec<FileInfo>) -> BTreeMap<i64, Vec<FileInfo>> {
    let mut groups: BTreeMap<i64, Vec<FileInfo>> = BTreeMap::new();
    for file in files {
        groups.entry(file.minute()).or_default().push(file);
    }
    groups
}

fn format_minute(minute: i64) -> String {
    Local
        .timestamp_opt(minute * 60, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| minute.to_string())
}
