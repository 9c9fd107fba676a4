use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

// =============================================================================
// Naming Utilities
// =============================================================================

/// Convert `snake_case`, `kebab-case` or spaced words to PascalCase.
///
/// Every word is capitalised and the rest of it lower-cased, so
/// `"my_replay-suite"` becomes `"MyReplaySuite"`.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Last path component for log lines and summaries.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Output Utilities
// =============================================================================

/// Write `text` to `path`, creating parent directories as needed.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Pretty-print `value` as JSON on stdout. A closed pipe is not an error.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    write_json(stdout.lock(), value)
}

fn write_json<W: Write, T: Serialize>(out: W, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(out);
    if let Err(e) = serde_json::to_writer_pretty(&mut writer, value) {
        if e.io_error_kind() == Some(io::ErrorKind::BrokenPipe) {
            return Ok(());
        }
        return Err(e).context("serialize JSON");
    }
    let finished = writer.write_all(b"\n").and_then(|()| writer.flush());
    match finished {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("write JSON to stdout"),
    }
}
