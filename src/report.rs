//! Per-file processing report.
//!
//! [`ProcessingReport`] is the logging sink for a batch run: it records each
//! file's outcome, emits a `tracing` event for it, and renders the final
//! summary (via `Display`, or as JSON via `Serialize`).

use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::utils::display_name;

const RULE_WIDTH: usize = 50;

/// A file that could not be turned into a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub file_name: String,
    pub error: String,
}

/// A file that produced a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTest {
    pub file_name: String,
    pub test_name: String,
    pub last_function: Option<String>,
    pub call_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingReport {
    pub total_files: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub generated_tests: Vec<GeneratedTest>,
    pub failed_files: Vec<FailedFile>,
}

impl ProcessingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_started(&mut self, path: &Path) {
        self.total_files += 1;
        info!(file = %display_name(path), "processing reproducer");
    }

    pub fn file_succeeded(
        &mut self,
        path: &Path,
        test_name: &str,
        last_function: Option<&str>,
        call_count: usize,
    ) {
        self.success_count += 1;
        let file_name = display_name(path);
        info!(
            file = %file_name,
            test = test_name,
            last = last_function.unwrap_or("-"),
            calls = call_count,
            "✓ decoded reproducer"
        );
        self.generated_tests.push(GeneratedTest {
            file_name,
            test_name: test_name.to_string(),
            last_function: last_function.map(str::to_string),
            call_count,
        });
    }

    pub fn file_failed(&mut self, path: &Path, error: &dyn fmt::Display) {
        self.failure_count += 1;
        let file_name = display_name(path);
        let error = error.to_string();
        warn!(file = %file_name, %error, "✗ skipping reproducer");
        self.failed_files.push(FailedFile { file_name, error });
    }

    /// Percentage of files that produced a test; 0 when nothing was processed.
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.total_files as f64 * 100.0
    }
}

impl fmt::Display for ProcessingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "PROCESSING SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "Total files: {} | Success: {} | Failed: {}",
            self.total_files, self.success_count, self.failure_count
        )?;

        if !self.generated_tests.is_empty() {
            writeln!(f)?;
            writeln!(f, "Generated tests:")?;
            for (i, test) in self.generated_tests.iter().enumerate() {
                match &test.last_function {
                    Some(last) => writeln!(
                        f,
                        "  {}. {} (last call: {}, {} calls)",
                        i + 1,
                        test.test_name,
                        last,
                        test.call_count
                    )?,
                    None => writeln!(
                        f,
                        "  {}. {} ({} calls)",
                        i + 1,
                        test.test_name,
                        test.call_count
                    )?,
                }
            }
        }

        if !self.failed_files.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed files:")?;
            for (i, failed) in self.failed_files.iter().enumerate() {
                writeln!(f, "  {}. {}: {}", i + 1, failed.file_name, failed.error)?;
            }
        }

        if self.total_files > 0 {
            writeln!(f)?;
            writeln!(f, "{rule}")?;
            writeln!(f, "Success rate: {:.1}%", self.success_rate())?;
        }

        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_rate() {
        let mut report = ProcessingReport::new();
        assert_eq!(report.success_rate(), 0.0);

        report.file_started(Path::new("dir/a.txt"));
        report.file_succeeded(Path::new("dir/a.txt"), "test_replay_deposit", Some("deposit"), 2);
        report.file_started(Path::new("dir/b.txt"));
        report.file_failed(Path::new("dir/b.txt"), &"no valid calls found");
        report.file_started(Path::new("dir/c.txt"));
        report.file_failed(Path::new("dir/c.txt"), &"failed to parse JSON");

        assert_eq!(report.total_files, 3);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.failure_count, 2);
        assert!((report.success_rate() - 33.333).abs() < 0.01);
        assert_eq!(report.failed_files[0].file_name, "b.txt");
        assert_eq!(report.generated_tests[0].file_name, "a.txt");
    }

    #[test]
    fn test_summary_text() {
        let mut report = ProcessingReport::new();
        report.file_started(Path::new("a.txt"));
        report.file_succeeded(Path::new("a.txt"), "test_replay_deposit", Some("deposit"), 1);
        report.file_started(Path::new("b.txt"));
        report.file_failed(Path::new("b.txt"), &"no valid calls found");

        let text = report.to_string();
        assert!(text.contains("PROCESSING SUMMARY"));
        assert!(text.contains("Total files: 2 | Success: 1 | Failed: 1"));
        assert!(text.contains("1. test_replay_deposit (last call: deposit, 1 calls)"));
        assert!(text.contains("1. b.txt: no valid calls found"));
        assert!(text.contains("Success rate: 50.0%"));
    }

    #[test]
    fn test_empty_summary_has_no_rate() {
        let text = ProcessingReport::new().to_string();
        assert!(text.contains("Total files: 0"));
        assert!(!text.contains("Success rate"));
    }
}
