//! Batch processing of reproducer files into replay groups.

use anyhow::{bail, Result};
use rayon::prelude::*;
use std::path::Path;

use runes_core::{decode_reproducer_file, ParsedCall, ReplayGroup, ReproducerError};

use crate::report::ProcessingReport;

const TEST_PREFIX: &str = "test_replay_";
const DEFAULT_TEST_SUFFIX: &str = "default";

/// Decode every file into a [`ReplayGroup`], recording each outcome in `report`.
///
/// Files are decoded in parallel but consumed in input order, so the returned
/// groups follow `paths`. A file that fails to decode, or decodes to no calls,
/// is skipped. The batch fails only when no file succeeds.
///
/// Groups come back named for a single-group run; call [`assign_test_names`]
/// once the final set of groups is known.
pub fn process_files<P>(paths: &[P], report: &mut ProcessingReport) -> Result<Vec<ReplayGroup>>
where
    P: AsRef<Path> + Sync,
{
    let decoded: Vec<Result<Vec<ParsedCall>, ReproducerError>> = paths
        .par_iter()
        .map(|path| decode_file(path.as_ref()))
        .collect();

    let mut groups = Vec::with_capacity(paths.len());
    for (path, outcome) in paths.iter().zip(decoded) {
        let path = path.as_ref();
        report.file_started(path);
        match outcome {
            Ok(calls) => {
                let (test_name, last_function) = test_function_name(None, &calls);
                report.file_succeeded(path, &test_name, last_function, calls.len());
                let mut group = ReplayGroup::new(path, calls);
                group.test_name = test_name;
                groups.push(group);
            }
            Err(err) => report.file_failed(path, &err),
        }
    }

    if groups.is_empty() {
        bail!(
            "no valid replay files found - all {} files failed to process",
            report.failure_count
        );
    }

    Ok(groups)
}

fn decode_file(path: &Path) -> Result<Vec<ParsedCall>, ReproducerError> {
    let calls = decode_reproducer_file(path)?;
    if calls.is_empty() {
        return Err(ReproducerError::EmptyResult);
    }
    Ok(calls)
}

/// Test function name for a call list, plus the function it was named after.
///
/// `test_replay_<last>` or, with a number, `test_replay_<n>_<last>`. The last
/// call with a non-empty function name is used; `default` stands in when
/// there is none.
pub fn test_function_name(number: Option<usize>, calls: &[ParsedCall]) -> (String, Option<&str>) {
    let last_function = calls
        .iter()
        .rev()
        .map(|c| c.function_name.as_str())
        .find(|name| !name.is_empty());

    let suffix = last_function.unwrap_or(DEFAULT_TEST_SUFFIX);
    let name = match number {
        Some(n) => format!("{TEST_PREFIX}{n}_{suffix}"),
        None => format!("{TEST_PREFIX}{suffix}"),
    };
    (name, last_function)
}

/// Name every group's test. Several groups are numbered `1..=n` in order.
pub fn assign_test_names(groups: &mut [ReplayGroup]) {
    let numbered = groups.len() > 1;
    for (i, group) in groups.iter_mut().enumerate() {
        let number = numbered.then_some(i + 1);
        let (name, _) = test_function_name(number, &group.calls);
        group.test_name = name;
    }
}
