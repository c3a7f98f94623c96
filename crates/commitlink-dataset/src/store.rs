//! CSV-backed tabular storage for the pipeline's artifacts.
//!
//! Three tables live in the output directory: `issues.csv`,
//! `commits.csv`, and the final `final_dataset.csv`. All are UTF-8,
//! comma-separated, with a header row. Writes overwrite any prior run's
//! output; reads fail on a table whose header is missing an expected
//! column.

use std::path::{Path, PathBuf};

use commitlink_core::{CommitRecord, CorrelatedRecord, IssueRecord, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// File name of the issues table.
pub const ISSUES_FILE: &str = "issues.csv";
/// File name of the commits table.
pub const COMMITS_FILE: &str = "commits.csv";
/// File name of the final joined dataset.
pub const DATASET_FILE: &str = "final_dataset.csv";

/// Write the issues table, creating `dir` if absent.
///
/// # Errors
///
/// Returns [`commitlink_core::CommitlinkError::Io`] or
/// [`commitlink_core::CommitlinkError::Csv`] on write failure.
pub fn write_issues(dir: &Path, issues: &[IssueRecord]) -> Result<PathBuf> {
    write_table(dir, ISSUES_FILE, issues)
}

/// Read the issues table back in stored order.
pub fn read_issues(dir: &Path) -> Result<Vec<IssueRecord>> {
    read_table(&dir.join(ISSUES_FILE))
}

/// Write the commits table, creating `dir` if absent.
pub fn write_commits(dir: &Path, commits: &[CommitRecord]) -> Result<PathBuf> {
    write_table(dir, COMMITS_FILE, commits)
}

/// Read the commits table back in stored order.
pub fn read_commits(dir: &Path) -> Result<Vec<CommitRecord>> {
    read_table(&dir.join(COMMITS_FILE))
}

/// Write the final joined dataset, creating `dir` if absent.
pub fn write_dataset(dir: &Path, records: &[CorrelatedRecord]) -> Result<PathBuf> {
    write_table(dir, DATASET_FILE, records)
}

/// Read the final dataset back in stored order.
pub fn read_dataset(dir: &Path) -> Result<Vec<CorrelatedRecord>> {
    read_table(&dir.join(DATASET_FILE))
}

fn write_table<T: Serialize>(dir: &Path, name: &str, rows: &[T]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(path)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
