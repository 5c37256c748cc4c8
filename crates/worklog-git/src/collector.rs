// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Log collection across repository sources
//!
//! This module runs one `git log` query per configured source path and
//! concatenates the parsed records. Collection is best-effort: a source
//! that cannot be queried contributes zero records and a failure entry,
//! never a hard error.

use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::commit::CommitRecord;
use crate::error::GitError;

/// Date boundaries for a log query
///
/// Both boundaries are `%Y-%m-%d` strings passed through to git
/// verbatim. `since <= until` is recommended but not enforced; an
/// inverted window simply yields zero matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    /// Inclusive lower date boundary
    pub since: String,
    /// Inclusive upper date boundary
    pub until: String,
}

impl QueryWindow {
    /// Create a window from two date strings
    #[must_use]
    pub fn new(since: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            since: since.into(),
            until: until.into(),
        }
    }

    /// Check whether the window is inverted (`since` after `until`)
    ///
    /// Lexical comparison, which matches chronological order for
    /// zero-padded ISO-like dates.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.since > self.until
    }
}

/// A source path that could not be queried
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    /// The configured repository path
    pub path: String,
    /// Human-readable reason the path was skipped
    pub reason: String,
}

/// Best-effort result of a collect call
///
/// Carries both the successfully parsed records and the per-source
/// failure reasons, so callers can surface diagnostics without changing
/// the partial-results-by-default behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Parsed records, in source-list order then log-output order
    pub records: Vec<CommitRecord>,
    /// Sources that contributed zero records, with reasons
    pub failures: Vec<SourceFailure>,
}

impl Collection {
    /// Check whether every configured source was queried successfully
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Derive a project label from a source path
///
/// The label is the final path segment; when no segment can be derived
/// (e.g. a bare root path), the whole path is used instead.
#[must_use]
pub fn project_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Collect commits by one author across a list of repository sources
///
/// For each source, runs `git log --all` bounded by `window` and
/// filtered to `author`, with the `%ad | %s` short-date line format.
/// Records are concatenated in source-list order; within a source the
/// log's own (reverse-chronological) order is kept as-is.
///
/// Never fails: an inaccessible path, a non-repository, or a failing
/// query is recorded in [`Collection::failures`] and skipped.
#[must_use]
pub fn collect_commits(sources: &[impl AsRef<Path>], window: &QueryWindow, author: &str) -> Collection {
    let mut collection = Collection::default();

    for source in sources {
        let source = source.as_ref();
        let project = project_label(source);

        match run_log_query(source, window, author) {
            Ok(stdout) => {
                let before = collection.records.len();
                collection.records.extend(
                    stdout
                        .lines()
                        .filter(|line| !line.is_empty())
                        .map(|line| CommitRecord::parse_line(line, &project)),
                );
                debug!(
                    path = %source.display(),
                    records = collection.records.len() - before,
                    "collected source"
                );
            }
            Err(err) => {
                warn!(path = %source.display(), error = %err, "skipping source");
                collection.failures.push(SourceFailure {
                    path: source.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    collection
}

/// Run one log query in a source directory and return raw stdout
fn run_log_query(path: &Path, window: &QueryWindow, author: &str) -> Result<String, GitError> {
    let output = Command::new("git")
        .arg("log")
        .arg("--all")
        .arg(format!("--since={}", window.since))
        .arg(format!("--until={}", window.until))
        .arg(format!("--author={author}"))
        .arg("--pretty=format:%ad | %s")
        .arg("--date=short")
        .current_dir(path)
        .output()
        .map_err(|source| GitError::Spawn {
            path: path.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            path: path.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8Output {
        path: path.display().to_string(),
    })
}
