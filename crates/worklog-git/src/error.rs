// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Error types for worklog-git

use thiserror::Error;

/// Per-source failures during log collection
///
/// These never escape [`crate::collect_commits`]; they are recorded as
/// [`crate::SourceFailure`] entries so the collector can always return
/// a partial result.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git process could not be launched for a source path
    #[error("Failed to run git in {path}: {source}")]
    Spawn {
        /// The source path the query was issued against
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The log query exited with a non-zero status
    #[error("git log failed in {path}: {stderr}")]
    CommandFailed {
        /// The source path the query was issued against
        path: String,
        /// Trimmed stderr from the git process
        stderr: String,
    },

    /// The log query produced output that is not valid UTF-8
    #[error("git log produced non-UTF-8 output in {path}")]
    NonUtf8Output {
        /// The source path the query was issued against
        path: String,
    },
}
