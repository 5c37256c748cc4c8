// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Error types for worklog-ai

use thiserror::Error;

/// Failures while talking to the summarization endpoint
///
/// These are consumed inside [`crate::summarize_rows`], which converts
/// them into placeholder summaries; they only surface to callers that
/// drive a [`crate::SummaryClient`] directly.
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Summarization endpoint returned status {status}")]
    Status {
        /// The HTTP status code
        status: u16,
    },

    /// The response body did not contain the expected text content
    #[error("Summarization response had no text content")]
    MalformedResponse,
}
