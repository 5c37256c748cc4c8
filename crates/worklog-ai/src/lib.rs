// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! worklog-ai: Best-effort AI day summaries for worklog
//!
//! This library crate wraps an external generative-AI text endpoint
//! behind a narrow trait so the rest of worklog stays pure and testable
//! without network access. Summarization is best-effort enrichment:
//! every failure mode degrades to a fixed placeholder per row, and no
//! error ever reaches the caller of [`summarize_rows`].

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use worklog_ai::{HttpSummaryClient, summarize_rows};
//! use worklog_report::DailyRow;
//!
//! # async fn run() {
//! let client = HttpSummaryClient::new(
//!     "https://api.example.com/v1/chat/completions",
//!     "secret-key",
//!     "small-text-model",
//! )
//! .expect("build client");
//!
//! let rows = vec![DailyRow::new("2024-01-02", "[api] add caching")];
//! let summaries = summarize_rows(&client, &rows).await;
//! # }
//! ```

pub mod client;
pub mod error;
pub mod summarize;

pub use client::{HttpSummaryClient, SummaryClient};
pub use error::AiError;
pub use summarize::{
    PLACEHOLDER_SUMMARY, SEGMENT_SEPARATOR, compose_prompt, placeholder_summaries, summarize_rows,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{HttpSummaryClient, SummaryClient};
    pub use crate::error::AiError;
    pub use crate::summarize::summarize_rows;
}
