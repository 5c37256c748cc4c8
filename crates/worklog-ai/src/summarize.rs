// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Batch summarization with placeholder fallback
//!
//! One composed prompt goes out per batch of rows; the reply is split
//! on a fixed delimiter into per-day segments. Segments that lead with
//! a known `date:` tag are aligned by that key; the rest fall back to
//! positional order. Rows left unmatched, and every row when the call
//! fails outright, get [`PLACEHOLDER_SUMMARY`].

use std::collections::BTreeMap;

use tracing::warn;
use worklog_report::DailyRow;

use crate::client::SummaryClient;

/// Summary used for any row the endpoint could not cover
pub const PLACEHOLDER_SUMMARY: &str = "Development work (summary unavailable)";

/// Delimiter between per-day segments in the endpoint's reply
pub const SEGMENT_SEPARATOR: &str = "\n---\n";

/// Compose the single batch prompt listing `date: summary` pairs
#[must_use]
pub fn compose_prompt(rows: &[DailyRow]) -> String {
    let mut prompt = String::from(
        "Rewrite each of the following work days as one short natural-language summary.\n\
         Return one summary per day, in the same order, separated by a line containing only \"---\".\n\
         Start each summary with its date followed by a colon.\n\n",
    );
    for row in rows {
        prompt.push_str(&row.date);
        prompt.push_str(": ");
        prompt.push_str(&row.summary);
        prompt.push('\n');
    }
    prompt
}

/// Placeholder summaries for every row, keyed by date
#[must_use]
pub fn placeholder_summaries(rows: &[DailyRow]) -> BTreeMap<String, String> {
    rows.iter()
        .map(|row| (row.date.clone(), PLACEHOLDER_SUMMARY.to_string()))
        .collect()
}

/// Summarize a batch of rows, degrading to placeholders on any failure
///
/// Issues at most one call to `client`. The returned map always has one
/// entry per distinct row date; it never reports an error.
pub async fn summarize_rows(
    client: &dyn SummaryClient,
    rows: &[DailyRow],
) -> BTreeMap<String, String> {
    let mut summaries = placeholder_summaries(rows);
    if rows.is_empty() {
        return summaries;
    }

    let prompt = compose_prompt(rows);
    let body = match client.complete(&prompt).await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "summarization unavailable, keeping placeholders");
            return summaries;
        }
    };

    apply_segments(&mut summaries, rows, &body);
    summaries
}

/// Split a reply body into trimmed, non-empty segments
fn split_segments(body: &str) -> Vec<&str> {
    body.split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Overlay reply segments onto the placeholder map
///
/// Date-tagged segments win over positional ones; positional segments
/// fill the remaining rows in row order.
fn apply_segments(summaries: &mut BTreeMap<String, String>, rows: &[DailyRow], body: &str) {
    let mut matched: Vec<&str> = Vec::new();
    let mut positional: Vec<&str> = Vec::new();

    for segment in split_segments(body) {
        let tagged = segment.split_once(':').and_then(|(prefix, rest)| {
            let date = prefix.trim();
            rows.iter()
                .any(|row| row.date == date)
                .then(|| (date, rest.trim()))
        });

        match tagged {
            Some((date, text)) if !matched.contains(&date) && !text.is_empty() => {
                summaries.insert(date.to_string(), text.to_string());
                matched.push(date);
            }
            _ => positional.push(segment),
        }
    }

    let mut leftovers = positional.into_iter();
    for row in rows {
        if matched.contains(&row.date.as_str()) {
            continue;
        }
        match leftovers.next() {
            Some(segment) => {
                summaries.insert(row.date.clone(), segment.to_string());
            }
            None => break,
        }
    }
}
