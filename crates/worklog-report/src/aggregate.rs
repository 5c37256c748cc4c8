// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Grouping of commit records into daily rows
//!
//! Pure functions of their input: no I/O, deterministic, idempotent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use worklog_git::CommitRecord;

use crate::row::DailyRow;

/// Aggregated output: the raw log plus date-sorted timesheet rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Every record rendered as `<date> | [<project>] <message>`,
    /// newline-joined, in original collection order
    pub raw: String,
    /// One row per distinct date, ascending by date string
    pub rows: Vec<DailyRow>,
}

impl Report {
    /// Check whether the report contains any rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dates covered by the report, ascending
    #[must_use]
    pub fn dates(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.date.as_str()).collect()
    }
}

/// Group commit records into a [`Report`]
///
/// Records are bucketed by byte-identical date strings. Within a day,
/// entries keep the collector's output order; across days, rows ascend
/// by lexical date order (chronological for zero-padded dates). The raw
/// log is an independent rendering of every record in original order.
#[must_use]
pub fn aggregate(records: &[CommitRecord]) -> Report {
    let mut buckets: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.date.as_str())
            .or_default()
            .push(record.tagged_message());
    }

    let rows = buckets
        .into_iter()
        .map(|(date, entries)| DailyRow::new(date, entries.join("; ")))
        .collect();

    let raw = records
        .iter()
        .map(CommitRecord::raw_line)
        .collect::<Vec<_>>()
        .join("\n");

    Report { raw, rows }
}
