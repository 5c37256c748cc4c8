//! Timesheet row type

use serde::{Deserialize, Serialize};

/// Placeholder task name carried by every row
///
/// Callers are expected to edit this downstream; it is not derived from
/// the commit data.
pub const DEFAULT_TASK: &str = "Development Work";

/// Placeholder hours value carried by every row
pub const DEFAULT_HOURS: u32 = 8;

/// One aggregated reporting unit: a single day of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRow {
    /// Calendar date in `%Y-%m-%d` form
    pub date: String,
    /// Task label, a fixed placeholder
    pub task: String,
    /// Semicolon-joined `[project] message` entries for the date
    pub summary: String,
    /// Hours worked, a fixed placeholder
    pub hours: u32,
    /// Reserved for caller-specific use
    pub extra1: String,
    /// Reserved for caller-specific use
    pub extra2: String,
}

impl DailyRow {
    /// Create a row for a date with the placeholder fields filled in
    #[must_use]
    pub fn new(date: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            task: DEFAULT_TASK.to_string(),
            summary: summary.into(),
            hours: DEFAULT_HOURS,
            extra1: String::new(),
            extra2: String::new(),
        }
    }
}
