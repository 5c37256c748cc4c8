//! Commit record types and line parsing

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Separator between the date and subject fields in `git log` output
///
/// The log query uses `--pretty=format:%ad | %s`, so only the FIRST
/// occurrence of this separator is a field boundary. A subject that
/// itself contains the separator is re-joined, never truncated.
pub const FIELD_SEPARATOR: &str = " | ";

/// One parsed log entry, tagged with the project it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit date in `%Y-%m-%d` form (empty for a malformed line)
    pub date: String,
    /// Commit subject line
    pub message: String,
    /// Project label derived from the source path
    pub project: String,
}

impl CommitRecord {
    /// Parse one raw log line into a record
    ///
    /// Splits on the first occurrence of [`FIELD_SEPARATOR`]; the
    /// remainder of the line is the message. A line with no separator
    /// becomes a record with an empty date and the whole line as the
    /// message, so that no entry is silently dropped.
    #[must_use]
    pub fn parse_line(line: &str, project: &str) -> Self {
        match line.split_once(FIELD_SEPARATOR) {
            Some((date, message)) => Self {
                date: date.to_string(),
                message: message.to_string(),
                project: project.to_string(),
            },
            None => {
                warn!(line, "log line missing field separator");
                Self {
                    date: String::new(),
                    message: line.to_string(),
                    project: project.to_string(),
                }
            }
        }
    }

    /// Check whether this record carries a date
    ///
    /// False only for records recovered from malformed log lines.
    #[must_use]
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    /// Format as `[<project>] <message>`
    #[must_use]
    pub fn tagged_message(&self) -> String {
        format!("[{}] {}", self.project, self.message)
    }

    /// Format as a raw log line: `<date> | [<project>] <message>`
    #[must_use]
    pub fn raw_line(&self) -> String {
        format!("{}{}{}", self.date, FIELD_SEPARATOR, self.tagged_message())
    }
}
