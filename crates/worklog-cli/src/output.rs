//! Output formatting for CLI display

use tabled::{Table, Tabled};

use crate::config::OutputFormat;
use crate::pipeline::RunOutcome;

/// Table row for the plain timesheet
#[derive(Tabled)]
struct TimesheetRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Hours")]
    hours: u32,
}

/// Table row for the timesheet with AI day summaries
#[derive(Tabled)]
struct TimesheetRowWithAi {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Hours")]
    hours: u32,
    #[tabled(rename = "AI Summary")]
    ai_summary: String,
}

/// Render an extraction outcome in the requested format
///
/// # Errors
///
/// Returns a serialization error only in JSON mode; the other formats
/// are infallible.
pub fn render(format: OutputFormat, outcome: &RunOutcome) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome),
        OutputFormat::Raw => Ok(outcome.report.raw.clone()),
    }
}

fn render_table(outcome: &RunOutcome) -> String {
    let table = match &outcome.summaries {
        Some(summaries) => Table::new(outcome.report.rows.iter().map(|row| TimesheetRowWithAi {
            date: row.date.clone(),
            task: row.task.clone(),
            summary: row.summary.clone(),
            hours: row.hours,
            ai_summary: summaries.get(&row.date).cloned().unwrap_or_default(),
        }))
        .to_string(),
        None => Table::new(outcome.report.rows.iter().map(|row| TimesheetRow {
            date: row.date.clone(),
            task: row.task.clone(),
            summary: row.summary.clone(),
            hours: row.hours,
        }))
        .to_string(),
    };

    if outcome.report.raw.is_empty() {
        table
    } else {
        format!("{table}\n\nRaw log:\n{}", outcome.report.raw)
    }
}
