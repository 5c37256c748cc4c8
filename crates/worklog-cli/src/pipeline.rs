//! Extraction pipeline: collect, aggregate, optionally summarize
//!
//! The pipeline never fails once configuration is validated: skipped
//! sources and unavailable summarization both degrade, they do not
//! abort the run.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use worklog_ai::{HttpSummaryClient, placeholder_summaries, summarize_rows};
use worklog_git::{SourceFailure, collect_commits};
use worklog_report::{DailyRow, Report, aggregate};

use crate::config::Config;

/// Outcome of one extraction run
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// Aggregated report: raw log plus date-sorted rows
    #[serde(flatten)]
    pub report: Report,
    /// Day summaries keyed by date, present when --summarize was set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summaries: Option<BTreeMap<String, String>>,
    /// Sources that were skipped during collection
    pub failures: Vec<SourceFailure>,
}

/// Run the full pipeline for a validated configuration
pub async fn run(config: &Config) -> RunOutcome {
    let window = config.window();
    if window.is_inverted() {
        warn!(
            since = %window.since,
            until = %window.until,
            "query window is inverted; expect zero matches"
        );
    }

    let collection = collect_commits(&config.repos, &window, &config.author);
    for failure in &collection.failures {
        warn!(path = %failure.path, reason = %failure.reason, "source skipped");
    }
    info!(
        records = collection.records.len(),
        skipped = collection.failures.len(),
        "collection finished"
    );

    let report = aggregate(&collection.records);

    let summaries = if config.summarize {
        Some(day_summaries(config, &report.rows).await)
    } else {
        None
    };

    RunOutcome {
        report,
        summaries,
        failures: collection.failures,
    }
}

/// Produce day summaries, degrading to placeholders when the endpoint
/// is not configured or cannot be constructed
async fn day_summaries(config: &Config, rows: &[DailyRow]) -> BTreeMap<String, String> {
    let (Some(endpoint), Some(api_key)) = (config.endpoint.as_deref(), config.api_key.as_deref())
    else {
        warn!("summarization requested without endpoint/API key; using placeholders");
        return placeholder_summaries(rows);
    };

    match HttpSummaryClient::new(endpoint, api_key, config.model.as_str()) {
        Ok(client) => summarize_rows(&client, rows).await,
        Err(err) => {
            warn!(error = %err, "could not build summarization client; using placeholders");
            placeholder_summaries(rows)
        }
    }
}
