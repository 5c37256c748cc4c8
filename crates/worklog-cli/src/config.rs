//! Configuration for the worklog CLI
//!
//! All inputs the core needs (repository paths, author identity, date
//! window) come from flags or environment variables; nothing is
//! hardcoded and nothing is discovered. The AI settings are optional
//! and only consulted when `--summarize` is set.

use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, ValueEnum};
use worklog_git::QueryWindow;

/// How the extracted report is rendered to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Timesheet table plus the raw log
    #[default]
    Table,
    /// Full report as pretty-printed JSON
    Json,
    /// Raw log lines only
    Raw,
}

/// worklog - collect git commits into a timesheet
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "worklog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository path to collect commits from (repeatable)
    ///
    /// Paths are not validated up front; a path that cannot be queried
    /// is skipped with a warning at collection time.
    #[arg(short = 'r', long = "repo", value_name = "PATH")]
    pub repos: Vec<PathBuf>,

    /// Author identity matched against the git author field
    #[arg(short, long, env = "WORKLOG_AUTHOR")]
    pub author: String,

    /// Start of the date window (YYYY-MM-DD)
    ///
    /// Defaults to seven days before today.
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// End of the date window (YYYY-MM-DD)
    ///
    /// Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Ask the configured AI endpoint for natural-language day summaries
    ///
    /// Best-effort: when the endpoint is missing or unreachable, every
    /// day falls back to a placeholder summary.
    #[arg(long, default_value = "false")]
    pub summarize: bool,

    /// Chat-completions endpoint URL used by --summarize
    #[arg(long, env = "WORKLOG_AI_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// API key for the summarization endpoint
    #[arg(long, env = "WORKLOG_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name sent to the summarization endpoint
    #[arg(long, env = "WORKLOG_AI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Resolve the query window, defaulting to the last seven days
    #[must_use]
    pub fn window(&self) -> QueryWindow {
        let today = Local::now().date_naive();
        let since = self
            .since
            .clone()
            .unwrap_or_else(|| format_date(today - Duration::days(7)));
        let until = self.until.clone().unwrap_or_else(|| format_date(today));
        QueryWindow::new(since, until)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly supplied date flag is not a
    /// valid `YYYY-MM-DD` date. An inverted window is NOT an error; it
    /// just yields zero matches.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (flag, value) in [("--since", &self.since), ("--until", &self.until)] {
            if let Some(value) = value {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
                    ConfigError::InvalidDate {
                        flag,
                        value: value.clone(),
                        source,
                    }
                })?;
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A date flag did not parse as `YYYY-MM-DD`
    #[error("Invalid date for {flag}: {value} ({source})")]
    InvalidDate {
        /// Which flag carried the bad value
        flag: &'static str,
        /// The value as supplied
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },
}
