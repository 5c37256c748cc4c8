//! worklog: collect git commits into a timesheet
//!
//! This binary crate queries git history across configured repositories,
//! groups the commits into timesheet-style daily rows, and optionally
//! asks a generative-AI endpoint for natural-language day summaries.

use clap::Parser;

use worklog_cli::config::Config;
use worklog_cli::{output, pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the rendered report stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;

    let outcome = pipeline::run(&config).await;
    println!("{}", output::render(config.format, &outcome)?);

    Ok(())
}
