use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use support_triage::config::QueueConfig;
use support_triage::ingest;
use support_triage::pipeline::{EnrichedRecord, IssueType, Priority, Sentiment};
use support_triage::queue::{self, QueueFilter, QueueSummary};
use support_triage::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Enrich a support email export and print the triage queue.
#[derive(Debug, Parser)]
#[command(name = "support-triage", version)]
struct Cli {
    /// CSV file with sender, subject, body and sent_date columns.
    #[arg(env = "SUPPORT_TRIAGE_INPUT")]
    input: PathBuf,

    /// Only show this sentiment (Positive, Negative, Mixed, Neutral).
    #[arg(long, value_parser = parse_sentiment)]
    sentiment: Option<Sentiment>,

    /// Only show this priority (Urgent, "Not urgent").
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,

    /// Only show this issue type (e.g. login_issue).
    #[arg(long, value_parser = parse_issue)]
    issue: Option<IssueType>,

    /// Case-insensitive search over subject and body.
    #[arg(long)]
    search: Option<String>,

    /// Print the detail block and draft for the record at this queue position.
    #[arg(long)]
    show: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "SUPPORT_TRIAGE_FORMAT")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a QueueSummary,
    records: &'a [&'a EnrichedRecord],
}

fn parse_sentiment(s: &str) -> Result<Sentiment, String> {
    Sentiment::from_label(s).ok_or_else(|| format!("unknown sentiment: {s}"))
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::from_label(s).ok_or_else(|| format!("unknown priority: {s}"))
}

fn parse_issue(s: &str) -> Result<IssueType, String> {
    IssueType::parse_label(s).ok_or_else(|| format!("unknown issue type: {s}"))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = QueueConfig::from_env()?;

    let records = ingest::load_enriched(&cli.input)?;

    let filter = QueueFilter {
        sentiment: cli.sentiment,
        priority: cli.priority,
        issue_type: cli.issue,
        search: cli.search,
    };
    let view = queue::apply(&records, &filter);
    info!(total = records.len(), shown = view.len(), "Queue filtered");

    let now = chrono::Local::now().naive_local();
    let summary = QueueSummary::build(&records, &view, now, config.recent_window());

    match cli.format {
        OutputFormat::Json => {
            let report = JsonReport {
                summary: &summary,
                records: &view,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let selected = match cli.show {
                Some(index) => Some(*view.get(index).ok_or_else(|| {
                    anyhow::anyhow!("--show {index} is out of range ({} in view)", view.len())
                })?),
                None => None,
            };
            print!("{}", render::render_report(&summary, &view, selected, &config));
        }
    }

    Ok(())
}
