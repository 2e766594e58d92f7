//! CSV ingestion and sent-date parsing.
//!
//! Source files carry `sender, subject, body, sent_date` columns. Extra
//! columns are ignored, and empty or missing cells become empty strings.
//! A date that matches none of the known formats is kept as text with no
//! timestamp; it never fails the batch.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::pipeline::enrich_batch;
use crate::pipeline::types::{EmailRecord, EnrichedRecord};

/// Columns a source file must have for records to be meaningful.
const REQUIRED_COLUMNS: &[&str] = &["subject", "body"];

/// Formats seen in exported support queues, tried in order.
const SENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Looser formats tried after RFC 3339 / RFC 2822.
const FALLBACK_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S", "%d/%m/%Y %H:%M"];

/// Read a CSV file and enrich every record in it.
pub fn load_enriched(path: &Path) -> Result<Vec<EnrichedRecord>> {
    let emails = read_csv(path)?;
    Ok(enrich_batch(emails))
}

/// Read every record from a CSV file on disk.
pub fn read_csv(path: &Path) -> std::result::Result<Vec<EmailRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Reading support emails");
    from_reader(file)
}

/// Read every record from CSV text.
pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Vec<EmailRecord>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);
    for column in REQUIRED_COLUMNS {
        if position(*column).is_none() {
            return Err(IngestError::MissingColumn((*column).to_string()));
        }
    }
    let sender = position("sender");
    let subject = position("subject");
    let body = position("body");
    let sent_date = position("sent_date");

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row = row.map_err(|source| IngestError::MalformedRow {
            row: index as u64 + 1,
            source,
        })?;
        // Short rows keep their leading cells; the rest read as empty
        let cell = |column: Option<usize>| column.and_then(|i| row.get(i)).unwrap_or("");
        records.push(EmailRecord::new(
            cell(sender),
            cell(subject),
            cell(body),
            cell(sent_date),
        ));
    }

    debug!(count = records.len(), "CSV rows decoded");
    Ok(records)
}

/// Parse a free-form sent date. Returns `None` when no format matches.
pub fn parse_sent_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    SENT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| parse_fallback(raw))
}

fn parse_fallback(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
