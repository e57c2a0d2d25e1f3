//! Corpus export reader
//!
//! Reads the pre-existing CSV export into `MessageRecord`s. The export is a
//! round-tripped dataframe dump: the recipient column holds a stringified list
//! (`"['a@x.com', 'b@y.com']"`), months and weekdays are English names, and
//! boolean flags are `True`/`False`. All of that is parsed here, once.

use super::MessageRecord;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while reading the export
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: recipient list {value:?} is not a bracketed list")]
    BadRecipientList { row: usize, value: String },

    #[error("row {row}: unknown month name {value:?}")]
    BadMonth { row: usize, value: String },

    #[error("row {row}: unknown weekday name {value:?}")]
    BadWeekday { row: usize, value: String },

    #[error("row {row}: flag value {value:?} is neither True nor False")]
    BadFlag { row: usize, value: String },

    #[error("row {row}: hour {value} is outside 0..=23")]
    BadHour { row: usize, value: u32 },
}

/// Raw export row, named exactly as the export names its columns.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "From")]
    from: String,
    #[serde(rename = "To")]
    to: String,
    #[serde(rename = "Subject", default)]
    subject: Option<String>,
    #[serde(rename = "Content", default)]
    content: Option<String>,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Hour")]
    hour: u32,
    #[serde(rename = "Is-Reply")]
    is_reply: String,
    #[serde(rename = "Is-Forwarded")]
    is_forwarded: String,
}

/// Read every message record from the export at `path`.
///
/// Rows are validated as they stream; the first malformed row aborts the load
/// with its row number.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<MessageRecord>, LoadError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();

    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, first data row is line 2.
        let row = i + 2;
        let raw = result?;
        records.push(convert_row(raw, row)?);
    }

    info!(count = records.len(), "loaded message records from export");
    Ok(records)
}

fn convert_row(raw: RawRow, row: usize) -> Result<MessageRecord, LoadError> {
    let recipients =
        parse_recipient_list(&raw.to).ok_or_else(|| LoadError::BadRecipientList {
            row,
            value: raw.to.clone(),
        })?;

    let month = raw.month.trim().parse().map_err(|_| LoadError::BadMonth {
        row,
        value: raw.month.clone(),
    })?;

    let weekday = raw.day.trim().parse().map_err(|_| LoadError::BadWeekday {
        row,
        value: raw.day.clone(),
    })?;

    if raw.hour > 23 {
        return Err(LoadError::BadHour {
            row,
            value: raw.hour,
        });
    }

    Ok(MessageRecord {
        sender: raw.from,
        recipients,
        subject: raw.subject.unwrap_or_default(),
        body: raw.content.unwrap_or_default(),
        month,
        weekday,
        hour: raw.hour,
        is_reply: parse_flag(&raw.is_reply, row)?,
        is_forwarded: parse_flag(&raw.is_forwarded, row)?,
    })
}

/// Parse the export's stringified recipient list into addresses.
///
/// Accepts `[]`, `['a@x.com']`, `['a@x.com', 'b@y.com']` with single or double
/// quotes. Returns `None` when the value is not a bracketed list.
fn parse_recipient_list(value: &str) -> Option<Vec<String>> {
    let trimmed = value.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;

    let mut recipients = Vec::new();
    for part in inner.split(',') {
        let address = part.trim().trim_matches(|c| c == '\'' || c == '"').trim();
        if !address.is_empty() {
            recipients.push(address.to_string());
        }
    }
    Some(recipients)
}

fn parse_flag(value: &str, row: usize) -> Result<bool, LoadError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(LoadError::BadFlag {
            row,
            value: value.to_string(),
        }),
    }
}
