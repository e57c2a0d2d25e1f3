//! Typed message records from the corpus export
//!
//! The loader resolves every textual quirk of the export (stringified
//! recipient lists, month and weekday names, True/False flags) at this
//! boundary, so downstream graph and statistics code only ever sees typed
//! fields.

pub mod filter;
pub mod loader;

pub use filter::RecordFilter;
pub use loader::{load_records, LoadError};

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

/// A single email message from the corpus export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Sender address
    pub sender: String,
    /// Recipient addresses, in the order the export lists them. May be empty.
    pub recipients: Vec<String>,
    /// Subject line (empty when the export had none)
    pub subject: String,
    /// Body text (empty when the export had none)
    pub body: String,
    /// Calendar month the message was sent
    pub month: Month,
    /// Weekday the message was sent
    pub weekday: Weekday,
    /// Hour of day the message was sent, 0..=23
    pub hour: u32,
    /// Whether the message is a reply
    pub is_reply: bool,
    /// Whether the message is a forward
    pub is_forwarded: bool,
}

impl MessageRecord {
    /// Create a record with the given addressing and neutral defaults for the
    /// remaining fields.
    pub fn new(sender: impl Into<String>, recipients: Vec<String>) -> Self {
        MessageRecord {
            sender: sender.into(),
            recipients,
            subject: String::new(),
            body: String::new(),
            month: Month::January,
            weekday: Weekday::Mon,
            hour: 0,
            is_reply: false,
            is_forwarded: false,
        }
    }

    /// Number of whitespace-separated words in the body, the size proxy used
    /// by the per-sender summaries.
    pub fn body_word_count(&self) -> u64 {
        self.body.split_whitespace().count() as u64
    }

    /// Whether exactly one recipient is listed. Only such messages contribute
    /// edges to the communication graph.
    pub fn has_single_recipient(&self) -> bool {
        self.recipients.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_word_count() {
        let mut record = MessageRecord::new("a@x.com", vec!["b@x.com".to_string()]);
        assert_eq!(record.body_word_count(), 0);

        record.body = "meeting moved  to\nthursday".to_string();
        assert_eq!(record.body_word_count(), 4);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = MessageRecord::new("a@x.com", vec!["b@x.com".to_string()]);
        record.month = Month::June;
        record.weekday = Weekday::Fri;
        record.hour = 17;
        record.is_reply = true;

        let json = serde_json::to_string(&record).unwrap();
        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_single_recipient() {
        let none = MessageRecord::new("a@x.com", vec![]);
        let one = MessageRecord::new("a@x.com", vec!["b@x.com".to_string()]);
        let two = MessageRecord::new(
            "a@x.com",
            vec!["b@x.com".to_string(), "c@x.com".to_string()],
        );

        assert!(!none.has_single_recipient());
        assert!(one.has_single_recipient());
        assert!(!two.has_single_recipient());
    }
}
