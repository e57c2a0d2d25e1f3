//! Record filters
//!
//! The dashboard narrows the record set before every panel recomputes. A
//! `RecordFilter` is the explicit value form of that narrowing: each field is
//! optional, `None` means no restriction, and set fields combine with AND.

use super::MessageRecord;
use chrono::{Month, Weekday};

/// Combinable restriction over message records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
    pub is_reply: Option<bool>,
    pub is_forwarded: Option<bool>,
    pub sender: Option<String>,
}

impl RecordFilter {
    /// Filter matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to messages sent in `month`
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Restrict to messages sent on `weekday`
    pub fn weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Restrict by reply status
    pub fn is_reply(mut self, is_reply: bool) -> Self {
        self.is_reply = Some(is_reply);
        self
    }

    /// Restrict by forward status
    pub fn is_forwarded(mut self, is_forwarded: bool) -> Self {
        self.is_forwarded = Some(is_forwarded);
        self
    }

    /// Restrict to messages from `sender`
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Whether `record` passes every set restriction.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(month) = self.month {
            if record.month != month {
                return false;
            }
        }
        if let Some(weekday) = self.weekday {
            if record.weekday != weekday {
                return false;
            }
        }
        if let Some(is_reply) = self.is_reply {
            if record.is_reply != is_reply {
                return false;
            }
        }
        if let Some(is_forwarded) = self.is_forwarded {
            if record.is_forwarded != is_forwarded {
                return false;
            }
        }
        if let Some(ref sender) = self.sender {
            if record.sender != *sender {
                return false;
            }
        }
        true
    }

    /// Borrowing view of the records that pass the filter, in input order.
    pub fn apply<'a>(&self, records: &'a [MessageRecord]) -> Vec<&'a MessageRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
