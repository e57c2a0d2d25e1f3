//! Sender and recipient statistics
//!
//! Counts are sorted descending with a lexicographic tie-break on the
//! address, so equal counts always come back in the same order.

use crate::record::MessageRecord;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Emails sent by one sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub emails_sent: u64,
}

/// Deliveries addressed to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientCount {
    pub recipient: String,
    pub deliveries: u64,
}

/// Per-sender activity summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderSummary {
    pub sender: String,
    pub emails_sent: u64,
    /// How many of those were replies
    pub reply_count: u64,
    /// Mean body word count across the sender's messages
    pub average_word_count: f64,
    /// Emails sent per reply sent; equals `emails_sent` when the sender
    /// never replied. High values flag broadcast-style senders.
    pub email_reply_ratio: f64,
}

/// Emails sent per sender, descending.
pub fn sender_counts<'a, I>(records: I) -> Vec<SenderCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
    for record in records {
        *counts.entry(record.sender.as_str()).or_insert(0) += 1;
    }
    sorted_sender_counts(counts)
}

/// Emails sent per sender from outside the home domain, descending.
///
/// A sender is external when its address does not contain `home_domain`
/// (case-insensitive substring, matching how the dashboard spots
/// outsource senders).
pub fn external_sender_counts<'a, I>(records: I, home_domain: &str) -> Vec<SenderCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let needle = home_domain.to_ascii_lowercase();
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
    for record in records {
        if record.sender.to_ascii_lowercase().contains(&needle) {
            continue;
        }
        *counts.entry(record.sender.as_str()).or_insert(0) += 1;
    }
    sorted_sender_counts(counts)
}

/// Deliveries per recipient, descending.
///
/// The recipient list is exploded: every recipient of every message counts,
/// including on multi-recipient messages that the communication graph
/// excludes.
pub fn recipient_counts<'a, I>(records: I) -> Vec<RecipientCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
    for record in records {
        for recipient in &record.recipients {
            *counts.entry(recipient.as_str()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<RecipientCount> = counts
        .into_iter()
        .map(|(recipient, deliveries)| RecipientCount {
            recipient: recipient.to_string(),
            deliveries,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.deliveries
            .cmp(&a.deliveries)
            .then_with(|| a.recipient.cmp(&b.recipient))
    });
    rows
}

/// Per-sender summaries, sorted by emails sent descending.
pub fn sender_summaries<'a, I>(records: I) -> Vec<SenderSummary>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    struct Acc {
        sent: u64,
        replies: u64,
        words: u64,
    }

    let mut acc: FxHashMap<&str, Acc> = FxHashMap::default();
    for record in records {
        let entry = acc.entry(record.sender.as_str()).or_insert(Acc {
            sent: 0,
            replies: 0,
            words: 0,
        });
        entry.sent += 1;
        if record.is_reply {
            entry.replies += 1;
        }
        entry.words += record.body_word_count();
    }

    let mut rows: Vec<SenderSummary> = acc
        .into_iter()
        .map(|(sender, a)| SenderSummary {
            sender: sender.to_string(),
            emails_sent: a.sent,
            reply_count: a.replies,
            average_word_count: a.words as f64 / a.sent as f64,
            email_reply_ratio: if a.replies == 0 {
                a.sent as f64
            } else {
                a.sent as f64 / a.replies as f64
            },
        })
        .collect();
    rows.sort_by(|a, b| {
        b.emails_sent
            .cmp(&a.emails_sent)
            .then_with(|| a.sender.cmp(&b.sender))
    });
    rows
}

fn sorted_sender_counts(counts: FxHashMap<&str, u64>) -> Vec<SenderCount> {
    let mut rows: Vec<SenderCount> = counts
        .into_iter()
        .map(|(sender, emails_sent)| SenderCount {
            sender: sender.to_string(),
            emails_sent,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.emails_sent
            .cmp(&a.emails_sent)
            .then_with(|| a.sender.cmp(&b.sender))
    });
    rows
}
