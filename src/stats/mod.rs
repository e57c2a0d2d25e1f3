//! Tabular statistics over message records
//!
//! Pure record-set -> value computations behind the dashboard panels. Each
//! function takes the (already filtered) records it should describe and
//! returns sorted plain data; rendering belongs to the caller.

pub mod senders;
pub mod time;
pub mod words;

pub use senders::{
    external_sender_counts, recipient_counts, sender_counts, sender_summaries, RecipientCount,
    SenderCount, SenderSummary,
};
pub use time::{hourly_counts, weekday_counts, weekend_collapsed, DayDistribution};
pub use words::{clean_text, word_frequencies, TextField, WordCount};
