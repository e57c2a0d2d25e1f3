//! Word-frequency analytics
//!
//! Cleans the free-text fields the way the dashboard's word clouds do:
//! non-alphabetic characters become spaces, everything is lowercased, and
//! short tokens and stopwords are dropped. Frequencies come back as sorted
//! plain data; drawing the cloud is the caller's business.

use crate::record::MessageRecord;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Which free-text field to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Body,
    Subject,
}

/// Occurrences of one cleaned word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub occurrences: u64,
}

/// Common English words carrying no signal for the frequency charts.
const ENGLISH_STOPWORDS: &[&str] = &[
    "about", "after", "again", "against", "because", "been", "before", "being", "below", "between",
    "both", "could", "does", "doing", "down", "during", "each", "further", "have", "having",
    "here", "into", "itself", "just", "more", "most", "once", "only", "other", "over", "same",
    "should", "some", "such", "than", "that", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "under", "until", "very", "were", "what", "when", "where",
    "which", "while", "will", "with", "would", "your", "yours",
];

/// Corpus-specific noise on top of the English stopwords: header vocabulary,
/// URL fragments, and boilerplate that dominates raw counts.
const CORPUS_STOPWORDS: &[&str] = &[
    "from", "http", "subject", "sent", "email", "thanks", "please", "ect", "enron",
];

fn alphabetic_splitter() -> &'static Regex {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    SPLITTER.get_or_init(|| Regex::new(r"[^a-zA-Z]+").expect("alphabetic splitter regex"))
}

fn is_stopword(token: &str) -> bool {
    ENGLISH_STOPWORDS.contains(&token) || CORPUS_STOPWORDS.contains(&token)
}

/// Clean one text: keep lowercased alphabetic tokens longer than three
/// characters that are not stopwords, joined by single spaces.
pub fn clean_text(text: &str) -> String {
    alphabetic_splitter()
        .split(text)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .filter(|t| t.len() > 3 && !is_stopword(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cleaned word frequencies over `field`, descending (ties break on the
/// word, ascending).
pub fn word_frequencies<'a, I>(records: I, field: TextField) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();

    for record in records {
        let text = match field {
            TextField::Body => &record.body,
            TextField::Subject => &record.subject,
        };
        for token in clean_text(text).split_whitespace() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, occurrences)| WordCount { word, occurrences })
        .collect();
    rows.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.word.cmp(&b.word))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_noise() {
        let cleaned = clean_text("Please review the Q3 numbers!! http://x.example 42 ok");
        // "please" and "http" are stopwords, "the"/"ok"/"q"/"x" are too
        // short, digits vanish with the non-alphabetic split
        assert_eq!(cleaned, "review numbers example");
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert_eq!(clean_text("a an the and ok big cat"), "");
        assert_eq!(clean_text("meeting room four"), "meeting room four");
    }

    #[test]
    fn test_word_frequencies_sorted() {
        let mut first = MessageRecord::new("a@x.com", vec!["b@x.com".to_string()]);
        first.body = "budget meeting budget".to_string();
        first.subject = "budget review".to_string();
        let mut second = MessageRecord::new("b@x.com", vec!["a@x.com".to_string()]);
        second.body = "meeting notes".to_string();

        let records = vec![first, second];

        let body_counts = word_frequencies(&records, TextField::Body);
        assert_eq!(body_counts[0].word, "budget");
        assert_eq!(body_counts[0].occurrences, 2);
        assert_eq!(body_counts[1].word, "meeting");
        assert_eq!(body_counts[1].occurrences, 2);

        let subject_counts = word_frequencies(&records, TextField::Subject);
        assert_eq!(subject_counts.len(), 2);
        assert!(subject_counts.iter().any(|w| w.word == "review"));
    }
}
