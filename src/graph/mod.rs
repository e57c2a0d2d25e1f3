//! Weighted directed communication graph
//!
//! Nodes are participant addresses, interned to dense indices. Edges are
//! pre-aggregated: at most one record per ordered `(sender, recipient)` pair,
//! carrying the count of qualifying messages in that direction. The edge list
//! is kept sorted by count descending so the heaviest connections come first.
//!
//! Only messages addressed to exactly one recipient contribute edges. Zero-
//! and multi-recipient messages are deliberately excluded from construction
//! (recipient-level statistics in `stats::senders` do explode the full list);
//! changing that policy changes the total edge mass of every downstream
//! analytic.

pub mod subgraph;
pub mod widths;

pub use widths::normalize_widths;

use crate::record::MessageRecord;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph construction and analysis
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("no single-recipient messages to build a graph from")]
    EmptyInput,

    #[error("sampling fraction {0} selected no edges")]
    EmptySample(f64),

    #[error("sampling fraction {0} is outside (0, 1]")]
    InvalidFraction(f64),

    #[error("edge counts are all zero; widths cannot be normalized")]
    DegenerateWidths,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An aggregated directed edge: `count` messages from `source` to `target`.
///
/// Endpoints are dense participant indices into the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommEdge {
    pub source: usize,
    pub target: usize,
    pub count: u64,
}

/// Immutable weighted directed communication graph.
///
/// Built once from a record set, then consumed read-only; every analysis
/// request rebuilds from scratch rather than mutating a previous graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CommGraph {
    /// Dense index -> participant address
    participants: Vec<String>,
    /// Participant address -> dense index
    index: FxHashMap<String, usize>,
    /// Aggregated edges, sorted by count descending (stable: equal counts
    /// keep first-seen order)
    edges: Vec<CommEdge>,
}

/// Build the communication graph from a message record set.
///
/// Messages with exactly one recipient are grouped by ordered
/// `(sender, recipient)` pair and counted; each group becomes one edge.
/// Self-addressed messages form ordinary self-loop edges.
///
/// Fails with [`GraphError::EmptyInput`] when no qualifying message remains.
pub fn build_graph<'a, I>(messages: I) -> GraphResult<CommGraph>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    // IndexMap keeps first-seen group order, which is the deterministic
    // tie-break for equal counts after the stable sort below.
    let mut groups: IndexMap<(&str, &str), u64> = IndexMap::new();
    let mut total = 0usize;

    for message in messages {
        total += 1;
        if !message.has_single_recipient() {
            continue;
        }
        let pair = (message.sender.as_str(), message.recipients[0].as_str());
        *groups.entry(pair).or_insert(0) += 1;
    }

    if groups.is_empty() {
        return Err(GraphError::EmptyInput);
    }

    let mut participants: Vec<String> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut edges = Vec::with_capacity(groups.len());

    {
        let mut intern = |address: &str| -> usize {
            if let Some(&idx) = index.get(address) {
                idx
            } else {
                let idx = participants.len();
                participants.push(address.to_string());
                index.insert(address.to_string(), idx);
                idx
            }
        };

        for (&(sender, recipient), &count) in &groups {
            let source = intern(sender);
            let target = intern(recipient);
            edges.push(CommEdge {
                source,
                target,
                count,
            });
        }
    }

    edges.sort_by(|a, b| b.count.cmp(&a.count));

    debug!(
        messages = total,
        nodes = participants.len(),
        edges = edges.len(),
        "built communication graph"
    );

    Ok(CommGraph {
        participants,
        index,
        edges,
    })
}

impl CommGraph {
    /// Number of participants
    pub fn node_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of aggregated edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, sorted by count descending
    pub fn edges(&self) -> &[CommEdge] {
        &self.edges
    }

    /// All participant addresses, in dense-index order
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Address of the participant at `idx`
    pub fn participant(&self, idx: usize) -> &str {
        &self.participants[idx]
    }

    /// Dense index of `address`, if it appears in the graph
    pub fn participant_index(&self, address: &str) -> Option<usize> {
        self.index.get(address).copied()
    }

    /// Edge counts in edge order, the input to [`normalize_widths`]
    pub fn edge_counts(&self) -> Vec<u64> {
        self.edges.iter().map(|e| e.count).collect()
    }

    /// The most-connected pair: heaviest edge as `(sender, recipient, count)`
    pub fn heaviest_edge(&self) -> Option<(&str, &str, u64)> {
        self.edges.first().map(|e| {
            (
                self.participant(e.source),
                self.participant(e.target),
                e.count,
            )
        })
    }

    /// Build a new graph from a subset of this graph's edges, re-interning
    /// the participants they touch. Edge order (and therefore the count-sort)
    /// is preserved.
    pub(crate) fn project<'a, I>(&self, keep: I) -> CommGraph
    where
        I: IntoIterator<Item = &'a CommEdge>,
    {
        let mut participants: Vec<String> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut edges = Vec::new();

        let mut intern = |address: &str| -> usize {
            if let Some(&idx) = index.get(address) {
                idx
            } else {
                let idx = participants.len();
                participants.push(address.to_string());
                index.insert(address.to_string(), idx);
                idx
            }
        };

        for edge in keep {
            let source = intern(self.participant(edge.source));
            let target = intern(self.participant(edge.target));
            edges.push(CommEdge {
                source,
                target,
                count: edge.count,
            });
        }

        CommGraph {
            participants,
            index,
            edges,
        }
    }
}
