//! Mailgraph
//!
//! Analytics over a static email corpus export. The crate reads the
//! pre-existing tabular export into typed message records and computes, as
//! plain data with no rendering side effects:
//!
//! - a weighted directed communication graph (one aggregated edge per ordered
//!   sender/recipient pair), with deterministic top-k and seeded random
//!   subgraph selection for visualization
//! - weighted in/out degrees and closeness centrality over that graph
//!   (via the `mailgraph-algorithms` crate)
//! - square-root edge-width normalization for graph rendering
//! - tabular statistics behind the dashboard panels: sender, recipient and
//!   external-sender counts, per-sender summaries, hour-of-day and weekday
//!   distributions, and cleaned word frequencies
//!
//! Everything is a pure function over an immutable record set or graph value:
//! each analytics request rebuilds from the filtered records it is handed, and
//! no module keeps mutable state between calls. Empty or degenerate inputs
//! surface as typed recoverable errors so that one empty panel never takes
//! down the rest of a dashboard.

pub mod algo;
pub mod graph;
pub mod record;
pub mod stats;

// Re-export main types
pub use graph::{build_graph, normalize_widths, CommEdge, CommGraph, GraphError, GraphResult};
pub use record::{load_records, LoadError, MessageRecord, RecordFilter};
