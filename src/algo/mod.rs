//! Graph algorithms adapter
//!
//! Algorithms are implemented in the `mailgraph-algorithms` crate over a
//! dense `GraphView`. This module is the integration layer: it projects a
//! [`CommGraph`] into a view and maps the results back onto participant
//! addresses.

use crate::graph::CommGraph;
use mailgraph_algorithms::{GraphView, NodeId};
use std::collections::HashMap;

// Re-export algorithms
pub use mailgraph_algorithms::WeightedDegree;

/// Project a communication graph into a dense algorithm view.
///
/// Participant indices double as `NodeId`s, edge counts become weights.
pub fn build_view(graph: &CommGraph) -> GraphView {
    let node_count = graph.node_count();
    let index_to_node: Vec<NodeId> = (0..node_count as u64).collect();

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];

    for edge in graph.edges() {
        outgoing[edge.source].push(edge.target);
        weights[edge.source].push(edge.count as f64);
    }

    GraphView::from_adjacency(node_count, index_to_node, outgoing, Some(weights))
}

/// Weighted in/out degrees per participant address.
///
/// A participant's in-degree is the SUM of incoming edge counts (message
/// volume received over aggregated edges), not the number of distinct
/// correspondents; likewise for out-degree.
pub fn weighted_degrees(graph: &CommGraph) -> HashMap<String, WeightedDegree> {
    let view = build_view(graph);
    mailgraph_algorithms::weighted_degrees(&view)
        .into_iter()
        .map(|(node, degree)| (graph.participant(node as usize).to_string(), degree))
        .collect()
}

/// Closeness centrality per participant address.
///
/// Directed outbound reachability over unweighted hops; participants who
/// reach nobody score 0.0.
pub fn closeness_centrality(graph: &CommGraph) -> HashMap<String, f64> {
    let view = build_view(graph);
    mailgraph_algorithms::closeness_centrality(&view)
        .into_iter()
        .map(|(node, score)| (graph.participant(node as usize).to_string(), score))
        .collect()
}
