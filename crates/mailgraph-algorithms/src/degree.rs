//! Weighted degree computation
//!
//! Degrees are weight SUMS, not edge counts: a node's in-degree is the sum of
//! the weights of its incoming edges. On an unweighted view every edge
//! contributes 1.0, so the two definitions coincide.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Weighted in/out degree of a single node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedDegree {
    /// Sum of incoming edge weights
    pub incoming: f64,
    /// Sum of outgoing edge weights
    pub outgoing: f64,
}

/// Compute weighted in/out degrees for every node in the view.
///
/// Every node appears in the result, isolated nodes with 0.0/0.0.
pub fn weighted_degrees(view: &GraphView) -> HashMap<NodeId, WeightedDegree> {
    let n = view.node_count;
    let mut degrees = vec![WeightedDegree::default(); n];

    // One pass over the out-CSR accumulates both directions.
    for u in 0..n {
        let targets = view.successors(u);
        let weights = view.weights(u);

        for (i, &v) in targets.iter().enumerate() {
            let w = weights.map_or(1.0, |ws| ws[i]);
            degrees[u].outgoing += w;
            degrees[v].incoming += w;
        }
    }

    let mut result = HashMap::with_capacity(n);
    for (idx, degree) in degrees.into_iter().enumerate() {
        result.insert(view.index_to_node[idx], degree);
    }

    result
}
