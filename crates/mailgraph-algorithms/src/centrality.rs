//! Closeness centrality
//!
//! Closeness of a node is the reciprocal of its average shortest-path distance
//! to the nodes it can reach. Distances are unweighted hops over directed
//! out-edges; pairs the node cannot reach are excluded from the average, and a
//! node with no outbound reachability at all scores 0.0.

use super::common::{GraphView, NodeId};
use std::collections::{HashMap, VecDeque};

/// Compute closeness centrality for every node in the view.
///
/// For a node `u` reaching `r` other nodes with total hop distance `d`,
/// the score is `r / d`. Every node appears in the result map.
pub fn closeness_centrality(view: &GraphView) -> HashMap<NodeId, f64> {
    let n = view.node_count;
    let mut result = HashMap::with_capacity(n);

    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut queue = VecDeque::new();

    for source in 0..n {
        dist.fill(None);
        queue.clear();

        dist[source] = Some(0);
        queue.push_back(source);

        let mut reached = 0u64;
        let mut total_dist = 0u64;

        while let Some(current) = queue.pop_front() {
            let d = dist[current].unwrap_or(0);
            for &next in view.successors(current) {
                if dist[next].is_none() {
                    dist[next] = Some(d + 1);
                    reached += 1;
                    total_dist += (d + 1) as u64;
                    queue.push_back(next);
                }
            }
        }

        let score = if total_dist > 0 {
            reached as f64 / total_dist as f64
        } else {
            0.0
        };
        result.insert(view.index_to_node[source], score);
    }

    result
}
