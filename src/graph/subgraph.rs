//! Subgraph selection for visualization
//!
//! Two selectors feed the network plots: a deterministic top-k over the
//! heaviest edges, and a seeded random sample. The random selector is
//! node-induced: after sampling edges it keeps EVERY edge whose endpoints both
//! fall in the sampled node set, so the result can contain edges outside the
//! raw sample.

use super::{CommGraph, GraphError, GraphResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;

impl CommGraph {
    /// Subgraph of the `k` heaviest edges and the nodes they touch.
    ///
    /// The edge list is already count-sorted, so this is a prefix. When `k`
    /// exceeds the edge count the full graph comes back; same graph and same
    /// `k` always yield the same subgraph.
    pub fn top_k_subgraph(&self, k: usize) -> CommGraph {
        self.project(self.edges().iter().take(k))
    }

    /// Node-induced subgraph over a seeded uniform sample of `fraction` of
    /// the edges.
    ///
    /// The sample size is `fraction` of the edge count, rounded to nearest.
    /// The same seed on the same graph reproduces the same subgraph.
    ///
    /// Fails with [`GraphError::InvalidFraction`] when `fraction` is outside
    /// (0, 1], and with [`GraphError::EmptySample`] when the rounded sample
    /// size is zero (small graphs with small fractions).
    pub fn random_subgraph(&self, fraction: f64, seed: u64) -> GraphResult<CommGraph> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(GraphError::InvalidFraction(fraction));
        }

        let sample_size = (self.edge_count() as f64 * fraction).round() as usize;
        if sample_size == 0 {
            return Err(GraphError::EmptySample(fraction));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let picked = rand::seq::index::sample(&mut rng, self.edge_count(), sample_size);

        let mut sampled_nodes: FxHashSet<usize> = FxHashSet::default();
        for i in picked.iter() {
            let edge = self.edges()[i];
            sampled_nodes.insert(edge.source);
            sampled_nodes.insert(edge.target);
        }

        // Restrict the FULL edge list to the sampled node set, not just the
        // sampled edges themselves.
        let keep = self
            .edges()
            .iter()
            .filter(|e| sampled_nodes.contains(&e.source) && sampled_nodes.contains(&e.target));

        Ok(self.project(keep))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::build_graph;
    use crate::record::MessageRecord;
    use crate::{CommGraph, GraphError};

    fn msg(from: &str, to: &str) -> MessageRecord {
        MessageRecord::new(from, vec![to.to_string()])
    }

    fn chain_graph(pairs: &[(&str, &str, u64)]) -> CommGraph {
        let mut records = Vec::new();
        for &(from, to, count) in pairs {
            for _ in 0..count {
                records.push(msg(from, to));
            }
        }
        build_graph(&records).unwrap()
    }

    #[test]
    fn test_top_k_takes_heaviest_edges() {
        let graph = chain_graph(&[
            ("a@x.com", "b@x.com", 5),
            ("b@x.com", "c@x.com", 3),
            ("c@x.com", "d@x.com", 1),
        ]);

        let top = graph.top_k_subgraph(2);
        assert_eq!(top.edge_count(), 2);
        assert_eq!(top.node_count(), 3);
        assert_eq!(top.heaviest_edge(), Some(("a@x.com", "b@x.com", 5)));
        // The count-1 edge is gone along with its exclusive node
        assert_eq!(top.participant_index("d@x.com"), None);
    }

    #[test]
    fn test_top_k_clamps_to_edge_count() {
        let graph = chain_graph(&[("a@x.com", "b@x.com", 2), ("b@x.com", "a@x.com", 1)]);

        let all = graph.top_k_subgraph(100);
        assert_eq!(all.edge_count(), graph.edge_count());
        assert_eq!(all.edges(), graph.edges());
    }

    #[test]
    fn test_top_k_zero_is_empty() {
        let graph = chain_graph(&[("a@x.com", "b@x.com", 1)]);
        let empty = graph.top_k_subgraph(0);
        assert_eq!(empty.edge_count(), 0);
        assert_eq!(empty.node_count(), 0);
    }

    #[test]
    fn test_random_subgraph_is_seed_deterministic() {
        let graph = chain_graph(&[
            ("a@x.com", "b@x.com", 9),
            ("b@x.com", "c@x.com", 8),
            ("c@x.com", "d@x.com", 7),
            ("d@x.com", "e@x.com", 6),
            ("e@x.com", "a@x.com", 5),
            ("a@x.com", "c@x.com", 4),
            ("b@x.com", "d@x.com", 3),
            ("c@x.com", "e@x.com", 2),
        ]);

        let first = graph.random_subgraph(0.5, 0).unwrap();
        let second = graph.random_subgraph(0.5, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_subgraph_is_node_induced() {
        // a->b is the heaviest edge; whenever a sample picks edges touching
        // both a and b, the a->b edge must appear even if unsampled.
        let graph = chain_graph(&[
            ("a@x.com", "b@x.com", 5),
            ("b@x.com", "a@x.com", 2),
            ("a@x.com", "c@x.com", 1),
        ]);

        let sub = graph.random_subgraph(1.0, 42).unwrap();
        // fraction 1.0 samples everything; node-induced restriction keeps it all
        assert_eq!(sub.edge_count(), graph.edge_count());

        // Every kept edge has both endpoints in the node set by construction
        for edge in sub.edges() {
            assert!(edge.source < sub.node_count());
            assert!(edge.target < sub.node_count());
        }
    }

    #[test]
    fn test_random_subgraph_rejects_bad_fraction() {
        let graph = chain_graph(&[("a@x.com", "b@x.com", 1)]);
        assert_eq!(
            graph.random_subgraph(0.0, 0),
            Err(GraphError::InvalidFraction(0.0))
        );
        assert_eq!(
            graph.random_subgraph(1.5, 0),
            Err(GraphError::InvalidFraction(1.5))
        );
    }

    #[test]
    fn test_random_subgraph_empty_sample() {
        // One edge at fraction 0.2 rounds to zero edges
        let graph = chain_graph(&[("a@x.com", "b@x.com", 3)]);
        assert_eq!(
            graph.random_subgraph(0.2, 0),
            Err(GraphError::EmptySample(0.2))
        );
    }
}
