//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of a directed graph in Compressed Sparse Row (CSR) format.
///
/// Every node lives at a dense index (0..N) so that per-node state can live in
/// flat vectors instead of hash maps; `index_to_node` carries results back to
/// the caller's `NodeId`s.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Edge weights: aligned with `out_targets`. `None` means every edge weighs 1.0.
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index), counted in edges
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Build a GraphView from per-node adjacency lists, flattening them into CSR.
    ///
    /// `weights`, when present, must be shaped exactly like `outgoing`.
    pub fn from_adjacency(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }

        GraphView {
            node_count,
            index_to_node,
            out_offsets,
            out_targets,
            weights: flat_weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_flattening() {
        // 0 -> 1 (2.0), 0 -> 2 (5.0), 2 -> 1 (1.0)
        let outgoing = vec![vec![1, 2], vec![], vec![1]];
        let weights = vec![vec![2.0, 5.0], vec![], vec![1.0]];

        let view = GraphView::from_adjacency(3, vec![0, 1, 2], outgoing, Some(weights));

        assert_eq!(view.out_degree(0), 2);
        assert_eq!(view.out_degree(1), 0);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.successors(2), &[1]);
        assert_eq!(view.weights(0), Some(&[2.0, 5.0][..]));
        assert!(view.weights(1).unwrap().is_empty());
    }
}
