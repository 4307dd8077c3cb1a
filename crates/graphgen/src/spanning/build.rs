//! Forest construction: accept candidates shortest-first unless they close a
//! cycle or cross an accepted edge.

use nalgebra::Vector2;

use crate::geom::intersects;
use crate::types::{Edge, Node};

use super::candidates::CandidateEdge;
use super::union_find::UnionFind;

/// Scratch for one forest build: components plus accepted index pairs.
///
/// Owned by a single call; `finish` consumes it.
#[derive(Clone, Debug)]
pub struct ForestBuilder {
    positions: Vec<Vector2<f64>>,
    components: UnionFind,
    accepted: Vec<(usize, usize)>,
    rejected_cycle: usize,
    rejected_crossing: usize,
}

impl ForestBuilder {
    pub fn new(nodes: &[Node]) -> Self {
        Self {
            positions: nodes.iter().map(Node::pos).collect(),
            components: UnionFind::new(nodes.len()),
            accepted: Vec::new(),
            rejected_cycle: 0,
            rejected_crossing: 0,
        }
    }

    /// Try one candidate; true if it was accepted.
    pub fn offer(&mut self, cand: &CandidateEdge) -> bool {
        if self.components.connected(cand.source, cand.target) {
            self.rejected_cycle += 1;
            return false;
        }
        let a = self.positions[cand.source];
        let b = self.positions[cand.target];
        let crosses = self
            .accepted
            .iter()
            .any(|&(s, t)| intersects(a, b, self.positions[s], self.positions[t]));
        if crosses {
            self.rejected_crossing += 1;
            return false;
        }
        self.accepted.push((cand.source, cand.target));
        self.components.union(cand.source, cand.target);
        true
    }

    pub fn accepted(&self) -> &[(usize, usize)] {
        &self.accepted
    }

    /// Accepted edges as records, in acceptance order.
    pub fn finish(self, nodes: &[Node]) -> Vec<Edge> {
        tracing::debug!(
            accepted = self.accepted.len(),
            rejected_cycle = self.rejected_cycle,
            rejected_crossing = self.rejected_crossing,
            "forest built"
        );
        self.accepted
            .into_iter()
            .map(|(s, t)| Edge::between(&nodes[s], &nodes[t]))
            .collect()
    }
}

/// Build the non-crossing forest from candidates sorted ascending by distance.
pub fn build_forest(nodes: &[Node], candidates: &[CandidateEdge]) -> Vec<Edge> {
    let mut builder = ForestBuilder::new(nodes);
    let max_edges = nodes.len().saturating_sub(1);
    for cand in candidates {
        if builder.accepted().len() == max_edges {
            break;
        }
        builder.offer(cand);
    }
    builder.finish(nodes)
}
