use crate::geom::distance;
use crate::types::Node;

/// Ordered pair of node indices with its length. Lives only while the forest is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateEdge {
    pub source: usize,
    pub target: usize,
    pub dist: f64,
}

/// Every ordered pair `(i, j)`, `i ≠ j`, ascending by distance.
///
/// Ties keep enumeration order (outer `i`, inner `j`).
pub fn enumerate_candidates(nodes: &[Node]) -> Vec<CandidateEdge> {
    let n = nodes.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            out.push(CandidateEdge {
                source: i,
                target: j,
                dist: distance(a.pos(), b.pos()),
            });
        }
    }
    // `sort_by` is stable.
    out.sort_by(|a, b| a.dist.total_cmp(&b.dist));
    out
}
