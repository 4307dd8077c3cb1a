//! Degree classification after the spanning phase.
//!
//! - Final (leaf) node: exactly one incident edge.
//! - Isolated node: no incident edge; tagged `Group::Isolated` for renderers.

use std::collections::HashMap;

use crate::types::{Edge, Group, Node};

/// Endpoint occurrences per node id, plus ids in first-occurrence order
/// (source before target, edge by edge).
pub fn occurrence_counts(edges: &[Edge]) -> (HashMap<&str, usize>, Vec<&str>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for e in edges {
        for id in [e.source.as_str(), e.target.as_str()] {
            let c = counts.entry(id).or_insert(0);
            if *c == 0 {
                order.push(id);
            }
            *c += 1;
        }
    }
    (counts, order)
}

/// Nodes that appear exactly once as an edge endpoint, in first-occurrence order.
pub fn extract_final_nodes<'a>(nodes: &'a [Node], edges: &[Edge]) -> Vec<&'a Node> {
    let (counts, order) = occurrence_counts(edges);
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    order
        .into_iter()
        .filter(|id| counts[id] == 1)
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}

/// Tag every node without an incident edge as isolated. Returns how many were tagged.
pub fn mark_isolated(nodes: &mut [Node], edges: &[Edge]) -> usize {
    let (counts, _) = occurrence_counts(edges);
    let mut marked = 0;
    for n in nodes.iter_mut() {
        if !counts.contains_key(n.id.as_str()) {
            n.group = Group::Isolated;
            marked += 1;
        }
    }
    marked
}
