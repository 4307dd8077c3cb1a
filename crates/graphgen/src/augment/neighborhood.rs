//! Triangulation-neighborhood augmenter.
//!
//! Each chosen leaf gets one extra edge to the furthest non-leaf node of its
//! one-ring (the vertices of every triangle that uses the leaf's site). The ring
//! approximates a local hull; it is not a convex hull. Extra edges skip the
//! crossing check.

use std::collections::{BTreeSet, HashSet};

use nalgebra::Vector2;

use crate::geom::distance;
use crate::leaves::extract_final_nodes;
use crate::types::{Edge, Node};

use super::triangulation::Triangulation;
use super::{augment_budget, already_linked};

/// Nodes sharing a triangle with the site nearest `query`, excluding that site,
/// in ascending index order.
pub fn local_neighborhood<'a, T: Triangulation + ?Sized>(
    tri: &T,
    nodes: &'a [Node],
    query: Vector2<f64>,
) -> Vec<&'a Node> {
    let Some(site) = tri.nearest_site(query) else {
        return Vec::new();
    };
    let ring: BTreeSet<usize> = tri
        .triangles()
        .iter()
        .filter(|t| t.contains(&site))
        .flat_map(|t| t.iter().copied())
        .filter(|&i| i != site)
        .collect();
    ring.into_iter().filter_map(|i| nodes.get(i)).collect()
}

/// Extra edges for the first `budget` leaves; see `augment_budget`.
///
/// With `skip_linked`, ring nodes already joined to the leaf are passed over.
pub fn augment_by_neighborhood<T: Triangulation + ?Sized>(
    tri: &T,
    nodes: &[Node],
    edges: &[Edge],
    control: u32,
    skip_linked: bool,
) -> Vec<Edge> {
    let leaves = extract_final_nodes(nodes, edges);
    let budget = augment_budget(control, leaves.len());
    let leaf_ids: HashSet<&str> = leaves.iter().map(|n| n.id.as_str()).collect();

    let mut added: Vec<Edge> = Vec::new();
    for leaf in leaves.iter().take(budget) {
        let origin = leaf.pos();
        let mut ring = local_neighborhood(tri, nodes, origin);
        ring.sort_by(|a, b| distance(origin, b.pos()).total_cmp(&distance(origin, a.pos())));
        let target = ring.into_iter().find(|c| {
            !leaf_ids.contains(c.id.as_str())
                && !(skip_linked && already_linked(leaf, c, edges, &added))
        });
        if let Some(target) = target {
            added.push(Edge::between(leaf, target));
        }
    }
    tracing::debug!(
        leaves = leaves.len(),
        budget,
        added = added.len(),
        "neighborhood augmentation"
    );
    added
}
