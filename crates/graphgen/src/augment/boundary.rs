//! Angle-based boundary walk.
//!
//! From a start node, step to its nearest neighbor, then keep taking the
//! clockwise turn with the smallest angle among the `k` nearest candidates. The
//! walk stops when it returns to its first step, repeats a node, runs out of
//! candidates, or after `MAX_STEPS`. Only the first three nodes are kept.

use std::collections::HashSet;

use crate::geom::{angle_at, cross, distance, find_nearest, nearest};
use crate::leaves::extract_final_nodes;
use crate::types::{Edge, Group, Node};

use super::{augment_budget, already_linked};

pub const MAX_STEPS: usize = 100;

/// Next node after the step `n1 → n2`: among the `k` pool nodes nearest to `n2`
/// (other than `n1`), the clockwise turn with the smallest angle at `n2`.
pub fn find_third_node<'a>(
    pool: &[&'a Node],
    n1: &Node,
    n2: &Node,
    k: usize,
) -> Option<&'a Node> {
    let heading = n2.pos() - n1.pos();
    let mut best: Option<(f64, &'a Node)> = None;
    for c in find_nearest(pool.iter().copied(), n2, k) {
        if c.id == n1.id || c.pos() == n2.pos() {
            continue;
        }
        if cross(heading, c.pos() - n2.pos()) >= 0.0 {
            continue;
        }
        // Only fails when n1 sits on n2; such a step has no turn to rank.
        let Ok(angle) = angle_at(n1.pos(), n2.pos(), c.pos()) else {
            continue;
        };
        if best.map_or(true, |(a, _)| angle < a) {
            best = Some((angle, c));
        }
    }
    best.map(|(_, c)| c)
}

/// Walk from `start` over the non-leaf nodes; returns at most three nodes.
///
/// Without a valid first turn the walk is `[start, nearest]`.
pub fn boundary_walk<'a>(
    nodes: &'a [Node],
    leaves: &[&Node],
    start: &'a Node,
    k: usize,
) -> Vec<&'a Node> {
    let Some(first) = nearest(nodes, start) else {
        return vec![start];
    };
    let leaf_ids: HashSet<&str> = leaves.iter().map(|n| n.id.as_str()).collect();
    let inner: Vec<&Node> = nodes
        .iter()
        .filter(|n| !leaf_ids.contains(n.id.as_str()))
        .collect();

    let Some(second) = find_third_node(&inner, start, first, k) else {
        return vec![start, first];
    };

    let pool: Vec<&Node> = inner.into_iter().filter(|n| n.id != start.id).collect();
    let mut path = vec![first, second];
    let (mut n1, mut n2) = (first, second);
    for _ in 0..MAX_STEPS {
        let Some(next) = find_third_node(&pool, n1, n2, k) else {
            break;
        };
        if next.id == first.id {
            path.push(next);
            break;
        }
        if path.iter().any(|p| p.id == next.id) {
            break;
        }
        path.push(next);
        n1 = n2;
        n2 = next;
    }
    path.truncate(3);
    path
}

/// Boundary-walk augmentation: each of the first `budget` leaves walks, tags the
/// visited nodes `Group::Hull` (isolated nodes keep their tag), and links to the
/// furthest visited node that is not a leaf.
pub fn augment_by_boundary_walk(
    nodes: &mut [Node],
    edges: &[Edge],
    control: u32,
    k: usize,
    skip_linked: bool,
) -> Vec<Edge> {
    let (added, visited) = {
        let view: &[Node] = nodes;
        let leaves = extract_final_nodes(view, edges);
        let budget = augment_budget(control, leaves.len());
        let leaf_ids: HashSet<&str> = leaves.iter().map(|n| n.id.as_str()).collect();

        let mut added: Vec<Edge> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        for &leaf in leaves.iter().take(budget) {
            let walk = boundary_walk(view, &leaves, leaf, k);
            visited.extend(walk.iter().map(|n| n.id.clone()));
            let origin = leaf.pos();
            let mut targets: Vec<&Node> = walk
                .into_iter()
                .filter(|n| n.id != leaf.id && !leaf_ids.contains(n.id.as_str()))
                .collect();
            targets.sort_by(|a, b| {
                distance(origin, b.pos()).total_cmp(&distance(origin, a.pos()))
            });
            let target = targets
                .into_iter()
                .find(|c| !(skip_linked && already_linked(leaf, c, edges, &added)));
            if let Some(target) = target {
                added.push(Edge::between(leaf, target));
            }
        }
        tracing::debug!(
            leaves = leaves.len(),
            budget,
            added = added.len(),
            visited = visited.len(),
            "boundary-walk augmentation"
        );
        (added, visited)
    };
    for n in nodes.iter_mut() {
        if n.group != Group::Isolated && visited.contains(&n.id) {
            n.group = Group::Hull;
        }
    }
    added
}
