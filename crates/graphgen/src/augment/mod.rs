//! Leaf augmentation: extra edges out of degree-1 nodes.
//!
//! Purpose
//! - The spanning forest leaves many dangling ends. A caller-chosen share of the
//!   leaves (`control` in `[0, 100]`) gets one extra edge each.
//!
//! Strategies
//! - `Neighborhood` (default): furthest non-leaf node of the leaf's Delaunay one-ring.
//! - `BoundaryWalk`: furthest non-leaf node of a short clockwise walk from the
//!   leaf; visited nodes are tagged for rendering.
//!
//! Neither strategy checks crossings for the added edges.

mod boundary;
mod neighborhood;
mod triangulation;

pub use boundary::{augment_by_boundary_walk, boundary_walk, find_third_node, MAX_STEPS};
pub use neighborhood::{augment_by_neighborhood, local_neighborhood};
pub use triangulation::{Delaunay, Triangulation};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::types::{Edge, Node};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Augmenter {
    #[default]
    Neighborhood,
    BoundaryWalk,
}

/// Augmentation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentCfg {
    pub strategy: Augmenter,
    /// Candidates ranked per boundary-walk step.
    pub walk_neighbors: usize,
    /// Pass over targets already joined to the leaf.
    pub skip_linked: bool,
}

impl Default for AugmentCfg {
    fn default() -> Self {
        Self {
            strategy: Augmenter::Neighborhood,
            walk_neighbors: 30,
            skip_linked: false,
        }
    }
}

impl AugmentCfg {
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.strategy == Augmenter::BoundaryWalk && self.walk_neighbors == 0 {
            return Err(GraphError::invalid("walk_neighbors must be > 0"));
        }
        Ok(())
    }
}

/// Leaves that receive an extra edge: `round(control / (100 / leaves))`,
/// at most `leaves`.
pub fn augment_budget(control: u32, leaves: usize) -> usize {
    if leaves == 0 {
        return 0;
    }
    let share = f64::from(control) / (100.0 / leaves as f64);
    (share.round() as usize).min(leaves)
}

pub(crate) fn already_linked(a: &Node, b: &Node, edges: &[Edge], added: &[Edge]) -> bool {
    let probe = Edge::between(a, b);
    edges.iter().chain(added).any(|e| e.same_pair(&probe))
}

/// Run the configured strategy; returns only the new edges.
pub fn augment(nodes: &mut [Node], edges: &[Edge], control: u32, cfg: &AugmentCfg) -> Vec<Edge> {
    match cfg.strategy {
        Augmenter::Neighborhood => {
            let tri = Delaunay::from_nodes(nodes);
            augment_by_neighborhood(&tri, nodes, edges, control, cfg.skip_linked)
        }
        Augmenter::BoundaryWalk => {
            augment_by_boundary_walk(nodes, edges, control, cfg.walk_neighbors, cfg.skip_linked)
        }
    }
}
