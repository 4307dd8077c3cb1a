//! Curated surface for downstream tools (UNSTABLE).
//!
//! Important
//! - Renderers should only rely on the records in `types` and on `generate`.
//! - The per-phase functions below are exposed for experiments and tests; their
//!   signatures follow the pipeline and may change with it.

// Phases, in pipeline order.
pub use crate::sample::{sample_nodes, Lcg32, RngSource, SamplerCfg};
pub use crate::spanning::{build_forest, enumerate_candidates, CandidateEdge, UnionFind};
pub use crate::leaves::{extract_final_nodes, mark_isolated, occurrence_counts};
pub use crate::augment::{
    augment, augment_budget, augment_by_boundary_walk, augment_by_neighborhood, boundary_walk,
    find_third_node, local_neighborhood, AugmentCfg, Augmenter, Delaunay, Triangulation,
};
// Geometry helpers
pub use crate::geom::{
    angle_at, ccw, degrees, distance, dot, find_furthest, find_nearest, intersects, magnitude,
    translate,
};
// Orchestration
pub use crate::generate::{generate, generate_with, GenerateCfg, GenerateParams};
pub use crate::types::{Edge, Graph, Group, Node, EDGE_VALUE};
