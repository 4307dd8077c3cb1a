//! Non-crossing spanning forest: candidate enumeration and Kruskal with a
//! planarity veto.
//!
//! Purpose
//! - Connect sampled nodes shortest-first while never letting two accepted edges
//!   properly cross.
//!
//! Model
//! - Candidates are every ordered pair, stably sorted by distance. The mirrored
//!   duplicate of an accepted pair is a no-op (same component).
//! - A candidate is accepted iff its endpoints lie in different components and it
//!   crosses no accepted edge.
//! - The result is a forest, not an MST: the veto can reject the lightest edge of
//!   a pair and can strand components for good.
//!
//! Cost
//! - Enumeration and sort: `O(n² log n)`. Acceptance checks every accepted edge,
//!   so `O(E²)` worst case; fine for the tens-to-hundreds of nodes targeted.
//!
//! Split into `candidates.rs` (enumeration), `union_find.rs` and `build.rs`.

mod build;
mod candidates;
mod union_find;

pub use build::{build_forest, ForestBuilder};
pub use candidates::{enumerate_candidates, CandidateEdge};
pub use union_find::UnionFind;
