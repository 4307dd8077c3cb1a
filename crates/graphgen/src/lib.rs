//! Procedural planar graphs: seeded point placement, a non-crossing spanning
//! forest, and leaf augmentation.
//!
//! Pipeline
//! - `sample`: rejection-sampled points with a minimum separation.
//! - `spanning`: ordered-pair candidates, Kruskal with a crossing veto.
//! - `leaves`: degree-1 / degree-0 classification.
//! - `augment`: extra edges from leaves (triangulation neighborhood or boundary walk).
//! - `generate`: the end-to-end entry point.
//!
//! API Policy
//! - The records in `types` (`Node`, `Edge`, `Graph`) are what renderers consume;
//!   everything else may change between versions.

pub mod api;
pub mod augment;
pub mod error;
pub mod generate;
pub mod geom;
pub mod leaves;
pub mod sample;
pub mod spanning;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GraphError;
pub use generate::{generate, generate_with, GenerateCfg, GenerateParams};
pub use nalgebra::Vector2 as Vec2;
pub use types::{Edge, Graph, Group, Node};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::augment::{local_neighborhood, Augmenter, Delaunay, Triangulation};
    pub use crate::generate::{generate, generate_with, GenerateCfg, GenerateParams};
    pub use crate::geom::{angle_at, degrees, distance, find_furthest, find_nearest, intersects};
    pub use crate::sample::{RngSource, SamplerCfg};
    pub use crate::types::{Edge, Graph, Group, Node};
    pub use crate::GraphError;
    pub use nalgebra::Vector2 as Vec2;
}
