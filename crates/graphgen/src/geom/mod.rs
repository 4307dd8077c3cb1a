//! Planar geometry primitives used by every phase.
//!
//! - `vector`: distance, dot, magnitude, the angle at a vertex.
//! - `segment`: the strict orientation test and proper-crossing predicate.
//! - `neighbors`: nodes ordered by distance from an origin node.

mod neighbors;
mod segment;
mod vector;

pub use neighbors::{find_furthest, find_nearest, nearest};
pub use segment::{ccw, intersects};
pub use vector::{angle_at, cross, degrees, distance, dot, magnitude, translate};

#[cfg(test)]
mod tests;
