//! Triangulation seam used by the neighborhood augmenter.

use nalgebra::Vector2;

use crate::geom::distance;
use crate::types::Node;

/// What the augmenter needs from a triangulation: triangles as site-index
/// triples, and the site nearest a query point.
pub trait Triangulation {
    fn triangles(&self) -> &[[usize; 3]];

    /// Index of the closest site; `None` when there are no sites.
    fn nearest_site(&self, p: Vector2<f64>) -> Option<usize>;
}

/// Delaunay triangulation of the node positions, backed by `delaunator`.
///
/// Fewer than three sites, or all sites collinear, give no triangles.
#[derive(Clone, Debug)]
pub struct Delaunay {
    sites: Vec<Vector2<f64>>,
    triangles: Vec<[usize; 3]>,
}

impl Delaunay {
    pub fn new(points: &[Vector2<f64>]) -> Self {
        if points.len() < 3 {
            return Self {
                sites: points.to_vec(),
                triangles: Vec::new(),
            };
        }
        let input: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let result = delaunator::triangulate(&input);
        let triangles = result
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        Self {
            sites: points.to_vec(),
            triangles,
        }
    }

    pub fn from_nodes(nodes: &[Node]) -> Self {
        let points: Vec<Vector2<f64>> = nodes.iter().map(Node::pos).collect();
        Self::new(&points)
    }

    pub fn sites(&self) -> &[Vector2<f64>] {
        &self.sites
    }
}

impl Triangulation for Delaunay {
    fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    fn nearest_site(&self, p: Vector2<f64>) -> Option<usize> {
        // Ties go to the lower index.
        self.sites
            .iter()
            .enumerate()
            .map(|(i, s)| (i, distance(p, *s)))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| i)
    }
}
