//! Records exchanged with renderers.
//!
//! - `Node`: id, render group, coordinates.
//! - `Edge`: endpoints by id and a constant weight.
//! - `Graph`: the generator output; spanning edges come first.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Weight stamped on every edge. Renderers read it as stroke strength.
pub const EDGE_VALUE: f64 = 0.8;

/// Render hint carried by each node. Serialized as its integer tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Group {
    #[default]
    Default,
    /// No incident edge after the spanning phase.
    Isolated,
    /// Visited by a boundary walk.
    Hull,
}

impl Group {
    pub const fn tag(self) -> u8 {
        match self {
            Group::Default => 0,
            Group::Isolated => 3,
            Group::Hull => 5,
        }
    }
}

impl From<Group> for u8 {
    fn from(g: Group) -> u8 {
        g.tag()
    }
}

impl TryFrom<u8> for Group {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Group::Default),
            3 => Ok(Group::Isolated),
            5 => Ok(Group::Hull),
            other => Err(format!("unknown node group {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub group: Group,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Node `index` of a run; ids are 1-based.
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self {
            id: format!("node{}", index + 1),
            group: Group::Default,
            x,
            y,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub value: f64,
}

impl Edge {
    pub fn between(source: &Node, target: &Node) -> Self {
        Self {
            source: source.id.clone(),
            target: target.id.clone(),
            value: EDGE_VALUE,
        }
    }

    /// True if `id` is either endpoint.
    #[inline]
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// True if both edges join the same unordered pair.
    pub fn same_pair(&self, other: &Edge) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

/// Generator output. The first `spanning_len` edges form the non-crossing forest;
/// the rest were added by augmentation.
///
/// The JSON form is `{nodes, edges}` only. A deserialized graph has
/// `spanning_len == 0`, so the split accessors report no spanning edges until the
/// caller restores it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Valid only on graphs returned by the generator; not serialized.
    #[serde(skip)]
    pub spanning_len: usize,
}

impl Graph {
    /// Forest edges. Empty on a deserialized graph.
    pub fn spanning_edges(&self) -> &[Edge] {
        &self.edges[..self.spanning_len.min(self.edges.len())]
    }

    /// Augmentation edges. Every edge on a deserialized graph.
    pub fn augmented_edges(&self) -> &[Edge] {
        &self.edges[self.spanning_len.min(self.edges.len())..]
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
