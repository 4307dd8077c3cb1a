//! Error type shared by every generation phase.

use std::fmt;

/// Failures surfaced to callers of the generator.
///
/// Rejected candidates, missing augmentation targets and disconnected output are
/// normal outcomes and never show up here.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// Caller parameters or configuration out of range; rejected before any work.
    InvalidParameters { reason: String },
    /// The sampler hit its redraw cap before placing every point.
    CapacityExceeded {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
    /// An angle was requested at a vertex that coincides with one of its arms.
    DegenerateAngle,
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { reason } => write!(f, "invalid parameters: {reason}"),
            Self::CapacityExceeded {
                placed,
                requested,
                attempts,
            } => write!(
                f,
                "field capacity exceeded: placed {placed} of {requested} points \
                 ({attempts} redraws for the next point)"
            ),
            Self::DegenerateAngle => write!(f, "angle undefined: coincident points"),
        }
    }
}

impl std::error::Error for GraphError {}
