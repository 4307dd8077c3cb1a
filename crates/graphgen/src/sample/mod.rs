//! Seeded point placement with a minimum separation.
//!
//! Model
//! - Each coordinate is `floor(u · dim)` for a unit draw `u`, clamped into
//!   `[margin, dim − margin]`.
//! - A draw closer than `margin` to an already placed point is redrawn.
//! - Redraws per point are capped; a full field fails with `CapacityExceeded`
//!   instead of spinning.
//!
//! Determinism
//! - One 32-bit word per unit draw, from a stream fully determined by the seed and
//!   `RngSource`. Same inputs give bit-identical nodes in the same order.

mod lcg;

pub use lcg::Lcg32;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::geom::distance;
use crate::types::Node;
use nalgebra::Vector2;

/// Distance kept from the field border; also the minimum pairwise separation.
pub const MARGIN: f64 = 10.0;

/// Which uniform stream drives placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RngSource {
    /// `rand`'s `StdRng` seeded with `seed_from_u64`.
    #[default]
    Std,
    /// `Lcg32`; reproduces browser-era layouts.
    Lcg,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerCfg {
    pub margin: f64,
    /// Draws allowed per point before giving up.
    pub max_attempts: u32,
    pub rng: RngSource,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            max_attempts: 10_000,
            rng: RngSource::Std,
        }
    }
}

impl SamplerCfg {
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.margin.is_finite() || self.margin <= 0.0 {
            return Err(GraphError::invalid("margin must be finite and > 0"));
        }
        if self.max_attempts == 0 {
            return Err(GraphError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }

    /// Upper bound on distinct positions: integer coordinates inside the margin
    /// plus the two clamp values per axis.
    fn site_bound(&self, width: u32, height: u32) -> usize {
        let per_axis = |dim: u32| -> u64 {
            let lo = self.margin.ceil();
            let hi = (f64::from(dim) - self.margin).floor();
            (hi - lo + 1.0).max(0.0) as u64 + 2
        };
        usize::try_from(per_axis(width).saturating_mul(per_axis(height))).unwrap_or(usize::MAX)
    }

    fn check_field(&self, width: u32, height: u32) -> Result<(), GraphError> {
        let min_dim = 2.0 * self.margin;
        if f64::from(width) < min_dim || f64::from(height) < min_dim {
            return Err(GraphError::invalid(format!(
                "field {width}x{height} is narrower than twice the margin ({min_dim})"
            )));
        }
        Ok(())
    }
}

/// Place `count` nodes in a `width × height` field.
pub fn sample_nodes(
    count: usize,
    seed: i64,
    width: u32,
    height: u32,
    cfg: &SamplerCfg,
) -> Result<Vec<Node>, GraphError> {
    cfg.validate()?;
    cfg.check_field(width, height)?;
    let sites = cfg.site_bound(width, height);
    if count > sites {
        tracing::debug!(requested = count, sites, "field cannot hold the requested points");
        return Err(GraphError::CapacityExceeded {
            placed: 0,
            requested: count,
            attempts: 0,
        });
    }
    match cfg.rng {
        RngSource::Std => place(
            &mut StdRng::seed_from_u64(seed as u64),
            count,
            width,
            height,
            cfg,
        ),
        RngSource::Lcg => place(&mut Lcg32::from_seed_i64(seed), count, width, height, cfg),
    }
}

#[inline]
fn unit<R: RngCore>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

#[inline]
fn clamp_coord(v: f64, dim: u32, margin: f64) -> f64 {
    let hi = f64::from(dim) - margin;
    if v < margin {
        margin
    } else if v > hi {
        hi
    } else {
        v
    }
}

fn place<R: RngCore>(
    rng: &mut R,
    count: usize,
    width: u32,
    height: u32,
    cfg: &SamplerCfg,
) -> Result<Vec<Node>, GraphError> {
    let mut nodes: Vec<Node> = Vec::with_capacity(count);
    let mut redraws: u64 = 0;
    for i in 0..count {
        let mut placed = None;
        for _ in 0..cfg.max_attempts {
            let x = clamp_coord((unit(rng) * f64::from(width)).floor(), width, cfg.margin);
            let y = clamp_coord((unit(rng) * f64::from(height)).floor(), height, cfg.margin);
            let p = Vector2::new(x, y);
            if nodes.iter().all(|n| distance(p, n.pos()) >= cfg.margin) {
                placed = Some(p);
                break;
            }
            redraws += 1;
        }
        let Some(p) = placed else {
            tracing::debug!(placed = i, requested = count, "sampler gave up");
            return Err(GraphError::CapacityExceeded {
                placed: i,
                requested: count,
                attempts: cfg.max_attempts,
            });
        };
        nodes.push(Node::new(i, p.x, p.y));
    }
    tracing::debug!(placed = nodes.len(), redraws, "sampled");
    Ok(nodes)
}
