//! End-to-end generation: sample → candidates → forest → isolated tags →
//! augmentation.
//!
//! `generate_with` is a pure function of its parameters and configuration, so
//! callers may cache results keyed on both.

use serde::{Deserialize, Serialize};

use crate::augment::{augment, AugmentCfg};
use crate::error::GraphError;
use crate::leaves::mark_isolated;
use crate::sample::{sample_nodes, SamplerCfg};
use crate::spanning::{build_forest, enumerate_candidates};
use crate::types::Graph;

/// The five caller-facing knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerateParams {
    pub point_count: usize,
    pub seed: i64,
    pub width: u32,
    pub height: u32,
    /// Share of leaves, in percent, that receive an extra edge.
    pub connectivity: u32,
}

impl GenerateParams {
    pub fn new(point_count: usize, seed: i64, width: u32, height: u32, connectivity: u32) -> Self {
        Self {
            point_count,
            seed,
            width,
            height,
            connectivity,
        }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.point_count == 0 {
            return Err(GraphError::invalid("point_count must be >= 1"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GraphError::invalid("width and height must be > 0"));
        }
        if self.connectivity > 100 {
            return Err(GraphError::invalid(format!(
                "connectivity must be in [0, 100], got {}",
                self.connectivity
            )));
        }
        Ok(())
    }
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self::new(100, 0, 1024, 1024, 50)
    }
}

/// Generator configuration (everything that is not a caller knob).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateCfg {
    pub sampler: SamplerCfg,
    pub augment: AugmentCfg,
}

impl GenerateCfg {
    pub fn validate(&self) -> Result<(), GraphError> {
        self.sampler.validate()?;
        self.augment.validate()
    }
}

/// Generate with the default configuration.
pub fn generate(
    point_count: usize,
    seed: i64,
    width: u32,
    height: u32,
    connectivity: u32,
) -> Result<Graph, GraphError> {
    let params = GenerateParams::new(point_count, seed, width, height, connectivity);
    generate_with(&params, &GenerateCfg::default())
}

pub fn generate_with(params: &GenerateParams, cfg: &GenerateCfg) -> Result<Graph, GraphError> {
    params.validate()?;
    cfg.validate()?;

    let mut nodes = sample_nodes(
        params.point_count,
        params.seed,
        params.width,
        params.height,
        &cfg.sampler,
    )?;
    let candidates = enumerate_candidates(&nodes);
    let mut edges = build_forest(&nodes, &candidates);
    let spanning_len = edges.len();
    let isolated = mark_isolated(&mut nodes, &edges);

    let extra = augment(&mut nodes, &edges, params.connectivity, &cfg.augment);
    edges.extend(extra);

    tracing::info!(
        nodes = nodes.len(),
        spanning = spanning_len,
        augmented = edges.len() - spanning_len,
        isolated,
        "generated"
    );
    Ok(Graph {
        nodes,
        edges,
        spanning_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::Augmenter;
    use crate::geom::distance;
    use crate::sample::RngSource;
    use crate::types::Group;

    #[test]
    fn same_inputs_same_graph() {
        let a = generate(5, 42, 200, 200, 50).unwrap();
        let b = generate(5, 42, 200, 200, 50).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.spanning_len, b.spanning_len);
        assert_eq!(a.nodes.len(), 5);
    }

    #[test]
    fn invalid_params_rejected_up_front() {
        let cases = [
            GenerateParams::new(0, 1, 200, 200, 50),
            GenerateParams::new(5, 1, 0, 200, 50),
            GenerateParams::new(5, 1, 200, 0, 50),
            GenerateParams::new(5, 1, 200, 200, 101),
        ];
        for p in cases {
            assert!(matches!(
                generate_with(&p, &GenerateCfg::default()),
                Err(GraphError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn overfull_field_reports_capacity() {
        let cfg = GenerateCfg {
            sampler: SamplerCfg {
                max_attempts: 200,
                ..SamplerCfg::default()
            },
            ..GenerateCfg::default()
        };
        // A 40×40 field holds at most a handful of 10-unit-separated points.
        let err = generate_with(&GenerateParams::new(200, 7, 40, 40, 50), &cfg).unwrap_err();
        assert!(matches!(err, GraphError::CapacityExceeded { requested: 200, .. }));
    }

    #[test]
    fn zero_connectivity_adds_nothing() {
        let g = generate(60, 3, 400, 400, 0).unwrap();
        assert!(g.augmented_edges().is_empty());
        assert_eq!(g.edges.len(), g.spanning_len);
    }

    #[test]
    fn full_connectivity_touches_leaves_only() {
        let g = generate(80, 11, 500, 500, 100).unwrap();
        let leaves: Vec<String> = crate::leaves::extract_final_nodes(&g.nodes, g.spanning_edges())
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert!(g.augmented_edges().len() <= leaves.len());
        for e in g.augmented_edges() {
            assert!(leaves.contains(&e.source));
            assert!(!leaves.contains(&e.target));
        }
    }

    #[test]
    fn isolated_iff_no_spanning_edge() {
        for seed in 0..6 {
            let g = generate(50, seed, 300, 300, 50).unwrap();
            for n in &g.nodes {
                let incident = g.spanning_edges().iter().any(|e| e.touches(&n.id));
                assert_eq!(n.group == Group::Isolated, !incident, "{n:?}");
            }
        }
    }

    #[test]
    fn boundary_walk_strategy_runs() {
        let cfg = GenerateCfg {
            augment: AugmentCfg {
                strategy: Augmenter::BoundaryWalk,
                ..AugmentCfg::default()
            },
            sampler: SamplerCfg {
                rng: RngSource::Lcg,
                ..SamplerCfg::default()
            },
        };
        let p = GenerateParams::new(40, 0, 300, 300, 100);
        let g = generate_with(&p, &cfg).unwrap();
        assert_eq!(g, generate_with(&p, &cfg).unwrap());
        for a in &g.nodes {
            for b in &g.nodes {
                if a.id != b.id {
                    assert!(distance(a.pos(), b.pos()) >= 10.0);
                }
            }
        }
    }

    #[test]
    fn single_point_graph() {
        let g = generate(1, 5, 100, 100, 100).unwrap();
        assert!(g.edges.is_empty());
        assert_eq!(g.nodes[0].group, Group::Isolated);
    }
}
