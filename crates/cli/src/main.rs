use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use graphgen::augment::{local_neighborhood, AugmentCfg, Augmenter, Delaunay};
use graphgen::sample::{RngSource, SamplerCfg};
use graphgen::{generate_with, GenerateCfg, GenerateParams, Graph};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Generate planar graphs and inspect them")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a graph and write `{nodes, edges}` JSON
    Generate {
        #[command(flatten)]
        gen: GenArgs,
        /// Output path; stdout when absent. A provenance sidecar is written next to it.
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the ids in the triangulation neighborhood of one node
    Neighborhood {
        #[command(flatten)]
        gen: GenArgs,
        #[arg(long)]
        node: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct GenArgs {
    #[arg(long, default_value_t = 100)]
    points: usize,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    seed: i64,
    #[arg(long, default_value_t = 1024)]
    width: u32,
    #[arg(long, default_value_t = 1024)]
    height: u32,
    /// Percentage of leaves that get an extra edge (0-100)
    #[arg(long, default_value_t = 50)]
    connectivity: u32,
    #[arg(long, value_enum, default_value_t = AugmenterArg::Neighborhood)]
    augmenter: AugmenterArg,
    #[arg(long, value_enum, default_value_t = RngArg::Std)]
    rng: RngArg,
    /// Draws allowed per point before sampling gives up
    #[arg(long)]
    max_attempts: Option<u32>,
    /// Skip augmentation targets already joined to the leaf
    #[arg(long)]
    skip_linked: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AugmenterArg {
    Neighborhood,
    BoundaryWalk,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RngArg {
    Std,
    Lcg,
}

impl GenArgs {
    fn params(&self) -> GenerateParams {
        GenerateParams::new(
            self.points,
            self.seed,
            self.width,
            self.height,
            self.connectivity,
        )
    }

    fn cfg(&self) -> GenerateCfg {
        let base = GenerateCfg::default();
        GenerateCfg {
            sampler: SamplerCfg {
                rng: match self.rng {
                    RngArg::Std => RngSource::Std,
                    RngArg::Lcg => RngSource::Lcg,
                },
                max_attempts: self.max_attempts.unwrap_or(base.sampler.max_attempts),
                ..base.sampler
            },
            augment: AugmentCfg {
                strategy: match self.augmenter {
                    AugmenterArg::Neighborhood => Augmenter::Neighborhood,
                    AugmenterArg::BoundaryWalk => Augmenter::BoundaryWalk,
                },
                skip_linked: self.skip_linked,
                ..base.augment
            },
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { gen, out } => run_generate(&gen, out.as_deref()),
        Action::Neighborhood { gen, node } => run_neighborhood(&gen, &node),
        Action::Report => report(),
    }
}

fn build(gen: &GenArgs) -> Result<(GenerateParams, GenerateCfg, Graph)> {
    let params = gen.params();
    let cfg = gen.cfg();
    let graph = generate_with(&params, &cfg)
        .with_context(|| format!("generating graph for {params:?}"))?;
    Ok((params, cfg, graph))
}

fn run_generate(gen: &GenArgs, out: Option<&str>) -> Result<()> {
    let (params, cfg, graph) = build(gen)?;
    match out {
        Some(out) => {
            write_graph(Path::new(out), &graph)?;
            let payload = provenance::Payload::new(serde_json::json!({
                "params": params,
                "cfg": cfg,
                "edges": { "spanning": graph.spanning_len, "total": graph.edges.len() },
            }));
            let sidecar = provenance::write_sidecar(out, payload)?;
            tracing::info!(out, sidecar = %sidecar.display(), "wrote graph");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer(&mut stdout, &graph)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn write_graph(path: &Path, graph: &Graph) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec(graph)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn neighborhood_ids(graph: &Graph, id: &str) -> Result<Vec<String>> {
    let Some(node) = graph.node(id) else {
        bail!("no node with id {id} (graph has {} nodes)", graph.nodes.len());
    };
    let tri = Delaunay::from_nodes(&graph.nodes);
    Ok(local_neighborhood(&tri, &graph.nodes, node.pos())
        .into_iter()
        .map(|n| n.id.clone())
        .collect())
}

fn run_neighborhood(gen: &GenArgs, id: &str) -> Result<()> {
    let (_, _, graph) = build(gen)?;
    let ids = neighborhood_ids(&graph, id)?;
    tracing::info!(node = id, count = ids.len(), "neighborhood");
    println!("{}", serde_json::to_string(&ids)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": graphgen::VERSION,
        "params": GenerateParams::default(),
        "cfg": GenerateCfg::default(),
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphgen::Group;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(args).unwrap()
    }

    #[test]
    fn generate_defaults() {
        let Action::Generate { gen, out } = parse(&["cli", "generate"]).action else {
            panic!("expected generate");
        };
        assert_eq!(gen.params(), GenerateParams::default());
        assert_eq!(gen.cfg(), GenerateCfg::default());
        assert!(out.is_none());
    }

    #[test]
    fn flags_map_onto_config() {
        let cmd = parse(&[
            "cli",
            "generate",
            "--points",
            "12",
            "--seed",
            "-3",
            "--augmenter",
            "boundary-walk",
            "--rng",
            "lcg",
            "--max-attempts",
            "500",
            "--skip-linked",
        ]);
        let Action::Generate { gen, .. } = cmd.action else {
            panic!("expected generate");
        };
        assert_eq!(gen.params().point_count, 12);
        assert_eq!(gen.params().seed, -3);
        let cfg = gen.cfg();
        assert_eq!(cfg.augment.strategy, Augmenter::BoundaryWalk);
        assert!(cfg.augment.skip_linked);
        assert_eq!(cfg.sampler.rng, RngSource::Lcg);
        assert_eq!(cfg.sampler.max_attempts, 500);
    }

    #[test]
    fn generate_writes_graph_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/graph.json");
        let gen = GenArgs {
            points: 20,
            seed: 42,
            width: 300,
            height: 300,
            connectivity: 50,
            augmenter: AugmenterArg::Neighborhood,
            rng: RngArg::Std,
            max_attempts: None,
            skip_linked: false,
        };
        run_generate(&gen, out.to_str()).unwrap();

        let graph: Graph = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(graph.nodes.len(), 20);
        assert!(graph
            .nodes
            .iter()
            .all(|n| matches!(n.group, Group::Default | Group::Isolated)));

        let sidecar = dir.path().join("nested/graph.provenance.json");
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["params"]["seed"], 42);
        assert_eq!(doc["params"]["cfg"]["augment"]["strategy"], "neighborhood");
    }

    #[test]
    fn neighborhood_of_unknown_node_fails() {
        let gen = parse(&["cli", "generate", "--points", "8", "--width", "200", "--height", "200"]);
        let Action::Generate { gen, .. } = gen.action else {
            panic!("expected generate");
        };
        let (_, _, graph) = build(&gen).unwrap();
        assert!(neighborhood_ids(&graph, "node99").is_err());
        let ids = neighborhood_ids(&graph, "node1").unwrap();
        assert!(!ids.contains(&"node1".to_string()));
    }

    #[test]
    fn invalid_connectivity_surfaces_as_error() {
        let gen = GenArgs {
            points: 5,
            seed: 0,
            width: 200,
            height: 200,
            connectivity: 150,
            augmenter: AugmenterArg::Neighborhood,
            rng: RngArg::Std,
            max_attempts: None,
            skip_linked: false,
        };
        let err = build(&gen).unwrap_err();
        assert!(format!("{err:#}").contains("connectivity"));
    }
}
