//! Edge and leaf counts across a few seeds, for eyeballing connectivity.
//!
//! Usage:
//!   cargo run -p graphgen --example graph_stats -- [points] [connectivity]
//!
//! Prints one line per seed: spanning edges, augmented edges, isolated
//! nodes, and leaves left after augmentation.

use graphgen::api::extract_final_nodes;
use graphgen::{generate, Group};

fn main() {
    let mut args = std::env::args().skip(1);
    let points: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let connectivity: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);

    println!("seed  spanning  augmented  isolated  leaves");
    for seed in 0..8 {
        let graph = match generate(points, seed, 1024, 1024, connectivity) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("seed {seed}: {e}");
                continue;
            }
        };
        let isolated = graph
            .nodes
            .iter()
            .filter(|n| n.group == Group::Isolated)
            .count();
        let leaves = extract_final_nodes(&graph.nodes, &graph.edges).len();
        println!(
            "{seed:>4}  {:>8}  {:>9}  {isolated:>8}  {leaves:>6}",
            graph.spanning_len,
            graph.augmented_edges().len(),
        );
    }
}
