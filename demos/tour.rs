//! A guided walk through the graph API.
//!
//! Builds the six-edge sample graph, runs every algorithm on it, then mutates it and
//! runs a few again.
//!
//! ```text
//! cargo run --example tour -- --verbose
//! cargo run --example tour -- --undirected
//! ```

use std::collections::BTreeMap;

use clap::Parser;
use dsgraph::Graph;

/// dsgraph tour - exercise every graph operation on a small sample graph
#[derive(Debug, Parser)]
#[command(name = "tour", version, about, long_about = None)]
struct Cli {
    /// Build the sample as an undirected graph.
    #[arg(short, long)]
    undirected: bool,

    /// Enable verbose (trace-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // dsgraph debug+ on stderr; --verbose enables trace; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter_module("dsgraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut graph = Graph::new(!cli.undirected);
    graph.extend([
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("C", "A"),
        ("C", "D"),
        ("D", "D"),
    ]);

    let kind = if graph.is_directed() { "directed" } else { "undirected" };
    println!("Graph ({kind}, {} edges):", graph.edge_count());
    println!("{graph}");

    println!("\nGraph size (number of nodes): {}", graph.len());
    println!("Is 'A' in the graph? {}", graph.contains(&"A"));
    println!("Is 'E' in the graph? {}", graph.contains(&"E"));
    println!("Does graph have edge 'A' -> 'B'? {}", graph.has_edge(&"A", &"B"));
    println!("Does graph have edge 'B' -> 'A'? {}", graph.has_edge(&"B", &"A"));
    println!(
        "Neighbors of 'A': {:?}",
        graph.neighbors(&"A").collect::<Vec<_>>()
    );

    println!("\nDepth first order from 'A': {:?}", graph.dfs_order(&"A")?);
    println!("Breadth first order from 'A': {:?}", graph.bfs_order(&"A")?);

    println!(
        "\nShortest path from 'A' to 'D': {:?}",
        graph.shortest_path(&"A", &"D")?
    );
    let distances: BTreeMap<_, _> = graph
        .unit_distances(&"A")?
        .into_iter()
        .map(|(node, distance)| (node, distance.to_string()))
        .collect();
    println!("Unit distances from 'A': {distances:?}");

    println!("\nTopological sort: {:?}", graph.topological_sort());
    match graph.checked_topological_sort() {
        Ok(order) => println!("Checked topological sort: {order:?}"),
        Err(e) => println!("Checked topological sort: {e}"),
    }
    println!("Is the graph cyclic? {}", graph.is_cyclic());
    println!("First cycle: {:?}", graph.find_cycle());
    println!("Connected components: {:?}", graph.connected_components());
    println!(
        "Strongly connected components: {:?}",
        graph.strongly_connected_components()
    );

    println!("\nBFS spanning tree:");
    println!("{}", graph.minimum_spanning_tree());

    println!("\nAdjacency matrix:");
    println!("{}", graph.to_adjacency_matrix());

    println!("\nRemoving node 'D'...");
    graph.remove_node(&"D");
    println!("{graph}");

    println!("\nRemoving edge 'A' -> 'B'...");
    graph.remove_edge(&"A", &"B");
    println!("{graph}");

    println!("\nRe-adding 'A' -> 'B' and 'C' -> 'D':");
    graph.add_edge("A", "B");
    graph.add_edge("C", "D");
    println!("{graph}");

    println!("\nIs the graph cyclic? {}", graph.is_cyclic());
    println!("Connected components: {:?}", graph.connected_components());
    println!("BFS spanning tree:\n{}", graph.minimum_spanning_tree());

    Ok(())
}
