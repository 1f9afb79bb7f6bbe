use anyhow::{Context, Result};
use clap::Parser;
use shoresh_graph::{compute_graph, compute_highlights};
use shoresh_meaning::SparseGradeTable;
use shoresh_protocol::{PipelineConfig, Root, RootCatalogue};
use std::fs;
use std::path::PathBuf;

/// Derive a relationship graph over a set of lexical roots and print it as
/// JSON. Stdout carries only the result; logs go to stderr.
#[derive(Parser)]
#[command(name = "shoresh")]
#[command(about = "Relationship-graph derivation for a lexical root catalogue", long_about = None)]
#[command(version)]
struct Cli {
    /// Root catalogue JSON: an array of {id, letters, definition}
    #[arg(long)]
    catalogue: PathBuf,

    /// Meaning-grade table JSON: an array of {a, b, grade} (optional)
    #[arg(long)]
    grades: Option<PathBuf>,

    /// Comma-separated seed root ids
    #[arg(long, value_delimiter = ',')]
    seeds: Vec<u32>,

    /// Pipeline configuration JSON; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum grade for meaning-based expansion (6 disables it)
    #[arg(long)]
    link_by_meaning: Option<u8>,

    /// Minimum grade for quality pruning (0 disables it)
    #[arg(long)]
    prune_by_grade: Option<u8>,

    /// Keep roots up to this expansion generation
    #[arg(long)]
    max_generation: Option<u32>,

    /// Node cap for the built graph
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Edge cap for the built graph
    #[arg(long)]
    max_edges: Option<usize>,

    /// Drop nodes left without any edge
    #[arg(long)]
    remove_isolated: bool,

    /// Also evaluate a highlight query against the produced nodes
    #[arg(long)]
    query: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let catalogue = load_catalogue(&cli)?;
    let grades = load_grades(&cli)?;
    let config = build_config(&cli)?;
    let seeds = resolve_seeds(&cli, &catalogue)?;

    let result = compute_graph(seeds, &catalogue, &config, &grades);

    if let Some(query) = &cli.query {
        let colors = compute_highlights(&result.nodes, &catalogue, query);
        let combined = serde_json::json!({ "graph": result, "highlights": colors });
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn load_catalogue(cli: &Cli) -> Result<RootCatalogue> {
    let raw = fs::read_to_string(&cli.catalogue)
        .with_context(|| format!("reading catalogue {}", cli.catalogue.display()))?;
    let catalogue: RootCatalogue =
        serde_json::from_str(&raw).context("parsing catalogue JSON")?;
    log::info!("loaded {} roots", catalogue.len());
    Ok(catalogue)
}

fn load_grades(cli: &Cli) -> Result<SparseGradeTable> {
    let Some(path) = &cli.grades else {
        return Ok(SparseGradeTable::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading grade table {}", path.display()))?;
    serde_json::from_str(&raw).context("parsing grade table JSON")
}

fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing config JSON")?
        }
        None => PipelineConfig::default(),
    };

    if let Some(threshold) = cli.link_by_meaning {
        config.link_by_meaning_threshold = threshold;
    }
    if let Some(threshold) = cli.prune_by_grade {
        config.prune_by_grade_threshold = threshold;
    }
    if let Some(max_generation) = cli.max_generation {
        config.max_generation = max_generation;
    }
    if let Some(max_nodes) = cli.max_nodes {
        config.max_nodes = max_nodes;
    }
    if let Some(max_edges) = cli.max_edges {
        config.max_edges = max_edges;
    }
    if cli.remove_isolated {
        config.remove_isolated_nodes = true;
    }
    Ok(config)
}

fn resolve_seeds(cli: &Cli, catalogue: &RootCatalogue) -> Result<Vec<Root>> {
    let mut seeds = Vec::with_capacity(cli.seeds.len());
    for id in &cli.seeds {
        match catalogue.get(*id) {
            Some(root) => seeds.push(root.clone()),
            // Unknown ids are a data gap, not a fatal input error.
            None => log::warn!("seed id {id} not found in catalogue; skipping"),
        }
    }
    Ok(seeds)
}
