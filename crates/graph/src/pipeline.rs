use crate::builder::build_graph;
use crate::expand::expand_transitively;
use crate::pruner::prune_by_grade;
use shoresh_meaning::{expand_by_meaning, GradeSource};
use shoresh_protocol::{
    ExpandedRoot, GenerationRange, GraphDiagnostics, GraphEdge, GraphNode, GraphResult,
    PipelineConfig, Root, RootCatalogue,
};
use shoresh_rules::RuleSet;
use std::collections::{HashMap, HashSet};

/// Run the full derivation pipeline over one immutable input snapshot.
///
/// Stage order: meaning expansion → transitive letter-link expansion →
/// generation filter → graph build → quality pruning → optional
/// isolated-node removal. Every boundary count lands in the diagnostics.
pub fn compute_graph(
    seed_roots: Vec<Root>,
    catalogue: &RootCatalogue,
    config: &PipelineConfig,
    grades: &dyn GradeSource,
) -> GraphResult {
    // A root submitted twice is still one seed; keep the first occurrence so
    // a duplicated homonym id cannot pair with itself downstream.
    let mut seed_ids = HashSet::new();
    let seed_roots: Vec<Root> = seed_roots
        .into_iter()
        .filter(|root| seed_ids.insert(root.id))
        .collect();
    let mut diagnostics = GraphDiagnostics {
        seed_count: seed_roots.len(),
        ..GraphDiagnostics::default()
    };
    let seeds: Vec<ExpandedRoot> = seed_roots.into_iter().map(ExpandedRoot::seed).collect();

    let with_meaning = expand_by_meaning(
        seeds,
        catalogue,
        grades,
        config.link_by_meaning_threshold,
    );
    diagnostics.meaning_added = with_meaning.len() - diagnostics.seed_count;

    let rules = RuleSet::from_config(config);
    let before_letter = with_meaning.len();
    let expansion = expand_transitively(with_meaning, catalogue, &rules);
    diagnostics.letter_added = expansion.roots.len() - before_letter;
    diagnostics.expansion_rounds = expansion.rounds;
    diagnostics.round_cap_hit = expansion.cap_hit;

    let filtered: Vec<ExpandedRoot> = expansion
        .roots
        .into_iter()
        .filter(|root| root.generation <= config.max_generation)
        .collect();
    diagnostics.after_generation_filter = filtered.len();

    let (mut nodes, mut edges) = build_graph(
        &filtered,
        &rules,
        grades,
        config.max_nodes,
        config.max_edges,
    );

    let stats = prune_by_grade(
        &mut nodes,
        &mut edges,
        &seed_ids,
        config.prune_by_grade_threshold,
    );
    diagnostics.pruned_nodes = stats.pruned_nodes;
    diagnostics.pruned_edges = stats.pruned_edges;

    if config.remove_isolated_nodes {
        diagnostics.isolated_removed = remove_isolated(&mut nodes, &edges);
    }
    reindex(&mut nodes, &mut edges);

    let generation_range = generation_range(&nodes);

    log::info!(
        "pipeline finished: {} seeds -> {} nodes, {} edges ({:?})",
        diagnostics.seed_count,
        nodes.len(),
        edges.len(),
        generation_range,
    );

    GraphResult {
        nodes,
        edges,
        generation_range,
        diagnostics,
    }
}

/// Drop nodes with no remaining edges; returns how many went.
fn remove_isolated(nodes: &mut Vec<GraphNode>, edges: &[GraphEdge]) -> usize {
    let connected: HashSet<usize> = edges
        .iter()
        .flat_map(|edge| [edge.from, edge.to])
        .collect();
    let before = nodes.len();
    nodes.retain(|node| connected.contains(&node.id));
    before - nodes.len()
}

/// Re-assign dense 1-based positional ids after removals and re-point edges.
fn reindex(nodes: &mut [GraphNode], edges: &mut [GraphEdge]) {
    let remap: HashMap<usize, usize> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id, index + 1))
        .collect();
    for node in nodes.iter_mut() {
        node.id = remap[&node.id];
    }
    for edge in edges.iter_mut() {
        edge.from = remap[&edge.from];
        edge.to = remap[&edge.to];
    }
}

fn generation_range(nodes: &[GraphNode]) -> Option<GenerationRange> {
    let generations: Vec<u32> = nodes.iter().filter_map(|node| node.generation).collect();
    let min = *generations.iter().min()?;
    let max = *generations.iter().max()?;
    Some(GenerationRange { min, max })
}
