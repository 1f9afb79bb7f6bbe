use shoresh_meaning::GradeSource;
use shoresh_protocol::{EdgeKind, ExpandedRoot, GraphEdge, GraphNode};
use shoresh_rules::RuleSet;
use std::collections::HashSet;

/// Width of an edge with no known meaning grade.
const LETTER_EDGE_WIDTH: f32 = 1.0;

/// Meaning-classified edges scale their width with the grade.
fn meaning_width(grade: u8) -> f32 {
    f32::from(grade) * 1.5
}

/// Convert a finalized root list into capped node and edge lists.
///
/// The root list is truncated to `max_nodes` as a stable prefix and each
/// survivor gets the positional id `index + 1`. The edge scan is row-major
/// over the truncated list and stops the moment `max_edges` edges exist —
/// that order decides which edges are cut off, so it is load-bearing for
/// determinism. Structurally every edge comes from a letter rule; when a
/// nonzero meaning grade exists between the endpoints the edge is classified
/// meaning-based and its width scales with the grade.
pub fn build_graph(
    roots: &[ExpandedRoot],
    rules: &RuleSet,
    grades: &dyn GradeSource,
    max_nodes: usize,
    max_edges: usize,
) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let kept = &roots[..roots.len().min(max_nodes)];

    let nodes: Vec<GraphNode> = kept
        .iter()
        .enumerate()
        .map(|(index, expanded)| {
            let skeleton = expanded.root.skeleton();
            let label = if expanded.generation > 1 {
                format!("{} ({})", skeleton, expanded.generation)
            } else {
                skeleton.clone()
            };
            GraphNode {
                id: index + 1,
                root_id: expanded.root.id,
                label,
                tooltip: format!("{} — {}", skeleton, expanded.root.definition),
                generation: Some(expanded.generation),
            }
        })
        .collect();

    let mut edges = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    'scan: for i in 0..kept.len() {
        for j in (i + 1)..kept.len() {
            if edges.len() >= max_edges {
                log::debug!("edge cap {max_edges} reached, truncating scan");
                break 'scan;
            }
            if !rules.linked(&kept[i].root, &kept[j].root) {
                continue;
            }
            if !seen.insert((i + 1, j + 1)) {
                continue;
            }

            let grade = grades.grade(kept[i].root.id, kept[j].root.id);
            let (width, kind) = if grade > 0 {
                (meaning_width(grade), EdgeKind::MeaningBased)
            } else {
                (LETTER_EDGE_WIDTH, EdgeKind::LetterBased)
            };
            edges.push(GraphEdge {
                from: i + 1,
                to: j + 1,
                width,
                grade,
                kind,
            });
        }
    }

    log::info!(
        "built relationship graph: {} nodes, {} edges",
        nodes.len(),
        edges.len()
    );

    (nodes, edges)
}
