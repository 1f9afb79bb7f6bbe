use shoresh_protocol::{GraphEdge, GraphNode};
use std::collections::HashSet;

/// Counts of what the quality pruner removed, for the diagnostics object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub pruned_nodes: usize,
    pub pruned_edges: usize,
}

/// Remove nodes that fail the combined letter-link and meaning-grade
/// criterion, keeping the originally-seeded roots unconditionally.
///
/// A conditionally-valid node survives only with both, against some
/// currently-valid neighbor: (a) a structural letter edge (every edge is
/// one), and (b) an edge whose meaning grade meets `threshold`. One edge
/// carrying a sufficient grade satisfies both at once. Validation is an
/// iterative fixpoint: a node validated in one pass can validate its own
/// neighbors in the next. Afterwards edges with an invalid endpoint are
/// dropped, then the invalid nodes themselves.
///
/// A `threshold` of 0 disables pruning entirely.
pub fn prune_by_grade(
    nodes: &mut Vec<GraphNode>,
    edges: &mut Vec<GraphEdge>,
    seed_root_ids: &HashSet<u32>,
    threshold: u8,
) -> PruneStats {
    if threshold == 0 {
        return PruneStats::default();
    }

    let mut valid: HashSet<usize> = nodes
        .iter()
        .filter(|node| seed_root_ids.contains(&node.root_id))
        .map(|node| node.id)
        .collect();

    loop {
        let mut changed = false;
        for node in nodes.iter() {
            if valid.contains(&node.id) {
                continue;
            }
            let mut has_letter_edge = false;
            let mut has_graded_edge = false;
            for edge in edges.iter() {
                let other = if edge.from == node.id {
                    edge.to
                } else if edge.to == node.id {
                    edge.from
                } else {
                    continue;
                };
                if !valid.contains(&other) {
                    continue;
                }
                has_letter_edge = true;
                if edge.grade >= threshold {
                    has_graded_edge = true;
                }
                if has_letter_edge && has_graded_edge {
                    break;
                }
            }
            if has_letter_edge && has_graded_edge {
                valid.insert(node.id);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let edges_before = edges.len();
    edges.retain(|edge| valid.contains(&edge.from) && valid.contains(&edge.to));
    let nodes_before = nodes.len();
    nodes.retain(|node| valid.contains(&node.id));

    let stats = PruneStats {
        pruned_nodes: nodes_before - nodes.len(),
        pruned_edges: edges_before - edges.len(),
    };
    if stats.pruned_nodes > 0 || stats.pruned_edges > 0 {
        log::info!(
            "quality pruning removed {} nodes and {} edges (grade threshold {threshold})",
            stats.pruned_nodes,
            stats.pruned_edges
        );
    }
    stats
}
