use shoresh_protocol::{GraphNode, NodeColorAssignment, RootCatalogue};
use shoresh_query::Query;

/// Fill color for nodes whose root matches the live-search query.
pub const HIGHLIGHT_COLOR: &str = "#ff8800";

/// Fill color for everything else (the renderer's resting palette).
pub const DEFAULT_NODE_COLOR: &str = "#97c2fc";

/// Evaluate a free-text query against already-built nodes.
///
/// This never re-runs the graph pipeline: the query is parsed once and
/// matched against each node's label and its root's definition. A node whose
/// root id is missing from the catalogue is matched on the label alone
/// (collaborator data gap, not an error). An empty query highlights every
/// node, which the renderer treats as "no search active".
pub fn compute_highlights(
    nodes: &[GraphNode],
    catalogue: &RootCatalogue,
    query: &str,
) -> Vec<NodeColorAssignment> {
    let query = Query::parse(query);

    nodes
        .iter()
        .map(|node| {
            let matched = match catalogue.get(node.root_id) {
                Some(root) => {
                    query.matches(&format!("{} {}", node.label, root.definition))
                }
                None => query.matches(&node.label),
            };
            NodeColorAssignment {
                node_id: node.id,
                color: if matched { HIGHLIGHT_COLOR } else { DEFAULT_NODE_COLOR }.to_string(),
                matched,
            }
        })
        .collect()
}
