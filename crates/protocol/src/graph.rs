use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Node of a derived relationship graph.
///
/// The id is positional (1-based index into the node list of one run) and is
/// **not** stable across runs; `root_id` is the stable catalogue id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphNode {
    pub id: usize,
    pub root_id: u32,
    pub label: String,
    pub tooltip: String,
    /// Expansion generation (1 = original seed); absent when the run had no
    /// transitive expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u32>,
}

/// Which mechanism the edge is *classified* by for rendering.
///
/// Structurally every edge comes from a letter rule; the classification flips
/// to `MeaningBased` whenever a nonzero grade exists between the endpoints.
/// Width and color derive from the classification, while the pruner reads the
/// structural fact and the grade independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    LetterBased,
    MeaningBased,
}

/// Undirected edge between two positional node ids.
///
/// Identity is unordered: edge(a, b) and edge(b, a) are the same edge, and a
/// node-pair appears at most once in any result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub width: f32,
    /// Meaning grade between the endpoint roots, 0 when none is known.
    pub grade: u8,
    pub kind: EdgeKind,
}

impl GraphEdge {
    /// Canonical unordered key for dedup and symmetric lookups.
    pub fn key(&self) -> (usize, usize) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// Inclusive generation span present in the final node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRange {
    pub min: u32,
    pub max: u32,
}

/// Running counts from each pipeline boundary, for observability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphDiagnostics {
    pub seed_count: usize,
    pub meaning_added: usize,
    pub letter_added: usize,
    pub after_generation_filter: usize,
    pub pruned_nodes: usize,
    pub pruned_edges: usize,
    pub isolated_removed: usize,
    pub expansion_rounds: u32,
    /// True when transitive expansion stopped at the round cap instead of a
    /// fixpoint; the result is partial but still usable.
    pub round_cap_hit: bool,
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GraphResult {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_range: Option<GenerationRange>,
    pub diagnostics: GraphDiagnostics,
}

/// Per-node color produced by the live-search highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NodeColorAssignment {
    pub node_id: usize,
    pub color: String,
    pub matched: bool,
}
