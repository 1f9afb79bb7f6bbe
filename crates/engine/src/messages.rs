use shoresh_protocol::{GraphNode, GraphResult, NodeColorAssignment, PipelineConfig, Root};

/// One request crossing into the worker. Plain serializable data only — no
/// references to caller state.
#[derive(Debug, Clone)]
pub enum EngineRequest {
    Graph {
        computation_id: u64,
        seeds: Vec<Root>,
        config: PipelineConfig,
    },
    Highlight {
        computation_id: u64,
        /// Already-built node data; highlighting never re-runs the pipeline.
        nodes: Vec<GraphNode>,
        query: String,
    },
}

/// The worker's answer, tagged with the computation id it belongs to so the
/// receiving side can reject anything stale.
#[derive(Debug, Clone)]
pub enum EngineResponse {
    Graph {
        computation_id: u64,
        result: GraphResult,
    },
    Highlight {
        computation_id: u64,
        colors: Vec<NodeColorAssignment>,
    },
}
