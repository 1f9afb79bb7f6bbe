//! # Shoresh Protocol
//!
//! Shared serializable data model for the root relationship-graph engine.
//!
//! Everything that crosses a crate or worker boundary lives here: the root
//! catalogue entries, the pipeline configuration knobs, and the node/edge
//! lists plus diagnostics that the rendering side consumes. All types are
//! plain data — no references to UI or engine state.

mod catalogue;
mod config;
mod graph;

pub use catalogue::{ExpandedRoot, Root, RootCatalogue};
pub use config::{PipelineConfig, GRADE_DISABLED, GRADE_MAX};
pub use graph::{
    EdgeKind, GenerationRange, GraphDiagnostics, GraphEdge, GraphNode, GraphResult,
    NodeColorAssignment,
};
