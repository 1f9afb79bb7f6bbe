//! # Shoresh Graph
//!
//! Derives a relationship graph over a selected subset of lexical roots.
//!
//! ```text
//! seed Root[]
//!     │
//!     ├──> Meaning expansion (grade >= threshold pulls roots in)
//!     │
//!     ├──> Transitive letter-link expansion (BFS closure, generation tags)
//!     │
//!     ├──> Generation filter (max_generation)
//!     │
//!     ├──> Graph builder (capped nodes/edges, grade-scaled widths)
//!     │
//!     ├──> Quality pruner (letter + meaning retention fixpoint)
//!     │
//!     └──> GraphResult { nodes, edges, generation range, diagnostics }
//! ```
//!
//! Everything here is a pure function of (seed roots, catalogue, config,
//! grade source); the async shell lives in `shoresh-engine`.

mod builder;
mod expand;
mod highlight;
mod pipeline;
mod pruner;

pub use builder::build_graph;
pub use expand::{expand_transitively, Expansion, MAX_EXPANSION_ROUNDS};
pub use highlight::{compute_highlights, DEFAULT_NODE_COLOR, HIGHLIGHT_COLOR};
pub use pipeline::compute_graph;
pub use pruner::{prune_by_grade, PruneStats};
