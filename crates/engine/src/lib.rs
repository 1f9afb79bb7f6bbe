//! # Shoresh Engine
//!
//! Asynchronous shell around the graph pipeline. The pipeline itself is a
//! pure function; this crate gives it a dedicated worker task, message-based
//! request/response plumbing, debounced dispatch for slider-style rapid
//! reconfiguration, and computation-id staleness detection so that a result
//! overtaken by a newer request is discarded on arrival rather than shown.
//!
//! The graph stream and the highlight stream are fully independent: each has
//! its own monotonic computation id and its own debounce window, and the
//! highlight stream never re-runs the pipeline.

mod engine;
mod error;
mod messages;

pub use engine::{EngineConfig, EngineHandle, GraphEngine};
pub use error::{EngineError, Result};
pub use messages::{EngineRequest, EngineResponse};
