use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures of the execution context itself.
///
/// A dead worker is deliberately distinct from a normal empty graph: the
/// caller decides on any fallback (for example a synchronous recomputation),
/// which is outside this crate's scope.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine worker is no longer running")]
    WorkerGone,
}
