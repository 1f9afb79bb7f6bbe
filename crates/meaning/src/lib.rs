//! # Shoresh Meaning
//!
//! The definition-similarity side of the pipeline: the `GradeSource`
//! collaborator interface (grades are precomputed elsewhere, this crate only
//! consumes them), a sparse in-memory implementation, and the meaning-based
//! seed-set expansion.

mod expand;
mod source;

pub use expand::expand_by_meaning;
pub use source::{GradeSource, GradedLink, SparseGradeTable};
