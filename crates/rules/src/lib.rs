//! # Shoresh Rules
//!
//! Pure letter-level predicates deciding whether two roots are linked:
//! the substitution index over interchangeable-letter groups, the
//! doubled-letter (geminate) pattern, anagram matching, and the fixed
//! atbash cipher correspondence.
//!
//! Everything here is a value built fresh per pipeline run — there is no
//! shared mutable rule state.

mod alphabet;
mod ruleset;
mod substitution;

pub use alphabet::{cipher_partner, fold_glide, GLIDE_LETTER};
pub use ruleset::RuleSet;
pub use substitution::SubstitutionIndex;
