//! # Shoresh Query
//!
//! A small boolean text-query language: AND/OR/NOT, quoted phrases with
//! word-boundary semantics, parentheses, and the symbolic aliases `&`, `|`,
//! `-`. Queries are parsed once into a typed AST and then evaluated many
//! times against changing text.
//!
//! Parsing never fails from the caller's point of view: malformed input
//! degrades to a literal case-insensitive substring match of the raw
//! expression, and an empty expression matches everything.

mod lexer;
mod matcher;
mod parser;

pub use parser::{Expr, Query};
