use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A lexical root: a fixed three-letter skeleton with a short definition.
///
/// Positions are the classical P/E/L radicals (first, second, third letter).
/// The id is stable and globally unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Root {
    pub id: u32,
    /// The three radicals, first to third.
    pub letters: [char; 3],
    pub definition: String,
}

impl Root {
    pub fn new(id: u32, letters: [char; 3], definition: impl Into<String>) -> Self {
        Self {
            id,
            letters,
            definition: definition.into(),
        }
    }

    /// The skeleton rendered as a plain string, e.g. "שמר".
    pub fn skeleton(&self) -> String {
        self.letters.iter().collect()
    }
}

/// A root admitted to a pipeline run, tagged with its expansion generation:
/// 1 for the original seed set (and meaning-added roots), N for roots first
/// reached at letter-expansion round N−1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExpandedRoot {
    pub root: Root,
    pub generation: u32,
}

impl ExpandedRoot {
    pub fn seed(root: Root) -> Self {
        Self {
            root,
            generation: 1,
        }
    }
}

/// The full root catalogue: loaded once at startup, read-only afterwards.
///
/// Serializes as a plain array of roots; the id index is rebuilt on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Root>", into = "Vec<Root>")]
pub struct RootCatalogue {
    roots: Vec<Root>,
    by_id: HashMap<u32, usize>,
}

impl RootCatalogue {
    pub fn new(roots: Vec<Root>) -> Self {
        let by_id = roots
            .iter()
            .enumerate()
            .map(|(idx, root)| (root.id, idx))
            .collect();
        Self { roots, by_id }
    }

    pub fn get(&self, id: u32) -> Option<&Root> {
        self.by_id.get(&id).map(|&idx| &self.roots[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl From<Vec<Root>> for RootCatalogue {
    fn from(roots: Vec<Root>) -> Self {
        Self::new(roots)
    }
}

impl From<RootCatalogue> for Vec<Root> {
    fn from(catalogue: RootCatalogue) -> Self {
        catalogue.roots
    }
}
