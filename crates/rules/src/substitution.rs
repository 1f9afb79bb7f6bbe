use std::collections::HashSet;

/// Symmetric adjacency over groups of mutually interchangeable letters.
///
/// Built fresh from the active configuration for every pipeline run;
/// construction is O(Σ|group|²), queries are O(1). A letter is never its own
/// substitute — same-letter matching is exact equality at the call site.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionIndex {
    pairs: HashSet<(char, char)>,
}

impl SubstitutionIndex {
    pub fn new(groups: &[Vec<char>]) -> Self {
        let mut pairs = HashSet::new();
        for group in groups {
            for &a in group {
                for &b in group {
                    if a != b {
                        pairs.insert((a, b));
                    }
                }
            }
        }
        Self { pairs }
    }

    /// Whether `a` may stand in for `b`. Symmetric, false for `a == b`.
    pub fn can_substitute(&self, a: char, b: char) -> bool {
        self.pairs.contains(&(a, b))
    }
}
