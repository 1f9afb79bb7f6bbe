use serde::{Deserialize, Serialize};
use shoresh_protocol::GRADE_MAX;
use std::collections::HashMap;

/// A root reachable by meaning from some other root, with the grade that
/// connects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedLink {
    pub id: u32,
    pub grade: u8,
}

/// The external grading collaborator: a sparse, symmetric root-pair → grade
/// lookup on the 0–5 scale. Absence of a pair means "no known relation"
/// (grade 0); unknown ids are simply ungraded, never an error.
pub trait GradeSource: Send + Sync {
    fn grade(&self, a: u32, b: u32) -> u8;

    /// All roots connected to `id` with a grade of at least `min_grade`.
    fn connected(&self, id: u32, min_grade: u8) -> Vec<GradedLink>;
}

/// In-memory `GradeSource` over canonical (low, high) id pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<GradeEntry>", into = "Vec<GradeEntry>")]
pub struct SparseGradeTable {
    grades: HashMap<(u32, u32), u8>,
}

/// Serialized form of one grade: a flat triple, easy to author by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub a: u32,
    pub b: u32,
    pub grade: u8,
}

fn canonical(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl SparseGradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a symmetric grade, clamped to the 0–5 scale.
    pub fn insert(&mut self, a: u32, b: u32, grade: u8) {
        self.grades.insert(canonical(a, b), grade.min(GRADE_MAX));
    }
}

impl GradeSource for SparseGradeTable {
    fn grade(&self, a: u32, b: u32) -> u8 {
        self.grades.get(&canonical(a, b)).copied().unwrap_or(0)
    }

    fn connected(&self, id: u32, min_grade: u8) -> Vec<GradedLink> {
        let mut links: Vec<GradedLink> = self
            .grades
            .iter()
            .filter_map(|(&(a, b), &grade)| {
                if grade < min_grade {
                    return None;
                }
                let other = if a == id {
                    b
                } else if b == id {
                    a
                } else {
                    return None;
                };
                Some(GradedLink { id: other, grade })
            })
            .collect();
        links.sort_by_key(|link| link.id);
        links
    }
}

impl From<Vec<GradeEntry>> for SparseGradeTable {
    fn from(entries: Vec<GradeEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.a, entry.b, entry.grade);
        }
        table
    }
}

impl From<SparseGradeTable> for Vec<GradeEntry> {
    fn from(table: SparseGradeTable) -> Self {
        let mut entries: Vec<GradeEntry> = table
            .grades
            .into_iter()
            .map(|((a, b), grade)| GradeEntry { a, b, grade })
            .collect();
        entries.sort_by_key(|entry| (entry.a, entry.b));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grades_are_symmetric() {
        let mut table = SparseGradeTable::new();
        table.insert(3, 1, 4);
        assert_eq!(table.grade(1, 3), 4);
        assert_eq!(table.grade(3, 1), 4);
    }

    #[test]
    fn missing_pair_means_grade_zero() {
        let table = SparseGradeTable::new();
        assert_eq!(table.grade(1, 2), 0);
    }

    #[test]
    fn connected_filters_by_minimum_grade() {
        let mut table = SparseGradeTable::new();
        table.insert(1, 2, 4);
        table.insert(1, 3, 2);
        table.insert(2, 3, 5);

        assert_eq!(
            table.connected(1, 3),
            vec![GradedLink { id: 2, grade: 4 }]
        );
        assert_eq!(
            table.connected(1, 1),
            vec![
                GradedLink { id: 2, grade: 4 },
                GradedLink { id: 3, grade: 2 }
            ]
        );
    }

    #[test]
    fn json_round_trip_keeps_every_grade() {
        let mut table = SparseGradeTable::new();
        table.insert(1, 2, 3);
        table.insert(4, 5, 1);

        let json = serde_json::to_string(&table).unwrap();
        let restored: SparseGradeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.grade(2, 1), 3);
        assert_eq!(restored.grade(5, 4), 1);
    }
}
