use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grade value meaning "this threshold-driven rule is switched off".
///
/// Grades themselves run 0–5; a threshold of 6 can never be met, so 6 doubles
/// as the disabled sentinel for `link_by_meaning_threshold`.
pub const GRADE_DISABLED: u8 = 6;

/// Highest real meaning grade.
pub const GRADE_MAX: u8 = 5;

/// Numeric/boolean knobs for one pipeline invocation.
///
/// Supplied fresh per run; the engine never mutates it. Thresholds operate on
/// the 0–6 grade scale where 6 means "inactive" (and 0 means "inactive" for
/// the pruning threshold, which only fires on grades >= 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PipelineConfig {
    pub max_nodes: usize,
    pub max_edges: usize,
    /// Minimum meaning grade for pulling extra roots into the seed set
    /// (6 = expansion disabled).
    pub link_by_meaning_threshold: u8,
    /// Minimum meaning grade a non-seed node needs on some edge to survive
    /// pruning (0 = pruning disabled).
    pub prune_by_grade_threshold: u8,
    /// Transitive expansion keeps roots up to this generation (1 = seeds only).
    pub max_generation: u32,
    pub doubled_letter_rule: bool,
    pub anagram_rule: bool,
    pub cipher_rule: bool,
    pub remove_isolated_nodes: bool,
    /// Groups of mutually interchangeable letters for the substitution rule.
    pub substitution_groups: Vec<Vec<char>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_nodes: 120,
            max_edges: 400,
            link_by_meaning_threshold: GRADE_DISABLED,
            prune_by_grade_threshold: 0,
            max_generation: 3,
            doubled_letter_rule: true,
            anagram_rule: false,
            cipher_rule: false,
            remove_isolated_nodes: false,
            substitution_groups: Self::default_groups(),
        }
    }
}

impl PipelineConfig {
    /// Articulation-based interchange groups for the Hebrew alphabet:
    /// gutturals, labials, dentals, sibilants, velars, and the glides.
    pub fn default_groups() -> Vec<Vec<char>> {
        vec![
            vec!['א', 'ה', 'ח', 'ע'],
            vec!['ב', 'ו', 'פ'],
            vec!['ד', 'ט', 'ת'],
            vec!['ז', 'ס', 'צ', 'ש'],
            vec!['ג', 'כ', 'ק'],
            vec!['ו', 'י'],
        ]
    }
}
