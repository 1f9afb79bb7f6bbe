use crate::alphabet::{cipher_partner, GLIDE_LETTER};
use crate::substitution::SubstitutionIndex;
use shoresh_protocol::{PipelineConfig, Root};

/// The active edge-detection rules for one pipeline run.
///
/// `linked` is the single pairwise predicate the rest of the pipeline uses;
/// it answers a plain boolean, so rule evaluation short-circuits on the first
/// rule that fires (cipher, then anagram, then substitution/doubled-letter).
#[derive(Debug, Clone)]
pub struct RuleSet {
    substitution: SubstitutionIndex,
    doubled_letter: bool,
    anagram: bool,
    cipher: bool,
}

impl RuleSet {
    pub fn new(
        substitution: SubstitutionIndex,
        doubled_letter: bool,
        anagram: bool,
        cipher: bool,
    ) -> Self {
        Self {
            substitution,
            doubled_letter,
            anagram,
            cipher,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            SubstitutionIndex::new(&config.substitution_groups),
            config.doubled_letter_rule,
            config.anagram_rule,
            config.cipher_rule,
        )
    }

    /// Whether any enabled rule links the two roots. Symmetric.
    pub fn linked(&self, a: &Root, b: &Root) -> bool {
        if self.cipher && cipher_match(a.letters, b.letters) {
            return true;
        }
        if self.anagram && anagram_match(a.letters, b.letters) {
            return true;
        }
        self.substitution_or_doubled(a.letters, b.letters)
    }

    /// Substitution: at least two positions match exactly and the remaining
    /// one is a registered interchange (identical skeletons — homonym roots —
    /// trivially qualify). Doubled-letter: a middle-glide (hollow) root
    /// against its geminate counterpart, checked in both orientations.
    fn substitution_or_doubled(&self, a: [char; 3], b: [char; 3]) -> bool {
        if self.doubled_letter && (doubled_match(a, b) || doubled_match(b, a)) {
            return true;
        }
        let mismatches: Vec<usize> = (0..3).filter(|&i| a[i] != b[i]).collect();
        match mismatches.len() {
            0 => true,
            1 => {
                let i = mismatches[0];
                self.substitution.can_substitute(a[i], b[i])
            }
            _ => false,
        }
    }
}

/// Hollow root (p, ו, l) against geminate root (p, l, l).
fn doubled_match(hollow: [char; 3], geminate: [char; 3]) -> bool {
    hollow[0] == geminate[0]
        && hollow[1] == GLIDE_LETTER
        && geminate[1] == geminate[2]
        && geminate[2] == hollow[2]
}

/// Same three letters as a multiset, order ignored.
fn anagram_match(a: [char; 3], b: [char; 3]) -> bool {
    let mut a = a;
    let mut b = b;
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Every position maps to its cipher partner (after glide folding).
fn cipher_match(a: [char; 3], b: [char; 3]) -> bool {
    (0..3).all(|i| cipher_partner(a[i]) == Some(crate::alphabet::fold_glide(b[i])))
}
