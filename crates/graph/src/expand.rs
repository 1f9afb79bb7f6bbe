use shoresh_protocol::{ExpandedRoot, RootCatalogue};
use shoresh_rules::RuleSet;
use std::collections::HashSet;

/// Hard cap on expansion rounds; hitting it is a diagnostic, not an error.
pub const MAX_EXPANSION_ROUNDS: u32 = 100;

/// Outcome of the transitive letter-link expansion.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub roots: Vec<ExpandedRoot>,
    /// Number of rounds that admitted at least one root.
    pub rounds: u32,
    /// True when the round cap was reached before a fixpoint was confirmed.
    pub cap_hit: bool,
}

/// Breadth-first transitive closure of the letter-link rules.
///
/// Each round scans the entire catalogue for roots not yet included that are
/// linked to some root included at the start of the round, and admits them at
/// `generation = round + 1`. Generations therefore measure shortest rule-hop
/// distance from the seed set, and an already-included root is never
/// re-tagged. Stops at a fixpoint or after `MAX_EXPANSION_ROUNDS` rounds
/// (logged, partial result returned).
pub fn expand_transitively(
    seeds: Vec<ExpandedRoot>,
    catalogue: &RootCatalogue,
    rules: &RuleSet,
) -> Expansion {
    let mut included: HashSet<u32> = seeds.iter().map(|seed| seed.root.id).collect();
    let mut roots = seeds;
    let mut rounds = 0;
    let mut cap_hit = false;

    loop {
        if rounds >= MAX_EXPANSION_ROUNDS {
            log::warn!(
                "letter-link expansion stopped at the {MAX_EXPANSION_ROUNDS}-round cap \
                 with {} roots; result is partial",
                roots.len()
            );
            cap_hit = true;
            break;
        }

        let admitted: Vec<_> = catalogue
            .iter()
            .filter(|candidate| !included.contains(&candidate.id))
            .filter(|candidate| roots.iter().any(|held| rules.linked(&held.root, candidate)))
            .cloned()
            .collect();

        if admitted.is_empty() {
            break;
        }

        rounds += 1;
        for root in admitted {
            included.insert(root.id);
            roots.push(ExpandedRoot {
                root,
                generation: rounds + 1,
            });
        }
    }

    Expansion {
        roots,
        rounds,
        cap_hit,
    }
}
