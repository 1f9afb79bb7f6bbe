use crate::source::GradeSource;
use shoresh_protocol::{ExpandedRoot, RootCatalogue, GRADE_DISABLED};
use std::collections::HashSet;

/// Pull additional roots into the seed set by meaning grade.
///
/// A threshold of 6 disables the feature and returns the seeds unchanged.
/// Otherwise every catalogue root graded at `threshold` or above against any
/// seed joins the set, deduplicated by id with first-seen identity kept.
/// Connected ids missing from the catalogue are a collaborator data gap and
/// are skipped. Added roots belong to the pre-letter-expansion set, so they
/// carry generation 1 like the seeds themselves.
pub fn expand_by_meaning(
    seeds: Vec<ExpandedRoot>,
    catalogue: &RootCatalogue,
    source: &dyn GradeSource,
    threshold: u8,
) -> Vec<ExpandedRoot> {
    if threshold >= GRADE_DISABLED {
        return seeds;
    }

    let mut included: HashSet<u32> = seeds.iter().map(|seed| seed.root.id).collect();
    let mut result = seeds;

    // Iterate over a snapshot of the original seeds only; meaning expansion
    // is a single union step, not a closure.
    let seed_ids: Vec<u32> = result.iter().map(|seed| seed.root.id).collect();
    for seed_id in seed_ids {
        for link in source.connected(seed_id, threshold) {
            if !included.insert(link.id) {
                continue;
            }
            match catalogue.get(link.id) {
                Some(root) => result.push(ExpandedRoot::seed(root.clone())),
                None => {
                    log::debug!("graded root {} not in catalogue; skipping", link.id);
                    included.remove(&link.id);
                }
            }
        }
    }

    result
}
