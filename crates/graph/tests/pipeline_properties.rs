use shoresh_graph::{compute_graph, expand_transitively, MAX_EXPANSION_ROUNDS};
use shoresh_meaning::SparseGradeTable;
use shoresh_protocol::{
    ExpandedRoot, GraphEdge, PipelineConfig, Root, RootCatalogue, GRADE_DISABLED,
};
use shoresh_rules::{RuleSet, SubstitutionIndex};
use std::collections::HashSet;

fn config(groups: Vec<Vec<char>>) -> PipelineConfig {
    PipelineConfig {
        substitution_groups: groups,
        doubled_letter_rule: false,
        anagram_rule: false,
        cipher_rule: false,
        link_by_meaning_threshold: GRADE_DISABLED,
        prune_by_grade_threshold: 0,
        max_generation: 200,
        remove_isolated_nodes: false,
        ..PipelineConfig::default()
    }
}

#[test]
fn substitution_linkage_needs_a_registered_pair() {
    // The rule machinery is alphabet-agnostic; plain ASCII works too.
    let r1 = Root::new(1, ['x', 'y', 'z'], "");
    let r2 = Root::new(2, ['x', 'y', 'w'], "");

    let with_rule = RuleSet::new(
        SubstitutionIndex::new(&[vec!['z', 'w']]),
        false,
        false,
        false,
    );
    let without_rule = RuleSet::new(SubstitutionIndex::new(&[]), false, false, false);

    assert!(with_rule.linked(&r1, &r2));
    assert!(!without_rule.linked(&r1, &r2));
}

#[test]
fn meaning_expansion_respects_the_threshold() {
    let catalogue = RootCatalogue::new(vec![
        Root::new(1, ['ש', 'מ', 'ר'], "guard"),
        Root::new(3, ['נ', 'צ', 'ר'], "preserve"),
        Root::new(4, ['א', 'כ', 'ל'], "eat"),
    ]);
    let mut grades = SparseGradeTable::new();
    grades.insert(1, 3, 4);
    grades.insert(1, 4, 2);

    let mut cfg = config(vec![]);
    cfg.link_by_meaning_threshold = 3;

    let result = compute_graph(
        vec![catalogue.get(1).unwrap().clone()],
        &catalogue,
        &cfg,
        &grades,
    );
    let ids: HashSet<u32> = result.nodes.iter().map(|n| n.root_id).collect();
    assert!(ids.contains(&3), "grade 4 joins at threshold 3");
    assert!(!ids.contains(&4), "grade 2 stays out at threshold 3");
    assert_eq!(result.diagnostics.meaning_added, 1);
}

#[test]
fn pruning_threshold_decides_retention_end_to_end() {
    let catalogue = RootCatalogue::new(vec![
        Root::new(1, ['ק', 'ב', 'ז'], "gather"),
        Root::new(2, ['ק', 'ב', 'צ'], "collect"),
    ]);
    let seeds = vec![catalogue.get(1).unwrap().clone()];

    let mut cfg = config(vec![vec!['ז', 'צ']]);
    cfg.prune_by_grade_threshold = 3;

    // Letter edge to the seed plus a grade-2 meaning edge: below threshold,
    // the expanded node is removed.
    let mut low = SparseGradeTable::new();
    low.insert(1, 2, 2);
    let result = compute_graph(seeds.clone(), &catalogue, &cfg, &low);
    assert_eq!(result.nodes.len(), 1);
    assert_eq!(result.diagnostics.pruned_nodes, 1);

    // Raising the grade to the threshold keeps it.
    let mut high = SparseGradeTable::new();
    high.insert(1, 2, 3);
    let result = compute_graph(seeds, &catalogue, &cfg, &high);
    assert_eq!(result.nodes.len(), 2);
    assert_eq!(result.diagnostics.pruned_nodes, 0);
}

#[test]
fn original_seeds_always_survive_pruning() {
    let catalogue = RootCatalogue::new(vec![
        Root::new(1, ['ק', 'ב', 'ז'], ""),
        Root::new(2, ['ק', 'ב', 'צ'], ""),
        Root::new(3, ['ל', 'מ', 'ד'], ""),
    ]);
    let seeds: Vec<Root> = [1, 3]
        .iter()
        .map(|&id| catalogue.get(id).unwrap().clone())
        .collect();

    let mut cfg = config(vec![vec!['ז', 'צ']]);
    cfg.prune_by_grade_threshold = 5;

    let result = compute_graph(seeds, &catalogue, &cfg, &SparseGradeTable::new());
    let ids: HashSet<u32> = result.nodes.iter().map(|n| n.root_id).collect();
    assert!(ids.contains(&1));
    assert!(ids.contains(&3));
}

#[test]
fn overlapping_rules_never_produce_duplicate_edges() {
    // Roots 1 and 2 are linked by substitution *and* anagram at once.
    let catalogue = RootCatalogue::new(vec![
        Root::new(1, ['ק', 'ב', 'ז'], ""),
        Root::new(2, ['ק', 'ב', 'צ'], ""),
        Root::new(3, ['ב', 'ק', 'ז'], ""),
    ]);
    let mut cfg = config(vec![vec!['ז', 'צ']]);
    cfg.anagram_rule = true;

    let result = compute_graph(
        vec![catalogue.get(1).unwrap().clone()],
        &catalogue,
        &cfg,
        &SparseGradeTable::new(),
    );

    let mut keys: Vec<(usize, usize)> = result.edges.iter().map(GraphEdge::key).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total, "undirected edge keys must be unique");
}

#[test]
fn long_chain_hits_the_round_cap_with_partial_result() {
    // A strict chain: root i links only to root i+1, via a dedicated
    // substitution pair per step. 150 hops cannot finish in 100 rounds.
    let span = 150u32;
    let letter = |i: u32| char::from_u32(0x4E00 + i).unwrap();

    let roots: Vec<Root> = (0..=span)
        .map(|i| Root::new(i + 1, ['א', 'ב', letter(i)], ""))
        .collect();
    let groups: Vec<Vec<char>> = (0..span).map(|i| vec![letter(i), letter(i + 1)]).collect();

    let catalogue = RootCatalogue::new(roots);
    let rules = RuleSet::new(SubstitutionIndex::new(&groups), false, false, false);

    let expansion = expand_transitively(
        vec![ExpandedRoot::seed(catalogue.get(1).unwrap().clone())],
        &catalogue,
        &rules,
    );

    assert!(expansion.cap_hit, "150-hop chain cannot reach a fixpoint");
    assert_eq!(expansion.rounds, MAX_EXPANSION_ROUNDS);
    // Seed plus one admission per round.
    assert_eq!(expansion.roots.len(), 1 + MAX_EXPANSION_ROUNDS as usize);
    let generations: Vec<u32> = expansion.roots.iter().map(|r| r.generation).collect();
    assert!(generations.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn diagnostics_expose_the_cap_through_the_pipeline() {
    let span = 120u32;
    let letter = |i: u32| char::from_u32(0x4E00 + i).unwrap();
    let roots: Vec<Root> = (0..=span)
        .map(|i| Root::new(i + 1, ['א', 'ב', letter(i)], ""))
        .collect();
    let groups: Vec<Vec<char>> = (0..span).map(|i| vec![letter(i), letter(i + 1)]).collect();
    let catalogue = RootCatalogue::new(roots);

    let mut cfg = config(groups);
    cfg.max_nodes = 500;
    let result = compute_graph(
        vec![catalogue.get(1).unwrap().clone()],
        &catalogue,
        &cfg,
        &SparseGradeTable::new(),
    );

    assert!(result.diagnostics.round_cap_hit);
    assert_eq!(result.diagnostics.expansion_rounds, MAX_EXPANSION_ROUNDS);
    assert!(!result.nodes.is_empty(), "partial result is still returned");
}
