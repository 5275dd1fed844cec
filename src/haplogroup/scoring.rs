use crate::haplogroup::types::{CallMap, HaplogroupResult, HaplogroupTree, Locus, NodeId};

// Evidence weights. Ancestral contradictions outweigh derived support so a
// single contradiction on the path beats one supporting marker; no-calls are
// neutral and depth never enters the score (it is the secondary sort key).
const DERIVED_WEIGHT: f64 = 1.0;
const ANCESTRAL_PENALTY: f64 = 1.5;

/// How an observed call relates to a marker's expected alleles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Derived,
    Ancestral,
    Unknown,
    NoCall,
}

pub fn classify_call(locus: &Locus, calls: &CallMap) -> CallState {
    match calls.get(&locus.position) {
        None => CallState::NoCall,
        Some(observed) => {
            if observed.eq_ignore_ascii_case(&locus.derived) {
                CallState::Derived
            } else if observed.eq_ignore_ascii_case(&locus.ancestral) {
                CallState::Ancestral
            } else {
                CallState::Unknown
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    derived: u32,
    ancestral: u32,
    no_calls: u32,
}

impl Tally {
    fn score(&self) -> f64 {
        DERIVED_WEIGHT * self.derived as f64 - ANCESTRAL_PENALTY * self.ancestral as f64
    }
}

/// Score every node in the tree against the observed calls.
///
/// Single linear pass: each node's cumulative counts are its own per-locus
/// evidence plus its parent's cumulative counts, carried forward down the
/// lineage. Every visited node is a candidate; the returned list is sorted
/// by score descending, then depth descending (deeper, more specific calls
/// first), then name ascending, so identical inputs always produce the
/// identical list.
pub fn classify(tree: &HaplogroupTree, calls: &CallMap) -> Vec<HaplogroupResult> {
    let mut results = Vec::with_capacity(tree.node_count());
    let mut stack: Vec<(NodeId, u32, Tally)> = tree
        .roots()
        .iter()
        .rev()
        .map(|&root| (root, 0, Tally::default()))
        .collect();

    while let Some((id, depth, inherited)) = stack.pop() {
        let node = tree.node(id);
        let mut tally = inherited;
        for locus in &node.loci {
            match classify_call(locus, calls) {
                CallState::Derived => tally.derived += 1,
                CallState::Ancestral => tally.ancestral += 1,
                CallState::NoCall => tally.no_calls += 1,
                CallState::Unknown => {}
            }
        }

        results.push(HaplogroupResult {
            name: node.name.clone(),
            score: tally.score(),
            matching_snps: tally.derived,
            ancestral_matches: tally.ancestral,
            no_calls: tally.no_calls,
            depth,
        });

        for &child in node.children.iter().rev() {
            stack.push((child, depth + 1, tally));
        }
    }

    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.depth.cmp(&a.depth))
            .then_with(|| a.name.cmp(&b.name))
    });
    results
}
