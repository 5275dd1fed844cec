use crate::haplogroup::types::{CallMap, HaplogroupTree, NodeId};

/// One step on a root→target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub id: NodeId,
    pub depth: u32,
}

/// Reconstruct the root-first ancestor chain for `target_name`.
///
/// Depth-first over each root in declared child order; node names are unique
/// within a tree, so the first match is the only one. An absent name yields
/// an empty path, which callers treat as "no path available" rather than an
/// error. The walk uses an explicit stack, so path length is bounded by the
/// tree, not by the call stack.
pub fn resolve_path(tree: &HaplogroupTree, target_name: &str) -> Vec<PathStep> {
    let mut stack: Vec<PathStep> = tree
        .roots()
        .iter()
        .rev()
        .map(|&id| PathStep { id, depth: 0 })
        .collect();
    let mut chain: Vec<PathStep> = Vec::new();

    while let Some(step) = stack.pop() {
        // The chain holds the ancestors of the node being visited; popping
        // back to this node's depth discards exhausted side branches.
        chain.truncate(step.depth as usize);
        chain.push(step);
        if tree.node(step.id).name == target_name {
            return chain;
        }
        for &child in tree.node(step.id).children.iter().rev() {
            stack.push(PathStep {
                id: child,
                depth: step.depth + 1,
            });
        }
    }
    Vec::new()
}

/// Count markers anywhere in the tree whose position has an observed call.
pub fn called_locus_count(tree: &HaplogroupTree, calls: &CallMap) -> usize {
    tree.iter()
        .flat_map(|(_, node)| node.loci.iter())
        .filter(|locus| calls.contains_key(&locus.position))
        .count()
}
