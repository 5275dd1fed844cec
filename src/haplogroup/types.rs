use serde::Serialize;
use std::collections::HashMap;

/// Stable node identifier within one `HaplogroupTree` (arena index).
pub type NodeId = usize;

/// Observed calls keyed by assembly coordinate, produced by an external
/// variant-calling step. Alleles are compared case-insensitively.
pub type CallMap = HashMap<u32, String>;

/// A single defining marker, already reconciled to the tree's target build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    pub name: String,
    pub position: u32,
    pub ancestral: String,
    pub derived: String,
}

/// One haplogroup in the arena. `parent` and `children` are plain arena
/// indices; the tree owns all nodes, so there are no back-pointer cycles.
#[derive(Debug, Clone)]
pub struct Haplogroup {
    pub name: String,
    pub parent: Option<NodeId>,
    pub loci: Vec<Locus>,
    pub children: Vec<NodeId>,
}

/// Immutable haplogroup tree. Constructed once per parse (or via
/// `TreeBuilder`) and shared read-only across classification requests.
#[derive(Debug, Clone)]
pub struct HaplogroupTree {
    nodes: Vec<Haplogroup>,
    roots: Vec<NodeId>,
}

impl HaplogroupTree {
    pub(crate) fn from_parts(nodes: Vec<Haplogroup>, roots: Vec<NodeId>) -> Self {
        HaplogroupTree { nodes, roots }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &Haplogroup {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Haplogroup)> {
        self.nodes.iter().enumerate()
    }

    /// Total number of defining markers across the whole tree.
    pub fn total_loci(&self) -> usize {
        self.nodes.iter().map(|n| n.loci.len()).sum()
    }
}

/// Incremental construction of a `HaplogroupTree` with parent/child links
/// kept consistent by construction.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Haplogroup>,
    roots: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    pub fn root(&mut self, name: &str, loci: Vec<Locus>) -> NodeId {
        let id = self.push(name, None, loci);
        self.roots.push(id);
        id
    }

    pub fn child(&mut self, parent: NodeId, name: &str, loci: Vec<Locus>) -> NodeId {
        let id = self.push(name, Some(parent), loci);
        self.nodes[parent].children.push(id);
        id
    }

    fn push(&mut self, name: &str, parent: Option<NodeId>, loci: Vec<Locus>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Haplogroup {
            name: name.to_string(),
            parent,
            loci,
            children: Vec::new(),
        });
        id
    }

    pub fn build(self) -> HaplogroupTree {
        HaplogroupTree::from_parts(self.nodes, self.roots)
    }
}

/// Ranked candidate produced by `classify`. Counts are cumulative along the
/// root→node path, so a deep node's numbers reflect its whole lineage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaplogroupResult {
    pub name: String,
    pub score: f64,
    pub matching_snps: u32,
    pub ancestral_matches: u32,
    pub no_calls: u32,
    pub depth: u32,
}
