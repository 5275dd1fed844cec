use crate::error::TreeError;
use crate::haplogroup::types::{Haplogroup, HaplogroupTree, Locus, NodeId};
use crate::types::GenomeBuild;
use serde::Deserialize;
use std::collections::HashMap;

// Native tree payload: a flat JSON array of nodes carrying their variants,
// with coordinates keyed per build name or sequence accession.

#[derive(Deserialize)]
struct ApiCoordinate {
    start: u32,
    #[serde(default)]
    #[allow(dead_code)]
    stop: u32,
    anc: String,
    der: String,
}

#[derive(Deserialize)]
struct ApiVariant {
    name: String,
    coordinates: HashMap<String, ApiCoordinate>,
    #[serde(rename = "variantType")]
    variant_type: String,
}

#[derive(Deserialize)]
struct ApiNode {
    name: String,
    #[serde(rename = "parentName")]
    parent_name: Option<String>,
    #[serde(default)]
    variants: Vec<ApiVariant>,
}

/// Parse the raw payload and reconcile every marker to `build`.
///
/// A variant with no coordinate for the requested build is dropped from its
/// node for this tree instance; that is the whole of coordinate
/// reconciliation and it never fails the load. Nodes whose parent is
/// missing, unresolvable, or self-referential become roots.
pub(crate) fn parse_tree(data: &str, build: GenomeBuild) -> Result<HaplogroupTree, TreeError> {
    let api_nodes: Vec<ApiNode> = serde_json::from_str(data).map_err(|e| TreeError::ParseFailure {
        message: e.to_string(),
    })?;

    let mut name_to_id: HashMap<&str, NodeId> = HashMap::with_capacity(api_nodes.len());
    for (id, node) in api_nodes.iter().enumerate() {
        if name_to_id.insert(node.name.as_str(), id).is_some() {
            return Err(TreeError::ParseFailure {
                message: format!("duplicate haplogroup name '{}'", node.name),
            });
        }
    }

    // Resolve parents up front; api_nodes is consumed while building loci.
    let parent_ids: Vec<Option<NodeId>> = api_nodes
        .iter()
        .enumerate()
        .map(|(id, node)| match node.parent_name.as_deref() {
            Some(parent) if !parent.is_empty() => {
                name_to_id.get(parent).copied().filter(|&pid| pid != id)
            }
            _ => None,
        })
        .collect();

    let mut nodes: Vec<Haplogroup> = api_nodes
        .into_iter()
        .zip(&parent_ids)
        .map(|(node, &parent)| Haplogroup {
            name: node.name,
            parent,
            loci: reconcile_loci(node.variants, build),
            children: Vec::new(),
        })
        .collect();

    let mut roots = Vec::new();
    for (id, &parent) in parent_ids.iter().enumerate() {
        match parent {
            Some(pid) => nodes[pid].children.push(id),
            None => roots.push(id),
        }
    }

    Ok(HaplogroupTree::from_parts(nodes, roots))
}

fn reconcile_loci(variants: Vec<ApiVariant>, build: GenomeBuild) -> Vec<Locus> {
    let keys = build.coordinate_keys();
    variants
        .into_iter()
        .filter(|v| v.variant_type == "SNP")
        .filter_map(|mut v| {
            let coord = keys.iter().find_map(|key| v.coordinates.remove(*key))?;
            Some(Locus {
                name: v.name,
                position: coord.start,
                ancestral: coord.anc,
                derived: coord.der,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_names() {
        let payload = r#"[
            {"name": "A", "parentName": null, "variants": []},
            {"name": "A", "parentName": null, "variants": []}
        ]"#;
        let err = parse_tree(payload, GenomeBuild::GRCh38).unwrap_err();
        assert!(matches!(err, TreeError::ParseFailure { .. }));
    }

    #[test]
    fn self_parent_becomes_root() {
        let payload = r#"[{"name": "A", "parentName": "A", "variants": []}]"#;
        let tree = parse_tree(payload, GenomeBuild::GRCh38).unwrap();
        assert_eq!(tree.roots(), &[0]);
        assert!(tree.node(0).children.is_empty());
    }

    #[test]
    fn indels_are_skipped() {
        let payload = r#"[{
            "name": "A",
            "parentName": null,
            "variants": [{
                "name": "M1",
                "variantType": "INDEL",
                "coordinates": {"GRCh38": {"start": 100, "stop": 103, "anc": "ACT", "der": "A"}}
            }]
        }]"#;
        let tree = parse_tree(payload, GenomeBuild::GRCh38).unwrap();
        assert!(tree.node(0).loci.is_empty());
    }
}
