use haplocall::haplogroup::{resolve_path, HaplogroupTree, Locus, TreeBuilder};

fn locus(name: &str, position: u32) -> Locus {
    Locus {
        name: name.to_string(),
        position,
        ancestral: "C".to_string(),
        derived: "T".to_string(),
    }
}

fn sample_tree() -> HaplogroupTree {
    let mut builder = TreeBuilder::new();
    let a = builder.root("A", vec![]);
    let a1 = builder.child(a, "A1", vec![locus("L1", 1000)]);
    builder.child(a1, "A1a", vec![locus("L2", 2000)]);
    builder.child(a, "A2", vec![locus("L3", 3000)]);
    builder.build()
}

#[test]
fn path_is_root_first_with_depths() {
    let tree = sample_tree();
    let path = resolve_path(&tree, "A1a");
    let steps: Vec<(&str, u32)> = path
        .iter()
        .map(|step| (tree.node(step.id).name.as_str(), step.depth))
        .collect();
    assert_eq!(steps, vec![("A", 0), ("A1", 1), ("A1a", 2)]);
}

#[test]
fn absent_target_yields_empty_path() {
    let tree = sample_tree();
    assert!(resolve_path(&tree, "B").is_empty());
}

#[test]
fn every_node_round_trips() {
    let tree = sample_tree();
    for (_, node) in tree.iter() {
        let path = resolve_path(&tree, &node.name);
        assert!(!path.is_empty(), "no path for {}", node.name);

        let last = path.last().unwrap();
        assert_eq!(tree.node(last.id).name, node.name);
        assert_eq!(path.len() as u32, last.depth + 1);
        for (expected_depth, step) in path.iter().enumerate() {
            assert_eq!(step.depth, expected_depth as u32);
        }
    }
}

#[test]
fn deep_chain_resolves() {
    let mut builder = TreeBuilder::new();
    let mut id = builder.root("N0", vec![]);
    for i in 1..=10_000u32 {
        id = builder.child(id, &format!("N{i}"), vec![]);
    }
    let tree = builder.build();

    let path = resolve_path(&tree, "N10000");
    assert_eq!(path.len(), 10_001);
    assert_eq!(path.last().unwrap().depth, 10_000);
}

#[test]
fn second_root_is_reachable() {
    let mut builder = TreeBuilder::new();
    builder.root("Y-root", vec![]);
    let mt = builder.root("MT-root", vec![]);
    builder.child(mt, "H", vec![]);
    let tree = builder.build();

    let path = resolve_path(&tree, "H");
    let names: Vec<&str> = path.iter().map(|s| tree.node(s.id).name.as_str()).collect();
    assert_eq!(names, vec!["MT-root", "H"]);
}
