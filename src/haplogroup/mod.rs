pub mod scoring;
pub mod tree;
pub mod types;

pub use scoring::{classify, classify_call, CallState};
pub use tree::{called_locus_count, resolve_path, PathStep};
pub use types::{CallMap, Haplogroup, HaplogroupResult, HaplogroupTree, Locus, NodeId, TreeBuilder};

use crate::provider::{Fetch, TreeProvider, TreeSource};
use crate::report;
use crate::types::GenomeBuild;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Full pipeline: load the tree for the requested build, classify the
/// observed calls against it, and write the report.
pub fn analyze<F: Fetch>(
    provider: &TreeProvider<F>,
    source: &TreeSource,
    build: GenomeBuild,
    calls: &CallMap,
    output_file: &Path,
    sample_name: Option<&str>,
) -> anyhow::Result<Vec<HaplogroupResult>> {
    let tree = provider
        .load_tree(source, build)
        .with_context(|| format!("loading {} tree for {}", source.description, build))?;

    let results = classify(&tree, calls);

    let file = File::create(output_file)
        .with_context(|| format!("creating report file {}", output_file.display()))?;
    let mut writer = BufWriter::new(file);
    report::write_report(&mut writer, &tree, &results, calls, sample_name)
        .context("writing haplogroup report")?;

    Ok(results)
}
