pub mod find_mt_branch;
pub mod find_y_branch;

use crate::haplogroup::types::CallMap;
use crate::provider::{TreeProvider, TreeSource};
use crate::types::GenomeBuild;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Read an observed-calls TSV: one `position<TAB>allele` per line, blank
/// lines and '#' comments skipped.
pub(crate) fn read_call_map(path: &str) -> Result<CallMap> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading calls file {path}"))?;

    let mut calls = CallMap::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(pos), Some(allele)) = (fields.next(), fields.next()) else {
            bail!("{path}:{}: expected position<TAB>allele", lineno + 1);
        };
        let pos: u32 = pos
            .trim()
            .parse()
            .with_context(|| format!("{path}:{}: bad position '{pos}'", lineno + 1))?;
        calls.insert(pos, allele.trim().to_string());
    }
    Ok(calls)
}

/// Resolve the requested build name, falling back to the tree's native
/// build when none is given.
pub(crate) fn target_build(requested: Option<&str>, source: &TreeSource) -> Result<GenomeBuild> {
    let build = match requested {
        Some(name) => GenomeBuild::from_name(name)
            .with_context(|| format!("unknown reference build '{name}'"))?,
        None => source.native_build,
    };
    if !source.supported_builds.contains(&build) {
        bail!(
            "the {} tree does not publish {build} coordinates",
            source.description
        );
    }
    Ok(build)
}

pub(crate) fn run_branch_search(
    source: TreeSource,
    calls_file: String,
    output_file: String,
    build: Option<String>,
    sample: Option<String>,
) -> Result<()> {
    let build = target_build(build.as_deref(), &source)?;

    let calls = read_call_map(&calls_file)?;
    let config = crate::config::Config::load();
    let provider = TreeProvider::new(&config)?;

    let results = crate::haplogroup::analyze(
        &provider,
        &source,
        build,
        &calls,
        Path::new(&output_file),
        sample.as_deref(),
    )?;

    match results.first() {
        Some(top) if top.matching_snps > 0 => {
            println!("Predicted haplogroup: {} (score {:.2})", top.name, top.score)
        }
        _ => println!("No haplogroup could be determined."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_call_map, target_build};
    use crate::provider::TreeSource;
    use crate::types::GenomeBuild;
    use std::io::Write;

    #[test]
    fn build_defaults_to_the_sources_native_build() {
        let source = TreeSource::y_dna();
        assert_eq!(target_build(None, &source).unwrap(), source.native_build);
    }

    #[test]
    fn build_aliases_resolve_and_unknown_names_fail() {
        let source = TreeSource::y_dna();
        assert_eq!(
            target_build(Some("hs1"), &source).unwrap(),
            GenomeBuild::CHM13v2
        );
        assert!(target_build(Some("hg99"), &source).is_err());
    }

    #[test]
    fn unsupported_build_is_rejected() {
        let mut source = TreeSource::y_dna();
        source.supported_builds = vec![GenomeBuild::GRCh38];
        assert!(target_build(Some("hg19"), &source).is_err());
    }

    #[test]
    fn call_map_parses_tsv_with_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# position\tallele").unwrap();
        writeln!(file, "1000\tT").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2000\tg").unwrap();
        let calls = read_call_map(file.path().to_str().unwrap()).unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls.get(&1000).map(String::as_str), Some("T"));
        assert_eq!(calls.get(&2000).map(String::as_str), Some("g"));
    }

    #[test]
    fn malformed_line_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1000").unwrap();
        assert!(read_call_map(file.path().to_str().unwrap()).is_err());
    }
}
