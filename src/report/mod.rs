use crate::haplogroup::scoring::{classify_call, CallState};
use crate::haplogroup::tree::{called_locus_count, resolve_path};
use crate::haplogroup::types::{CallMap, HaplogroupResult, HaplogroupTree};
use chrono::Local;
use std::io::{self, Write};

const TOP_CANDIDATES: usize = 10;

fn state_label(state: CallState) -> &'static str {
    match state {
        CallState::Derived => "derived",
        CallState::Ancestral => "ancestral",
        CallState::Unknown => "mismatch",
        CallState::NoCall => "no-call",
    }
}

/// Render the classification artifact: top prediction, ranked table, the
/// resolved root→prediction path with per-step newly-derived counts, the
/// per-marker table along that path, and summary statistics.
pub fn write_report<W: Write>(
    out: &mut W,
    tree: &HaplogroupTree,
    results: &[HaplogroupResult],
    calls: &CallMap,
    sample_name: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "Haplogroup classification report")?;
    writeln!(out, "Sample: {}", sample_name.unwrap_or("-"))?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M"))?;
    writeln!(out)?;

    let top = results.first().filter(|r| r.matching_snps > 0);
    let Some(top) = top else {
        writeln!(
            out,
            "No haplogroup could be determined: no derived markers were observed."
        )?;
        writeln!(out)?;
        write_summary(out, tree, results, calls, 0)?;
        return Ok(());
    };

    writeln!(
        out,
        "Predicted haplogroup: {} (score {:.2}, {} derived, {} ancestral, {} no-calls, depth {})",
        top.name, top.score, top.matching_snps, top.ancestral_matches, top.no_calls, top.depth
    )?;
    writeln!(out)?;

    writeln!(out, "Top candidates:")?;
    writeln!(
        out,
        "{:<24} {:>8} {:>8} {:>10} {:>8} {:>6}",
        "Haplogroup", "Score", "Derived", "Ancestral", "NoCalls", "Depth"
    )?;
    for result in results.iter().take(TOP_CANDIDATES) {
        writeln!(
            out,
            "{:<24} {:>8.2} {:>8} {:>10} {:>8} {:>6}",
            result.name,
            result.score,
            result.matching_snps,
            result.ancestral_matches,
            result.no_calls,
            result.depth
        )?;
    }
    writeln!(out)?;

    let path = resolve_path(tree, &top.name);
    let mut path_loci = 0usize;

    writeln!(out, "Path from root:")?;
    for step in &path {
        let node = tree.node(step.id);
        path_loci += node.loci.len();
        let newly_derived = node
            .loci
            .iter()
            .filter(|locus| classify_call(locus, calls) == CallState::Derived)
            .count();
        writeln!(out, "  {:>3}  {} (+{} derived)", step.depth, node.name, newly_derived)?;
    }
    writeln!(out)?;

    writeln!(out, "Markers along path:")?;
    writeln!(
        out,
        "{:>10} {:<12} {:>4} {:>4} {:>9} {:<9}",
        "Position", "Marker", "Anc", "Der", "Observed", "State"
    )?;
    for step in &path {
        for locus in &tree.node(step.id).loci {
            let observed = calls.get(&locus.position).map(String::as_str).unwrap_or(".");
            writeln!(
                out,
                "{:>10} {:<12} {:>4} {:>4} {:>9} {:<9}",
                locus.position,
                locus.name,
                locus.ancestral,
                locus.derived,
                observed,
                state_label(classify_call(locus, calls))
            )?;
        }
    }
    writeln!(out)?;

    write_summary(out, tree, results, calls, path_loci)
}

fn write_summary<W: Write>(
    out: &mut W,
    tree: &HaplogroupTree,
    results: &[HaplogroupResult],
    calls: &CallMap,
    path_loci: usize,
) -> io::Result<()> {
    writeln!(out, "Summary:")?;
    writeln!(out, "  Markers in tree: {}", tree.total_loci())?;
    writeln!(
        out,
        "  Markers with an observed call: {}",
        called_locus_count(tree, calls)
    )?;
    writeln!(out, "  Candidates evaluated: {}", results.len())?;
    writeln!(out, "  Markers along predicted path: {}", path_loci)?;
    Ok(())
}
