use crate::provider::TreeSource;
use anyhow::Result;

pub fn run(
    calls_file: String,
    output_file: String,
    build: Option<String>,
    sample: Option<String>,
) -> Result<()> {
    super::run_branch_search(TreeSource::mt_dna(), calls_file, output_file, build, sample)
}
