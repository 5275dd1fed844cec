use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find closest Y-DNA branch for a sample from an observed-calls file
    FindYBranch {
        /// TSV of observed calls: position<TAB>allele, '#' comments allowed
        calls_file: String,
        /// Output file for haplogroup results
        output_file: String,
        /// Reference build the call positions use (defaults to the tree's
        /// native build)
        #[arg(long)]
        build: Option<String>,
        /// Sample name to print in the report header
        #[arg(long)]
        sample: Option<String>,
    },

    /// Find closest MT-DNA branch for a sample from an observed-calls file
    FindMtBranch {
        /// TSV of observed calls: position<TAB>allele, '#' comments allowed
        calls_file: String,
        /// Output file for haplogroup results
        output_file: String,
        /// Reference build the call positions use (defaults to the tree's
        /// native build)
        #[arg(long)]
        build: Option<String>,
        /// Sample name to print in the report header
        #[arg(long)]
        sample: Option<String>,
    },
}
