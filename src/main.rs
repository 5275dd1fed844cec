use clap::Parser;
use haplocall::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::FindYBranch {
            calls_file,
            output_file,
            build,
            sample,
        } => commands::find_y_branch::run(calls_file, output_file, build, sample),
        cli::Commands::FindMtBranch {
            calls_file,
            output_file,
            build,
            sample,
        } => commands::find_mt_branch::run(calls_file, output_file, build, sample),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
