use clap::Args as ClapArgs;

use super::ScanArgs;
use super::verb::{self, Selection, Verb};
use crate::config::RootConfig;

#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Show all result files (even without results)
    #[arg(long)]
    pub all: bool,

    /// Print only the paths of the result files. Use with --all to include
    /// files without results
    #[arg(long)]
    pub result_files_only: bool,
}

pub fn run(args: Args, config: &RootConfig, verbose: bool) -> miette::Result<()> {
    let verb = Verb {
        name: "results",
        selection: if args.all {
            Selection::All
        } else {
            Selection::WithResults
        },
        print_paths: args.result_files_only,
    };

    verb::run(verb, &args.scan, config, verbose)
}
