use clap::Args as ClapArgs;

use super::ScanArgs;
use super::verb::{self, Selection, Verb};
use crate::config::RootConfig;

#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print the paths of all SARIF files, relative to the current directory
    #[arg(long)]
    pub print_filenames: bool,
}

pub fn run(args: Args, config: &RootConfig, verbose: bool) -> miette::Result<()> {
    let verb = Verb {
        name: "files",
        selection: Selection::All,
        print_paths: args.print_filenames,
    };

    verb::run(verb, &args.scan, config, verbose)
}
