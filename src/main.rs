use clap::Parser;

use colcon_sarif::cli::{Cli, Commands};
use colcon_sarif::commands::{files, results};
use colcon_sarif::config::RootConfig;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    colcon_sarif::logging::init_logging(cli.verbose);

    let config = RootConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Results(args) => results::run(args, &config, cli.verbose),
        Commands::Files(args) => files::run(args, &config, cli.verbose),
    }
}
