//! CLI parsing for colcon-sarif

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "colcon-sarif")]
#[command(about = "Locate, list and clean up SARIF result files of a build", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show additional information for each result
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file to use instead of colcon-sarif.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the SARIF result files generated when building a set of packages
    Results(commands::results::Args),

    /// List every SARIF file in the build directory
    Files(commands::files::Args),
}
