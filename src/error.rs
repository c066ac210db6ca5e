use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Path '{}' does not exist", .0.display())]
    #[diagnostic(code(colcon_sarif::base_dir))]
    BaseDirMissing(PathBuf),

    #[error("Path '{}' is not a directory", .0.display())]
    #[diagnostic(code(colcon_sarif::base_dir))]
    BaseDirNotDirectory(PathBuf),

    #[error("failed to discover result files in {}", .path.display())]
    #[diagnostic(code(colcon_sarif::discovery))]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(colcon_sarif::discovery))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write discovery log {}", .path.display())]
    #[diagnostic(
        code(colcon_sarif::log_sink),
        help("pass --log-path to write the log somewhere else")
    )]
    LogSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {} of {total} files", .failures.len())]
    #[diagnostic(
        code(colcon_sarif::delete),
        help("the remaining files were deleted, fix the reported paths and run again")
    )]
    Deletion {
        total: usize,
        #[related]
        failures: Vec<DeletionFailure>,
    },

    #[error("failed to load config file {}", .path.display())]
    #[diagnostic(code(colcon_sarif::config))]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("image tool {tool} failed")]
    #[diagnostic(
        code(colcon_sarif::images),
        help("set COLCON_SARIF_VISUALIZE_PATH or `images.tool` in colcon-sarif.toml")
    )]
    ImageTool {
        tool: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// A single file that could not be removed.
#[derive(Debug, Error, Diagnostic)]
#[error("could not delete {}", .path.display())]
pub struct DeletionFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
