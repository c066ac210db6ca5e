use std::path::{Path, PathBuf};

use clap::Args as ClapArgs;

use crate::error::Error;

pub mod files;
pub mod results;
pub mod verb;

/// Flags shared by every verb.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ScanArgs {
    /// The directory in which to find the SARIF files [default: build]
    #[arg(long, value_parser = existing_dir)]
    pub base_dir: Option<PathBuf>,

    /// File the discovery log is written to [default: logfile.txt]
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Generate images from the result files
    #[arg(long)]
    pub gen_images: bool,

    /// Delete all result files. This might include additional files beside
    /// what is listed. An interactive prompt will ask for confirmation
    #[arg(long)]
    pub delete: bool,

    /// Same as --delete without an interactive confirmation
    #[arg(long)]
    pub delete_yes: bool,
}

impl ScanArgs {
    pub fn wants_delete(&self) -> bool {
        self.delete || self.delete_yes
    }
}

pub fn validate_base_dir(path: &Path) -> Result<PathBuf, Error> {
    if !path.exists() {
        return Err(Error::BaseDirMissing(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Err(Error::BaseDirNotDirectory(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}

fn existing_dir(value: &str) -> Result<PathBuf, Error> {
    validate_base_dir(Path::new(value))
}

/// Shortens `path` to be relative to `cwd` when it lies below it.
pub fn display_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        if let Ok(relative) = path.strip_prefix(cwd) {
            return relative.to_path_buf();
        }
    }

    path.to_path_buf()
}
