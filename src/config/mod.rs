use std::path::{Path, PathBuf};

use tracing::debug;

pub mod convention;
pub mod model;

pub use model::*;

use crate::error::Error;

impl RootConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        Ok(config)
    }

    /// Picks the config file for this invocation: an explicit path first, then
    /// `colcon-sarif.toml` in the current directory, then the per-user file.
    /// Falls back to the built-in defaults when none of them exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [
            Some(PathBuf::from(convention::LOCAL_CONFIG_FILE)),
            convention::global_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}
