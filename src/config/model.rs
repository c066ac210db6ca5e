use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::convention;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory searched when `--base-dir` is not given.
    pub base_dir: PathBuf,

    /// File the discovery log sink writes to.
    pub log_path: PathBuf,

    /// File extensions treated as SARIF result files, without the dot.
    pub extensions: Vec<String>,

    /// Directory names that are never descended into.
    pub skip_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(convention::DEFAULT_BASE_DIR),
            log_path: PathBuf::from(convention::DEFAULT_LOG_PATH),
            extensions: vec![convention::SARIF_EXTENSION.to_string()],
            skip_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImagesConfig {
    pub tool: String,
    pub args: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            tool: convention::DEFAULT_IMAGE_TOOL.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RootConfig {
    pub discovery: DiscoveryConfig,
    pub images: ImagesConfig,
}
