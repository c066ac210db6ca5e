use std::path::PathBuf;

pub const DEFAULT_BASE_DIR: &str = "build";
pub const DEFAULT_LOG_PATH: &str = "logfile.txt";
pub const SARIF_EXTENSION: &str = "sarif";
pub const DEFAULT_IMAGE_TOOL: &str = "process-sarif-visualize";

pub const LOCAL_CONFIG_FILE: &str = "colcon-sarif.toml";

/// Per-user config file, e.g. `~/.config/colcon-sarif/config.toml` on Linux.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("colcon-sarif").join("config.toml"))
}
