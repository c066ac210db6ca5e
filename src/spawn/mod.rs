use std::path::PathBuf;

pub mod visualize;

/// Environment override for an external tool, e.g. `COLCON_SARIF_VISUALIZE_PATH`.
pub fn custom_tool_path(name: &str) -> Option<PathBuf> {
    let var = format!("COLCON_SARIF_{}_PATH", name.to_uppercase());

    let Ok(path) = std::env::var(var) else {
        return None;
    };

    Some(PathBuf::from(path))
}

/// The override when set, otherwise the configured program, resolved on `PATH`.
pub fn tool_path(name: &str, configured: &str) -> PathBuf {
    match custom_tool_path(name) {
        Some(path) => path,
        None => PathBuf::from(configured),
    }
}
