use std::{path::Path, process::Command};

use tracing::debug;

use crate::config::ImagesConfig;
use crate::error::Error;

/// Runs the image generator over the given result files.
pub fn generate_images(config: &ImagesConfig, files: &[&Path]) -> Result<(), Error> {
    let tool = super::tool_path("visualize", &config.tool);
    let tool_name = tool.display().to_string();

    let mut cmd = Command::new(&tool);
    cmd.args(&config.args);
    cmd.args(files);

    debug!(tool = %tool_name, files = files.len(), "generating images");

    let status = cmd.status().map_err(|source| Error::ImageTool {
        tool: tool_name.clone(),
        source: Some(source),
    })?;

    if !status.success() {
        return Err(Error::ImageTool {
            tool: tool_name,
            source: None,
        });
    }

    Ok(())
}
