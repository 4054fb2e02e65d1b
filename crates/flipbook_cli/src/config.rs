//! Scene file loading

use anyhow::{Context, Result};
use flipbook_animation::SceneConfig;
use std::fs;
use std::path::Path;

/// Read and parse a scene TOML file
pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    if !path.exists() {
        anyhow::bail!("Scene file {} does not exist", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    SceneConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
