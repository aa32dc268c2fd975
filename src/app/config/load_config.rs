//! Generation configuration loading.

use std::path::Path;

use log::debug;

use crate::domain::{AppError, GenerateConfig};
use crate::ports::ArtifactStore;

/// Load and parse a configuration file.
pub fn load_config(path: &Path, store: &impl ArtifactStore) -> Result<GenerateConfig, AppError> {
    debug!("Loading configuration from {}", path.display());
    let content = store.read_text(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<GenerateConfig, AppError> {
    let config: GenerateConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
