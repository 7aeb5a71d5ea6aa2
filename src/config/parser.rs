use crate::config::types::BuildManifest;
use crate::ConfigError;
use std::path::Path;

/// Loads a build manifest from the given TOML file
///
/// Only reading and parsing happen here; validation is a separate step with
/// skip semantics, so a manifest that parses but describes a bad policy
/// still loads successfully.
///
/// # Arguments
///
/// * `path` - Path to the TOML manifest file
///
/// # Returns
///
/// * `Ok(BuildManifest)` - Parsed manifest, not yet validated
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_manifest(path: &Path) -> Result<BuildManifest, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let manifest: BuildManifest = toml::from_str(&content)?;
    Ok(manifest)
}
