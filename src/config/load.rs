//! Loading test specifications from YAML files

use super::schema::TestSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use crate::registry::Registries;
use std::fs;
use std::path::Path;

/// Load and validate a test specification from a YAML file
///
/// The document is parsed once and treated as immutable afterwards.
/// Resolution of named implementations uses the built-in registries.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<TestSpec> {
    load_config_with(config_path, &Registries::builtin())
}

/// Load and validate a test specification against caller-supplied registries
pub fn load_config_with<P: AsRef<Path>>(
    config_path: P,
    registries: &Registries,
) -> Result<TestSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec: TestSpec = serde_yaml::from_str(&yaml_content).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to parse YAML config {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    validate_config(&spec, registries)
        .map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Parse a YAML document without validating it
pub fn parse_config(yaml_content: &str) -> Result<TestSpec> {
    serde_yaml::from_str(yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}
