//! Optional project-local configuration (`arq.toml` at the project root).

use crate::error::CliError;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "arq.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArqConfig {
    /// Pinned Arquillian version; skips the interactive prompt during setup.
    pub arquillian_version: Option<String>,
    /// Default test framework for setup when no flag is passed.
    pub test_framework: Option<String>,
    pub export: ExportConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Leave the generated exporter class in place after a successful export.
    pub keep_exporter: bool,
    /// Delete an exporter generated by a failing invocation. A reused
    /// pre-existing exporter is never deleted on failure.
    pub cleanup_on_failure: bool,
}

impl ArqConfig {
    /// Loads the config, or defaults when no file exists.
    pub fn load(project_root: &Path) -> Result<Self, CliError> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(ArqConfig::default());
        }
        let content = fs_err::read_to_string(&path)?;
        toml::from_str(&content).map_err(|err| CliError::ConfigParse(err.to_string()))
    }
}
