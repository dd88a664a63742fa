//! Provost configuration loaded from `provost.toml`.
//!
//! The [`ProvostConfig`] struct holds the few knobs the CLI needs. Values
//! missing from the file fall back to defaults. The `PROVOST_OS`
//! environment variable takes precedence over the file for the default
//! target operating system.

use std::path::Path;

use serde::Deserialize;

use crate::error::ProvostError;

/// Top-level configuration loaded from `provost.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvostConfig {
    /// Target OS used to filter action lists when `--os` is not given.
    /// Empty means no filtering.
    #[serde(default)]
    pub default_os: String,

    /// Workflow name stamped onto freshly created jobs.
    #[serde(default = "default_workflow")]
    pub workflow: String,

    /// Run context stamped onto freshly created jobs.
    #[serde(default)]
    pub context: String,
}

// Default workflow for new jobs: "default".
fn default_workflow() -> String {
    "default".to_string()
}

impl Default for ProvostConfig {
    fn default() -> Self {
        Self {
            default_os: String::new(),
            workflow: default_workflow(),
            context: String::new(),
        }
    }
}

impl ProvostConfig {
    /// Load configuration from `provost.toml` in the current directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self, ProvostError> {
        Self::load_from(Path::new("provost.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ProvostError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<ProvostConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment takes precedence over the file for the target OS.
        if let Ok(os) = std::env::var("PROVOST_OS")
            && !os.is_empty()
        {
            config.default_os = os;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = ProvostConfig::default();
        assert!(config.default_os.is_empty());
        assert_eq!(config.workflow, "default");
        assert!(config.context.is_empty());
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            default_os = "linux"
            context = "burn-in"
        "#;
        let config: ProvostConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_os, "linux");
        assert_eq!(config.context, "burn-in");
        assert_eq!(config.workflow, "default");
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProvostConfig::load_from(&dir.path().join("provost.toml")).unwrap();
        assert_eq!(config.workflow, "default");
    }

    #[test]
    fn load_from_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provost.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "workflow = \"reimage\"").unwrap();
        let config = ProvostConfig::load_from(&path).unwrap();
        assert_eq!(config.workflow, "reimage");
    }
}
