//! Configuration I/O (YAML loading)

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::limits::FleetLimits;
use super::validation::Validatable;

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// limits:
///   min_posts: 10
///   max_posts: 100000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Capacity limits; omitted fields keep their defaults
    #[serde(default)]
    pub limits: FleetLimits,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            version: Some(Self::CURRENT_VERSION),
            limits: FleetLimits::default(),
        }
    }
}

impl FleetConfig {
    pub const CURRENT_VERSION: u32 = 1;
    pub const SUPPORTED_VERSIONS: &'static [u32] = &[1];

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: FleetConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        debug!(
            config = config.config_name(),
            max_posts = config.limits.max_posts,
            max_slots = config.limits.max_slots,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Validatable for FleetConfig {
    fn validate(&self) -> ConfigResult<()> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !Self::SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: Self::SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.limits.validate()
    }

    fn config_name(&self) -> &'static str {
        "FleetConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = FleetConfig {
            limits: FleetLimits::default().max_posts(500),
            ..FleetConfig::default()
        };

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("max_posts: 500"));
        assert_eq!(FleetConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_yaml_loading_partial_limits() {
        let yaml_content = r#"
version: 1
limits:
  min_posts: 2
  min_slots: 1
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = FleetConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.limits.min_posts, 2);
        assert_eq!(config.limits.min_slots, 1);
        assert_eq!(config.limits.max_posts, 100_000);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = FleetConfig::from_yaml_str("limits:\n  max_posts: 20\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = FleetConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = FleetConfig::from_yaml_str("version: 1\nlimits:\n  max_ships: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FleetConfig::from_yaml("/nonexistent/fleet.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
