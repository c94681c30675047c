//! Domain tables: locations, unit types, features and intent rules.

mod features;
mod intents;
mod locations;
mod units;

pub use features::{FeaturesConfig, FloorTypeEntry, FurnishingEntry, SizeEntry, ViewEntry};
pub use intents::{IntentRule, IntentsConfig};
pub use locations::{LocationEntry, LocationsConfig};
pub use units::{UnitTypeEntry, UnitTypesConfig};

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All domain tables bundled together. `Default` carries the built-in
/// tables; `load` replaces them from a YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub locations: LocationsConfig,
    pub unit_types: UnitTypesConfig,
    pub features: FeaturesConfig,
    pub intents: IntentsConfig,
}

impl DomainConfig {
    /// Load domain tables from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            locations = config.locations.entries.len(),
            unit_types = config.unit_types.entries.len(),
            intent_rules = config.intents.rules.len(),
            "loaded domain config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locations.entries.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locations.entries".to_string(),
                message: "at least one location entry is required".to_string(),
            });
        }
        for threshold in [
            ("locations.phrase_threshold", self.locations.phrase_threshold),
            ("locations.word_threshold", self.locations.word_threshold),
        ] {
            if !(0.0..=1.0).contains(&threshold.1) {
                return Err(ConfigError::InvalidValue {
                    field: threshold.0.to_string(),
                    message: format!("similarity threshold must be in 0..=1, got {}", threshold.1),
                });
            }
        }
        if self.unit_types.entries.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "unit_types.entries".to_string(),
                message: "at least one unit type entry is required".to_string(),
            });
        }
        if self.intents.rules.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "intents.rules".to_string(),
                message: "at least one intent rule is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        DomainConfig::default().validate().unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = DomainConfig::load("/nonexistent/domain.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_yaml_overrides_defaults() {
        let yaml = r#"
locations:
  phrase_threshold: 0.8
  entries:
    - canonical: "New Cairo"
      aliases: ["tagamoa"]
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = DomainConfig::load(file.path()).unwrap();
        assert_eq!(config.locations.entries.len(), 1);
        assert_eq!(config.locations.phrase_threshold, 0.8);
        // Sections absent from the file keep their built-in defaults.
        assert!(!config.unit_types.entries.is_empty());
        assert!(!config.intents.rules.is_empty());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = DomainConfig::default();
        config.locations.word_threshold = 1.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = DomainConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: DomainConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.locations.entries.len(), config.locations.entries.len());
        assert_eq!(back.intents.rules.len(), config.intents.rules.len());
    }
}
