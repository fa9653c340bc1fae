//! Configuration handling for the demo form

use crate::composite::DisabledPolicy;
use crate::options::DuplicatePolicy;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when none is configured
pub const DEFAULT_LOG_FILTER: &str = "rosetta_forms=info";

/// User configuration for the form components
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormsConfig {
    /// Hide the `*` next to required labels
    pub hide_required_indicator: Option<bool>,
    /// How a control-level disabled prop interacts with the field's
    pub disabled_policy: Option<DisabledPolicy>,
    /// What to do with options sharing a value
    pub duplicate_options: Option<DuplicatePolicy>,
    /// tracing filter directive
    pub log_filter: Option<String>,
}

impl FormsConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "rosetta", "rosetta-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormsConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn hide_required_indicator(&self) -> bool {
        self.hide_required_indicator.unwrap_or(true)
    }

    pub fn disabled_policy(&self) -> DisabledPolicy {
        self.disabled_policy.unwrap_or_default()
    }

    pub fn duplicate_options(&self) -> DuplicatePolicy {
        self.duplicate_options.unwrap_or_default()
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert!(config.hide_required_indicator());
        assert_eq!(config.disabled_policy(), DisabledPolicy::Sticky);
        assert_eq!(config.duplicate_options(), DuplicatePolicy::FirstMatch);
        assert_eq!(config.log_filter(), "rosetta_forms=info");
    }

    #[test]
    fn test_serialization() {
        let config = FormsConfig {
            hide_required_indicator: Some(false),
            disabled_policy: Some(DisabledPolicy::Live),
            duplicate_options: Some(DuplicatePolicy::Reject),
            log_filter: Some("rosetta_forms=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"live\""));
        assert!(json.contains("\"reject\""));

        let parsed: FormsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, FormsConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // unknown fields are ignored
        let json = r#"{"duplicate_options": "first_match", "theme": "dark"}"#;
        let parsed: FormsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.duplicate_options, Some(DuplicatePolicy::FirstMatch));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let json = r#"{"disabled_policy": "sometimes"}"#;
        assert!(serde_json::from_str::<FormsConfig>(json).is_err());
    }

    #[test]
    fn test_config_path_is_json_file() {
        if let Some(path) = FormsConfig::config_path() {
            // path only; nothing is read from disk
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
        }
    }
}
