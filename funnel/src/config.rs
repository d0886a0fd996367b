//! Configuration file support for the funnel.
//!
//! Selects the wizard variant (how many interactive steps), the progress
//! labels and the default field values. Loaded from an optional TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest supported terminal step index (two interactive steps).
pub const MIN_LAST_STEP_INDEX: usize = 1;
/// Largest supported terminal step index (four interactive steps).
pub const MAX_LAST_STEP_INDEX: usize = 3;

/// Progress labels shown above the funnel.
pub const DEFAULT_STEP_LABELS: [&str; 4] =
    ["About You", "Tastes & Routine", "Checkout", "Select Meals"];

/// How progress labels relate to the interactive step count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Show every configured label even when fewer steps are interactive.
    #[default]
    Demo,
    /// Show exactly one label per interactive step.
    Reconciled,
}

/// Initial values of the captured fields after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub zip_code: String,
    pub adults: u32,
    pub kids: u32,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            zip_code: "110001".into(),
            adults: 2,
            kids: 0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    /// Index of the terminal interactive step (1..=3).
    pub last_step_index: usize,
    pub label_mode: LabelMode,
    pub step_labels: Vec<String>,
    pub defaults: FieldDefaults,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            last_step_index: 2,
            label_mode: LabelMode::Demo,
            step_labels: DEFAULT_STEP_LABELS.iter().map(|l| l.to_string()).collect(),
            defaults: FieldDefaults::default(),
        }
    }
}

impl FunnelConfig {
    /// Config for a variant with `last_step_index` as its terminal step,
    /// clamped into the supported range.
    pub fn with_last_step_index(last_step_index: usize) -> Self {
        Self {
            last_step_index: last_step_index.clamp(MIN_LAST_STEP_INDEX, MAX_LAST_STEP_INDEX),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path, surfacing every failure.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default funnel config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LAST_STEP_INDEX..=MAX_LAST_STEP_INDEX).contains(&self.last_step_index) {
            return Err(ConfigError::Invalid(format!(
                "last_step_index must be between {} and {}, got {}",
                MIN_LAST_STEP_INDEX, MAX_LAST_STEP_INDEX, self.last_step_index
            )));
        }
        if self.step_labels.is_empty() {
            return Err(ConfigError::Invalid("step_labels must not be empty".into()));
        }
        if self.label_mode == LabelMode::Reconciled
            && self.step_labels.len() < self.last_step_index + 1
        {
            return Err(ConfigError::Invalid(format!(
                "reconciled label mode needs {} labels, got {}",
                self.last_step_index + 1,
                self.step_labels.len()
            )));
        }
        if self.defaults.adults == 0 {
            return Err(ConfigError::Invalid("defaults.adults must be at least 1".into()));
        }
        Ok(())
    }

    /// Labels for the progress indicator after applying the label mode.
    pub fn display_labels(&self) -> &[String] {
        match self.label_mode {
            LabelMode::Demo => self.step_labels.as_slice(),
            LabelMode::Reconciled => {
                let end = (self.last_step_index + 1).min(self.step_labels.len());
                &self.step_labels[..end]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FunnelConfig::default();
        assert_eq!(config.last_step_index, 2);
        assert_eq!(config.label_mode, LabelMode::Demo);
        assert_eq!(config.step_labels.len(), 4);
        assert_eq!(config.defaults.zip_code, "110001");
        assert_eq!(config.defaults.adults, 2);
        assert_eq!(config.defaults.kids, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = FunnelConfig::load_from_path(&temp.path().join("funnel.toml"));
        assert_eq!(config, FunnelConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("funnel.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
last_step_index = 1
label_mode = "reconciled"

[defaults]
zip_code = "560001"
kids = 1
"#
        )
        .expect("write config");

        let config = FunnelConfig::load_from_path(&config_path);
        assert_eq!(config.last_step_index, 1);
        assert_eq!(config.label_mode, LabelMode::Reconciled);
        assert_eq!(config.defaults.zip_code, "560001");
        assert_eq!(config.defaults.adults, 2);
        assert_eq!(config.defaults.kids, 1);
        assert_eq!(config.display_labels(), ["About You", "Tastes & Routine"]);
    }

    #[test]
    fn test_load_invalid_toml_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("funnel.toml");
        std::fs::write(&config_path, "this is not valid toml [[[").expect("write");

        let config = FunnelConfig::load_from_path(&config_path);
        assert_eq!(config, FunnelConfig::default());
        assert!(matches!(
            FunnelConfig::try_load_from_path(&config_path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_unreadable_path_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let dir_path = temp.path().join("funnel.toml");
        std::fs::create_dir(&dir_path).expect("create dir");

        let config = FunnelConfig::load_from_path(&dir_path);
        assert_eq!(config, FunnelConfig::default());
        assert!(matches!(
            FunnelConfig::try_load_from_path(&dir_path),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_try_load_missing_file_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = FunnelConfig::try_load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn rejects_out_of_range_step_count() {
        let err = FunnelConfig::from_toml_str("last_step_index = 4").unwrap_err();
        assert!(err.to_string().contains("between 1 and 3"));
        assert!(FunnelConfig::from_toml_str("last_step_index = 0").is_err());
    }

    #[test]
    fn rejects_zero_default_adults() {
        let err = FunnelConfig::from_toml_str("[defaults]\nadults = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_short_reconciled_labels() {
        let toml = r#"
last_step_index = 3
label_mode = "reconciled"
step_labels = ["One", "Two"]
"#;
        assert!(FunnelConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn demo_mode_keeps_all_labels() {
        let config = FunnelConfig::with_last_step_index(1);
        assert_eq!(config.display_labels().len(), 4);
    }

    #[test]
    fn with_last_step_index_clamps() {
        assert_eq!(FunnelConfig::with_last_step_index(0).last_step_index, 1);
        assert_eq!(FunnelConfig::with_last_step_index(9).last_step_index, 3);
    }
}
