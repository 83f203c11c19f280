//! Configuration for LabelKit
//!
//! Supports JSON and TOML files stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Designer defaults (artifact, date display, preview grid, zoom, quantity)
//! - Print output

use crate::error::{ConfigError, SettingsError, SettingsResult};
use labelkit_core::constants::{DATE_DISPLAY_FORMAT, DATE_PLACEHOLDER, ZOOM_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Artifact names accepted for `designer.default_artifact`.
pub const ARTIFACT_NAMES: [&str; 3] = ["label", "slip", "bill"];

const CONFIG_DIR_NAME: &str = "labelkit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Designer defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Artifact opened when none is given: "label", "slip" or "bill"
    pub default_artifact: String,
    /// strftime pattern used to display date fields
    pub date_format: String,
    /// Text shown for unparseable dates
    pub date_placeholder: String,
    /// Copies per row in the preview grid
    pub preview_columns: usize,
    /// Gap between preview copies in template units
    pub preview_gap: f64,
    /// Initial print quantity
    pub default_quantity: usize,
    /// Initial canvas zoom, one of the discrete zoom levels
    pub default_zoom: f64,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            default_artifact: "label".to_string(),
            date_format: DATE_DISPLAY_FORMAT.to_string(),
            date_placeholder: DATE_PLACEHOLDER.to_string(),
            preview_columns: 3,
            preview_gap: 10.0,
            default_quantity: 1,
            default_zoom: 1.0,
        }
    }
}

/// Print output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Directory print documents are written to
    pub output_dir: PathBuf,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("print"),
        }
    }
}

impl PrintSettings {
    /// Path of the print document for a template id.
    pub fn document_path(&self, template_id: &str) -> PathBuf {
        self.output_dir.join(format!("{template_id}.html"))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub designer: DesignerSettings,
    pub print: PrintSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/labelkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let designer = &self.designer;

        if !ARTIFACT_NAMES.contains(&designer.default_artifact.as_str()) {
            return Err(ConfigError::out_of_range(
                "designer.default_artifact",
                &designer.default_artifact,
            ));
        }

        if designer.date_format.trim().is_empty() {
            return Err(ConfigError::out_of_range("designer.date_format", "\"\""));
        }

        if designer.preview_columns == 0 {
            return Err(ConfigError::out_of_range(
                "designer.preview_columns",
                designer.preview_columns,
            ));
        }

        if !designer.preview_gap.is_finite() || designer.preview_gap < 0.0 {
            return Err(ConfigError::out_of_range(
                "designer.preview_gap",
                designer.preview_gap,
            ));
        }

        if designer.default_quantity == 0 {
            return Err(ConfigError::out_of_range(
                "designer.default_quantity",
                designer.default_quantity,
            ));
        }

        if !ZOOM_LEVELS.contains(&designer.default_zoom) {
            warn!(
                "Zoom {} is not one of the supported levels",
                designer.default_zoom
            );
            return Err(ConfigError::out_of_range(
                "designer.default_zoom",
                designer.default_zoom,
            ));
        }

        if self.print.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::out_of_range("print.output_dir", "\"\""));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.designer.date_format, "%d/%m/%Y");
        assert_eq!(config.designer.default_zoom, 1.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.designer.default_artifact = "slip".to_string();
        config.designer.preview_columns = 2;
        config.print.output_dir = dir.path().join("out");
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_json_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "designer": { "default_quantity": 4 } }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.designer.default_quantity, 4);
        assert_eq!(config.designer.preview_columns, 3);
        assert_eq!(config.print, PrintSettings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let err = Config::new().save_to_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        let mut config = Config::new();
        config.designer.default_zoom = 1.1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::out_of_range("designer.default_zoom", 1.1))
        );

        let mut config = Config::new();
        config.designer.default_artifact = "poster".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.designer.preview_gap = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.designer.default_quantity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[designer]\npreview_columns = 0\n").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(SettingsError::Config(ConfigError::ValueOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_io_failures_name_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        match Config::load_from_file(&missing) {
            Err(SettingsError::LoadError(msg)) => assert!(msg.contains("absent.toml")),
            other => panic!("expected LoadError, got {:?}", other),
        }

        // A directory in place of the file makes the write fail.
        let blocked = dir.path().join("blocked.toml");
        std::fs::create_dir(&blocked).unwrap();
        match Config::new().save_to_file(&blocked) {
            Err(SettingsError::SaveError(msg)) => assert!(msg.contains("blocked.toml")),
            other => panic!("expected SaveError, got {:?}", other),
        }
    }

    #[test]
    fn test_document_path() {
        let print = PrintSettings {
            output_dir: PathBuf::from("/tmp/labels"),
        };
        assert_eq!(
            print.document_path("default-label"),
            PathBuf::from("/tmp/labels/default-label.html")
        );
    }
}
