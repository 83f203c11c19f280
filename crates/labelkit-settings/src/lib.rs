//! LabelKit Settings Crate
//!
//! Application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, DesignerSettings, PrintSettings, ARTIFACT_NAMES};
pub use error::{ConfigError, SettingsError, SettingsResult};
