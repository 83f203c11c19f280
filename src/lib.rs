//! # LabelKit
//!
//! A print-template designer for perishable-goods businesses: product labels,
//! delivery slips and packing slips (bills).
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Error taxonomy, paper sizes, designer constants
//! 2. **labelkit-designer** - Template model, canvas engine, renderer, catalog, print pipeline
//! 3. **labelkit-settings** - Configuration files and validation
//! 4. **labelkit** - Command-line front end that integrates all crates
//!
//! ## Features
//!
//! - **Fixed-size templates** with text, barcode, QR code, date, number and image fields
//! - **Zoomable canvas** with drag containment in template space
//! - **Data catalog** binding business fields onto a template
//! - **One renderer** shared by the editor, the preview grid and the print document

pub mod cli;

pub use labelkit_core::{DesignerError, Error, Orientation, PaperSize, Result};
pub use labelkit_designer as designer;
pub use labelkit_designer::{
    ArtifactKind, Catalog, CatalogEntry, DesignerState, Field, FieldKind, FieldRenderer,
    FieldUpdate, FileSink, PreviewGrid, PrintJob, Quantity, RenderMode, RenderOptions, Template,
};
pub use labelkit_settings::{Config, DesignerSettings, PrintSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, leaving stdout for rendered documents
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds a designer from the configured defaults.
///
/// `artifact` overrides `designer.default_artifact`.
pub fn designer_from_config(
    config: &Config,
    artifact: Option<ArtifactKind>,
) -> anyhow::Result<DesignerState> {
    config.validate()?;
    let settings = &config.designer;

    let artifact = match artifact {
        Some(artifact) => artifact,
        None => settings
            .default_artifact
            .parse()
            .map_err(anyhow::Error::msg)?,
    };

    let options = RenderOptions::default()
        .with_date_format(&settings.date_format)
        .with_date_placeholder(settings.date_placeholder.clone());

    let mut designer = DesignerState::new(artifact)
        .with_renderer(FieldRenderer::new(options))
        .with_preview_grid(PreviewGrid::new(
            settings.preview_columns,
            settings.preview_gap,
        ));
    designer.set_quantity(settings.default_quantity);
    designer.set_zoom(settings.default_zoom);

    tracing::debug!(
        "Designer ready for {} at zoom {}",
        designer.artifact(),
        designer.zoom()
    );
    Ok(designer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designer_from_default_config() {
        let designer = designer_from_config(&Config::default(), None).unwrap();
        assert_eq!(designer.artifact(), ArtifactKind::Label);
        assert_eq!(designer.quantity().get(), 1);
        assert_eq!(designer.zoom(), 1.0);
    }

    #[test]
    fn test_designer_from_config_applies_settings() {
        let mut config = Config::default();
        config.designer.default_artifact = "bill".into();
        config.designer.default_quantity = 6;
        config.designer.default_zoom = 1.5;
        config.designer.preview_columns = 2;
        config.designer.date_format = "%Y-%m-%d".into();

        let designer = designer_from_config(&config, None).unwrap();
        assert_eq!(designer.artifact(), ArtifactKind::Bill);
        assert_eq!(designer.quantity().get(), 6);
        assert_eq!(designer.zoom(), 1.5);
        assert_eq!(designer.preview_grid.columns, 2);
        assert_eq!(designer.renderer.options().date_format, "%Y-%m-%d");

        let designer = designer_from_config(&config, Some(ArtifactKind::Slip)).unwrap();
        assert_eq!(designer.artifact(), ArtifactKind::Slip);
    }

    #[test]
    fn test_designer_from_invalid_config() {
        let mut config = Config::default();
        config.designer.preview_columns = 0;
        assert!(designer_from_config(&config, None).is_err());
    }
}
