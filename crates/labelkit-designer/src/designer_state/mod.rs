//! Designer state manager for host integration.
//! Owns the canvas being edited and exposes the callbacks a host UI wires up.
//!
//! This module is split into submodules for better organization:
//! - `binding`: Catalog search and field binding/removal
//! - `properties`: Property panel updates for the selected field
//! - `output`: Editor/preview rendering and the print pipeline

mod binding;
mod output;
mod properties;

use crate::canvas::{Canvas, PointerEvent, PointerOutcome};
use crate::catalog::{Catalog, CatalogView};
use crate::model::{ArtifactKind, Template};
use crate::preview::PreviewGrid;
use crate::print::Quantity;
use crate::renderer::FieldRenderer;
use crate::templates::default_template;
use labelkit_core::DesignerError;
use tracing::{debug, info};

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    canvas: Canvas,
    pub catalog: Catalog,
    pub catalog_view: CatalogView,
    pub renderer: FieldRenderer,
    pub preview_grid: PreviewGrid,
    /// Current text of the catalog search box.
    pub search_query: String,
    pub is_modified: bool,
    artifact: ArtifactKind,
    quantity: Quantity,
}

impl DesignerState {
    /// Creates a designer seeded with the default template for `artifact`.
    pub fn new(artifact: ArtifactKind) -> Self {
        Self {
            canvas: Canvas::from_validated(default_template(artifact)),
            catalog: Catalog::default_catalog(),
            catalog_view: CatalogView::new(),
            renderer: FieldRenderer::default(),
            preview_grid: PreviewGrid::default(),
            search_query: String::new(),
            is_modified: false,
            artifact,
            quantity: Quantity::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: FieldRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_preview_grid(mut self, preview_grid: PreviewGrid) -> Self {
        self.preview_grid = preview_grid;
        self
    }

    pub fn artifact(&self) -> ArtifactKind {
        self.artifact
    }

    /// Read access to the canvas; mutations go through the designer callbacks.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The template as it currently stands, for a host persistence layer.
    pub fn template(&self) -> &Template {
        self.canvas.template()
    }

    /// Restores a fresh copy of the default template for this artifact.
    pub fn reset(&mut self) {
        info!("Resetting {} template to default", self.artifact);
        self.canvas.replace_validated(default_template(self.artifact));
        self.is_modified = false;
    }

    /// Replaces the edited template with one supplied by the host.
    pub fn load_template(&mut self, template: Template) -> Result<(), DesignerError> {
        let artifact = template.artifact;
        self.canvas.set_template(template)?;
        debug!(
            "Loaded template '{}' with {} fields",
            self.template().name,
            self.template().field_count()
        );
        self.artifact = artifact;
        self.is_modified = false;
        Ok(())
    }

    /// Forwards a pointer event to the canvas drag engine.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        let outcome = self.canvas.handle_pointer(event);
        if matches!(outcome, PointerOutcome::Moved { .. }) {
            self.is_modified = true;
        }
        outcome
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.canvas.selected_id()
    }

    pub fn select(&mut self, id: &str) -> Result<(), DesignerError> {
        self.canvas.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.canvas.clear_selection();
    }

    /// Snaps to the nearest supported zoom level.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.canvas.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.canvas.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.canvas.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.canvas.reset_zoom();
    }

    pub fn zoom(&self) -> f64 {
        self.canvas.zoom()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(ArtifactKind::default())
    }
}
