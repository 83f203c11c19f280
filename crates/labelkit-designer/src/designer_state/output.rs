//! Rendering and print operations for DesignerState.

use super::DesignerState;
use crate::print::{DocumentEncoder, PrintDocument, PrintJob, PrintSink, Quantity};
use labelkit_core::Result;

impl DesignerState {
    /// Interactive SVG for the editor canvas.
    pub fn render_editor(&self) -> String {
        self.renderer.render_canvas(&self.canvas)
    }

    /// Static multi-copy preview at the current quantity.
    pub fn render_preview(&self) -> String {
        self.preview_grid
            .render(&self.renderer, self.template(), self.quantity)
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = Quantity::new(quantity);
    }

    pub fn increment_quantity(&mut self) {
        self.quantity.increment();
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity.decrement();
    }

    pub fn print_job(&self) -> PrintJob<'_> {
        PrintJob::new(self.template(), self.quantity)
    }

    /// Prints the current quantity of the template through `sink`.
    pub fn print(&self, sink: &mut dyn PrintSink) -> Result<PrintDocument> {
        self.print_job().print(&self.renderer, sink)
    }

    pub fn export(&self, encoder: &dyn DocumentEncoder) -> Result<Vec<u8>> {
        self.print_job().export(encoder)
    }
}
