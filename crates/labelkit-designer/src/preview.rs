//! Multi-copy preview grid.
//!
//! Lays out `quantity` static renderings of a template in rows so the
//! operator can check the print run before sending it.

use crate::model::Template;
use crate::print::Quantity;
use crate::renderer::{num, FieldRenderer, RenderMode};
use std::fmt::Write;

/// Grid layout for preview copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGrid {
    /// Copies per row (at least one).
    pub columns: usize,
    /// Space between copies in template-space units.
    pub gap: f64,
}

impl PreviewGrid {
    pub fn new(columns: usize, gap: f64) -> Self {
        Self {
            columns: columns.max(1),
            gap: gap.max(0.0),
        }
    }

    /// Number of rows needed for `quantity` copies.
    pub fn rows(&self, quantity: Quantity) -> usize {
        quantity.get().div_ceil(self.columns.max(1))
    }

    /// Top-left corner of copy `index`.
    pub fn cell_origin(&self, template: &Template, index: usize) -> (f64, f64) {
        let columns = self.columns.max(1);
        let col = index % columns;
        let row = index / columns;
        (
            col as f64 * (template.width() + self.gap),
            row as f64 * (template.height() + self.gap),
        )
    }

    /// Overall size of the grid.
    pub fn extent(&self, template: &Template, quantity: Quantity) -> (f64, f64) {
        let cols = self.columns.max(1).min(quantity.get());
        let rows = self.rows(quantity);
        (
            cols as f64 * template.width() + (cols - 1) as f64 * self.gap,
            rows as f64 * template.height() + (rows - 1) as f64 * self.gap,
        )
    }

    /// Renders every copy into one SVG document.
    pub fn render(&self, renderer: &FieldRenderer, template: &Template, quantity: Quantity) -> String {
        let (width, height) = self.extent(template, quantity);
        let (width, height) = (num(width), num(height));
        let body = renderer.template_body(template, RenderMode::Static, None);
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" data-copies=\"{}\">",
            quantity.get()
        );
        for index in 0..quantity.get() {
            let (x, y) = self.cell_origin(template, index);
            let _ = write!(
                out,
                "<g class=\"preview-copy\" data-copy=\"{}\" transform=\"translate({} {})\">{body}</g>",
                index + 1,
                num(x),
                num(y)
            );
        }
        out.push_str("</svg>");
        out
    }
}

impl Default for PreviewGrid {
    fn default() -> Self {
        Self::new(3, 10.0)
    }
}
