//! # Print Pipeline
//!
//! Materializes `quantity` static renderings of a template into a print
//! document and hands it to a [`PrintSink`]. Each copy is kept whole across
//! page breaks.
//!
//! Durable document formats are produced by an external [`DocumentEncoder`]
//! that receives the fully resolved `(Template, Quantity)` pair.

use crate::model::Template;
use crate::renderer::{escape, FieldRenderer, RenderMode};
use labelkit_core::Result;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Number of copies to print. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(usize);

impl Quantity {
    /// Creates a quantity, raising zero to one.
    pub fn new(n: usize) -> Self {
        Self(n.max(1))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Decrements, stopping at one.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Print-ready HTML document holding every copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub template_id: String,
    pub copies: usize,
    pub html: String,
}

/// Platform print.
pub trait PrintSink {
    fn print(&mut self, document: &PrintDocument) -> Result<()>;
}

/// Encoder for a durable document format (PDF and the like).
pub trait DocumentEncoder {
    fn encode(&self, template: &Template, quantity: Quantity) -> Result<Vec<u8>>;
}

/// Writes print documents to a file, for hosts without a print dialog.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSink for FileSink {
    fn print(&mut self, document: &PrintDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, &document.html)?;
        info!(
            "Wrote {} copies of '{}' to {}",
            document.copies,
            document.template_id,
            self.path.display()
        );
        Ok(())
    }
}

/// A resolved print run.
#[derive(Debug, Clone)]
pub struct PrintJob<'a> {
    template: &'a Template,
    quantity: Quantity,
}

impl<'a> PrintJob<'a> {
    pub fn new(template: &'a Template, quantity: Quantity) -> Self {
        Self { template, quantity }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Builds the print document: one static SVG per copy, each wrapped so
    /// it cannot split across pages.
    pub fn document(&self, renderer: &FieldRenderer) -> PrintDocument {
        let template = self.template;
        let (page_w, page_h) = template.paper_size.oriented_mm(template.orientation);
        let copy = renderer.render_template(template, RenderMode::Static, None, 1.0);

        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>\
             @page {{ size: {}mm {}mm; margin: 5mm; }} \
             body {{ margin: 0; }} \
             .print-copy {{ display: inline-block; margin: 2mm; break-inside: avoid; page-break-inside: avoid; }}\
             </style></head><body>",
            escape(&template.name),
            page_w,
            page_h
        );
        for index in 0..self.quantity.get() {
            let _ = write!(
                html,
                "<div class=\"print-copy\" data-copy=\"{}\">{}</div>",
                index + 1,
                copy
            );
        }
        html.push_str("</body></html>");

        PrintDocument {
            template_id: template.id.clone(),
            copies: self.quantity.get(),
            html,
        }
    }

    /// Renders and sends the document to `sink`.
    pub fn print(&self, renderer: &FieldRenderer, sink: &mut dyn PrintSink) -> Result<PrintDocument> {
        let document = self.document(renderer);
        info!(
            "Printing {} copies of '{}' on {} {}",
            document.copies, self.template.name, self.template.paper_size, self.template.orientation
        );
        sink.print(&document)?;
        Ok(document)
    }

    /// Hands the resolved pair to an external encoder.
    pub fn export(&self, encoder: &dyn DocumentEncoder) -> Result<Vec<u8>> {
        encoder.encode(self.template, self.quantity)
    }
}
