//! Field renderer shared by the editor canvas, the preview grid and print output.
//!
//! One dispatch point over [`FieldKind`] produces SVG markup in template-space
//! units. [`RenderMode`] only adds or removes editing chrome; layout math is
//! identical in both modes.
//!
//! Visibility policy, the same for every context:
//! - `Interactive`: hidden fields are drawn dimmed so they can still be edited
//! - `Static`: hidden fields are omitted entirely

mod symbols;
mod text;

pub use symbols::{PlaceholderEncoder, SymbolEncoder};
pub use text::{is_valid_date_format, parse_date};
pub(crate) use text::{escape, num};

use crate::canvas::Canvas;
use crate::model::{Field, FieldKind, Rect, Template};
use labelkit_core::constants::{BARCODE_CAPTION_MAX_CHARS, DATE_DISPLAY_FORMAT, DATE_PLACEHOLDER};
use std::fmt::Write;
use std::sync::Arc;
use text::{format_date, truncate};
use tracing::warn;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const SELECTION_COLOR: &str = "#2563eb";
const GUIDE_COLOR: &str = "#cbd5e1";
const HIDDEN_OPACITY: &str = "0.35";
const MARKER_SIZE: f64 = 4.0;
const CONTROL_RADIUS: f64 = 5.0;
const TEXT_INSET: f64 = 2.0;

/// Whether editing chrome is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Editor canvas: selection outline, corner markers, controls, dimmed hidden fields.
    Interactive,
    /// Preview and print: content only, hidden fields omitted.
    Static,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Interactive => "interactive",
            RenderMode::Static => "static",
        }
    }
}

/// Display options applied by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// chrono format used for date fields
    pub date_format: String,
    /// Text drawn for empty or unparseable dates
    pub date_placeholder: String,
    pub font_family: String,
}

impl RenderOptions {
    /// Replaces the date format, keeping the current one if chrono cannot use it.
    pub fn with_date_format(mut self, format: &str) -> Self {
        if is_valid_date_format(format) {
            self.date_format = format.to_string();
        } else {
            warn!("Ignoring invalid date format '{}'", format);
        }
        self
    }

    pub fn with_date_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.date_placeholder = placeholder.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: DATE_DISPLAY_FORMAT.to_string(),
            date_placeholder: DATE_PLACEHOLDER.to_string(),
            font_family: "sans-serif".to_string(),
        }
    }
}

/// Renders fields and templates to SVG.
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    options: RenderOptions,
    encoder: Arc<dyn SymbolEncoder>,
}

impl FieldRenderer {
    /// Creates a renderer drawing placeholder barcode and QR art.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_encoder(options, Arc::new(PlaceholderEncoder))
    }

    /// Creates a renderer that delegates symbol drawing to `encoder`.
    pub fn with_encoder(options: RenderOptions, encoder: Arc<dyn SymbolEncoder>) -> Self {
        Self { options, encoder }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The text a field shows, after kind-specific formatting.
    pub fn display_value(&self, field: &Field) -> String {
        match field.kind {
            FieldKind::Date => format_date(
                &field.value,
                &self.options.date_format,
                &self.options.date_placeholder,
            ),
            FieldKind::Image => "Image".to_string(),
            FieldKind::Text | FieldKind::Number | FieldKind::Barcode | FieldKind::QrCode => {
                field.display_text().to_string()
            }
        }
    }

    /// Renders one field as an SVG group. Returns an empty string for a hidden
    /// field in static mode.
    pub fn render_field(&self, field: &Field, mode: RenderMode, selected: bool) -> String {
        if mode == RenderMode::Static && !field.visible {
            return String::new();
        }

        let mut out = String::new();
        let _ = write!(
            out,
            "<g class=\"field field-{}\" data-field-id=\"{}\" transform=\"translate({} {})\"",
            field.kind,
            escape(&field.id),
            num(field.position.x),
            num(field.position.y)
        );
        if !field.visible {
            let _ = write!(out, " opacity=\"{}\"", HIDDEN_OPACITY);
        }
        out.push('>');

        match field.kind {
            FieldKind::Text | FieldKind::Number | FieldKind::Date => {
                self.push_text(&mut out, field, &self.display_value(field));
            }
            FieldKind::Barcode => self.push_barcode(&mut out, field, mode),
            FieldKind::QrCode => {
                let area = Rect::new(0.0, 0.0, field.size.width, field.size.height);
                out.push_str(&self.encoder.qrcode(field, area));
            }
            FieldKind::Image => self.push_image(&mut out, field),
        }

        if mode == RenderMode::Interactive {
            self.push_chrome(&mut out, field, selected);
        }

        out.push_str("</g>");
        out
    }

    fn push_text(&self, out: &mut String, field: &Field, text: &str) {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\">{}</text>",
            num(TEXT_INSET),
            num(field.size.height / 2.0),
            escape(&self.options.font_family),
            field.font_size,
            field.font_weight.as_str(),
            escape(text)
        );
    }

    fn push_barcode(&self, out: &mut String, field: &Field, mode: RenderMode) {
        let caption_height = (field.font_size as f64).min(field.size.height / 3.0);
        let bars = Rect::new(
            0.0,
            0.0,
            field.size.width,
            (field.size.height - caption_height).max(0.0),
        );
        out.push_str(&self.encoder.barcode(field, bars));

        let caption = match mode {
            RenderMode::Interactive => truncate(field.display_text(), BARCODE_CAPTION_MAX_CHARS),
            RenderMode::Static => field.display_text().to_string(),
        };
        let _ = write!(
            out,
            "<text class=\"barcode-caption\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"monospace\" font-size=\"{}\">{}</text>",
            num(field.size.width / 2.0),
            num(field.size.height),
            num(caption_height),
            escape(&caption)
        );
    }

    fn push_image(&self, out: &mut String, field: &Field) {
        let _ = write!(
            out,
            "<rect class=\"image-placeholder\" width=\"{}\" height=\"{}\" fill=\"#f3f4f6\" stroke=\"#9ca3af\" stroke-dasharray=\"4 2\"/>",
            num(field.size.width),
            num(field.size.height)
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"#6b7280\">Image</text>",
            num(field.size.width / 2.0),
            num(field.size.height / 2.0),
            escape(&self.options.font_family),
            field.font_size
        );
    }

    /// Selection outline, corner markers and the visibility/delete controls.
    /// Corner markers are decoration only; resizing happens through the property editor.
    fn push_chrome(&self, out: &mut String, field: &Field, selected: bool) {
        let (w, h) = (field.size.width, field.size.height);
        if !selected {
            let _ = write!(
                out,
                "<rect class=\"field-guide\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-dasharray=\"2 2\"/>",
                num(w),
                num(h),
                GUIDE_COLOR
            );
            return;
        }

        let _ = write!(
            out,
            "<rect class=\"selection-outline\" x=\"-1\" y=\"-1\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"0.08\" stroke=\"{}\" stroke-width=\"1.5\"/>",
            num(w + 2.0),
            num(h + 2.0),
            SELECTION_COLOR,
            SELECTION_COLOR
        );
        let half = MARKER_SIZE / 2.0;
        for (cx, cy) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
            let _ = write!(
                out,
                "<rect class=\"corner-marker\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#fff\" stroke=\"{}\"/>",
                num(cx - half),
                num(cy - half),
                num(MARKER_SIZE),
                num(MARKER_SIZE),
                SELECTION_COLOR
            );
        }

        let id = escape(&field.id);
        let control_y = -CONTROL_RADIUS - 2.0;
        let eye_label = if field.visible { "hide" } else { "show" };
        let _ = write!(
            out,
            "<g class=\"field-control\" data-action=\"toggle-visibility\" data-field-id=\"{id}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#fff\" stroke=\"{}\"/><title>{}</title></g>",
            num(w - 3.0 * CONTROL_RADIUS),
            num(control_y),
            num(CONTROL_RADIUS),
            SELECTION_COLOR,
            eye_label
        );
        let _ = write!(
            out,
            "<g class=\"field-control\" data-action=\"delete\" data-field-id=\"{id}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#dc2626\"/><title>delete</title></g>",
            num(w - CONTROL_RADIUS),
            num(control_y),
            num(CONTROL_RADIUS)
        );
    }

    /// Background plus every field in paint order, without the `<svg>` wrapper.
    pub fn template_body(&self, template: &Template, mode: RenderMode, selected: Option<&str>) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<rect class=\"template-background\" width=\"{}\" height=\"{}\" fill=\"#fff\"",
            num(template.width()),
            num(template.height())
        );
        if mode == RenderMode::Interactive {
            let _ = write!(out, " stroke=\"{}\"", GUIDE_COLOR);
        }
        out.push_str("/>");

        for field in template.fields() {
            let is_selected = selected == Some(field.id.as_str());
            out.push_str(&self.render_field(field, mode, is_selected));
        }
        out
    }

    /// Renders a complete SVG document. `zoom` scales the outer size only;
    /// the view box stays in template space.
    pub fn render_template(
        &self,
        template: &Template,
        mode: RenderMode,
        selected: Option<&str>,
        zoom: f64,
    ) -> String {
        format!(
            "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" data-template-id=\"{}\" data-mode=\"{}\">{}</svg>",
            SVG_NS,
            num(template.width() * zoom),
            num(template.height() * zoom),
            num(template.width()),
            num(template.height()),
            escape(&template.id),
            mode.as_str(),
            self.template_body(template, mode, selected)
        )
    }

    /// Renders the editor canvas: interactive mode at the canvas zoom, with its selection.
    pub fn render_canvas(&self, canvas: &Canvas) -> String {
        self.render_template(
            canvas.template(),
            RenderMode::Interactive,
            canvas.selected_id(),
            canvas.zoom(),
        )
    }
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtifactKind, FontWeight, Point, Size};

    fn field(kind: FieldKind, value: &str) -> Field {
        Field::new("f1", kind, value, Point::new(10.0, 20.0), Size::new(150.0, 30.0))
    }

    #[test]
    fn test_text_uses_font_and_position() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Text, "Strawberries").with_font(14, FontWeight::Bold);
        let svg = renderer.render_field(&f, RenderMode::Static, false);
        assert!(svg.contains("translate(10 20)"));
        assert!(svg.contains("font-size=\"14\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains(">Strawberries</text>"));
    }

    #[test]
    fn test_date_placeholder_is_the_same_in_both_modes() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Date, "");
        for mode in [RenderMode::Interactive, RenderMode::Static] {
            assert!(renderer.render_field(&f, mode, false).contains(">DD/MM/YYYY</text>"));
        }
        let f = field(FieldKind::Date, "2026-10-14");
        assert!(renderer
            .render_field(&f, RenderMode::Static, false)
            .contains(">14/10/2026</text>"));
    }

    #[test]
    fn test_barcode_caption_truncated_only_when_interactive() {
        let renderer = FieldRenderer::default();
        let long = "0123456789012345678901234567";
        let f = field(FieldKind::Barcode, long);
        let interactive = renderer.render_field(&f, RenderMode::Interactive, false);
        let printed = renderer.render_field(&f, RenderMode::Static, false);
        assert!(interactive.contains("0123456789012345678…"));
        assert!(!interactive.contains(long));
        assert!(printed.contains(long));
    }

    #[test]
    fn test_hidden_field_dimmed_or_omitted() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Text, "x").hidden();
        assert_eq!(renderer.render_field(&f, RenderMode::Static, false), "");
        let dimmed = renderer.render_field(&f, RenderMode::Interactive, false);
        assert!(dimmed.contains("opacity=\"0.35\""));
    }

    #[test]
    fn test_chrome_only_in_interactive_mode() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Image, "");
        let selected = renderer.render_field(&f, RenderMode::Interactive, true);
        assert_eq!(selected.matches("corner-marker").count(), 4);
        assert!(selected.contains("data-action=\"delete\""));
        assert!(selected.contains("data-action=\"toggle-visibility\""));

        let printed = renderer.render_field(&f, RenderMode::Static, true);
        assert!(!printed.contains("corner-marker"));
        assert!(!printed.contains("data-action"));
        assert!(printed.contains("image-placeholder"));
    }

    #[test]
    fn test_static_layout_matches_interactive_layout() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Number, "4.5");
        let interactive = renderer.render_field(&f, RenderMode::Interactive, false);
        let printed = renderer.render_field(&f, RenderMode::Static, false);
        let text_of = |svg: &str| {
            let start = svg.find("<text").unwrap();
            let end = svg.find("</text>").unwrap();
            svg[start..end].to_string()
        };
        assert_eq!(text_of(&interactive), text_of(&printed));
    }

    #[test]
    fn test_values_are_escaped() {
        let renderer = FieldRenderer::default();
        let f = field(FieldKind::Text, "<b>Fish & Co</b>");
        let svg = renderer.render_field(&f, RenderMode::Static, false);
        assert!(svg.contains("&lt;b&gt;Fish &amp; Co&lt;/b&gt;"));
    }

    #[test]
    fn test_template_zoom_scales_outer_size_only() {
        let renderer = FieldRenderer::default();
        let template = Template::with_id("t", "L", 220.0, 140.0, ArtifactKind::Label);
        let svg = renderer.render_template(&template, RenderMode::Interactive, None, 1.5);
        assert!(svg.contains("width=\"330\" height=\"210\" viewBox=\"0 0 220 140\""));
    }

    #[test]
    fn test_invalid_date_format_is_ignored() {
        let options = RenderOptions::default().with_date_format("%Q");
        assert_eq!(options.date_format, DATE_DISPLAY_FORMAT);
        let options = RenderOptions::default().with_date_format("%Y.%m.%d");
        assert_eq!(options.date_format, "%Y.%m.%d");
    }
}
